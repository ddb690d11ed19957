//! Port label to device name mapping.
//!
//! The directory is owned by the caller and passed to the operations that
//! need it. Operations that create or destroy virtual links update it; it is
//! never shared behind the caller's back.
//!
//! # Example
//!
//! ```
//! use iptopo::DeviceDirectory;
//!
//! let mut ports = DeviceDirectory::new();
//! ports.insert("1", "eth0");
//! assert_eq!(ports.resolve("1").unwrap(), "eth0");
//! assert!(ports.resolve("2").is_err());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maps human-readable port labels to kernel device names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceDirectory {
    ports: BTreeMap<String, String>,
}

impl DeviceDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a port label to its device name.
    pub fn resolve(&self, label: &str) -> Result<&str> {
        self.ports
            .get(label)
            .map(String::as_str)
            .ok_or_else(|| Error::PortNotFound {
                label: label.to_string(),
            })
    }

    /// Check if a label is registered.
    pub fn contains(&self, label: &str) -> bool {
        self.ports.contains_key(label)
    }

    /// Register a label. Returns the previous device for the label, if any.
    pub fn insert(&mut self, label: impl Into<String>, device: impl Into<String>) -> Option<String> {
        self.ports.insert(label.into(), device.into())
    }

    /// Unregister a label, returning its device.
    pub fn remove(&mut self, label: &str) -> Option<String> {
        self.ports.remove(label)
    }

    /// Iterate over `(label, device)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.ports.iter().map(|(l, d)| (l.as_str(), d.as_str()))
    }

    /// Number of registered labels.
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    /// Check if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }
}

impl<L: Into<String>, D: Into<String>> FromIterator<(L, D)> for DeviceDirectory {
    fn from_iter<I: IntoIterator<Item = (L, D)>>(iter: I) -> Self {
        Self {
            ports: iter
                .into_iter()
                .map(|(l, d)| (l.into(), d.into()))
                .collect(),
        }
    }
}
