//! Error types for iptopo operations.

use std::fmt;
use std::io;

use crate::util::addr::AddrError;

/// Result type for iptopo operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrorInfo {
    /// Field that failed validation.
    pub field: String,
    /// Description of the problem.
    pub message: String,
}

impl ValidationErrorInfo {
    /// Create a new validation error entry.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_validation(errors: &[ValidationErrorInfo]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors that can occur while building, running or parsing commands.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Address or network literal failed to parse.
    #[error("invalid address: {0}")]
    Addr(#[from] AddrError),

    /// Intent failed pre-flight validation.
    #[error("validation failed: {}", join_validation(.0))]
    Validation(Vec<ValidationErrorInfo>),

    /// Port label has no entry in the device directory.
    #[error("port not found: {label}")]
    PortNotFound {
        /// The label that was looked up.
        label: String,
    },

    /// A virtual device with this name is already registered.
    #[error("device already exists: {name}")]
    DeviceExists {
        /// The conflicting device name.
        name: String,
    },

    /// A virtual device with this name is not registered.
    #[error("device not found: {name}")]
    DeviceNotFound {
        /// The missing device name.
        name: String,
    },

    /// A write command produced output where none was expected.
    #[error("unexpected output from `{command}`: {output}")]
    UnexpectedOutput {
        /// The command line that was run.
        command: String,
        /// What the command printed.
        output: String,
    },

    /// Command output did not have the expected structure.
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error from the execution channel.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Topology file problem.
    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// Build an [`Error::Validation`] holding a single field error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(vec![ValidationErrorInfo::new(field, message)])
    }

    /// Check if this error was raised before any command was issued.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::Addr(_)
                | Self::Validation(_)
                | Self::PortNotFound { .. }
                | Self::DeviceExists { .. }
                | Self::DeviceNotFound { .. }
        )
    }

    /// Check if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PortNotFound { .. } | Self::DeviceNotFound { .. })
    }

    /// Check if this is an output parse failure.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Get the offending command line if the executor printed unexpected output.
    pub fn command(&self) -> Option<&str> {
        match self {
            Self::UnexpectedOutput { command, .. } => Some(command),
            _ => None,
        }
    }
}
