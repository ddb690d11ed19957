//! Virtual link intents: VLAN links and VLAN sub-interfaces.

use crate::command::IpCommand;
use crate::validation::{
    Validatable, ValidationResult, validate_ifname, validate_required, validate_vlan_id,
};

/// Separator between a parent device and a sub-interface suffix.
pub const SUBINTERFACE_SEPARATOR: char = '.';

/// A VLAN link to create on top of a parent device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VlanLink {
    parent: String,
    name: String,
    vlan_id: u16,
}

impl VlanLink {
    /// Create a new VLAN link configuration.
    ///
    /// # Arguments
    ///
    /// * `parent` - Parent device name (e.g., "eth0")
    /// * `name` - Name for the new link (e.g., "vlan100")
    /// * `vlan_id` - VLAN ID (1-4094)
    pub fn new(parent: impl Into<String>, name: impl Into<String>, vlan_id: u16) -> Self {
        Self {
            parent: parent.into(),
            name: name.into(),
            vlan_id,
        }
    }

    /// Name of the link to create.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parent device.
    pub fn parent(&self) -> &str {
        &self.parent
    }

    /// VLAN ID.
    pub fn vlan_id(&self) -> u16 {
        self.vlan_id
    }

    /// Build the creation command.
    pub fn to_command(&self) -> IpCommand {
        IpCommand::VlanAdd {
            parent: self.parent.clone(),
            name: self.name.clone(),
            vlan_id: self.vlan_id,
        }
    }
}

impl Validatable for VlanLink {
    fn validate(&self) -> ValidationResult {
        let mut result = validate_ifname(&self.name, "name");
        result.merge(validate_required(&self.parent, "parent"));
        result.merge(validate_vlan_id(self.vlan_id, "vlan_id"));
        result
    }
}

/// A VLAN sub-interface, `<parent>.<suffix>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubInterface {
    parent: String,
    suffix: String,
}

impl SubInterface {
    /// Create a sub-interface reference from a parent device and a suffix.
    pub fn new(parent: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            suffix: suffix.into(),
        }
    }

    /// Parent device.
    pub fn parent(&self) -> &str {
        &self.parent
    }

    /// Synthesized device name.
    pub fn name(&self) -> String {
        format!("{}{}{}", self.parent, SUBINTERFACE_SEPARATOR, self.suffix)
    }
}

impl Validatable for SubInterface {
    fn validate(&self) -> ValidationResult {
        let mut result = validate_required(&self.parent, "parent");
        result.merge(validate_required(&self.suffix, "subint"));
        if result.is_valid() {
            result.merge(validate_ifname(&self.name(), "subint"));
        }
        result
    }
}
