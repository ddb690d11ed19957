//! Pre-flight validation for command intents.
//!
//! Every intent that carries user input implements [`Validatable`]. Operations
//! call [`Validatable::validate`] before building a command, so a bad name or
//! VLAN ID never reaches the executor.
//!
//! # Example
//!
//! ```
//! use iptopo::link::VlanLink;
//! use iptopo::validation::Validatable;
//!
//! let vlan = VlanLink::new("eth0", "", 4095);
//! let result = vlan.validate();
//! assert!(!result.is_valid());
//! for err in &result.errors {
//!     eprintln!("{}", err);
//! }
//! ```

use crate::error::{Error, ValidationErrorInfo};

/// Severity of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationSeverity {
    /// Will definitely fail once issued.
    Error,
    /// May cause issues or unexpected behavior.
    Warning,
}

/// A single validation error or warning.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Description of the error.
    pub message: String,
    /// Severity of the issue.
    pub severity: ValidationSeverity,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: ValidationSeverity::Error,
        }
    }

    /// Create a new validation warning.
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: ValidationSeverity::Warning,
        }
    }

    /// Check if this is an error (not a warning).
    pub fn is_error(&self) -> bool {
        self.severity == ValidationSeverity::Error
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            ValidationSeverity::Error => "error",
            ValidationSeverity::Warning => "warning",
        };
        write!(f, "{} in '{}': {}", prefix, self.field, self.message)
    }
}

/// Result of validating an intent.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Validation errors that will cause failure.
    pub errors: Vec<ValidationError>,
    /// Validation warnings that may cause issues.
    pub warnings: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create an empty validation result (valid).
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the intent is valid (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Add an error to the result.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationError::error(field, message));
    }

    /// Add a warning to the result.
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationError::warning(field, message));
    }

    /// Merge another validation result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Convert to a Result, failing if there are any errors.
    ///
    /// Warnings are logged and otherwise ignored.
    pub fn into_result(self) -> Result<(), Error> {
        for warning in &self.warnings {
            tracing::warn!(field = %warning.field, "{}", warning.message);
        }
        if self.is_valid() {
            Ok(())
        } else {
            let errors: Vec<ValidationErrorInfo> = self
                .errors
                .into_iter()
                .map(|e| ValidationErrorInfo::new(e.field, e.message))
                .collect();
            Err(Error::Validation(errors))
        }
    }
}

/// Trait for intents that can be checked before a command is built.
pub trait Validatable {
    /// Validate this intent.
    fn validate(&self) -> ValidationResult;

    /// Check if this intent is valid (no errors).
    fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }
}

/// Require a non-empty value.
pub fn validate_required(value: &str, field: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    if value.is_empty() {
        result.add_error(field, format!("{} cannot be empty", field));
    }
    result
}

/// Validate an interface name.
pub fn validate_ifname(name: &str, field: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    if name.is_empty() {
        result.add_error(field, "interface name cannot be empty");
        return result;
    }

    // IFNAMSIZ is 16, but includes null terminator
    if name.len() > 15 {
        result.add_error(
            field,
            format!("interface name too long ({} > 15 chars)", name.len()),
        );
    }

    if name.contains('/') || name.contains('\0') || name.chars().any(char::is_whitespace) {
        result.add_error(field, "interface name contains invalid characters");
    }

    if name.starts_with('.') || name.starts_with('-') {
        result.add_warning(
            field,
            "interface name starting with '.' or '-' may cause issues",
        );
    }

    result
}

/// Validate a VLAN ID.
pub fn validate_vlan_id(vlan_id: u16, field: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    if vlan_id == 0 || vlan_id > 4094 {
        result.add_error(field, format!("VLAN ID must be 1-4094, got {}", vlan_id));
    }

    result
}
