//! Error taxonomy for roster operations.
//!
//! None of these are fatal: the caller reports them as a notice and the
//! roster stays usable.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// A numeric field (or the role) could not be parsed
    #[error("invalid {field}: '{value}'")]
    Validation { field: &'static str, value: String },

    #[error("id {0} already exists")]
    DuplicateIdentifier(i32),

    #[error("no player with id {0}")]
    NotFound(i32),

    #[error("roster is empty")]
    EmptyRoster,
}

/// How a failure is surfaced to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

impl RosterError {
    pub fn validation(field: &'static str, value: &str) -> Self {
        Self::Validation {
            field,
            value: value.to_string(),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::Validation { .. } | Self::DuplicateIdentifier(_) => Severity::Error,
            Self::NotFound(_) | Self::EmptyRoster => Severity::Warning,
        }
    }
}
