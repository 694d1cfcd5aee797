use thiserror::Error;

/// Result type alias using OpScopeError
pub type Result<T> = std::result::Result<T, OpScopeError>;

/// Errors raised while configuring the logging facility
///
/// Scope operations themselves never fail; only configuration parsing and
/// subscriber setup can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpScopeError {
    /// Profile name is not one of development, production or test
    #[error("Unknown logging profile: {value}")]
    UnknownProfile { value: String },

    /// Filter directive could not be parsed by the subscriber
    #[error("Invalid filter directive '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },
}

impl OpScopeError {
    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            OpScopeError::UnknownProfile { .. } => "ERR_UNKNOWN_PROFILE",
            OpScopeError::InvalidFilter { .. } => "ERR_INVALID_FILTER",
        }
    }
}
