use thiserror::Error;

/// Failure of an engine operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The caller omitted a required field or sent an empty string/collection
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A rule table or arithmetic step misbehaved; always a bug in the catalog or engine
    #[error("Internal fault: {0}")]
    InternalFault(String),
}

impl EngineError {
    /// Stable machine-readable kind, used in API error bodies
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::InternalFault(_) => "internal_fault",
        }
    }

    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
