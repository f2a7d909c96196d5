use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Invalid account number: {0:?}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("No candidate bank matched")]
    NotFound,
    #[error("Upstream lookup failed: {0}")]
    Upstream(String),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ResolveError {
    /// Message safe to return to the caller. Configuration and unexpected
    /// failures keep their detail server-side (logs only).
    pub fn client_message(&self) -> String {
        match self {
            ResolveError::InvalidInput(_) => {
                "Invalid account number. It must be 10 digits.".to_string()
            }
            ResolveError::Configuration(_) => "Server configuration error.".to_string(),
            ResolveError::NotFound => {
                "Could not verify account. Please check the number.".to_string()
            }
            ResolveError::Upstream(_) | ResolveError::Unexpected(_) => {
                "An unexpected server error occurred.".to_string()
            }
        }
    }
}
