use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid request: {0}")]
    Invalid(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}
