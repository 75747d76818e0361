use thiserror::Error;

pub const GENERIC_TRANSPORT_MESSAGE: &str = "Analysis failed";

/// Errors seen by the caller of the analysis endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Transport(String),

    #[error("An analysis is already in progress")]
    InFlight,
}
