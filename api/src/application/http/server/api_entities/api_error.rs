use antiox_core::domain::common::entities::app_errors::CoreError;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

pub const UPSTREAM_FAILURE_MESSAGE: &str = "Gemini Analysis Failed";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    /// The body could not be read as the expected JSON document.
    #[error("{0}")]
    MalformedBody(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The model call failed; the cause stays in the logs.
    #[error("Gemini Analysis Failed")]
    UpstreamFailure,

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::UpstreamFailure | ApiError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = match &self {
            ApiError::InternalServerError(detail) => {
                tracing::error!("Internal server error: {}", detail);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        };

        (self.status(), Json(ApiErrorResponse { error })).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Invalid(message) => ApiError::BadRequest(message),
            CoreError::ExternalServiceError(detail) => {
                tracing::error!("{}: {}", UPSTREAM_FAILURE_MESSAGE, detail);
                ApiError::UpstreamFailure
            }
            CoreError::InvalidConfiguration(_) => ApiError::InternalServerError(error.to_string()),
        }
    }
}

/// JSON body extractor that runs `validator` rules.
///
/// Oversized bodies are `413`, unreadable JSON is [`ApiError::MalformedBody`] and
/// failed rules are [`ApiError::BadRequest`] carrying the rule messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    ApiError::PayloadTooLarge(rejection.body_text())
                } else {
                    ApiError::MalformedBody(rejection.body_text())
                }
            })?;

        value
            .validate()
            .map_err(|errors| ApiError::BadRequest(validation_message(&errors)))?;

        Ok(ValidateJson(value))
    }
}

fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|field_errors| field_errors.iter())
        .map(|e| match &e.message {
            Some(message) => message.to_string(),
            None => e.code.to_string(),
        })
        .collect();

    messages.sort();
    messages.dedup();
    messages.join("; ")
}
