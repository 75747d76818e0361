use antiox_core::domain::analysis::{
    entities::{AnalysisRequest, AnalysisResult},
    ports::AnalysisService,
};
use axum::extract::State;

use crate::application::http::{
    analysis::validators::{CreateAnalysisRequest, MISSING_FIELDS_MESSAGE},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/analysis",
    tag = "analysis",
    summary = "Score a meal",
    description = "Scores the antioxidant protection of the described meal against the activity goal using the Gemini model",
    request_body = CreateAnalysisRequest,
    responses(
        (status = 200, body = AnalysisResult),
        (status = 400, body = ApiErrorResponse, description = "Missing inputs or activityGoal"),
        (status = 405, body = ApiErrorResponse),
        (status = 413, body = ApiErrorResponse, description = "Body larger than the configured limit"),
        (status = 500, body = ApiErrorResponse, description = "The model call or its response failed")
    )
)]
pub async fn create_analysis(
    State(state): State<AppState>,
    payload: Result<ValidateJson<CreateAnalysisRequest>, ApiError>,
) -> Result<Response<AnalysisResult>, ApiError> {
    // Unreadable JSON gets the same answer as an incomplete body
    let ValidateJson(payload) = payload.map_err(|rejection| match rejection {
        ApiError::MalformedBody(detail) => {
            tracing::debug!("rejected analysis body: {}", detail);
            ApiError::BadRequest(MISSING_FIELDS_MESSAGE.to_string())
        }
        other => other,
    })?;

    let request = AnalysisRequest::try_from(payload)
        .map_err(|message| ApiError::BadRequest(message.to_string()))?;

    tracing::info!(
        inputs = request.inputs.len(),
        "analysis requested"
    );

    let result = state
        .service
        .analyze(request)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
