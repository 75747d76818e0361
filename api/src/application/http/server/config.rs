use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

/// Public, non-secret server settings.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetConfigResponse {
    pub model: String,
    pub llm_timeout_secs: u64,
    pub max_inputs: Option<usize>,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Get public server configuration",
    responses(
        (status = 200, body = GetConfigResponse)
    )
)]
pub async fn get_config(State(state): State<AppState>) -> Json<GetConfigResponse> {
    Json(GetConfigResponse {
        model: state.args.llm.gemini_model.clone(),
        llm_timeout_secs: state.args.llm.llm_timeout_secs,
        max_inputs: state.service.config().max_inputs,
    })
}
