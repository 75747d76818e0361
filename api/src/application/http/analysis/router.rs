use super::handlers::create_analysis::{
    __path_create_analysis, create_analysis, method_not_allowed,
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_analysis))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/analysis", state.args.server.root_path),
            post(create_analysis).fallback(method_not_allowed),
        )
        .layer(DefaultBodyLimit::max(state.args.analysis.max_body_bytes))
}
