use crate::application::http::{
    analysis::router::AnalysisApiDoc, health::HealthApiDoc, server::config::__path_get_config,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Antioxidant Protection Index API"
    ),
    paths(get_config),
    nest(
        (path = "/api", api = AnalysisApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
