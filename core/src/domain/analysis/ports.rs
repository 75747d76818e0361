use std::future::Future;

use crate::domain::{
    analysis::{
        entities::{AnalysisRequest, AnalysisResult, ClientError},
        value_objects::GenerateContentRequest,
    },
    common::entities::app_errors::CoreError,
};

/// Hosted generative model returning the raw JSON text of its answer
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for antioxidant analysis
pub trait AnalysisService: Send + Sync {
    fn analyze(
        &self,
        request: AnalysisRequest,
    ) -> impl Future<Output = Result<AnalysisResult, CoreError>> + Send;
}

/// Client-side channel to the analysis endpoint
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisTransport: Send + Sync {
    fn send(
        &self,
        request: AnalysisRequest,
    ) -> impl Future<Output = Result<AnalysisResult, ClientError>> + Send;
}
