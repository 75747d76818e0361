use crate::{
    domain::common::{AntioxConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::GeminiLLMClient,
};

pub type AntioxService = Service<GeminiLLMClient>;

pub fn create_service(config: AntioxConfig) -> Result<AntioxService, CoreError> {
    if config.llm.gemini_api_key.trim().is_empty() {
        return Err(CoreError::InvalidConfiguration(
            "Gemini API key is not set".to_string(),
        ));
    }

    let llm_client = GeminiLLMClient::new(&config.llm)?;

    tracing::info!(
        model = %config.llm.gemini_model,
        timeout_secs = config.llm.timeout_secs,
        "analysis service ready"
    );

    Ok(Service::new(llm_client, config.analysis))
}
