use crate::domain::{
    analysis::{
        entities::{AnalysisRequest, AnalysisResult},
        ports::{AnalysisService, LLMClient},
        prompts::{SYSTEM_INSTRUCTION, build_prompt_parts},
        schema::get_analysis_schema,
        value_objects::GenerateContentRequest,
    },
    common::{entities::app_errors::CoreError, services::Service},
};

impl<LLM> AnalysisService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, CoreError> {
        // 1. Server-side limits
        if let Some(max) = self.config.max_inputs
            && request.inputs.len() > max
        {
            return Err(CoreError::Invalid(format!(
                "Too many inputs: {} (max {})",
                request.inputs.len(),
                max
            )));
        }

        // 2. Build prompt
        let llm_request = GenerateContentRequest {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            parts: build_prompt_parts(&request),
            response_schema: get_analysis_schema(),
        };

        tracing::debug!(
            inputs = request.inputs.len(),
            parts = llm_request.parts.len(),
            "requesting antioxidant analysis"
        );

        // 3. Call LLM
        let raw_response = self.llm_client.generate_content(llm_request).await?;

        if raw_response.trim().is_empty() {
            tracing::error!("LLM returned an empty response");
            return Err(CoreError::ExternalServiceError(
                "No response from LLM".to_string(),
            ));
        }

        // 4. Parse and validate response
        let result: AnalysisResult = serde_json::from_str(&raw_response).map_err(|e| {
            tracing::error!("Failed to parse LLM response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        // The model's numbers are relayed as-is
        if !result.is_percentage_consistent() {
            tracing::warn!(
                total_score = result.total_score,
                target_score = result.target_score,
                percentage = result.percentage,
                "LLM percentage does not match total/target"
            );
        }

        if !result.is_status_consistent() {
            tracing::warn!(
                total_score = result.total_score,
                target_score = result.target_score,
                status = result.recommendation.status.as_str(),
                "LLM status does not follow the deficiency threshold"
            );
        }

        Ok(result)
    }
}
