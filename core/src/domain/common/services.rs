use std::sync::Arc;

use crate::domain::{analysis::ports::LLMClient, common::AnalysisConfig};

/// Stateless analysis service. Cloning is cheap: the LLM client is shared.
#[derive(Debug)]
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) config: AnalysisConfig,
}

impl<LLM> Clone for Service<LLM>
where
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            config: self.config.clone(),
        }
    }
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: LLM, config: AnalysisConfig) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            config,
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }
}
