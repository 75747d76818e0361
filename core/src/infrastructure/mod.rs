pub mod analysis_api;
pub mod llm;
