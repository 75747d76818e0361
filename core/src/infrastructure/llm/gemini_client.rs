use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    analysis::{
        ports::LLMClient,
        value_objects::{GenerateContentRequest, PromptPart},
    },
    common::{LLMConfig, entities::app_errors::CoreError},
};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    system_instruction: SystemInstruction,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

impl From<PromptPart> for Part {
    fn from(part: PromptPart) -> Self {
        match part {
            PromptPart::Text(text) => Part::Text { text },
            PromptPart::InlineImage { mime_type, data } => Part::InlineData {
                inline_data: InlineData { mime_type, data },
            },
        }
    }
}

impl GeminiLLMClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                CoreError::InvalidConfiguration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            api_key: config.gemini_api_key.clone(),
            model_name: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model_name
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        let text: String = gemini_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(CoreError::ExternalServiceError(
                "No response from LLM".to_string(),
            ));
        }

        Ok(text)
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_content(&self, request: GenerateContentRequest) -> Result<String, CoreError> {
        let request = GeminiRequest {
            system_instruction: SystemInstruction {
                parts: vec![Part::Text {
                    text: request.system_instruction,
                }],
            },
            contents: vec![Content {
                role: "user",
                parts: request.parts.into_iter().map(Part::from).collect(),
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: request.response_schema,
            },
        };

        self.call_gemini_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_partial_json, header, method, path},
    };

    use super::*;

    const MODEL_PATH: &str = "/models/gemini-test:generateContent";

    fn client_for(server: &MockServer, timeout_secs: u64) -> GeminiLLMClient {
        GeminiLLMClient::new(&LLMConfig {
            gemini_api_key: "test-key".to_string(),
            gemini_model: "gemini-test".to_string(),
            gemini_base_url: server.uri(),
            timeout_secs,
        })
        .unwrap()
    }

    fn request() -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: "Score antioxidants.".to_string(),
            parts: vec![
                PromptPart::text("User Activity/Lifestyle Goal: yoga"),
                PromptPart::jpeg("QUJD"),
            ],
            response_schema: json!({ "type": "object" }),
        }
    }

    fn candidates(parts: serde_json::Value) -> serde_json::Value {
        json!({
            "candidates": [{
                "content": { "role": "model", "parts": parts },
                "finishReason": "STOP"
            }]
        })
    }

    #[tokio::test]
    async fn test_sends_schema_constrained_multimodal_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .and(header(API_KEY_HEADER, "test-key"))
            .and(body_partial_json(json!({
                "systemInstruction": { "parts": [{ "text": "Score antioxidants." }] },
                "contents": [{
                    "role": "user",
                    "parts": [
                        { "text": "User Activity/Lifestyle Goal: yoga" },
                        { "inlineData": { "mimeType": "image/jpeg", "data": "QUJD" } }
                    ]
                }],
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": { "type": "object" }
                }
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(candidates(json!([{ "text": "{\"totalScore\":" }, { "text": "1}" }]))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server, 5)
            .generate_content(request())
            .await
            .unwrap();

        assert_eq!(text, "{\"totalScore\":1}");
    }

    #[tokio::test]
    async fn test_error_status_is_external_service_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server, 5)
            .generate_content(request())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(msg) if msg.contains("500")));
    }

    #[tokio::test]
    async fn test_missing_candidates_is_no_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "promptFeedback": { "blockReason": "SAFETY" }
            })))
            .mount(&server)
            .await;

        let err = client_for(&server, 5)
            .generate_content(request())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::ExternalServiceError("No response from LLM".to_string())
        );
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(candidates(json!([{ "text": "{}" }])))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let err = client_for(&server, 1)
            .generate_content(request())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }
}
