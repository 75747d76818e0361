use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    analysis::{
        entities::{AnalysisRequest, AnalysisResult, ClientError, GENERIC_TRANSPORT_MESSAGE},
        ports::AnalysisTransport,
    },
    common::entities::app_errors::CoreError,
};

pub const ANALYSIS_PATH: &str = "/api/analysis";

/// Calls `POST /api/analysis` on a running server.
#[derive(Debug, Clone)]
pub struct HttpAnalysisTransport {
    endpoint: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl HttpAnalysisTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CoreError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            CoreError::InvalidConfiguration(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self {
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), ANALYSIS_PATH),
            client,
        })
    }

    fn generic_error() -> ClientError {
        ClientError::Transport(GENERIC_TRANSPORT_MESSAGE.to_string())
    }
}

impl AnalysisTransport for HttpAnalysisTransport {
    async fn send(&self, request: AnalysisRequest) -> Result<AnalysisResult, ClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Analysis request failed: {}", e);
                Self::generic_error()
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| GENERIC_TRANSPORT_MESSAGE.to_string());

            tracing::warn!("Analysis endpoint returned {}: {}", status, message);
            return Err(ClientError::Transport(message));
        }

        response.json::<AnalysisResult>().await.map_err(|e| {
            tracing::error!("Failed to parse analysis result: {}", e);
            Self::generic_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_partial_json, method, path},
    };

    use super::*;
    use crate::domain::{
        analysis::entities::RecommendationStatus, food_input::entities::FoodInput,
    };

    fn request() -> AnalysisRequest {
        AnalysisRequest {
            inputs: vec![FoodInput::text(
                "Blueberries".to_string(),
                Some("150".to_string()),
            )],
            activity_goal: "marathon training".to_string(),
        }
    }

    fn transport(server: &MockServer) -> HttpAnalysisTransport {
        HttpAnalysisTransport::new(&server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_success_returns_result() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ANALYSIS_PATH))
            .and(body_partial_json(json!({
                "activityGoal": "marathon training",
                "inputs": [{ "type": "text", "value": "Blueberries", "portion": "150" }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "totalScore": 85,
                "targetScore": 100,
                "percentage": 85,
                "deficiencyCategory": "None",
                "breakdown": [],
                "recommendation": { "status": "TARGET_MET", "message": "Good" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = transport(&server).send(request()).await.unwrap();
        assert_eq!(result.recommendation.status, RecommendationStatus::TargetMet);
    }

    #[tokio::test]
    async fn test_error_body_message_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ANALYSIS_PATH))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({ "error": "Gemini Analysis Failed" })),
            )
            .mount(&server)
            .await;

        let err = transport(&server).send(request()).await.unwrap_err();
        assert_eq!(
            err,
            ClientError::Transport("Gemini Analysis Failed".to_string())
        );
    }

    #[tokio::test]
    async fn test_unreadable_error_body_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ANALYSIS_PATH))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let err = transport(&server).send(request()).await.unwrap_err();
        assert_eq!(
            err,
            ClientError::Transport(GENERIC_TRANSPORT_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn test_network_failure_falls_back() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let uri = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let transport = HttpAnalysisTransport::new(&uri, Duration::from_secs(2)).unwrap();
        let err = transport.send(request()).await.unwrap_err();
        assert_eq!(
            err,
            ClientError::Transport(GENERIC_TRANSPORT_MESSAGE.to_string())
        );
    }
}
