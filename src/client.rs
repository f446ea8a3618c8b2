use reqwest::Client;

use crate::error::GenerateError;
use crate::payload::{GenerationRequest, GenerationResponse, GenerationResult};

/// Client for the remote website generator function
#[derive(Clone)]
pub struct GeneratorClient {
    client: Client,
    endpoint: String,
}

impl GeneratorClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one generation request. Never retries.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerateError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(endpoint = %self.endpoint, error = %e, "generator request failed");
                GenerateError::from(e)
            })?;

        // The function reports its own errors as JSON bodies with 4xx/5xx
        // codes, so the body is interpreted whatever the status.
        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(%status, bytes = body.len(), "generator responded");

        interpret_response(&body)
    }
}

/// Turn a raw response body into the outcome of the attempt
pub fn interpret_response(body: &[u8]) -> Result<GenerationResult, GenerateError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(GenerateError::transport("response body is not a JSON object"));
    }

    let response: GenerationResponse = serde_json::from_value(value)?;
    if let Some(request_id) = &response.request_id {
        tracing::info!(%request_id, "generator request id");
    }

    if response.success == Some(true) {
        return response
            .data
            .ok_or_else(|| GenerateError::transport("success response without data"));
    }

    Err(GenerateError::application(response.error.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GENERATION_FAILED_FALLBACK;

    #[test]
    fn test_success_with_data() {
        let body = br#"{"success": true, "data": {"title": "Coffee Shop", "features": [1, 2, 3]}, "request_id": "abc"}"#;
        let result = interpret_response(body).unwrap();
        assert_eq!(result.title.as_deref(), Some("Coffee Shop"));
        assert_eq!(result.feature_count(), Some(3));
    }

    #[test]
    fn test_application_failure_with_reason() {
        let body = br#"{"success": false, "error": "quota exceeded"}"#;
        assert_eq!(
            interpret_response(body),
            Err(GenerateError::Application("quota exceeded".to_string()))
        );
    }

    #[test]
    fn test_error_body_without_success_flag() {
        let body = r#"{"error": "OpenAI API ключ не настроен"}"#.as_bytes();
        assert_eq!(
            interpret_response(body),
            Err(GenerateError::Application("OpenAI API ключ не настроен".to_string()))
        );
    }

    #[test]
    fn test_failure_without_reason_uses_fallback() {
        let body = br#"{"success": false}"#;
        assert_eq!(
            interpret_response(body),
            Err(GenerateError::Application(GENERATION_FAILED_FALLBACK.to_string()))
        );
    }

    #[test]
    fn test_malformed_json_is_transport_failure() {
        let err = interpret_response(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, GenerateError::Transport(_)));
    }

    #[test]
    fn test_non_object_body_is_transport_failure() {
        let err = interpret_response(b"[1, 2, 3]").unwrap_err();
        assert!(matches!(err, GenerateError::Transport(_)));
    }

    #[test]
    fn test_success_without_data_is_transport_failure() {
        let err = interpret_response(br#"{"success": true}"#).unwrap_err();
        assert!(matches!(err, GenerateError::Transport(_)));

        let err = interpret_response(br#"{"success": true, "data": "oops"}"#).unwrap_err();
        assert!(matches!(err, GenerateError::Transport(_)));
    }

    #[test]
    fn test_sequence_data_is_transport_failure() {
        for body in [
            &br#"{"success": true, "data": []}"#[..],
            &br#"{"success": true, "data": ["T", "D"]}"#[..],
        ] {
            let err = interpret_response(body).unwrap_err();
            assert!(matches!(err, GenerateError::Transport(_)));
        }
    }
}
