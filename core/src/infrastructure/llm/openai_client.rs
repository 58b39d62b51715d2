use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    recommendation::ports::LLMClient,
};

/// Client for the OpenAI Responses API.
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    api_key: Option<String>,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: String,
}

#[derive(Debug, Deserialize)]
struct ResponsesResponse {
    #[serde(default)]
    output_text: Option<String>,
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl ResponsesResponse {
    /// `output_text` when present, otherwise every `output_text` content
    /// part joined in order.
    fn into_text(self) -> String {
        if let Some(text) = self.output_text
            && !text.is_empty()
        {
            return text;
        }

        self.output
            .into_iter()
            .flat_map(|item| item.content)
            .filter(|part| part.kind == "output_text")
            .filter_map(|part| part.text)
            .collect()
    }
}

impl OpenAIClient {
    pub fn new(config: &LLMConfig) -> Self {
        Self {
            api_key: config.openai_api_key.clone().filter(|k| !k.trim().is_empty()),
            model_name: config.openai_model.clone(),
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn call_responses_api(&self, request: ResponsesRequest<'_>) -> Result<String, CoreError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| CoreError::ConfigurationError("OPENAI_API_KEY not set".to_string()))?;

        let url = format!("{}/responses", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI request failed: {}", e);
                CoreError::ExternalServiceError(format!("OpenAI call failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "OpenAI call failed: {} - {}",
                status, error_text
            )));
        }

        let body: ResponsesResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse OpenAI response: {}", e);
            CoreError::ExternalServiceError(format!("OpenAI call failed: {}", e))
        })?;

        Ok(body.into_text())
    }
}

impl LLMClient for OpenAIClient {
    async fn generate_text(&self, prompt: String) -> Result<String, CoreError> {
        let request = ResponsesRequest {
            model: &self.model_name,
            input: prompt,
        };

        self.call_responses_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> LLMConfig {
        LLMConfig {
            openai_api_key: api_key.map(str::to_string),
            openai_model: "gpt-4.1-mini".to_string(),
            openai_base_url: "http://127.0.0.1:9/v1/".to_string(),
        }
    }

    #[test]
    fn test_output_text_wins() {
        let body: ResponsesResponse = serde_json::from_str(
            r#"{"output_text":"{\"picks\":[]}","output":[{"content":[{"type":"output_text","text":"ignored"}]}]}"#,
        )
        .unwrap();
        assert_eq!(body.into_text(), r#"{"picks":[]}"#);
    }

    #[test]
    fn test_output_parts_are_concatenated() {
        let body: ResponsesResponse = serde_json::from_str(
            r#"{"output":[
                {"type":"reasoning","content":[]},
                {"type":"message","content":[
                    {"type":"output_text","text":"{\"picks\":"},
                    {"type":"refusal","refusal":"no"},
                    {"type":"output_text","text":"[]}"}
                ]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(body.into_text(), r#"{"picks":[]}"#);
    }

    #[test]
    fn test_empty_body_yields_empty_text() {
        let body: ResponsesResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(body.into_text(), "");
    }

    #[tokio::test]
    async fn test_missing_key_is_a_configuration_error() {
        let client = OpenAIClient::new(&config(Some("  ")));

        assert!(!client.is_configured());
        assert_eq!(
            client.generate_text("hi".to_string()).await,
            Err(CoreError::ConfigurationError(
                "OPENAI_API_KEY not set".to_string()
            ))
        );
    }
}
