//! OpenAI provider client for chat completions and embeddings

use std::time::Instant;
use async_trait::async_trait;

use crate::error::{PipelineError, PipelineResult};
use crate::traits::LlmClient;
use crate::types::ChatResponse;

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// OpenAI API client
pub struct OpenAiClient {
    api_key: String,
    model: String,
    embedding_model: String,
    api_base: String,
    client: reqwest::Client,
}

impl OpenAiClient {
    /// Create a client for the given chat model
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Override the API base URL (test servers, proxies)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn map_status(status: reqwest::StatusCode) -> PipelineError {
        match status.as_u16() {
            401 => PipelineError::AuthenticationFailed,
            429 => PipelineError::RateLimitExceeded,
            503 => PipelineError::ServiceUnavailable,
            _ => PipelineError::ProviderError {
                status: status.to_string(),
            },
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn chat(&self, prompt: &str) -> PipelineResult<ChatResponse> {
        let request_start = Instant::now();

        let request_body = serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ],
            "temperature": 0.7
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| PipelineError::NetworkError(e.to_string()))?;

        let response_time = request_start.elapsed();

        if !response.status().is_success() {
            return Err(Self::map_status(response.status()));
        }

        let response_json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| PipelineError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let content = response_json
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .ok_or_else(|| PipelineError::InvalidResponse("No content in response".to_string()))?;

        let usage = response_json.get("usage");
        let total_tokens = usage
            .and_then(|u| u.get("total_tokens"))
            .and_then(|t| t.as_u64())
            .unwrap_or(0) as u32;
        let prompt_tokens = usage
            .and_then(|u| u.get("prompt_tokens"))
            .and_then(|t| t.as_u64())
            .unwrap_or(0) as u32;
        let completion_tokens = usage
            .and_then(|u| u.get("completion_tokens"))
            .and_then(|t| t.as_u64())
            .unwrap_or(0) as u32;

        Ok(ChatResponse {
            content: content.to_string(),
            tokens_used: total_tokens,
            prompt_tokens,
            completion_tokens,
            model_used: self.model.clone(),
            response_time,
        })
    }

    async fn embed(&self, texts: &[String]) -> PipelineResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let request_body = serde_json::json!({
            "model": self.embedding_model,
            "input": texts
        });

        let response = self
            .client
            .post(format!("{}/embeddings", self.api_base))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| PipelineError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::map_status(response.status()));
        }

        let response_json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| PipelineError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let data = response_json
            .get("data")
            .and_then(|d| d.as_array())
            .ok_or_else(|| PipelineError::InvalidResponse("No data in embeddings response".to_string()))?;

        if data.len() != texts.len() {
            return Err(PipelineError::InvalidResponse(format!(
                "Expected {} embeddings, got {}",
                texts.len(),
                data.len()
            )));
        }

        let mut embeddings = Vec::with_capacity(data.len());
        for item in data {
            let vector = item
                .get("embedding")
                .and_then(|e| e.as_array())
                .ok_or_else(|| {
                    PipelineError::InvalidResponse("Missing embedding vector".to_string())
                })?
                .iter()
                .map(|v| v.as_f64().unwrap_or(0.0) as f32)
                .collect();
            embeddings.push(vector);
        }

        Ok(embeddings)
    }
}
