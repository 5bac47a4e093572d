//! Google Gemini explanation source
//!
//! Talks to the Google AI API (`generateContent`) and constrains the
//! response to the structured explanation schema.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::{
    config::{GeminiSettings, DEFAULT_TIMEOUT},
    error::ProviderError,
    models::{AccountExplanation, ExplainRequest, ModelInfo},
    source::ExplanationSource,
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini-backed explanation source
pub struct GeminiClient {
    api_key: String,
    client: Arc<Client>,
    base_url: String,
}

impl GeminiClient {
    /// Create a new client with the default endpoint and timeout
    pub fn new(api_key: String) -> Result<Self, ProviderError> {
        Self::with_client(Arc::new(default_http_client(DEFAULT_TIMEOUT)?), api_key)
    }

    /// Create a new client with a custom base URL
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self, ProviderError> {
        Self::with_client_and_base_url(
            Arc::new(default_http_client(DEFAULT_TIMEOUT)?),
            api_key,
            base_url,
        )
    }

    /// Create a new client with a custom HTTP client
    pub fn with_client(client: Arc<Client>, api_key: String) -> Result<Self, ProviderError> {
        Self::with_client_and_base_url(client, api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Create a new client with a custom HTTP client and base URL
    pub fn with_client_and_base_url(
        client: Arc<Client>,
        api_key: String,
        base_url: String,
    ) -> Result<Self, ProviderError> {
        if api_key.is_empty() {
            return Err(ProviderError::ConfigError(
                "Gemini API key is required".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            client,
            base_url,
        })
    }

    /// Build a client from injected settings
    pub fn from_settings(settings: &GeminiSettings) -> Result<Self, ProviderError> {
        let api_key = settings.resolve_api_key()?;
        let client = Arc::new(default_http_client(settings.timeout())?);
        let base_url = settings
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::with_client_and_base_url(client, api_key, base_url)
    }

    /// Models this client will dispatch to
    pub fn models(&self) -> Vec<ModelInfo> {
        vec![
            ModelInfo {
                id: "gemini-2.0-flash".to_string(),
                name: "Gemini 2.0 Flash".to_string(),
                context_window: 1000000,
            },
            ModelInfo {
                id: "gemini-1.5-pro".to_string(),
                name: "Gemini 1.5 Pro".to_string(),
                context_window: 2000000,
            },
            ModelInfo {
                id: "gemini-1.5-flash".to_string(),
                name: "Gemini 1.5 Flash".to_string(),
                context_window: 1000000,
            },
        ]
    }

    /// Extract the structured explanation from the response envelope
    fn convert_response(
        response: GeminiChatResponse,
    ) -> Result<AccountExplanation, ProviderError> {
        let text = response
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .map(|p| p.text.clone())
            .ok_or(ProviderError::EmptyResponse)?;

        let explanation: AccountExplanation = serde_json::from_str(&text)?;
        Ok(explanation)
    }
}

#[async_trait]
impl ExplanationSource for GeminiClient {
    async fn explain(&self, request: ExplainRequest) -> Result<AccountExplanation, ProviderError> {
        let model_id = &request.model;
        if !self.models().iter().any(|m| m.id == *model_id) {
            return Err(ProviderError::InvalidModel(model_id.clone()));
        }

        let gemini_request = GeminiChatRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: explanation_prompt(&request.query),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                response_mime_type: "application/json",
                response_schema: explanation_schema(),
            },
        };

        debug!("Sending explanation request to Gemini model {}", model_id);

        let url = format!(
            "{}/{}:generateContent?key={}",
            self.base_url, model_id, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| {
                error!("Gemini request failed: {}", e);
                ProviderError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Gemini API error ({}): {}", status, error_text);

            return match status.as_u16() {
                401 | 403 => Err(ProviderError::AuthError),
                429 => Err(ProviderError::RateLimited(60)),
                _ => Err(ProviderError::ServiceError(format!(
                    "Gemini API error: {}",
                    status
                ))),
            };
        }

        let gemini_response: GeminiChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;
        Self::convert_response(gemini_response)
    }
}

fn default_http_client(timeout: std::time::Duration) -> Result<Client, ProviderError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ProviderError::ConfigError(format!("HTTP client build failed: {}", e)))
}

/// Instruction wrapped around the user's query
fn explanation_prompt(query: &str) -> String {
    format!(
        "ماهیت بدهکار یا بستانکار «{}» را در حسابداری دوطرفه به اختصار توضیح بده \
         و طبقه‌بندی حساب را مشخص کن.",
        query
    )
}

/// Declared response schema: five required string fields
fn explanation_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "accountName": { "type": "STRING" },
            "accountType": { "type": "STRING" },
            "nature": { "type": "STRING" },
            "explanation": { "type": "STRING" },
            "practicalTip": { "type": "STRING" }
        },
        "required": ["accountName", "accountType", "nature", "explanation", "practicalTip"]
    })
}

/// Gemini API request format
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiChatRequest {
    contents: Vec<GeminiContent>,
    generation_config: GeminiGenerationConfig,
}

/// Gemini API content format
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

/// Gemini API part format
#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

/// Gemini API generation config
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

/// Gemini API response format
#[derive(Debug, Deserialize)]
struct GeminiChatResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

/// Gemini API candidate format
#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_requires_all_five_fields() {
        let schema = explanation_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            required,
            vec!["accountName", "accountType", "nature", "explanation", "practicalTip"]
        );
        for key in required {
            assert_eq!(schema["properties"][key]["type"], "STRING");
        }
    }

    #[test]
    fn prompt_embeds_query() {
        let prompt = explanation_prompt("بانک");
        assert!(prompt.contains("بانک"));
        assert!(prompt.contains("حسابداری"));
    }

    #[test]
    fn convert_response_missing_candidates_is_empty() {
        let response = GeminiChatResponse { candidates: vec![] };
        let result = GeminiClient::convert_response(response);
        assert_eq!(result, Err(ProviderError::EmptyResponse));
    }

    #[test]
    fn convert_response_non_schema_text_is_parse_error() {
        let response = GeminiChatResponse {
            candidates: vec![GeminiCandidate {
                content: Some(GeminiContent {
                    role: "model".to_string(),
                    parts: vec![GeminiPart {
                        text: "just prose, not JSON".to_string(),
                    }],
                }),
            }],
        };
        let result = GeminiClient::convert_response(response);
        assert!(matches!(result, Err(ProviderError::ParseError(_))));
    }
}
