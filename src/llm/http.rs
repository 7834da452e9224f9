use log::{info, warn};
use reqwest::Client;
use serde_json::Value;

use async_trait::async_trait;

use super::{CompletionGateway, GenerationConfig, Provider};
use crate::error::{Result, TutorError};

const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
const HUGGINGFACE_URL: &str = "https://router.huggingface.co/v1/chat/completions";
const ANTHROPIC_URL: &str = "https://api.anthropic.com/v1/messages";
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// HTTP-backed completion gateway covering all four supported providers.
///
/// API keys are read from the environment (`OPENAI_API_KEY`, `HF_API_KEY`,
/// `ANTHROPIC_API_KEY`, `GEMINI_API_KEY`); a call routed to a provider whose
/// key is missing fails with a `Generation` error rather than at startup, so
/// a shell configured for a single provider only needs that one key.
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    openai_api_key: Option<String>,
    huggingface_api_key: Option<String>,
    anthropic_api_key: Option<String>,
    gemini_api_key: Option<String>,
}

impl HttpGateway {
    pub fn from_env() -> Self {
        let openai_api_key = std::env::var("OPENAI_API_KEY").ok();
        let huggingface_api_key = std::env::var("HF_API_KEY").ok();
        let anthropic_api_key = std::env::var("ANTHROPIC_API_KEY").ok();
        let gemini_api_key = std::env::var("GEMINI_API_KEY").ok();

        if openai_api_key.is_none()
            && huggingface_api_key.is_none()
            && anthropic_api_key.is_none()
            && gemini_api_key.is_none()
        {
            warn!("No provider API keys found in environment - completion calls will fail");
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .connect_timeout(std::time::Duration::from_secs(5))
            .tcp_keepalive(std::time::Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            openai_api_key,
            huggingface_api_key,
            anthropic_api_key,
            gemini_api_key,
        }
    }

    async fn call_openai_compatible(
        &self,
        url: &str,
        api_key: &str,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String> {
        let request_body = serde_json::json!({
            "model": config.model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ],
            "temperature": config.temperature
        });

        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| TutorError::Generation(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(TutorError::Generation(format!(
                "provider returned {}: {}",
                status, error_text
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| TutorError::Generation(format!("failed to parse response: {}", e)))?;

        let content = response_json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| TutorError::Generation("no content in response".to_string()))?
            .trim()
            .to_string();

        Ok(content)
    }

    async fn call_anthropic(
        &self,
        api_key: &str,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String> {
        let request_body = serde_json::json!({
            "model": config.model,
            "max_tokens": 2048,
            "temperature": config.temperature,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ]
        });

        let response = self
            .client
            .post(ANTHROPIC_URL)
            .header("x-api-key", api_key)
            .header("anthropic-version", "2023-06-01")
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| TutorError::Generation(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(TutorError::Generation(format!(
                "provider returned {}: {}",
                status, error_text
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| TutorError::Generation(format!("failed to parse response: {}", e)))?;

        let content = response_json["content"][0]["text"]
            .as_str()
            .ok_or_else(|| TutorError::Generation("no content in response".to_string()))?
            .trim()
            .to_string();

        Ok(content)
    }

    async fn call_gemini(
        &self,
        api_key: &str,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_BASE_URL, config.model, api_key
        );

        let request_body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        { "text": prompt }
                    ]
                }
            ],
            "generationConfig": {
                "temperature": config.temperature
            }
        });

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| TutorError::Generation(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(TutorError::Generation(format!(
                "provider returned {}: {}",
                status, error_text
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| TutorError::Generation(format!("failed to parse response: {}", e)))?;

        let content = response_json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| TutorError::Generation("no content in response".to_string()))?
            .trim()
            .to_string();

        Ok(content)
    }

    fn require_key<'a>(key: &'a Option<String>, provider: Provider) -> Result<&'a str> {
        key.as_deref().ok_or_else(|| {
            TutorError::Generation(format!("{} API key not configured", provider.as_str()))
        })
    }
}

#[async_trait]
impl CompletionGateway for HttpGateway {
    async fn complete(&self, prompt: &str, config: &GenerationConfig) -> Result<String> {
        info!(
            "Sending completion request to {} with model: {}",
            config.provider.as_str(),
            config.model
        );

        match config.provider {
            Provider::OpenAi => {
                let key = Self::require_key(&self.openai_api_key, Provider::OpenAi)?;
                self.call_openai_compatible(OPENAI_URL, key, prompt, config)
                    .await
            }
            Provider::HuggingFace => {
                let key = Self::require_key(&self.huggingface_api_key, Provider::HuggingFace)?;
                self.call_openai_compatible(HUGGINGFACE_URL, key, prompt, config)
                    .await
            }
            Provider::Claude => {
                let key = Self::require_key(&self.anthropic_api_key, Provider::Claude)?;
                self.call_anthropic(key, prompt, config).await
            }
            Provider::Gemini => {
                let key = Self::require_key(&self.gemini_api_key, Provider::Gemini)?;
                self.call_gemini(key, prompt, config).await
            }
        }
    }
}
