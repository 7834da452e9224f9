pub mod http;

pub use http::HttpGateway;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Supported completion providers.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    HuggingFace,
    Claude,
    Gemini,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::HuggingFace => "huggingface",
            Provider::Claude => "claude",
            Provider::Gemini => "gemini",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "openai" | "OpenAI" => Some(Provider::OpenAi),
            "huggingface" | "HuggingFace" => Some(Provider::HuggingFace),
            "claude" | "Claude" => Some(Provider::Claude),
            "gemini" | "Gemini" => Some(Provider::Gemini),
            _ => None,
        }
    }
}

/// Provider, model and sampling settings for one completion call.
///
/// The tutoring flows run with the default everywhere; the chatbot surface
/// lets the user pick their own per call.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GenerationConfig {
    pub provider: Provider,
    pub model: String,
    /// Sampling temperature in [0, 1].
    pub temperature: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: Provider::OpenAi,
            model: "gpt-4o".to_string(),
            temperature: 0.7,
        }
    }
}

impl GenerationConfig {
    pub fn new(provider: Provider, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature,
        }
    }
}

/// Boundary to the external text-completion service.
///
/// Implementations take a fully assembled prompt and return the raw model
/// text. Provider/network failures must surface as
/// [`TutorError::Generation`](crate::TutorError::Generation); each caller
/// decides whether that is fatal to its own operation.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, prompt: &str, config: &GenerationConfig) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_round_trip() {
        for provider in [
            Provider::OpenAi,
            Provider::HuggingFace,
            Provider::Claude,
            Provider::Gemini,
        ] {
            assert_eq!(Provider::from_str(provider.as_str()), Some(provider));
        }
        assert_eq!(Provider::from_str("cohere"), None);
    }

    #[test]
    fn default_config_targets_gpt4o() {
        let config = GenerationConfig::default();
        assert_eq!(config.provider, Provider::OpenAi);
        assert_eq!(config.model, "gpt-4o");
        assert!((config.temperature - 0.7).abs() < f32::EPSILON);
    }
}
