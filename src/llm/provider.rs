use async_trait::async_trait;

use crate::config::LLMConfig;
use crate::types::{AppResult, LLMProvider, LLMRequest, LLMResponse};

/// Narrow capability the pipeline needs from a completion backend:
/// one prompt in, one completion out. Single attempt, no retry.
#[async_trait]
pub trait LLMAdapter: Send + Sync {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse>;
}

/// Provider front. Owns the selected adapter; constructed once at
/// startup and shared through [`crate::models::AppState`].
pub struct LLM {
    adapter: Box<dyn LLMAdapter>,
    provider_name: String,
}

impl LLM {
    /// Select an adapter from configuration: Azure OpenAI when an
    /// Azure key and endpoint are present, plain OpenAI otherwise.
    pub fn from_config(config: &LLMConfig) -> Self {
        let provider = config.provider();
        let adapter: Box<dyn LLMAdapter> = match provider {
            LLMProvider::AzureOpenAI => Box::new(crate::llm::openai::OpenAIAdapter::azure(
                &config.azure_api_key,
                &config.azure_endpoint,
                &config.azure_deployment,
            )),
            LLMProvider::OpenAI => Box::new(crate::llm::openai::OpenAIAdapter::new(
                &config.openai_api_key,
            )),
        };

        Self {
            adapter,
            provider_name: provider.to_string(),
        }
    }

    /// Wrap an already-built adapter. Used by tests to inject stubs.
    pub fn from_adapter(adapter: Box<dyn LLMAdapter>, provider_name: impl Into<String>) -> Self {
        Self {
            adapter,
            provider_name: provider_name.into(),
        }
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
        self.adapter.create_chat_completion(request).await
    }
}
