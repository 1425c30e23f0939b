use anyhow::Result;
use serde::Deserialize;
use std::env;

use crate::types::LLMProvider;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LLMConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LLMConfig {
    pub openai_api_key: String,
    pub azure_api_key: String,
    pub azure_endpoint: String,
    pub azure_deployment: String,
    pub default_model: String,
}

impl LLMConfig {
    /// Azure wins when both a key and an endpoint are configured,
    /// otherwise plain OpenAI.
    pub fn provider(&self) -> LLMProvider {
        if !self.azure_api_key.is_empty() && !self.azure_endpoint.is_empty() {
            LLMProvider::AzureOpenAI
        } else {
            LLMProvider::OpenAI
        }
    }

    /// Model identifier passed to the completion API. For Azure this is
    /// the deployment name.
    pub fn model(&self) -> String {
        if self.provider() == LLMProvider::AzureOpenAI && !self.azure_deployment.is_empty() {
            self.azure_deployment.clone()
        } else {
            self.default_model.clone()
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3001".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                cors_allowed_origins: env::var("ALLOWED_ORIGIN")
                    .unwrap_or_else(|_| "*".to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .collect(),
            },
            llm: LLMConfig {
                openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
                azure_api_key: env::var("AZURE_OPENAI_API_KEY").unwrap_or_default(),
                azure_endpoint: env::var("AZURE_OPENAI_ENDPOINT").unwrap_or_default(),
                azure_deployment: env::var("AZURE_OPENAI_DEPLOYMENT").unwrap_or_default(),
                default_model: env::var("OPENAI_MODEL")
                    .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            },
        })
    }
}
