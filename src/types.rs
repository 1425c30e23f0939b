// Type definitions and enums

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LLMProvider {
    OpenAI,
    AzureOpenAI,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::AzureOpenAI => write!(f, "azure"),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LLMRequest {
    pub model: String,
    pub messages: Vec<LLMMessage>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LLMMessage {
    pub role: String, // "user", "assistant", "system"
    pub content: String,
}

impl LLMMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LLMResponse {
    pub content: String,
    pub finish_reason: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Dataset contains no rows")]
    EmptyDataset,

    #[error("Summarization failed: {0}")]
    SummarizationFailed(String),

    #[error("LLM API error: {0}")]
    LLMApi(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        // Client-facing messages are sanitized; detail stays in the logs.
        let (status, message) = match self {
            AppError::Decode(detail) => {
                tracing::warn!(%detail, "failed to decode upload");
                (StatusCode::BAD_REQUEST, "Failed to process file.".to_string())
            }
            AppError::EmptyDataset => {
                tracing::warn!("upload contained no data rows");
                (StatusCode::BAD_REQUEST, "Failed to process file.".to_string())
            }
            AppError::SummarizationFailed(detail) => {
                tracing::error!(%detail, "summarization call failed");
                (StatusCode::BAD_REQUEST, "Failed to process file.".to_string())
            }
            AppError::LLMApi(detail) => {
                tracing::error!(%detail, "LLM API call failed");
                (StatusCode::BAD_REQUEST, "Invalid request or AI error.".to_string())
            }
            AppError::InvalidRequest(message) => {
                tracing::warn!(%message, "invalid request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error.".to_string(),
                )
            }
        };

        (
            status,
            axum::Json(crate::models::ErrorResponse { error: message }),
        )
            .into_response()
    }
}
