use axum::{extract::State, routing::post, Json, Router};
use tracing::info;

use crate::models::{AppState, ChatRequest, ChatResponse};
use crate::types::{AppError, LLMMessage, LLMRequest};

const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful full-stack assistant.";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(post_chat))
        .with_state(state)
}

async fn post_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.is_empty() {
        return Err(AppError::InvalidRequest(
            "Invalid request or AI error.".to_string(),
        ));
    }

    info!(chars = request.message.len(), "chat request received");

    let system = request
        .system
        .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string());
    let llm_request = LLMRequest {
        model: state.config.llm.model(),
        messages: vec![LLMMessage::system(system), LLMMessage::user(request.message)],
        max_tokens: None,
        temperature: Some(0.2),
    };

    let completion = state.llm.create_chat_completion(&llm_request).await?;

    Ok(Json(ChatResponse {
        reply: completion.content.trim().to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, LLMConfig, ServerConfig};
    use crate::llm::{LLMAdapter, LLM};
    use crate::types::{AppResult, LLMResponse, TokenUsage};
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct StubAdapter {
        reply: &'static str,
    }

    #[async_trait]
    impl LLMAdapter for StubAdapter {
        async fn create_chat_completion(&self, _request: &LLMRequest) -> AppResult<LLMResponse> {
            Ok(LLMResponse {
                content: self.reply.to_string(),
                finish_reason: "stop".to_string(),
                usage: TokenUsage::default(),
            })
        }
    }

    fn test_state(adapter: Box<dyn LLMAdapter>) -> AppState {
        AppState {
            config: Config {
                server: ServerConfig {
                    port: 0,
                    host: "127.0.0.1".to_string(),
                    cors_allowed_origins: vec!["*".to_string()],
                },
                llm: LLMConfig {
                    openai_api_key: "sk-test".to_string(),
                    azure_api_key: String::new(),
                    azure_endpoint: String::new(),
                    azure_deployment: String::new(),
                    default_model: "gpt-4o-mini".to_string(),
                },
            },
            llm: Arc::new(LLM::from_adapter(adapter, "stub")),
        }
    }

    fn chat_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_chat_returns_trimmed_reply() {
        let app = router(test_state(Box::new(StubAdapter { reply: "  hi there \n" })));
        let response = app
            .oneshot(chat_request(r#"{"message": "hello"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["reply"], "hi there");
    }

    #[tokio::test]
    async fn test_empty_message_rejected() {
        let app = router(test_state(Box::new(StubAdapter { reply: "unused" })));
        let response = app
            .oneshot(chat_request(r#"{"message": ""}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Invalid request or AI error.");
    }
}
