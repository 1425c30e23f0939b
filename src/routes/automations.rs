use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::{routing::post, Json, Router};
use tracing::info;

use crate::models::{AppState, ProcessCsvResponse};
use crate::pipeline;
use crate::types::{AppError, LLMMessage, LLMRequest};

/// Upload size cap for the multipart body.
const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/automations/process-csv", post(process_csv))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// Run the ingestion pipeline over an uploaded CSV and summarize it.
///
/// All-or-nothing: a summarization failure fails the whole request
/// even though stats were already computed, and decode failures never
/// reach the summarization call.
async fn process_csv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ProcessCsvResponse>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Decode(format!("unreadable multipart body: {}", e)))?
    {
        if field.name() == Some("file") {
            upload = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Decode(format!("unreadable file field: {}", e)))?,
            );
            break;
        }
    }

    let upload = upload.ok_or_else(|| {
        AppError::InvalidRequest("CSV file is required (field: file).".to_string())
    })?;

    let dataset = pipeline::analyze(&upload)?;
    info!(
        rows = dataset.row_count(),
        numeric_columns = dataset.numeric_columns.len(),
        "dataset decoded"
    );

    let prompt = dataset.prompt()?;
    let llm_request = LLMRequest {
        model: state.config.llm.model(),
        messages: vec![LLMMessage::user(prompt)],
        max_tokens: None,
        temperature: Some(0.3),
    };

    let completion = state
        .llm
        .create_chat_completion(&llm_request)
        .await
        .map_err(|e| AppError::SummarizationFailed(e.to_string()))?;

    Ok(Json(ProcessCsvResponse {
        rows: dataset.row_count(),
        stats: dataset.stats,
        summary: completion.content.trim().to_string(),
    }))
}
