use std::sync::Arc;

use crate::config::Config;
use crate::llm::LLM;
use crate::pipeline::StatsReport;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub llm: Arc<LLM>,
}

// API Request/Response types

#[derive(Debug, serde::Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub system: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Result of one CSV ingestion run: total decoded rows, per-numeric-
/// column stats and the generated summary. All-or-nothing; there is no
/// partial variant without the summary.
#[derive(Debug, serde::Serialize)]
pub struct ProcessCsvResponse {
    pub rows: usize,
    pub stats: StatsReport,
    pub summary: String,
}

#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}
