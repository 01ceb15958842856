use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::services::summarize;
use crate::domain::{SummaryAudit, SummaryLevel};

#[derive(Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    #[serde(default)]
    pub level: SummaryLevel,
}

#[derive(Serialize)]
pub struct SummarizeResponse {
    pub level: SummaryLevel,
    pub summary: String,
    pub audit: SummaryAudit,
}

#[tracing::instrument(skip_all, fields(level = request.level.as_str()))]
pub async fn summarize_handler(
    Json(request): Json<SummarizeRequest>,
) -> Json<SummarizeResponse> {
    let summary = summarize(&request.text, request.level);

    Json(SummarizeResponse {
        level: summary.level,
        summary: summary.summary,
        audit: summary.audit,
    })
}
