use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::SimplifyAuditEntry;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct SimplifyRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct SimplifyResponse {
    pub status: &'static str,
    pub masked_text: String,
    pub simplified_masked: String,
    pub final_text: String,
    pub audit: Vec<SimplifyAuditEntry>,
}

#[tracing::instrument(skip_all)]
pub async fn simplify_handler<F, L>(
    State(state): State<AppState<F, L>>,
    Json(request): Json<SimplifyRequest>,
) -> Json<SimplifyResponse>
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let outcome = state.simplify_service.simplify(&request.text).await;

    tracing::info!(status = outcome.status.as_str(), "Simplification finished");

    Json(SimplifyResponse {
        status: outcome.status.as_str(),
        masked_text: outcome.masked_text,
        simplified_masked: outcome.simplified_masked,
        final_text: outcome.final_text,
        audit: outcome.audit,
    })
}
