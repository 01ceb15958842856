use axum::extract::State;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::{QaAudit, QaMode};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct QaForm {
    pub text: String,
    pub question: String,
    #[serde(default)]
    pub mode: QaMode,
}

#[derive(Serialize)]
pub struct QaResponse {
    pub answer: String,
    pub sources: Vec<SourceResponse>,
    pub method: &'static str,
    pub confidence: f32,
    pub audit: QaAudit,
}

#[derive(Serialize)]
pub struct SourceResponse {
    pub index: usize,
    pub snippet: String,
}

#[tracing::instrument(skip_all, fields(mode = %form.mode))]
pub async fn qa_handler<F, L>(
    State(state): State<AppState<F, L>>,
    Form(form): Form<QaForm>,
) -> Json<QaResponse>
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    tracing::debug!(question = %sanitize_prompt(&form.question), "Processing question");

    let answer = state
        .qa_service
        .answer_question(&form.text, &form.question, form.mode)
        .await;

    let sources = answer
        .sources
        .into_iter()
        .map(|s| SourceResponse {
            index: s.index,
            snippet: s.snippet,
        })
        .collect();

    Json(QaResponse {
        answer: answer.answer,
        sources,
        method: answer.method.as_str(),
        confidence: answer.confidence,
        audit: answer.audit,
    })
}
