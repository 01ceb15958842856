use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::services::lookup_terms;

#[derive(Deserialize)]
pub struct GlossaryRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct GlossaryResponse {
    pub glossary: Vec<(String, String)>,
}

#[tracing::instrument(skip_all)]
pub async fn glossary_handler(Json(request): Json<GlossaryRequest>) -> Json<GlossaryResponse> {
    let glossary: Vec<(String, String)> = lookup_terms(&request.text)
        .into_iter()
        .map(|entry| (entry.token, entry.definition.to_string()))
        .collect();

    tracing::debug!(tokens = glossary.len(), "Glossary lookup complete");

    Json(GlossaryResponse { glossary })
}
