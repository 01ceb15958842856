use axum::Json;
use axum::extract::multipart::Field;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::Document;
use crate::presentation::state::AppState;

use super::ErrorResponse;

const FILE_FIELD: &str = "file";

#[derive(Serialize)]
pub struct UploadResponse {
    pub text: String,
    pub engine: &'static str,
}

fn error_response(status: StatusCode, error: String) -> axum::response::Response {
    (status, Json(ErrorResponse { error })).into_response()
}

fn is_file_field(field: &Field<'_>) -> bool {
    field.name() == Some(FILE_FIELD) || field.file_name().is_some()
}

#[tracing::instrument(skip_all)]
pub async fn upload_handler<F, L>(
    State(state): State<AppState<F, L>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let (filename, content_type, data) = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if is_file_field(&field) => {
                let filename = field.file_name().unwrap_or("unknown").to_string();
                let content_type = field.content_type().map(String::from);

                tracing::debug!(filename = %filename, content_type = ?content_type, "Processing file upload");

                match field.bytes().await {
                    Ok(data) => break (filename, content_type, data),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read file bytes");
                        return error_response(e.status(), format!("Failed to read file: {}", e));
                    }
                }
            }
            Ok(Some(_)) => continue,
            Ok(None) => {
                tracing::warn!("Upload request with no file");
                return error_response(StatusCode::BAD_REQUEST, "No file uploaded".to_string());
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error_response(e.status(), format!("Failed to read multipart: {}", e));
            }
        }
    };

    let document = Document::new(filename, content_type, data.len() as u64);

    match state.extraction_service.extract(&data, &document).await {
        Ok(extracted) => (
            StatusCode::OK,
            Json(UploadResponse {
                text: extracted.text,
                engine: extracted.engine.as_str(),
            }),
        )
            .into_response(),
        Err(e) if e.is_client_error() => {
            tracing::warn!(error = %e, "Uploaded file could not be read");
            error_response(
                StatusCode::BAD_REQUEST,
                format!("Document processing failed: {}", e),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Upload processing failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
