use axum::Json;
use axum::response::IntoResponse;
use serde::Serialize;

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

pub async fn root_handler() -> impl IntoResponse {
    Json(RootResponse {
        message: "MedEase AI Backend Running",
    })
}
