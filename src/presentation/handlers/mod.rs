mod glossary;
mod health;
mod qa;
mod root;
mod simplify;
mod summarize;
mod upload;

pub use glossary::glossary_handler;
pub use health::health_handler;
pub use qa::qa_handler;
pub use root::root_handler;
pub use simplify::simplify_handler;
pub use summarize::summarize_handler;
pub use upload::upload_handler;

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
