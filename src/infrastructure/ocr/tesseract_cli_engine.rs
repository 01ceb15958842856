use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::{OcrEngine, OcrError};

/// Runs the `tesseract` executable, feeding the image on stdin and reading
/// recognized text from stdout.
pub struct TesseractCliEngine {
    binary: String,
    language: String,
}

impl TesseractCliEngine {
    pub fn new(binary: String, language: String) -> Self {
        Self { binary, language }
    }
}

#[async_trait]
impl OcrEngine for TesseractCliEngine {
    #[tracing::instrument(
        skip_all,
        fields(binary = %self.binary, language = %self.language, bytes = image_png.len())
    )]
    async fn recognize(&self, image_png: &[u8]) -> Result<String, OcrError> {
        let mut child = Command::new(&self.binary)
            .args(["stdin", "stdout", "-l", self.language.as_str()])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                OcrError::EngineUnavailable(format!("failed to start {}: {e}", self.binary))
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| OcrError::RecognitionFailed("stdin not captured".to_string()))?;
        // A child that exits early closes the pipe mid-write. Its stderr carries the cause.
        let write_result = stdin.write_all(image_png).await;
        drop(stdin);

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| OcrError::RecognitionFailed(format!("failed to collect output: {e}")))?;
        let stderr = String::from_utf8_lossy(&output.stderr);

        if let Err(e) = write_result {
            return Err(OcrError::RecognitionFailed(format!(
                "failed to send image to {} ({}): {}",
                self.binary,
                e,
                stderr.trim()
            )));
        }

        if !output.status.success() {
            return Err(OcrError::RecognitionFailed(format!(
                "{} exited with {}: {}",
                self.binary,
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        tracing::debug!(text_chars = text.chars().count(), "OCR finished");

        Ok(text)
    }
}
