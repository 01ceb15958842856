use std::fmt;

/// Metadata for an uploaded file. The bytes themselves travel separately.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub filename: String,
    pub content_type: Option<String>,
    pub size_bytes: u64,
}

impl Document {
    pub fn new(filename: String, content_type: Option<String>, size_bytes: u64) -> Self {
        Self {
            filename,
            content_type,
            size_bytes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionEngine {
    TesseractImage,
    TesseractPdf,
}

impl ExtractionEngine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TesseractImage => "tesseract-image",
            Self::TesseractPdf => "tesseract-pdf",
        }
    }
}

impl fmt::Display for ExtractionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedText {
    pub text: String,
    pub engine: ExtractionEngine,
}

impl ExtractedText {
    pub fn new(text: String, engine: ExtractionEngine) -> Self {
        Self { text, engine }
    }
}
