mod fallback_file_loader;
mod image_ocr_adapter;
mod passthrough_simplifier;
mod pdf_ocr_adapter;
mod pdf_rasterizer;
mod sentence_packing_splitter;
mod text_sanitizer;

pub use fallback_file_loader::FallbackFileLoader;
pub use image_ocr_adapter::ImageOcrAdapter;
pub use passthrough_simplifier::PassthroughSimplifier;
pub use pdf_ocr_adapter::{PdfOcrAdapter, PdfRenderOptions};
pub use sentence_packing_splitter::{
    DEFAULT_MAX_CHUNK_CHARS, SentencePackingSplitter, chunk_text, split_sentences,
};
pub use text_sanitizer::sanitize_extracted_text;
