mod tesseract_cli_engine;

pub use tesseract_cli_engine::TesseractCliEngine;
