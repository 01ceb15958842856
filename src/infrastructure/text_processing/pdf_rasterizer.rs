use std::io::Cursor;

use image::{DynamicImage, ImageFormat};
use pdfium_render::prelude::*;

use crate::application::ports::FileLoaderError;

use super::pdf_ocr_adapter::PdfRenderOptions;

const POINTS_PER_INCH: f32 = 72.0;

fn bind_pdfium(options: &PdfRenderOptions) -> Result<Pdfium, FileLoaderError> {
    let bindings = match &options.library_dir {
        Some(dir) => Pdfium::bind_to_library(dir.join(Pdfium::pdfium_platform_library_name())),
        None => Pdfium::bind_to_system_library(),
    }
    .map_err(|e| FileLoaderError::ExtractionFailed(format!("pdfium bind failed: {e}")))?;

    Ok(Pdfium::new(bindings))
}

fn encode_png(image: &DynamicImage, page_number: usize) -> Result<Vec<u8>, FileLoaderError> {
    let mut cursor = Cursor::new(Vec::new());
    image.write_to(&mut cursor, ImageFormat::Png).map_err(|e| {
        FileLoaderError::ExtractionFailed(format!("page {page_number}: PNG encoding failed: {e}"))
    })?;
    Ok(cursor.into_inner())
}

/// Renders the leading `options.max_pages` pages of a PDF to PNG at `options.dpi`.
pub(super) fn rasterize_pages(
    data: &[u8],
    options: &PdfRenderOptions,
) -> Result<Vec<Vec<u8>>, FileLoaderError> {
    let pdfium = bind_pdfium(options)?;
    let document = pdfium
        .load_pdf_from_byte_slice(data, None)
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("not a readable PDF: {e}")))?;

    let pages = document.pages();
    let page_count = pages.len() as usize;
    if page_count > options.max_pages {
        tracing::warn!(
            page_count,
            max_pages = options.max_pages,
            "PDF exceeds page limit, rendering leading pages only"
        );
    }

    let render_config = PdfRenderConfig::new().scale_page_by_factor(options.dpi / POINTS_PER_INCH);

    pages
        .iter()
        .take(options.max_pages)
        .enumerate()
        .map(|(index, page)| {
            let page_number = index + 1;
            let bitmap = page.render_with_config(&render_config).map_err(|e| {
                FileLoaderError::ExtractionFailed(format!("page {page_number}: render failed: {e}"))
            })?;
            let png = encode_png(&bitmap.as_image(), page_number)?;

            tracing::debug!(page = page_number, png_bytes = png.len(), "Rendered PDF page");
            Ok(png)
        })
        .collect()
}
