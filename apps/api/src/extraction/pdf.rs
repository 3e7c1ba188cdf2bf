//! PDF text via `pdf-extract`: one string per page, joined in page order.

use std::path::Path;

use super::ExtractionError;

/// Extracts every page's text and concatenates them in document order.
/// Pages are joined as-is; whatever whitespace the page extractor emits is kept.
pub fn extract_text(path: &Path) -> Result<String, ExtractionError> {
    let pages = pdf_extract::extract_text_by_pages(path)
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;
    Ok(concat_pages(pages))
}

fn concat_pages(pages: Vec<String>) -> String {
    pages.concat()
}
