// PDF text extraction via lopdf

use crate::types::{AppError, AppResult};
use lopdf::Document;
use std::path::Path;
use tracing::debug;

/// Extract text from a PDF file, pages in document order joined by newlines.
/// Pages with no extractable text contribute only the newline.
pub async fn extract(path: &Path) -> String {
    match read_pdf(path).await {
        Ok(text) => text,
        Err(e) => format!("Error reading PDF: {}", e),
    }
}

async fn read_pdf(path: &Path) -> AppResult<String> {
    let bytes = tokio::fs::read(path).await?;
    let doc = Document::load_mem(&bytes).map_err(|e| AppError::Parse(e.to_string()))?;

    let mut text = String::new();
    for (page_num, _page_id) in doc.get_pages() {
        let page_text = doc.extract_text(&[page_num]).unwrap_or_default();
        debug!(page = page_num, chars = page_text.len(), "Extracted PDF page");
        text.push_str(&page_text);
        text.push('\n');
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_missing_file_yields_error_string() {
        let text = extract(Path::new("/nonexistent/file.pdf")).await;
        assert!(text.starts_with("Error reading PDF:"), "got: {}", text);
    }

    #[tokio::test]
    async fn test_corrupt_pdf_yields_error_string() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not a pdf at all").unwrap();

        let text = extract(file.path()).await;
        assert!(text.starts_with("Error reading PDF:"), "got: {}", text);
    }
}
