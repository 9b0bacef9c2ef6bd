// Plain-text extraction

use std::path::Path;

/// Read a UTF-8 text file verbatim.
pub async fn extract(path: &Path) -> String {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) => format!("Error reading TXT: {}", e),
    }
}
