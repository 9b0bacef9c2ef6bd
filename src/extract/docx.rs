// DOCX text extraction via docx-rs

use crate::types::{AppError, AppResult};
use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
use std::path::Path;

/// Extract paragraph text from a DOCX file in document order, joined by
/// newlines.
pub async fn extract(path: &Path) -> String {
    match read_paragraphs(path).await {
        Ok(text) => text,
        Err(e) => format!("Error reading DOCX: {}", e),
    }
}

async fn read_paragraphs(path: &Path) -> AppResult<String> {
    let bytes = tokio::fs::read(path).await?;
    let docx = read_docx(&bytes).map_err(|e| AppError::Parse(e.to_string()))?;

    let mut paragraphs = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(para) = child {
            let mut text = String::new();
            for para_child in &para.children {
                if let ParagraphChild::Run(run) = para_child {
                    for run_child in &run.children {
                        if let RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            paragraphs.push(text);
        }
    }

    Ok(paragraphs.join("\n"))
}
