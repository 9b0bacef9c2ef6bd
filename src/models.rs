// Data-transfer shapes for the document analysis pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Document type tag derived from the declared MIME content type.
///
/// Classification is total: any MIME string maps to one of these six tags,
/// with `Unknown` as the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "PDF")]
    Pdf,
    #[serde(rename = "DOCX")]
    Docx,
    #[serde(rename = "CSV")]
    Csv,
    #[serde(rename = "TXT")]
    Txt,
    #[serde(rename = "IMAGE")]
    Image,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl DocumentType {
    /// Classify a declared MIME content type.
    ///
    /// Case-insensitive substring checks in fixed priority order, so a MIME
    /// string matching several substrings (e.g. "text/csv") resolves to the
    /// earliest check: pdf, word/docx, csv, text, image.
    pub fn from_mime(content_type: &str) -> Self {
        let ct = content_type.to_lowercase();
        if ct.contains("pdf") {
            DocumentType::Pdf
        } else if ct.contains("word") || ct.contains("docx") {
            DocumentType::Docx
        } else if ct.contains("csv") {
            DocumentType::Csv
        } else if ct.contains("text") {
            DocumentType::Txt
        } else if ct.contains("image") {
            DocumentType::Image
        } else {
            DocumentType::Unknown
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            DocumentType::Pdf => "PDF",
            DocumentType::Docx => "DOCX",
            DocumentType::Csv => "CSV",
            DocumentType::Txt => "TXT",
            DocumentType::Image => "IMAGE",
            DocumentType::Unknown => "UNKNOWN",
        };
        write!(f, "{}", tag)
    }
}

/// An uploaded file as handed to the processor. Created by the upload step,
/// consumed once; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileUpload {
    /// Name of the uploaded file
    pub filename: String,
    /// MIME type of the file
    pub content_type: String,
    /// Size of the file in bytes
    pub file_size: i64,
    /// Path where the file is stored
    pub file_path: String,
}

/// Structured analysis of a processed document.
///
/// Always fully populated. Failure paths substitute explanatory text in
/// `summary`/`key_insights`/`questions_answered` rather than omitting fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub document_type: DocumentType,
    pub summary: String,
    pub key_insights: Vec<String>,
    pub questions_answered: Vec<String>,
}

/// Chat session record. Schema only; storage lives outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub session_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub message_count: i64,
}

/// Reusable prompt template record. Schema only; storage lives outside
/// this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub prompt: String,
    /// Category of the template (research, analysis, etc.)
    pub category: String,
    /// Recommended effort level (low, medium, high)
    pub effort_level: String,
    /// Recommended model for this template
    pub model: String,
}
