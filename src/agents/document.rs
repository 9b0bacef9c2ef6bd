//! Document Processor
//!
//! Top-level orchestration: classify an upload by its declared MIME type,
//! dispatch to the matching extractor, run the content analyzer, and
//! assemble a `DocumentAnalysis`. The public operation has no error
//! variant; every internal failure is absorbed into the returned record.

use crate::agents::analyzer::ContentAnalyzer;
use crate::config::Config;
use crate::extract;
use crate::llm::provider::{LLMProviderConfig, LLM};
use crate::models::{DocumentAnalysis, DocumentType, FileUpload};
use crate::types::{AppError, AppResult};
use std::path::Path;
use tracing::{error, info};

pub struct DocumentProcessor {
    config: Config,
    llm: LLM,
}

impl DocumentProcessor {
    pub fn new(config: Config) -> AppResult<Self> {
        let llm = LLM::new(LLMProviderConfig {
            name: "google".to_string(),
            api_key: config.llm.google_api_key.clone(),
        })?;
        Ok(Self { config, llm })
    }

    /// Build a processor around an existing LLM handle. Tests use this to
    /// substitute a stub model.
    pub fn with_llm(config: Config, llm: LLM) -> Self {
        Self { config, llm }
    }

    /// Process an uploaded file and return its analysis.
    ///
    /// Always returns a structurally complete record. Failures anywhere in
    /// the chain yield an apology record carrying the classified type, or
    /// `UNKNOWN` when the MIME type matched nothing.
    pub async fn process_file(&self, upload: &FileUpload) -> DocumentAnalysis {
        let document_type = DocumentType::from_mime(&upload.content_type);
        info!(
            filename = %upload.filename,
            content_type = %upload.content_type,
            document_type = %document_type,
            "Processing uploaded file"
        );

        match self.try_process(upload, document_type).await {
            Ok(analysis) => analysis,
            Err(e) => {
                error!(error = %e, filename = %upload.filename, "Document processing failed");
                DocumentAnalysis {
                    document_type,
                    summary: format!("Error processing document: {}", e),
                    key_insights: vec!["Document processing failed".to_string()],
                    questions_answered: vec![
                        "Unable to analyze due to processing error".to_string()
                    ],
                }
            }
        }
    }

    async fn try_process(
        &self,
        upload: &FileUpload,
        document_type: DocumentType,
    ) -> AppResult<DocumentAnalysis> {
        let path = Path::new(&upload.file_path);

        let extracted_text = match document_type {
            DocumentType::Pdf => extract::pdf::extract(path).await,
            DocumentType::Docx => extract::docx::extract(path).await,
            DocumentType::Csv => extract::csv::extract(path).await,
            DocumentType::Txt => extract::txt::extract(path).await,
            DocumentType::Image => extract::image::extract(path).await,
            DocumentType::Unknown => {
                return Err(AppError::InvalidRequest(format!(
                    "Unsupported document type: {}",
                    document_type
                )))
            }
        };

        let analysis =
            ContentAnalyzer::analyze(&self.llm, &extracted_text, document_type, &self.config)
                .await;

        Ok(DocumentAnalysis {
            document_type,
            summary: analysis.summary,
            key_insights: analysis.key_insights,
            questions_answered: analysis.questions_answered,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LlmConfig, StorageConfig};
    use crate::llm::provider::LLMAdapter;
    use crate::types::{LLMRequest, LLMResponse, TokenUsage};
    use async_trait::async_trait;
    use std::io::Write;

    // The model always fails here, so the analyzer degrades to its canned
    // record; these tests exercise classification, extraction dispatch, and
    // the never-errors contract without a network round trip.
    struct FailingAdapter;

    #[async_trait]
    impl LLMAdapter for FailingAdapter {
        async fn create_chat_completion(&self, _request: &LLMRequest) -> AppResult<LLMResponse> {
            Err(AppError::LLMApi("model unavailable".to_string()))
        }
    }

    struct EchoAdapter;

    #[async_trait]
    impl LLMAdapter for EchoAdapter {
        async fn create_chat_completion(&self, _request: &LLMRequest) -> AppResult<LLMResponse> {
            Ok(LLMResponse {
                content: r#"{"summary": "ok", "key_insights": ["k"], "questions_answered": ["q"]}"#
                    .to_string(),
                finish_reason: "STOP".to_string(),
                usage: TokenUsage::default(),
            })
        }
    }

    fn config() -> Config {
        Config {
            llm: LlmConfig {
                google_api_key: String::new(),
                model: "gemini-2.0-flash-exp".to_string(),
                temperature: 0.3,
                max_prompt_chars: 4000,
            },
            storage: StorageConfig {
                uploads_dir: "uploads".to_string(),
            },
        }
    }

    fn processor() -> DocumentProcessor {
        DocumentProcessor::with_llm(config(), LLM::with_adapter(Box::new(FailingAdapter), "stub"))
    }

    fn upload(path: &str, content_type: &str) -> FileUpload {
        FileUpload {
            filename: "test-file".to_string(),
            content_type: content_type.to_string(),
            file_size: 0,
            file_path: path.to_string(),
        }
    }

    #[tokio::test]
    async fn test_unknown_mime_returns_apology_record() {
        let analysis = processor()
            .process_file(&upload("/tmp/whatever.bin", "application/octet-stream"))
            .await;

        assert_eq!(analysis.document_type, DocumentType::Unknown);
        assert!(analysis.summary.starts_with("Error processing document:"));
        assert!(analysis.summary.contains("Unsupported document type: UNKNOWN"));
        assert_eq!(analysis.key_insights, vec!["Document processing failed"]);
        assert_eq!(
            analysis.questions_answered,
            vec!["Unable to analyze due to processing error"]
        );
    }

    #[tokio::test]
    async fn test_missing_file_still_returns_complete_record() {
        let analysis = processor()
            .process_file(&upload("/nonexistent/report.pdf", "application/pdf"))
            .await;

        // Extraction failure becomes text content, not an error
        assert_eq!(analysis.document_type, DocumentType::Pdf);
        assert!(!analysis.summary.is_empty());
        assert!(!analysis.key_insights.is_empty());
        assert!(!analysis.questions_answered.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_pdf_never_raises() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"%PDF-garbage").unwrap();

        let analysis = processor()
            .process_file(&upload(file.path().to_str().unwrap(), "application/pdf"))
            .await;

        assert_eq!(analysis.document_type, DocumentType::Pdf);
        assert!(!analysis.summary.is_empty());
    }

    #[tokio::test]
    async fn test_empty_txt_file_never_raises() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let analysis = processor()
            .process_file(&upload(file.path().to_str().unwrap(), "text/plain"))
            .await;

        assert_eq!(analysis.document_type, DocumentType::Txt);
        assert!(!analysis.summary.is_empty());
        assert!(!analysis.key_insights.is_empty());
    }

    #[tokio::test]
    async fn test_txt_happy_path_passes_model_fields_through() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"some meeting notes").unwrap();

        let processor =
            DocumentProcessor::with_llm(config(), LLM::with_adapter(Box::new(EchoAdapter), "stub"));
        let analysis = processor
            .process_file(&upload(file.path().to_str().unwrap(), "text/plain"))
            .await;

        assert_eq!(analysis.document_type, DocumentType::Txt);
        assert_eq!(analysis.summary, "ok");
        assert_eq!(analysis.key_insights, vec!["k"]);
        assert_eq!(analysis.questions_answered, vec!["q"]);
    }

    #[tokio::test]
    async fn test_csv_dispatches_by_priority_over_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"a,b\n1,2\n").unwrap();

        // "text/csv" contains both "text" and "csv"; csv is checked first
        let analysis = processor()
            .process_file(&upload(file.path().to_str().unwrap(), "text/csv"))
            .await;

        assert_eq!(analysis.document_type, DocumentType::Csv);
    }
}
