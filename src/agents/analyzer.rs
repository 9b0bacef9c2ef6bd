//! Content Analyzer
//!
//! Turns extracted document text into a structured summary through a single
//! round trip to the configured language model. Analysis is infallible from
//! the caller's point of view: every failure path substitutes a canned
//! record instead of propagating an error.

use crate::config::Config;
use crate::llm::provider::LLM;
use crate::models::DocumentType;
use crate::types::{AppError, AppResult, LLMMessage, LLMRequest};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// The three structured fields requested from the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisFields {
    pub summary: String,
    pub key_insights: Vec<String>,
    pub questions_answered: Vec<String>,
}

pub struct ContentAnalyzer;

impl ContentAnalyzer {
    /// Analyze extracted content. Never errors: model failures and
    /// unparsable responses degrade to canned records.
    pub async fn analyze(
        llm: &LLM,
        content: &str,
        document_type: DocumentType,
        config: &Config,
    ) -> AnalysisFields {
        info!(
            content_len = content.len(),
            document_type = %document_type,
            "Analyzing document content"
        );

        match Self::try_analyze(llm, content, document_type, config).await {
            Ok(fields) => fields,
            Err(e) => {
                warn!(error = %e, document_type = %document_type, "Analysis degraded to fallback");
                Self::degraded_fallback(document_type)
            }
        }
    }

    async fn try_analyze(
        llm: &LLM,
        content: &str,
        document_type: DocumentType,
        config: &Config,
    ) -> AppResult<AnalysisFields> {
        let prompt = Self::build_prompt(content, document_type, config.llm.max_prompt_chars);

        let request = LLMRequest {
            model: config.llm.model.clone(),
            messages: vec![LLMMessage::user(prompt)],
            max_tokens: None,
            temperature: Some(config.llm.temperature),
        };

        let response = llm.create_chat_completion(&request).await?;
        Self::parse_response(&response.content)
    }

    /// Build the fixed instruction prompt, truncating content to the first
    /// `max_chars` characters. Character-based cutoff, so multi-byte input
    /// never splits a code point.
    fn build_prompt(content: &str, document_type: DocumentType, max_chars: usize) -> String {
        let truncated: String = content.chars().take(max_chars).collect();

        format!(
            "Analyze the following {document_type} document content and provide:\n\
             \n\
             1. A concise summary (2-3 sentences)\n\
             2. 3-5 key insights or main points\n\
             3. 3-5 questions that can be answered based on this content\n\
             \n\
             Document content:\n\
             {truncated}\n\
             \n\
             Please format your response as JSON with the following structure:\n\
             {{\n\
             \x20   \"summary\": \"Brief summary here\",\n\
             \x20   \"key_insights\": [\"insight 1\", \"insight 2\", \"insight 3\"],\n\
             \x20   \"questions_answered\": [\"question 1\", \"question 2\", \"question 3\"]\n\
             }}"
        )
    }

    /// Locate the JSON object embedded in the model's free-form response:
    /// slice from the first `{` to the last `}` and parse. If no delimiter
    /// pair exists, return the parse fallback; if the slice is not valid
    /// JSON for the three fields, the error routes the caller to the
    /// degraded fallback.
    fn parse_response(response_text: &str) -> AppResult<AnalysisFields> {
        let start = response_text.find('{');
        let end = response_text.rfind('}');

        match (start, end) {
            (Some(start), Some(end)) => {
                if start > end {
                    return Err(AppError::Parse(
                        "response delimiters out of order".to_string(),
                    ));
                }
                let json_str = &response_text[start..=end];
                serde_json::from_str(json_str).map_err(AppError::from)
            }
            _ => Ok(Self::parse_fallback()),
        }
    }

    /// Canned record used when the response carries no JSON object at all.
    fn parse_fallback() -> AnalysisFields {
        AnalysisFields {
            summary: "Document analysis completed".to_string(),
            key_insights: vec!["Content extracted successfully".to_string()],
            questions_answered: vec!["General questions about document content".to_string()],
        }
    }

    /// Canned record used when the model call or JSON parsing fails.
    fn degraded_fallback(document_type: DocumentType) -> AnalysisFields {
        AnalysisFields {
            summary: format!("Analysis completed for {} document", document_type),
            key_insights: vec![
                "Document processed successfully".to_string(),
                "Content extracted".to_string(),
            ],
            questions_answered: vec![
                "What is the main topic?".to_string(),
                "What are the key points?".to_string(),
            ],
        }
    }
}
