use anyhow::Result;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub llm: LlmConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    pub google_api_key: String,
    pub model: String,
    pub temperature: f32,
    /// Hard character cutoff applied to extracted text before it is embedded
    /// in the analysis prompt.
    pub max_prompt_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub uploads_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            llm: LlmConfig {
                google_api_key: env::var("GOOGLE_API_KEY").unwrap_or_default(),
                model: env::var("DOCSIGHT_MODEL")
                    .unwrap_or_else(|_| "gemini-2.0-flash-exp".to_string()),
                temperature: env::var("DOCSIGHT_TEMPERATURE")
                    .unwrap_or_else(|_| "0.3".to_string())
                    .parse()?,
                max_prompt_chars: env::var("DOCSIGHT_MAX_PROMPT_CHARS")
                    .unwrap_or_else(|_| "4000".to_string())
                    .parse()?,
            },
            storage: StorageConfig {
                uploads_dir: env::var("DOCSIGHT_UPLOADS_DIR")
                    .unwrap_or_else(|_| "uploads".to_string()),
            },
        })
    }
}
