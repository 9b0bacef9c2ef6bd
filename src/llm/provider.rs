use crate::types::{AppResult, LLMRequest, LLMResponse};
use async_trait::async_trait;

#[async_trait]
pub trait LLMAdapter: Send + Sync {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse>;
}

/// Configuration for an LLM provider
pub struct LLMProviderConfig {
    pub name: String,
    pub api_key: String,
}

pub struct LLM {
    adapter: Box<dyn LLMAdapter>,
    provider_name: String,
}

impl LLM {
    pub fn new(provider: LLMProviderConfig) -> AppResult<Self> {
        let adapter: Box<dyn LLMAdapter> = match provider.name.as_str() {
            "google" => Box::new(crate::llm::google::GoogleAdapter::new(&provider.api_key)),
            other => {
                return Err(crate::types::AppError::InvalidRequest(format!(
                    "Unsupported provider: {}",
                    other
                )))
            }
        };

        Ok(Self {
            adapter,
            provider_name: provider.name,
        })
    }

    /// Wrap an already-constructed adapter. Used by tests to drive the
    /// analysis path with a stub model.
    pub fn with_adapter(adapter: Box<dyn LLMAdapter>, provider_name: impl Into<String>) -> Self {
        Self {
            adapter,
            provider_name: provider_name.into(),
        }
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
        self.adapter.create_chat_completion(request).await
    }
}
