// Docsight - document extraction and LLM analysis core for AI research assistants

pub mod agents;
pub mod config;
pub mod extract;
pub mod llm;
pub mod models;
pub mod storage;
pub mod types;

// Re-exports for convenience
pub use agents::DocumentProcessor;
pub use config::Config;
pub use models::{DocumentAnalysis, DocumentType, FileUpload};
