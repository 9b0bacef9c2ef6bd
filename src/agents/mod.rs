// Agent modules

pub mod analyzer;
pub mod document;

pub use analyzer::{AnalysisFields, ContentAnalyzer};
pub use document::DocumentProcessor;
