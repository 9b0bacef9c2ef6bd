//! Document text extractors
//!
//! One module per supported document type. Each extractor takes a path to an
//! already-saved file and returns plain text. Extraction failures are
//! swallowed locally and rendered as a human-readable error string, so the
//! result is always usable as prompt content.

pub mod csv;
pub mod docx;
pub mod image;
pub mod pdf;
pub mod txt;
