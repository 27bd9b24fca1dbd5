//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while configuring concept extraction
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractorError {
    /// Invalid extraction mode selection
    #[error("Configuration error: {0}")]
    Config(String),
}
