//! Error types for the Decoder

use conceptsum_extractor::ExtractorError;
use conceptsum_ilp::SolverError;
use thiserror::Error;

/// Errors that can occur while summarizing one document
///
/// All of them are local to the document; batch callers substitute or skip
/// and carry on with the next one.
#[derive(Error, Debug)]
pub enum SummarizationError {
    /// Invalid configuration or arguments
    #[error("Configuration error: {0}")]
    Config(String),

    /// Concept extraction could not be configured
    #[error("Extractor error: {0}")]
    Extractor(#[from] ExtractorError),

    /// The solver stage failed
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    /// The solver returned a selection exceeding the budget
    #[error("Solver selection of length {total} exceeds budget {budget}")]
    InfeasibleSolution {
        /// Total length of the returned selection
        total: u64,
        /// Configured budget
        budget: u64,
    },
}

impl SummarizationError {
    /// Whether the failure is a configuration problem (fatal, not retried)
    pub fn is_config(&self) -> bool {
        matches!(self, SummarizationError::Config(_) | SummarizationError::Extractor(_))
    }
}
