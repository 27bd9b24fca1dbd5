//! Conceptsum Decoder
//!
//! Summarizes one document by selecting the sentences that cover the most
//! concept weight within a length budget.
//!
//! # Architecture
//!
//! ```text
//! Sentences → ConceptExtractor → CoverageIndex → ModelBuilder → Solver → Summary
//! ```
//!
//! A document without eligible concepts yields [`SummaryResult::NoSolution`]
//! without touching the solver. Solver failures surface as
//! [`SummarizationError`]; choosing a fallback is the caller's job.
//!
//! # Example Usage
//!
//! ```
//! use conceptsum_decoder::{Decoder, SummarizerConfig};
//! use conceptsum_domain::{ExtractionMode, Sentence, SentenceId, SummaryResult};
//! use conceptsum_ilp::MockSolver;
//!
//! let tokens = |s: &str| s.split_whitespace().map(String::from).collect::<Vec<_>>();
//! let sentences = vec![
//!     Sentence::new(SentenceId::new(0), "the cat sat", tokens("the cat sat")),
//!     Sentence::new(SentenceId::new(1), "a dog ran", tokens("a dog ran")),
//! ];
//!
//! let config = SummarizerConfig {
//!     mode: ExtractionMode::Unigrams,
//!     ..SummarizerConfig::default()
//! };
//! let decoder = Decoder::new(MockSolver::exhaustive(), config).unwrap();
//!
//! let summary = decoder.summarize(sentences, 3).unwrap();
//! assert_eq!(summary, SummaryResult::Summary("the cat sat".to_string()));
//! ```

#![warn(missing_docs)]

mod config;
mod decoder;
mod error;


pub use config::SummarizerConfig;
pub use conceptsum_domain::SummaryResult;
pub use decoder::{Decoder, SummaryReport};
pub use error::SummarizationError;
