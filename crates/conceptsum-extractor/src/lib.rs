//! Conceptsum Extractor
//!
//! Turns tokenized sentences into weighted concepts.
//!
//! # Overview
//!
//! Every sentence contributes a set of concepts (contiguous n-grams or
//! skip-bigrams plus unigrams). A concept's weight is its document
//! frequency: the number of sentences containing it. The
//! [`CoverageIndex`] inverts the sentence → concepts relation so the model
//! builder can tie each concept to the sentences that cover it.
//!
//! # Architecture
//!
//! ```text
//! Sentences → ConceptExtractor → ConceptInventory → CoverageIndex → ModelBuilder
//! ```
//!
//! # Example Usage
//!
//! ```
//! use conceptsum_domain::{ExtractionMode, Sentence, SentenceId};
//! use conceptsum_extractor::{ConceptExtractor, CoverageIndex};
//!
//! let tokens = |s: &str| s.split_whitespace().map(String::from).collect::<Vec<_>>();
//! let sentences = vec![
//!     Sentence::new(SentenceId::new(0), "the cat sat", tokens("the cat sat")),
//!     Sentence::new(SentenceId::new(1), "the cat ran", tokens("the cat ran")),
//! ];
//!
//! let inventory = ConceptExtractor::new(ExtractionMode::Bigrams).extract(sentences);
//! let the_cat = inventory.concepts.id_of("the_cat").unwrap();
//! assert_eq!(inventory.concepts.weight(the_cat), 2);
//!
//! let index = CoverageIndex::build(&inventory.sentences);
//! assert_eq!(index.referencing(the_cat).len(), 2);
//! ```

#![warn(missing_docs)]

mod coverage;
mod error;
mod extractor;
mod ngrams;

#[cfg(test)]
mod tests;

pub use coverage::CoverageIndex;
pub use error::ExtractorError;
pub use extractor::{ConceptExtractor, ConceptInventory};
pub use ngrams::{ngrams, skip_bigrams_with_unigrams};
