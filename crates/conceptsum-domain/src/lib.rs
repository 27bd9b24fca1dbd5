//! Conceptsum Domain Layer
//!
//! Value types shared by every stage of the concept-coverage summarizer.
//! The only required dependency is `uuid`; serde derives are behind the
//! optional `serde` feature so the configuration layer can persist them.
//!
//! ## Key Concepts
//!
//! - **Sentence**: a pre-segmented, pre-tokenized unit of a document,
//!   identified by its zero-based position
//! - **Concept**: a weighted textual feature (n-gram or skip-bigram)
//! - **ConceptTable**: dense arena assigning ids to concepts at first sight
//! - **RunId**: collision-free namespace for one summarization call
//! - **SummaryResult**: a summary string or an explicit "no solution"
//!
//! ## Architecture
//!
//! Pure data and trait definitions only. Concept extraction, model
//! construction and solver interop live in the other crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod concept;
pub mod run_id;
pub mod sentence;
pub mod summary;
pub mod traits;

// Re-exports for convenience
pub use concept::{ConceptId, ConceptTable, ExtractionMode, CONCEPT_SEPARATOR};
pub use run_id::RunId;
pub use sentence::{LengthUnit, Sentence, SentenceId};
pub use summary::{DocumentRecord, SummaryResult};
