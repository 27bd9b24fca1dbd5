//! Command implementations.

pub mod batch;
pub mod config;
pub mod model;
pub mod summarize;

pub use self::batch::{execute_batch, run_batch};
pub use self::config::execute_config;
pub use self::model::execute_model;
pub use self::summarize::execute_summarize;

use crate::error::Result;
use crate::text::{PunctuationSplitter, WhitespaceTokenizer};
use conceptsum_domain::traits::segment_document;
use conceptsum_domain::Sentence;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read a document from `path`, or from stdin when no path is given.
pub(crate) fn read_document(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Segment raw text with the built-in splitter and tokenizer.
pub(crate) fn segment(text: &str) -> Vec<Sentence> {
    segment_document(text, &PunctuationSplitter, &WhitespaceTokenizer)
}
