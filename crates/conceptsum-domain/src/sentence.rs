//! Sentence module - the unit of selection for extractive summaries

use crate::concept::ConceptId;
use std::fmt;

/// Zero-based position of a sentence within its document
///
/// Order-significant and never reused within one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SentenceId(usize);

impl SentenceId {
    /// Create a sentence id from its document position
    pub fn new(position: usize) -> Self {
        Self(position)
    }

    /// Get the document position
    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Display for SentenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unit in which sentence lengths and the summary budget are measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LengthUnit {
    /// Number of characters in the raw sentence text
    Characters,
    /// Number of tokens produced by the tokenizer
    #[default]
    Tokens,
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthUnit::Characters => write!(f, "characters"),
            LengthUnit::Tokens => write!(f, "tokens"),
        }
    }
}

/// A sentence of a document
///
/// Created once during segmentation. Its concept set is attached exactly
/// once by the concept extractor through [`Sentence::with_concepts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    id: SentenceId,
    text: String,
    tokens: Vec<String>,
    concepts: Vec<ConceptId>,
}

impl Sentence {
    /// Create a sentence with no concepts assigned yet
    pub fn new(id: SentenceId, text: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            id,
            text: text.into(),
            tokens,
            concepts: Vec::new(),
        }
    }

    /// Attach the sentence's concept set
    ///
    /// The ids are sorted and deduplicated, so a concept that occurs twice
    /// in one sentence is recorded once.
    pub fn with_concepts(mut self, mut concepts: Vec<ConceptId>) -> Self {
        concepts.sort_unstable();
        concepts.dedup();
        self.concepts = concepts;
        self
    }

    /// Position in the document
    pub fn id(&self) -> SentenceId {
        self.id
    }

    /// Raw sentence text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Token sequence
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Normalized text: tokens joined by single spaces
    pub fn normalized(&self) -> String {
        self.tokens.join(" ")
    }

    /// Length of the sentence in the given unit
    pub fn length(&self, unit: LengthUnit) -> u64 {
        match unit {
            LengthUnit::Characters => self.text.chars().count() as u64,
            LengthUnit::Tokens => self.tokens.len() as u64,
        }
    }

    /// Concept ids contained in this sentence, ascending
    pub fn concepts(&self) -> &[ConceptId] {
        &self.concepts
    }

    /// Whether the sentence carries at least one concept
    pub fn has_concepts(&self) -> bool {
        !self.concepts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_sentence_lengths() {
        let sentence = Sentence::new(SentenceId::new(0), "Hej, verden!", tokens("Hej , verden !"));
        assert_eq!(sentence.length(LengthUnit::Characters), 12);
        assert_eq!(sentence.length(LengthUnit::Tokens), 4);
    }

    #[test]
    fn test_character_length_counts_chars_not_bytes() {
        let sentence = Sentence::new(SentenceId::new(0), "æøå", tokens("æøå"));
        assert_eq!(sentence.length(LengthUnit::Characters), 3);
    }

    #[test]
    fn test_normalized_text() {
        let sentence = Sentence::new(SentenceId::new(3), "A cat, sat.", tokens("A cat , sat ."));
        assert_eq!(sentence.normalized(), "A cat , sat .");
        assert_eq!(sentence.id().value(), 3);
    }

    #[test]
    fn test_concepts_deduplicated() {
        let sentence = Sentence::new(SentenceId::new(0), "a a b", tokens("a a b")).with_concepts(vec![
            ConceptId::new(2),
            ConceptId::new(0),
            ConceptId::new(2),
        ]);
        assert_eq!(sentence.concepts(), &[ConceptId::new(0), ConceptId::new(2)]);
        assert!(sentence.has_concepts());
    }

    #[test]
    fn test_sentence_id_ordering() {
        assert!(SentenceId::new(1) < SentenceId::new(2));
        assert_eq!(SentenceId::new(7).to_string(), "7");
    }
}
