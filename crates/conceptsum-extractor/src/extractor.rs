//! Core concept extraction

use crate::coverage::CoverageIndex;
use crate::error::ExtractorError;
use crate::ngrams::{ngrams, skip_bigrams_with_unigrams};
use conceptsum_domain::{ConceptTable, ExtractionMode, Sentence};
use std::collections::HashSet;
use tracing::debug;

/// Sentences with their concept sets, plus the document's concept table
#[derive(Debug, Clone, Default)]
pub struct ConceptInventory {
    /// Sentences in document order, each with its concept set assigned
    pub sentences: Vec<Sentence>,

    /// Concepts discovered in the document with document-frequency weights
    pub concepts: ConceptTable,
}

impl ConceptInventory {
    /// Build the coverage index for these sentences
    pub fn coverage_index(&self) -> CoverageIndex {
        CoverageIndex::build(&self.sentences)
    }

    /// Number of sentences carrying at least one concept
    pub fn sentences_with_concepts(&self) -> usize {
        self.sentences.iter().filter(|s| s.has_concepts()).count()
    }
}

/// Extracts concepts of one class from tokenized sentences
#[derive(Debug, Clone, Copy)]
pub struct ConceptExtractor {
    mode: ExtractionMode,
}

impl ConceptExtractor {
    /// Create an extractor for the given mode
    pub fn new(mode: ExtractionMode) -> Self {
        Self { mode }
    }

    /// Create an extractor from one flag per concept class
    ///
    /// # Errors
    /// Returns [`ExtractorError::Config`] unless exactly one flag is set
    pub fn from_flags(
        unigrams: bool,
        bigrams: bool,
        trigrams: bool,
        fourgrams: bool,
        su4: bool,
    ) -> Result<Self, ExtractorError> {
        ExtractionMode::from_flags(unigrams, bigrams, trigrams, fourgrams, su4)
            .map(Self::new)
            .map_err(ExtractorError::Config)
    }

    /// Active extraction mode
    pub fn mode(&self) -> ExtractionMode {
        self.mode
    }

    /// Concept keys of one token sequence, with repeats
    pub fn concept_keys(&self, tokens: &[String]) -> Vec<String> {
        match self.mode.order() {
            Some(n) => ngrams(tokens, n),
            None => skip_bigrams_with_unigrams(tokens),
        }
    }

    /// Assign concept sets to sentences and weigh concepts by document frequency
    ///
    /// Concepts repeated within one sentence count once for that sentence.
    /// Ids are assigned in order of first occurrence.
    pub fn extract(&self, sentences: Vec<Sentence>) -> ConceptInventory {
        let mut concepts = ConceptTable::new();

        let sentences: Vec<Sentence> = sentences
            .into_iter()
            .map(|sentence| {
                let mut seen = HashSet::new();
                let ids = self
                    .concept_keys(sentence.tokens())
                    .into_iter()
                    .filter(|key| seen.insert(key.clone()))
                    .map(|key| concepts.record(&key))
                    .collect();
                sentence.with_concepts(ids)
            })
            .collect();

        debug!(
            "Extracted {} {} concepts from {} sentences",
            concepts.len(),
            self.mode,
            sentences.len()
        );

        ConceptInventory { sentences, concepts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conceptsum_domain::SentenceId;

    fn sentence(position: usize, text: &str) -> Sentence {
        Sentence::new(
            SentenceId::new(position),
            text,
            text.split_whitespace().map(String::from).collect(),
        )
    }

    #[test]
    fn test_repeated_concept_counts_once_per_sentence() {
        let extractor = ConceptExtractor::new(ExtractionMode::Unigrams);
        let inventory = extractor.extract(vec![sentence(0, "a a a"), sentence(1, "a b")]);

        let a = inventory.concepts.id_of("a").unwrap();
        let b = inventory.concepts.id_of("b").unwrap();
        assert_eq!(inventory.concepts.weight(a), 2);
        assert_eq!(inventory.concepts.weight(b), 1);
        assert_eq!(inventory.sentences[0].concepts(), &[a]);
    }

    #[test]
    fn test_ids_follow_first_occurrence() {
        let extractor = ConceptExtractor::new(ExtractionMode::Unigrams);
        let inventory = extractor.extract(vec![sentence(0, "z y"), sentence(1, "x z")]);

        let keys: Vec<_> = inventory.concepts.iter().map(|(_, key, _)| key.to_string()).collect();
        assert_eq!(keys, vec!["z", "y", "x"]);
    }

    #[test]
    fn test_short_sentence_has_no_bigrams() {
        let extractor = ConceptExtractor::new(ExtractionMode::Bigrams);
        let inventory = extractor.extract(vec![sentence(0, "alone"), sentence(1, "two words")]);

        assert!(!inventory.sentences[0].has_concepts());
        assert!(inventory.sentences[1].has_concepts());
        assert_eq!(inventory.sentences_with_concepts(), 1);
    }

    #[test]
    fn test_from_flags_rejects_invalid_selection() {
        assert!(ConceptExtractor::from_flags(false, false, false, false, false).is_err());
        assert!(ConceptExtractor::from_flags(true, false, false, false, true).is_err());
        let extractor = ConceptExtractor::from_flags(false, false, false, true, false).unwrap();
        assert_eq!(extractor.mode(), ExtractionMode::FourGrams);
    }

    #[test]
    fn test_su4_includes_unigrams() {
        let extractor = ConceptExtractor::new(ExtractionMode::SkipBigrams);
        let keys = extractor.concept_keys(&["a".to_string(), "b".to_string()]);
        assert_eq!(keys, vec!["a_b", "a", "b"]);
    }
}
