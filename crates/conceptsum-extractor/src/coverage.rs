//! Coverage index: concept id → sentences containing it

use conceptsum_domain::{ConceptId, Sentence, SentenceId};
use std::collections::BTreeMap;

/// Inverted index from concepts to the sentences that contain them
///
/// Built once per document and read-only afterwards. Only concepts with at
/// least one referencing sentence are present, which makes the index the
/// authority on which concepts are eligible for the objective.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageIndex {
    entries: BTreeMap<ConceptId, Vec<SentenceId>>,
}

impl CoverageIndex {
    /// Build the index from sentences with assigned concepts
    pub fn build(sentences: &[Sentence]) -> Self {
        let mut entries: BTreeMap<ConceptId, Vec<SentenceId>> = BTreeMap::new();
        for sentence in sentences {
            for &concept in sentence.concepts() {
                entries.entry(concept).or_default().push(sentence.id());
            }
        }
        for referencing in entries.values_mut() {
            referencing.sort_unstable();
            referencing.dedup();
        }
        Self { entries }
    }

    /// Sentences containing a concept (empty for ineligible concepts)
    pub fn referencing(&self, concept: ConceptId) -> &[SentenceId] {
        self.entries.get(&concept).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a concept has at least one referencing sentence
    pub fn is_eligible(&self, concept: ConceptId) -> bool {
        self.entries.contains_key(&concept)
    }

    /// Iterate eligible concepts with their referencing sentences, by id
    pub fn iter(&self) -> impl Iterator<Item = (ConceptId, &[SentenceId])> + '_ {
        self.entries.iter().map(|(&id, sentences)| (id, sentences.as_slice()))
    }

    /// Number of eligible concepts
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no concept is eligible
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(position: usize, concepts: &[usize]) -> Sentence {
        Sentence::new(SentenceId::new(position), "", Vec::new())
            .with_concepts(concepts.iter().map(|&c| ConceptId::new(c)).collect())
    }

    #[test]
    fn test_index_inverts_concept_sets() {
        let sentences = vec![sentence(0, &[0, 1]), sentence(1, &[1]), sentence(2, &[2])];
        let index = CoverageIndex::build(&sentences);

        assert_eq!(index.len(), 3);
        assert_eq!(index.referencing(ConceptId::new(1)), &[SentenceId::new(0), SentenceId::new(1)]);
        assert_eq!(index.referencing(ConceptId::new(2)), &[SentenceId::new(2)]);
    }

    #[test]
    fn test_unreferenced_concept_is_ineligible() {
        let index = CoverageIndex::build(&[sentence(0, &[0])]);
        assert!(index.is_eligible(ConceptId::new(0)));
        assert!(!index.is_eligible(ConceptId::new(5)));
        assert!(index.referencing(ConceptId::new(5)).is_empty());
    }

    #[test]
    fn test_empty_index() {
        let index = CoverageIndex::build(&[sentence(0, &[])]);
        assert!(index.is_empty());
    }
}
