//! Concept module - weighted textual features and their id arena

use std::collections::HashMap;
use std::fmt;

/// Separator placed between tokens of a multi-token concept key
pub const CONCEPT_SEPARATOR: &str = "_";

/// Dense concept identifier, assigned at first sight within one document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConceptId(usize);

impl ConceptId {
    /// Create a concept id from its arena slot
    pub fn new(slot: usize) -> Self {
        Self(slot)
    }

    /// Get the arena slot
    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Arena of concepts discovered in one document
///
/// Keys map to dense ids in discovery order; each id carries a document
/// frequency weight. Weights only grow through [`ConceptTable::record`],
/// so every concept present in the table is referenced by at least one
/// sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptTable {
    keys: Vec<String>,
    weights: Vec<u32>,
    lookup: HashMap<String, ConceptId>,
}

impl ConceptTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sentence containing `key`
    ///
    /// Assigns a fresh id on first sight and increments the document
    /// frequency. Callers deduplicate per sentence before recording.
    pub fn record(&mut self, key: &str) -> ConceptId {
        if let Some(&id) = self.lookup.get(key) {
            self.weights[id.0] += 1;
            return id;
        }
        let id = ConceptId(self.keys.len());
        self.keys.push(key.to_string());
        self.weights.push(1);
        self.lookup.insert(key.to_string(), id);
        id
    }

    /// Look up the id of a concept key
    pub fn id_of(&self, key: &str) -> Option<ConceptId> {
        self.lookup.get(key).copied()
    }

    /// Key of a concept
    pub fn key(&self, id: ConceptId) -> Option<&str> {
        self.keys.get(id.0).map(String::as_str)
    }

    /// Document frequency of a concept (0 for unknown ids)
    pub fn weight(&self, id: ConceptId) -> u32 {
        self.weights.get(id.0).copied().unwrap_or(0)
    }

    /// Number of distinct concepts
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no concept has been recorded
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate `(id, key, weight)` in id order
    pub fn iter(&self) -> impl Iterator<Item = (ConceptId, &str, u32)> + '_ {
        self.keys
            .iter()
            .zip(self.weights.iter())
            .enumerate()
            .map(|(slot, (key, &weight))| (ConceptId(slot), key.as_str(), weight))
    }
}

/// Which concept class to extract from each sentence
///
/// Exactly one mode is active per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExtractionMode {
    /// Single tokens (ROUGE-1 style)
    Unigrams,
    /// Contiguous token pairs (ROUGE-2 style)
    #[default]
    Bigrams,
    /// Contiguous token triples
    Trigrams,
    /// Contiguous windows of four tokens
    FourGrams,
    /// Skip-bigrams with a maximum gap of four tokens, plus all unigrams
    /// (ROUGE-SU4 style)
    #[cfg_attr(feature = "serde", serde(rename = "su4"))]
    SkipBigrams,
}

impl ExtractionMode {
    /// Maximum distance between the two tokens of a skip-bigram
    pub const MAX_SKIP: usize = 4;

    /// Select the mode from one boolean flag per class
    ///
    /// # Errors
    /// Returns error unless exactly one flag is set
    pub fn from_flags(
        unigrams: bool,
        bigrams: bool,
        trigrams: bool,
        fourgrams: bool,
        su4: bool,
    ) -> Result<Self, String> {
        let candidates = [
            (unigrams, ExtractionMode::Unigrams),
            (bigrams, ExtractionMode::Bigrams),
            (trigrams, ExtractionMode::Trigrams),
            (fourgrams, ExtractionMode::FourGrams),
            (su4, ExtractionMode::SkipBigrams),
        ];
        let mut selected = candidates.iter().filter(|(on, _)| *on).map(|(_, mode)| *mode);

        match (selected.next(), selected.next()) {
            (Some(mode), None) => Ok(mode),
            (None, _) => Err("no extraction mode selected".to_string()),
            (Some(_), Some(_)) => Err("more than one extraction mode selected".to_string()),
        }
    }

    /// N-gram order for contiguous modes, `None` for skip-bigrams
    pub fn order(&self) -> Option<usize> {
        match self {
            ExtractionMode::Unigrams => Some(1),
            ExtractionMode::Bigrams => Some(2),
            ExtractionMode::Trigrams => Some(3),
            ExtractionMode::FourGrams => Some(4),
            ExtractionMode::SkipBigrams => None,
        }
    }
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExtractionMode::Unigrams => "unigrams",
            ExtractionMode::Bigrams => "bigrams",
            ExtractionMode::Trigrams => "trigrams",
            ExtractionMode::FourGrams => "fourgrams",
            ExtractionMode::SkipBigrams => "su4",
        };
        write!(f, "{}", name)
    }
}
