//! Trait definitions for the text-processing collaborator
//!
//! Sentence boundaries and tokens are produced outside the summarizer.
//! Implementations live in other crates.

use crate::sentence::{Sentence, SentenceId};

/// Splits document text into sentences
pub trait SentenceSplitter {
    /// Split text into raw sentence strings, in document order
    fn split(&self, text: &str) -> Vec<String>;
}

/// Splits one sentence into tokens
pub trait Tokenizer {
    /// Tokenize a raw sentence
    fn tokenize(&self, sentence: &str) -> Vec<String>;
}

/// Segment a document into [`Sentence`] values with dense ids
///
/// Sentences that tokenize to nothing are dropped before ids are assigned.
pub fn segment_document<S, T>(text: &str, splitter: &S, tokenizer: &T) -> Vec<Sentence>
where
    S: SentenceSplitter + ?Sized,
    T: Tokenizer + ?Sized,
{
    splitter
        .split(text)
        .into_iter()
        .filter_map(|raw| {
            let tokens = tokenizer.tokenize(&raw);
            if tokens.is_empty() {
                None
            } else {
                Some((raw, tokens))
            }
        })
        .enumerate()
        .map(|(position, (raw, tokens))| Sentence::new(SentenceId::new(position), raw, tokens))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LineSplitter;

    impl SentenceSplitter for LineSplitter {
        fn split(&self, text: &str) -> Vec<String> {
            text.lines().map(String::from).collect()
        }
    }

    struct Whitespace;

    impl Tokenizer for Whitespace {
        fn tokenize(&self, sentence: &str) -> Vec<String> {
            sentence.split_whitespace().map(String::from).collect()
        }
    }

    #[test]
    fn test_segment_assigns_dense_ids() {
        let sentences = segment_document("one two\n\nthree", &LineSplitter, &Whitespace);
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].id(), SentenceId::new(0));
        assert_eq!(sentences[1].id(), SentenceId::new(1));
        assert_eq!(sentences[1].text(), "three");
    }
}
