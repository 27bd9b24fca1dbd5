//! N-gram and skip-bigram generation over token sequences

use conceptsum_domain::{ExtractionMode, CONCEPT_SEPARATOR};

/// Contiguous n-grams of order `n`, joined by [`CONCEPT_SEPARATOR`]
///
/// A sequence of `N` tokens yields `N - n + 1` windows. Order 1 returns the
/// tokens unchanged; a sequence shorter than `n` yields nothing.
pub fn ngrams(tokens: &[String], n: usize) -> Vec<String> {
    if n == 1 {
        return tokens.to_vec();
    }
    if n == 0 || tokens.len() < n {
        return Vec::new();
    }
    tokens.windows(n).map(|window| window.join(CONCEPT_SEPARATOR)).collect()
}

/// Skip-bigrams with gap at most [`ExtractionMode::MAX_SKIP`], followed by all unigrams
///
/// Emits every ordered pair `(i, j)` with `i < j < min(i + 5, N)`.
pub fn skip_bigrams_with_unigrams(tokens: &[String]) -> Vec<String> {
    let n = tokens.len();
    let mut grams = Vec::new();

    for i in 0..n {
        let end = (i + ExtractionMode::MAX_SKIP + 1).min(n);
        for j in (i + 1)..end {
            grams.push(format!("{}{}{}", tokens[i], CONCEPT_SEPARATOR, tokens[j]));
        }
    }

    grams.extend(tokens.iter().cloned());
    grams
}
