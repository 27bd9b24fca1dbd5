//! Document-level tests for concept extraction

#[cfg(test)]
mod tests {
    use crate::{ConceptExtractor, CoverageIndex};
    use conceptsum_domain::{ExtractionMode, LengthUnit, Sentence, SentenceId};
    use proptest::prelude::*;

    fn document(texts: &[&str]) -> Vec<Sentence> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| {
                Sentence::new(
                    SentenceId::new(i),
                    *text,
                    text.split_whitespace().map(String::from).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_weights_are_document_frequency() {
        let sentences = document(&[
            "the cat sat on the mat",
            "the cat ran",
            "a dog sat on the mat",
        ]);
        let inventory = ConceptExtractor::new(ExtractionMode::Bigrams).extract(sentences);
        let weight = |key: &str| inventory.concepts.weight(inventory.concepts.id_of(key).unwrap());

        assert_eq!(weight("the_cat"), 2);
        assert_eq!(weight("on_the"), 2);
        assert_eq!(weight("the_mat"), 2);
        assert_eq!(weight("a_dog"), 1);
    }

    #[test]
    fn test_index_agrees_with_weights() {
        let sentences = document(&["x y z", "y z w", "z w"]);
        let inventory = ConceptExtractor::new(ExtractionMode::SkipBigrams).extract(sentences);
        let index = inventory.coverage_index();

        for (id, _, weight) in inventory.concepts.iter() {
            assert_eq!(index.referencing(id).len(), weight as usize);
        }
    }

    #[test]
    fn test_extraction_keeps_order_and_text() {
        let sentences = document(&["first one", "second one"]);
        let inventory = ConceptExtractor::new(ExtractionMode::Unigrams).extract(sentences);

        assert_eq!(inventory.sentences[0].id(), SentenceId::new(0));
        assert_eq!(inventory.sentences[1].text(), "second one");
        assert_eq!(inventory.sentences[1].length(LengthUnit::Tokens), 2);
    }

    fn mode_strategy() -> impl Strategy<Value = ExtractionMode> {
        prop_oneof![
            Just(ExtractionMode::Unigrams),
            Just(ExtractionMode::Bigrams),
            Just(ExtractionMode::Trigrams),
            Just(ExtractionMode::FourGrams),
            Just(ExtractionMode::SkipBigrams),
        ]
    }

    proptest! {
        /// Property: every concept in the table has at least one referencing sentence
        #[test]
        fn test_no_dead_concepts(
            texts in prop::collection::vec("[abc]( [abc]){0,6}", 0..8),
            mode in mode_strategy(),
        ) {
            let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
            let inventory = ConceptExtractor::new(mode).extract(document(&refs));
            let index = CoverageIndex::build(&inventory.sentences);

            prop_assert_eq!(index.len(), inventory.concepts.len());
            for (id, _, weight) in inventory.concepts.iter() {
                prop_assert!(weight > 0);
                prop_assert!(index.is_eligible(id));
            }
        }

        /// Property: weight never exceeds the number of sentences
        #[test]
        fn test_weight_bounded_by_sentence_count(
            texts in prop::collection::vec("[ab]( [ab]){0,5}", 1..6),
        ) {
            let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
            let inventory = ConceptExtractor::new(ExtractionMode::Unigrams).extract(document(&refs));
            for (_, _, weight) in inventory.concepts.iter() {
                prop_assert!(weight as usize <= texts.len());
            }
        }
    }
}
