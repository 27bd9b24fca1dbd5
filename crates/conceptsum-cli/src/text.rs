//! Simple text segmentation for command-line use.
//!
//! The summarizer takes sentence boundaries and tokens as given. These
//! splitters are deliberately plain: terminal punctuation followed by
//! whitespace ends a sentence, and a blank line always does.

use conceptsum_domain::traits::{SentenceSplitter, Tokenizer};

/// Splits on `.`, `!` and `?` followed by whitespace, and on blank lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationSplitter;

/// Splits on whitespace and peels punctuation off word edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '»' | '”' | '’')
}

/// Push `current` with whitespace collapsed, unless it is blank.
fn flush(sentences: &mut Vec<String>, current: &mut String) {
    let sentence = current.split_whitespace().collect::<Vec<_>>().join(" ");
    if !sentence.is_empty() {
        sentences.push(sentence);
    }
    current.clear();
}

impl SentenceSplitter for PunctuationSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '\n' && chars.peek() == Some(&'\n') {
                flush(&mut sentences, &mut current);
                continue;
            }

            current.push(c);
            if !is_terminator(c) {
                continue;
            }

            // "?!", "..." and closing quotes stay with the sentence they end
            while let Some(&next) = chars.peek() {
                if is_terminator(next) || is_closing(next) {
                    current.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            if chars.peek().map_or(true, |next| next.is_whitespace()) {
                flush(&mut sentences, &mut current);
            }
        }

        flush(&mut sentences, &mut current);
        sentences
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, sentence: &str) -> Vec<String> {
        let mut tokens = Vec::new();

        for word in sentence.split_whitespace() {
            let Some(start) = word.find(char::is_alphanumeric) else {
                tokens.push(word.to_string());
                continue;
            };
            let end = word
                .char_indices()
                .rev()
                .find(|(_, c)| c.is_alphanumeric())
                .map_or(word.len(), |(i, c)| i + c.len_utf8());

            tokens.extend(word[..start].chars().map(String::from));
            tokens.push(word[start..end].to_string());
            tokens.extend(word[end..].chars().map(String::from));
        }

        tokens
    }
}
