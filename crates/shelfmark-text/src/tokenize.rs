//! Tokenizers feeding the frequency histograms
//!
//! - [`WordTokenizer`]: case-folded alphanumeric words, used for titles and
//!   author names
//! - [`BigramTokenizer`]: overlapping two-character windows, used for
//!   language fingerprinting

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    /// A run of letters and digits. Everything else separates words.
    static ref WORD: Regex = Regex::new(r"[\p{Alphabetic}\p{Nd}\p{Nl}\p{No}]+").unwrap();
}

/// Turns one raw string into an ordered sequence of tokens
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Splits text into lowercase words.
///
/// Punctuation separates words rather than gluing them together, so
/// `"Moby-Dick"` and `"Moby Dick"` both become `["moby", "dick"]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        normalize(text)
    }
}

/// Emits every overlapping pair of characters after dropping everything
/// but letters and whitespace.
///
/// Word boundaries (`"e "`, `" t"`) contribute bigrams of their own. Every
/// whitespace run counts as one space, so line wrapping and double spacing
/// never change the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct BigramTokenizer;

impl Tokenizer for BigramTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        bigrams(text)
    }
}

/// Normalize a title or name into its word tokens.
///
/// NFC-normalizes, lowercases, and splits on anything that is not a letter
/// or digit.
///
/// ```
/// use shelfmark_text::normalize;
/// assert_eq!(normalize("Moby Dick; or, The Whale"), vec!["moby", "dick", "or", "the", "whale"]);
/// ```
pub fn normalize(text: &str) -> Vec<String> {
    let folded = fold(text);
    WORD.find_iter(&folded)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Split text into lowercase character bigrams.
///
/// Whitespace runs collapse to a single space and leading or trailing
/// whitespace is dropped. Produces `n - 1` tokens for `n` surviving
/// characters, and none for fewer than two.
pub fn bigrams(text: &str) -> Vec<String> {
    let letters: String = fold(text)
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect();
    let cleaned: Vec<char> = letters
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .collect();

    cleaned
        .windows(2)
        .map(|pair| pair.iter().collect())
        .collect()
}

fn fold(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}
