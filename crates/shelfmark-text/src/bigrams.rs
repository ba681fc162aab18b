//! English screening with character bigram frequencies
//!
//! A text sample is reduced to the frequency distribution of its overlapping
//! character pairs and compared with the distribution of a reference English
//! corpus. The comparison is the raw L1 distance, in [0, 2]: English prose
//! lands below 1.0, other languages written in Latin script land above it.
//! Short samples are noisy. A one-line fragment holds too few bigrams to
//! approach any reference distribution and routinely lands above 1.0; a
//! blurb of a few sentences is reliable.

use lazy_static::lazy_static;

use crate::error::{Result, TextError};
use crate::histogram::{Histogram, Normalization, StopwordSet};
use crate::tokenize::BigramTokenizer;

/// Reference corpus, one paragraph per line
const ENGLISH_SAMPLE: &str = include_str!("english_sample.txt");

/// Reference models built from fewer bigrams than this get a warning
const MIN_REFERENCE_BIGRAMS: usize = 500;

/// Samples at or above this difference are not English
pub const DEFAULT_ENGLISH_THRESHOLD: f64 = 1.0;

lazy_static! {
    static ref ENGLISH_BIGRAMS: BigramModel = {
        let paragraphs: Vec<&str> = ENGLISH_SAMPLE
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();
        let model = BigramModel::reference(&paragraphs)
            .expect("bundled English sample contains letter bigrams");
        tracing::debug!(
            "Built English reference model: {} distinct bigrams from {} paragraphs",
            model.len(),
            paragraphs.len()
        );
        model
    };
}

/// The process-wide English reference model
pub fn english_bigrams() -> &'static BigramModel {
    &ENGLISH_BIGRAMS
}

/// Bigram frequency distribution of a text sample
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BigramModel {
    histogram: Histogram,
}

impl BigramModel {
    pub fn from_text(text: &str) -> Self {
        Self::from_corpus(&[text])
    }

    /// Pool bigrams from several texts into one distribution
    pub fn from_corpus<S: AsRef<str>>(texts: &[S]) -> Self {
        Self {
            histogram: Histogram::build(texts, &BigramTokenizer, &StopwordSet::new()),
        }
    }

    /// Build a model meant to serve as a reference for other samples.
    ///
    /// Fails when the corpus yields no bigrams at all, since every sample
    /// would then sit at the maximum difference from it.
    pub fn reference<S: AsRef<str>>(texts: &[S]) -> Result<Self> {
        let model = Self::from_corpus(texts);
        if model.is_empty() {
            return Err(TextError::InvalidInput(
                "reference corpus contains no letter bigrams".to_string(),
            ));
        }

        let bigram_count = model.histogram.total();
        if bigram_count < MIN_REFERENCE_BIGRAMS {
            tracing::warn!(
                "Reference model built from only {} bigrams; differences will be noisy",
                bigram_count
            );
        }

        Ok(model)
    }

    /// Raw L1 distance to `reference`, in [0, 2]. Symmetric.
    pub fn difference_from(&self, reference: &BigramModel) -> f64 {
        self.histogram
            .distance(&reference.histogram, Normalization::Unnormalized)
    }

    /// Probability of one bigram
    pub fn frequency(&self, bigram: &str) -> f64 {
        self.histogram.get(bigram)
    }

    /// Number of distinct bigrams
    pub fn len(&self) -> usize {
        self.histogram.len()
    }

    pub fn is_empty(&self) -> bool {
        self.histogram.is_empty()
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }
}

/// Decides whether text is English by comparing it with a reference model
#[derive(Debug, Clone, Copy)]
pub struct EnglishDetector<'a> {
    reference: &'a BigramModel,
    threshold: f64,
}

impl Default for EnglishDetector<'static> {
    fn default() -> Self {
        Self::with_reference(english_bigrams())
    }
}

impl<'a> EnglishDetector<'a> {
    pub fn with_reference(reference: &'a BigramModel) -> Self {
        Self {
            reference,
            threshold: DEFAULT_ENGLISH_THRESHOLD,
        }
    }

    /// Override the difference at which text stops counting as English
    pub fn with_threshold(mut self, threshold: f64) -> Result<Self> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(TextError::InvalidInput(format!(
                "English threshold must be a positive number, got {}",
                threshold
            )));
        }
        self.threshold = threshold;
        Ok(self)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Difference between `text` and the reference model
    pub fn difference(&self, text: &str) -> f64 {
        let difference = BigramModel::from_text(text).difference_from(self.reference);
        tracing::trace!("Bigram difference from reference: {:.4}", difference);
        difference
    }

    pub fn is_english(&self, text: &str) -> bool {
        self.difference(text) < self.threshold
    }
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn english_difference_ffi(text: String) -> f64 {
    BigramModel::from_text(&text).difference_from(english_bigrams())
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn is_english_ffi(text: String) -> bool {
    EnglishDetector::default().is_english(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_model_is_a_distribution() {
        let model = english_bigrams();
        assert!(model.len() > 200);
        let total: f64 = model.histogram().iter().map(|(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(model.histogram().total() >= MIN_REFERENCE_BIGRAMS);
        // "th" is the commonest English letter pair
        assert!(model.frequency("th") > model.frequency("qu"));
        assert_eq!(model.histogram().most_common(1)[0].0, "e ");
        // Only single spaces survive; line breaks never reach the model
        assert!(model
            .histogram()
            .iter()
            .all(|(bigram, _)| bigram.chars().all(|c| c == ' ' || !c.is_whitespace())));
        assert_eq!(model.frequency("  "), 0.0);
    }

    #[test]
    fn test_corpus_texts_are_not_joined() {
        let model = BigramModel::from_corpus(&["ab", "cd"]);
        assert_eq!(model.len(), 2);
        assert_eq!(model.histogram().total(), 2);
        assert_eq!(model.frequency("bc"), 0.0);
        assert_eq!(model.frequency("b "), 0.0);
    }

    #[test]
    fn test_self_difference_is_zero() {
        assert_eq!(english_bigrams().difference_from(english_bigrams()), 0.0);
    }

    #[test]
    fn test_empty_sample_is_maximally_different() {
        let empty = BigramModel::from_text("1234 !!");
        assert!(empty.is_empty());
        assert_eq!(empty.difference_from(english_bigrams()), 2.0);
        assert!(!EnglishDetector::default().is_english(""));
    }

    #[test]
    fn test_reference_rejects_corpus_without_bigrams() {
        assert!(matches!(
            BigramModel::reference(&["", "7"]),
            Err(TextError::InvalidInput(_))
        ));
        assert!(BigramModel::reference(&["tiny but valid"]).is_ok());
    }

    #[test]
    fn test_substitute_reference() {
        let reference = BigramModel::from_text("aaaa");
        let detector = EnglishDetector::with_reference(&reference);
        assert_eq!(detector.difference("aaaaaa"), 0.0);
        assert!(detector.is_english("aaa"));
        assert!(!detector.is_english("bbb"));
    }

    #[test]
    fn test_threshold_validation() {
        let detector = EnglishDetector::default();
        assert!(detector.with_threshold(0.0).is_err());
        assert!(detector.with_threshold(f64::NAN).is_err());
        assert_eq!(detector.with_threshold(1.2).unwrap().threshold(), 1.2);
    }
}
