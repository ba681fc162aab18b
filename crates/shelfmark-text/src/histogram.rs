//! Token frequency histograms and the distances between them
//!
//! Title similarity and language detection share this code: they differ only
//! in the [`Tokenizer`] used to build the histogram and in the
//! [`Normalization`] applied to the final distance.

use std::collections::btree_map::{self, BTreeMap};
use std::collections::BTreeSet;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::tokenize::{normalize, Tokenizer};

/// Tokens excluded from a histogram before counting.
///
/// Stopwords are stored normalized, so `"The"` excludes the token `the`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut words = HashSet::new();
        for word in iter {
            let tokens = normalize(word.as_ref());
            if tokens.is_empty() {
                tracing::warn!(
                    "Ignoring stopword {:?}: nothing left after normalization",
                    word.as_ref()
                );
            }
            words.extend(tokens);
        }
        Self { words }
    }
}

impl From<Vec<String>> for StopwordSet {
    fn from(words: Vec<String>) -> Self {
        words.into_iter().collect()
    }
}

impl From<StopwordSet> for Vec<String> {
    fn from(set: StopwordSet) -> Self {
        let mut words: Vec<String> = set.words.into_iter().collect();
        words.sort();
        words
    }
}

/// How to scale the L1 distance between two histograms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    /// Half the L1 distance; ranges over [0, 1]
    TotalVariation,
    /// The raw L1 distance; ranges over [0, 2]
    Unnormalized,
}

impl Normalization {
    /// Distance between two histograms with disjoint supports
    pub fn max_distance(self) -> f64 {
        match self {
            Self::TotalVariation => 1.0,
            Self::Unnormalized => 2.0,
        }
    }

    fn apply(self, l1: f64) -> f64 {
        match self {
            Self::TotalVariation => l1 / 2.0,
            Self::Unnormalized => l1,
        }
    }
}

/// A probability distribution over tokens.
///
/// Probabilities sum to 1 unless the histogram is empty. Tokens that never
/// occurred are absent rather than mapped to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Histogram {
    frequencies: BTreeMap<String, f64>,
    total: usize,
}

impl Histogram {
    /// Count tokens across every string in `corpus` and normalize the counts
    /// by the combined total.
    pub fn build<S, T>(corpus: &[S], tokenizer: &T, stopwords: &StopwordSet) -> Self
    where
        S: AsRef<str>,
        T: Tokenizer + ?Sized,
    {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut total = 0usize;

        for text in corpus {
            for token in tokenizer.tokenize(text.as_ref()) {
                if stopwords.contains(&token) {
                    continue;
                }
                *counts.entry(token).or_insert(0) += 1;
                total += 1;
            }
        }

        let frequencies = counts
            .into_iter()
            .map(|(token, count)| (token, count as f64 / total as f64))
            .collect();

        Self { frequencies, total }
    }

    /// Probability of `token`; zero when it never occurred
    pub fn get(&self, token: &str) -> f64 {
        self.frequencies.get(token).copied().unwrap_or(0.0)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Number of tokens counted, stopwords excluded
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Tokens and their probabilities in token order
    pub fn iter(&self) -> btree_map::Iter<'_, String, f64> {
        self.frequencies.iter()
    }

    /// The `n` most frequent tokens, most frequent first. Ties keep token order.
    pub fn most_common(&self, n: usize) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .frequencies
            .iter()
            .map(|(token, p)| (token.as_str(), *p))
            .collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries.truncate(n);
        entries
    }

    /// L1 distance to `other`, scaled by `normalization`.
    ///
    /// Both sides walk the token union in the same sorted order, so
    /// `a.distance(b, n) == b.distance(a, n)` exactly. An empty histogram is
    /// at distance zero from another empty one and at maximum distance from
    /// anything else.
    pub fn distance(&self, other: &Histogram, normalization: Normalization) -> f64 {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => return 0.0,
            (true, false) | (false, true) => return normalization.max_distance(),
            (false, false) => {}
        }

        let tokens: BTreeSet<&String> = self
            .frequencies
            .keys()
            .chain(other.frequencies.keys())
            .collect();

        let l1: f64 = tokens
            .into_iter()
            .map(|token| (self.get(token) - other.get(token)).abs())
            .sum();

        // Rounding can push a disjoint pair a hair past the maximum
        normalization.apply(l1).min(normalization.max_distance())
    }
}
