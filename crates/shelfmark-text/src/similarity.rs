//! Title and author similarity for catalog deduplication
//!
//! Each side of a comparison is reduced to a word-frequency histogram and the
//! two histograms are compared with total variation distance. Word order,
//! casing and punctuation never matter; how often a word appears across all
//! the variant titles of a work does.

use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;
use crate::histogram::{Histogram, Normalization, StopwordSet};
use crate::tokenize::WordTokenizer;

/// An author as described by one catalog: a primary name plus any aliases
/// the source declares (pen names, transliterations, "Last, First" forms).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Contributor {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Contributor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
        }
    }

    /// Builder method to add an alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// How confident a caller may be that two titles name the same work.
///
/// The cut points are fixed; downstream merge rules depend on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum MatchConfidence {
    NoMatch,
    Low,
    Medium,
    High,
    Identical,
}

impl MatchConfidence {
    /// Classify a similarity score in [0, 1]
    pub fn from_score(score: f64) -> Self {
        if score >= 1.0 {
            Self::Identical
        } else if score >= 0.8 {
            Self::High
        } else if score >= 0.5 {
            Self::Medium
        } else if score >= 0.25 {
            Self::Low
        } else {
            Self::NoMatch
        }
    }

    /// Lowest score that earns this band
    pub fn threshold(&self) -> f64 {
        match self {
            Self::Identical => 1.0,
            Self::High => 0.8,
            Self::Medium => 0.5,
            Self::Low => 0.25,
            Self::NoMatch => 0.0,
        }
    }
}

fn word_histogram<S: AsRef<str>>(corpus: &[S], stopwords: &StopwordSet) -> Histogram {
    Histogram::build(corpus, &WordTokenizer, stopwords)
}

/// Similarity of two single titles, in [0, 1].
///
/// ```
/// use shelfmark_text::title_similarity;
/// assert_eq!(title_similarity("foo bar", "bar, foo"), 1.0);
/// assert_eq!(title_similarity("foo", "bar"), 0.0);
/// ```
pub fn title_similarity(title_a: &str, title_b: &str) -> f64 {
    1.0 - histogram_distance(&[title_a], &[title_b], None)
}

/// Distance in [0, 1] between two lists of titles.
///
/// Each list is pooled into one histogram, so a word repeated across many
/// variant titles dominates that side's distribution.
pub fn histogram_distance<A, B>(
    titles_a: &[A],
    titles_b: &[B],
    stopwords: Option<&StopwordSet>,
) -> f64
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let none = StopwordSet::new();
    let stopwords = stopwords.unwrap_or(&none);
    let distance = word_histogram(titles_a, stopwords)
        .distance(&word_histogram(titles_b, stopwords), Normalization::TotalVariation);

    tracing::trace!(
        "Title histogram distance {:.4} ({} vs {} titles)",
        distance,
        titles_a.len(),
        titles_b.len()
    );
    distance
}

/// Similarity of two author lists, in [0, 1].
///
/// Every name and alias on a side feeds that side's histogram. Two empty
/// lists are identical.
pub fn author_similarity(authors_a: &[Contributor], authors_b: &[Contributor]) -> f64 {
    if authors_a.is_empty() && authors_b.is_empty() {
        return 1.0;
    }

    let names_a: Vec<&str> = authors_a.iter().flat_map(|author| author.names()).collect();
    let names_b: Vec<&str> = authors_b.iter().flat_map(|author| author.names()).collect();
    let similarity = 1.0 - histogram_distance(&names_a, &names_b, None);

    tracing::trace!(
        "Author similarity {:.4} ({} vs {} names)",
        similarity,
        names_a.len(),
        names_b.len()
    );
    similarity
}

/// Title comparison with a configured stopword list
#[derive(Debug, Clone, Default)]
pub struct MetadataSimilarity {
    stopwords: StopwordSet,
}

impl MetadataSimilarity {
    pub fn new(stopwords: StopwordSet) -> Self {
        Self { stopwords }
    }

    pub fn from_config(config: &MatchConfig) -> Self {
        Self::new(config.titles.stopwords.clone())
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn title_distance<A, B>(&self, titles_a: &[A], titles_b: &[B]) -> f64
    where
        A: AsRef<str>,
        B: AsRef<str>,
    {
        histogram_distance(titles_a, titles_b, Some(&self.stopwords))
    }

    pub fn titles_similarity<A, B>(&self, titles_a: &[A], titles_b: &[B]) -> f64
    where
        A: AsRef<str>,
        B: AsRef<str>,
    {
        1.0 - self.title_distance(titles_a, titles_b)
    }

    /// Band the similarity of two title lists
    pub fn classify_titles<A, B>(&self, titles_a: &[A], titles_b: &[B]) -> MatchConfidence
    where
        A: AsRef<str>,
        B: AsRef<str>,
    {
        MatchConfidence::from_score(self.titles_similarity(titles_a, titles_b))
    }
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn title_similarity_ffi(title_a: String, title_b: String) -> f64 {
    title_similarity(&title_a, &title_b)
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn histogram_distance_ffi(
    titles_a: Vec<String>,
    titles_b: Vec<String>,
    stopwords: Vec<String>,
) -> f64 {
    let stopwords: StopwordSet = stopwords.into_iter().collect();
    histogram_distance(&titles_a, &titles_b, Some(&stopwords))
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn author_similarity_ffi(authors_a: Vec<Contributor>, authors_b: Vec<Contributor>) -> f64 {
    author_similarity(&authors_a, &authors_b)
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn match_confidence_ffi(score: f64) -> MatchConfidence {
    MatchConfidence::from_score(score)
}
