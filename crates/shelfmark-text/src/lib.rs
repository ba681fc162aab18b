//! shelfmark-text: bibliographic text similarity and English screening.
//!
//! Catalog records for the same work arrive from different vendors with
//! different punctuation, word order and subtitle fragments. This crate
//! scores how alike two sets of titles or author names are, screens text
//! for English, builds title sort keys, and (via [`shelfmark_langcodes`])
//! normalizes language codes.
//!
//! - Titles/authors: word histograms compared by total variation distance
//!   ([`title_similarity`], [`histogram_distance`], [`author_similarity`])
//! - Language: character bigram histograms compared by L1 distance against
//!   a reference English model ([`BigramModel`], [`EnglishDetector`])
//! - Sort keys: [`sort_title_for`]
//!
//! Every operation is a pure function. The English reference model and the
//! language code registry are built once per process and only read after.

pub mod bigrams;
pub mod config;
pub mod error;
pub mod histogram;
pub mod similarity;
pub mod title;
pub mod tokenize;

pub use bigrams::{english_bigrams, BigramModel, EnglishDetector, DEFAULT_ENGLISH_THRESHOLD};
pub use config::{LanguageConfig, MatchConfig, TitleConfig};
pub use error::{Result, TextError};
pub use histogram::{Histogram, Normalization, StopwordSet};
pub use similarity::{
    author_similarity, histogram_distance, title_similarity, Contributor, MatchConfidence,
    MetadataSimilarity,
};
pub use title::sort_title_for;
pub use tokenize::{bigrams as bigram_tokens, normalize, BigramTokenizer, Tokenizer, WordTokenizer};

pub use shelfmark_langcodes::{self as langcodes, LanguageCodes, LanguageRecord};

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
