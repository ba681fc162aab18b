//! Matching configuration
//!
//! Loaded from TOML. Every section is optional:
//!
//! ```toml
//! [titles]
//! stopwords = ["the", "a", "an"]
//!
//! [language]
//! english_threshold = 1.0
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::bigrams::{BigramModel, EnglishDetector, DEFAULT_ENGLISH_THRESHOLD};
use crate::error::{Result, TextError};
use crate::histogram::StopwordSet;

/// Settings for title comparison
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TitleConfig {
    /// Words ignored when comparing titles
    pub stopwords: StopwordSet,
}

/// Settings for English screening
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LanguageConfig {
    /// Bigram difference at or above which text is not English
    pub english_threshold: f64,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            english_threshold: DEFAULT_ENGLISH_THRESHOLD,
        }
    }
}

/// Top-level configuration for the matching engine
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    pub titles: TitleConfig,
    pub language: LanguageConfig,
}

impl MatchConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: MatchConfig =
            toml::from_str(content).map_err(|e| TextError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TextError::Io(e.to_string()))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            "Loaded match config from {:?} ({} title stopwords)",
            path,
            config.titles.stopwords.len()
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let threshold = self.language.english_threshold;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(TextError::InvalidInput(format!(
                "language.english_threshold must be a positive number, got {}",
                threshold
            )));
        }
        Ok(())
    }

    /// An English detector using `reference` and the configured threshold
    pub fn english_detector<'a>(&self, reference: &'a BigramModel) -> Result<EnglishDetector<'a>> {
        EnglishDetector::with_reference(reference).with_threshold(self.language.english_threshold)
    }
}
