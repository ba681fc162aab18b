//! Language code registry
//!
//! Normalizes the many ways catalog records spell a language (locale tags,
//! alpha-2 codes, alpha-3 codes, English names) to one ISO 639-2
//! bibliographic alpha-3 code. Unknown input is never an error: lookups
//! answer `None` or an empty slice.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;

use crate::table::ISO_639_2;

lazy_static! {
    /// Registry built from the bundled ISO 639-2 table.
    static ref BUILTIN: LanguageCodes = LanguageCodes::from_records(
        ISO_639_2
            .iter()
            .map(|&(alpha3, terminology, alpha2, names)| LanguageRecord {
                alpha2,
                alpha3,
                terminology,
                names,
            }),
    );
}

/// One language known to the registry
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LanguageRecord {
    /// ISO 639-1 code, when the language has one
    pub alpha2: Option<&'static str>,
    /// ISO 639-2/B code, the canonical form returned by lookups
    pub alpha3: &'static str,
    /// ISO 639-2/T code, only where it differs from the bibliographic one
    pub terminology: Option<&'static str>,
    /// English names, preferred name first
    pub names: &'static [&'static str],
}

/// Immutable bidirectional lookup over a set of [`LanguageRecord`]s
#[derive(Debug, Default)]
pub struct LanguageCodes {
    two_to_three: HashMap<&'static str, &'static str>,
    three_to_two: HashMap<&'static str, &'static str>,
    /// Terminology and bibliographic codes, both mapped to the bibliographic one
    alpha3: HashMap<&'static str, &'static str>,
    english_names: HashMap<&'static str, &'static [&'static str]>,
    languages: usize,
    /// Lowercased English name to alpha-3
    by_name: HashMap<String, &'static str>,
}

impl LanguageCodes {
    /// The process-wide registry built from the bundled ISO 639-2 table
    pub fn builtin() -> &'static LanguageCodes {
        &BUILTIN
    }

    /// Build a registry from arbitrary records.
    ///
    /// When two records claim the same name, the first one wins.
    pub fn from_records(records: impl IntoIterator<Item = LanguageRecord>) -> Self {
        let mut codes = Self::default();

        for record in records {
            if codes.alpha3.insert(record.alpha3, record.alpha3).is_none() {
                codes.languages += 1;
            }
            codes.english_names.insert(record.alpha3, record.names);

            if let Some(terminology) = record.terminology {
                codes.alpha3.insert(terminology, record.alpha3);
            }

            if let Some(alpha2) = record.alpha2 {
                codes.two_to_three.insert(alpha2, record.alpha3);
                codes.three_to_two.insert(record.alpha3, alpha2);
                codes.english_names.insert(alpha2, record.names);
            }

            for name in record.names {
                codes
                    .by_name
                    .entry(name.to_lowercase())
                    .or_insert(record.alpha3);
            }
        }

        tracing::debug!(
            "Built language code registry with {} languages",
            codes.languages
        );
        codes
    }

    /// Number of distinct languages
    pub fn len(&self) -> usize {
        self.languages
    }

    pub fn is_empty(&self) -> bool {
        self.languages == 0
    }

    /// `"en"` -> `"eng"`
    pub fn alpha2_to_alpha3(&self, alpha2: &str) -> Option<&'static str> {
        self.two_to_three
            .get(alpha2.to_ascii_lowercase().as_str())
            .copied()
    }

    /// `"eng"` -> `"en"`. Terminology codes (`"zho"`) are accepted too.
    pub fn alpha3_to_alpha2(&self, alpha3: &str) -> Option<&'static str> {
        let canonical = self.canonical_alpha3(alpha3)?;
        self.three_to_two.get(canonical).copied()
    }

    /// English names for an alpha-2 or alpha-3 code; empty when unknown.
    pub fn english_names(&self, code: &str) -> &'static [&'static str] {
        let code = code.to_ascii_lowercase();
        let key = self.alpha3.get(code.as_str()).copied().unwrap_or(code.as_str());
        self.english_names.get(key).copied().unwrap_or(&[])
    }

    /// Map a locale tag such as `"en-US"` to an alpha-3 code.
    ///
    /// Only the primary language subtag is considered. Underscore-separated
    /// POSIX locales (`"pt_BR"`) are handled the same way.
    pub fn iso_639_2_for_locale(&self, locale: &str) -> Option<&'static str> {
        let primary = locale
            .split(|c: char| c == '-' || c == '_')
            .next()
            .unwrap_or(locale)
            .trim();
        self.alpha2_to_alpha3(primary)
    }

    /// Resolve a free-form language identifier to an alpha-3 code.
    ///
    /// Tried in order: alpha-2 code, alpha-3 code, English name
    /// (case-insensitive).
    pub fn string_to_alpha_3(&self, s: Option<&str>) -> Option<&'static str> {
        let s = s?.trim();
        if s.is_empty() {
            return None;
        }

        if let Some(alpha3) = self.alpha2_to_alpha3(s) {
            return Some(alpha3);
        }

        if let Some(alpha3) = self.canonical_alpha3(s) {
            return Some(alpha3);
        }

        self.by_name.get(&s.to_lowercase()).copied()
    }

    /// The record for an alpha-2 or alpha-3 code
    pub fn record(&self, code: &str) -> Option<LanguageRecord> {
        let alpha3 = self
            .alpha2_to_alpha3(code)
            .or_else(|| self.canonical_alpha3(code))?;
        let terminology = self
            .alpha3
            .iter()
            .find(|(code, canonical)| **canonical == alpha3 && **code != alpha3)
            .map(|(code, _)| *code);

        Some(LanguageRecord {
            alpha2: self.three_to_two.get(alpha3).copied(),
            alpha3,
            terminology,
            names: self.english_names.get(alpha3).copied().unwrap_or(&[]),
        })
    }

    fn canonical_alpha3(&self, code: &str) -> Option<&'static str> {
        self.alpha3.get(code.to_ascii_lowercase().as_str()).copied()
    }
}

/// Shorthand for `LanguageCodes::builtin().iso_639_2_for_locale(..)`
pub fn iso_639_2_for_locale(locale: &str) -> Option<&'static str> {
    LanguageCodes::builtin().iso_639_2_for_locale(locale)
}

/// Shorthand for `LanguageCodes::builtin().string_to_alpha_3(..)`
pub fn string_to_alpha_3(s: Option<&str>) -> Option<&'static str> {
    LanguageCodes::builtin().string_to_alpha_3(s)
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn iso_639_2_for_locale_ffi(locale: String) -> Option<String> {
    iso_639_2_for_locale(&locale).map(str::to_string)
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn string_to_alpha_3_ffi(s: Option<String>) -> Option<String> {
    string_to_alpha_3(s.as_deref()).map(str::to_string)
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn english_names_ffi(code: String) -> Vec<String> {
    LanguageCodes::builtin()
        .english_names(&code)
        .iter()
        .map(|name| name.to_string())
        .collect()
}
