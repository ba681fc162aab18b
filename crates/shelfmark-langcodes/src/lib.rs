//! shelfmark-langcodes: ISO 639 language code registry.
//!
//! Catalog records name their language in many forms: `"en-US"`, `"en"`,
//! `"eng"`, `"English"`. This crate resolves all of them to the ISO 639-2
//! bibliographic alpha-3 code (`"eng"`) using an immutable table built once
//! per process.
//!
//! ```
//! use shelfmark_langcodes::LanguageCodes;
//!
//! let codes = LanguageCodes::builtin();
//! assert_eq!(codes.iso_639_2_for_locale("en-GB"), Some("eng"));
//! assert_eq!(codes.string_to_alpha_3(Some("Castilian")), Some("spa"));
//! assert_eq!(codes.string_to_alpha_3(Some("Klingon")), None);
//! ```

pub mod registry;
mod table;

pub use registry::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
