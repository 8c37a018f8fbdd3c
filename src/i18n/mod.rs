//! Internationalization (i18n) for the two site languages.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages and their metadata
//! - `language`: Type-safe `Language` plus per-request resolution from query/cookie
//! - `translations`: Static UI strings keyed by translation key, with English fallback
//!
//! # Example
//!
//! ```rust
//! use portfolio_server::i18n::{Language, TranslationTable};
//!
//! let language = Language::resolve(Some("fr"), None);
//! assert_eq!(TranslationTable::global().get("skills", language), "Compétences");
//! ```

mod language;
mod registry;
mod translations;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use translations::TranslationTable;
