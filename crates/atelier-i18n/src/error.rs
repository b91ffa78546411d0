//! Error types for localization operations

use std::path::PathBuf;
use thiserror::Error;

/// Fatal configuration errors raised while loading translation catalogs.
///
/// Key resolution itself never fails: `translate` recovers every miss by
/// falling through to the default language, the caller fallback, or the raw
/// key. Only startup catalog loading uses this type.
#[derive(Error, Debug)]
pub enum I18nError {
    /// A supported language's catalog file could not be read.
    #[error("failed to read catalog file {}: {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog document is not a valid nested tree of strings.
    #[error("malformed catalog for language '{language}': {source}")]
    CatalogParse {
        language: String,
        #[source]
        source: serde_json::Error,
    },

    /// No catalog document was supplied for a supported language.
    #[error("missing catalog for supported language '{language}'")]
    CatalogMissing { language: String },
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
