//! Supported languages and layout direction metadata

use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout direction for the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left-to-right layout.
    Ltr,
    /// Right-to-left layout.
    Rtl,
}

impl Direction {
    /// Get the value used for the host document's direction attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported storefront languages
///
/// The set is closed at build time; persisted or user-supplied identifiers
/// outside it are discarded rather than reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    French,
    Arabic,
}

impl Default for Language {
    fn default() -> Self {
        Self::French
    }
}

impl Language {
    /// The fallback source when the active language lacks a key.
    pub const DEFAULT: Self = Self::French;

    /// Get the language code for this language
    pub fn code(&self) -> &'static str {
        match self {
            Self::French => "fr",
            Self::Arabic => "ar",
        }
    }

    /// Parse a language from its code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "fr" => Some(Self::French),
            "ar" => Some(Self::Arabic),
            _ => None,
        }
    }

    /// Get all supported languages, in picker order
    pub fn all() -> Vec<Self> {
        vec![Self::French, Self::Arabic]
    }

    /// Get the display name for this language
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::French => "Français",
            Self::Arabic => "العربية",
        }
    }

    /// Get the flag glyph shown next to this language in pickers
    pub fn flag(&self) -> &'static str {
        match self {
            Self::French => "🇫🇷",
            Self::Arabic => "🇲🇦",
        }
    }

    /// Get the layout direction for this language
    pub fn direction(&self) -> Direction {
        match self {
            Self::Arabic => Direction::Rtl,
            _ => Direction::Ltr,
        }
    }

    /// Get the catalog file name for this language
    pub fn catalog_file(&self) -> String {
        format!("{}.json", self.code())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
