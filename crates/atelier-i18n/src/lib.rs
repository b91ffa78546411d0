//! Localization core for the Atelier storefront
//!
//! This crate owns language selection and translation key resolution for the
//! storefront UI. It includes:
//!
//! - A closed set of supported languages with display and direction metadata
//! - Per-language translation catalogs loaded eagerly and validated at startup
//! - Dotted key-path resolution with fallback to the default language
//! - A session that restores the selected language from durable storage and
//!   broadcasts state changes to presentation subscribers
//!
//! # Example
//!
//! ```rust
//! use atelier_i18n::{CatalogSet, Language, LocalizationSession, MemoryLanguageStore};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalogs = CatalogSet::from_sources(&[
//!     (Language::French, r#"{"nav": {"cart": "Panier"}}"#),
//!     (Language::Arabic, r#"{"nav": {"cart": "السلة"}}"#),
//! ])?;
//!
//! let session = LocalizationSession::initialize(catalogs, Box::new(MemoryLanguageStore::new()));
//! assert_eq!(session.translate("nav.cart", None), "Panier");
//!
//! session.set_language(Language::Arabic);
//! assert_eq!(session.direction().as_str(), "rtl");
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod language;
pub mod session;
pub mod store;

pub use catalog::{Catalog, CatalogNode, CatalogSet, KEY_DELIMITER};
pub use error::{I18nError, I18nResult};
pub use language::{Direction, Language};
pub use session::{LanguageOption, LocalizationSession, LocalizationState};
pub use store::{FileLanguageStore, LanguageStore, MemoryLanguageStore, LANGUAGE_STORAGE_KEY};
