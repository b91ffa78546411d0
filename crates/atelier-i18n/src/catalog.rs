//! Translation catalog loading and key-path resolution

use crate::error::{I18nError, I18nResult};
use crate::Language;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Delimiter joining the segments of a key path, e.g. `"nav.cart"`.
pub const KEY_DELIMITER: char = '.';

/// One node of a translation tree: a translated string or a nested group.
///
/// The untagged representation makes any other JSON value (number, array,
/// null) a deserialization error, so a malformed catalog shape is caught at
/// load time rather than surfacing as a silent miss at lookup time.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CatalogNode {
    Leaf(String),
    Node(HashMap<String, CatalogNode>),
}

/// A validated translation tree for one language.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    root: HashMap<String, CatalogNode>,
}

impl Catalog {
    /// Parse a catalog from a JSON document
    pub fn from_json(language: Language, json: &str) -> I18nResult<Self> {
        serde_json::from_str(json).map_err(|source| I18nError::CatalogParse {
            language: language.code().to_string(),
            source,
        })
    }

    /// Resolve a dotted key path to a leaf string
    ///
    /// Returns `None` when any segment is absent, an intermediate segment is
    /// a leaf, or the terminal value is a nested group. Partial-path matches
    /// are never returned.
    pub fn resolve(&self, key: &str) -> Option<&str> {
        let mut segments = key.split(KEY_DELIMITER);
        let mut current = self.root.get(segments.next()?)?;

        for segment in segments {
            match current {
                CatalogNode::Node(children) => current = children.get(segment)?,
                CatalogNode::Leaf(_) => return None,
            }
        }

        match current {
            CatalogNode::Leaf(value) => Some(value),
            CatalogNode::Node(_) => None,
        }
    }
}

/// Eagerly loaded catalogs for every supported language.
///
/// Read-only for the lifetime of the process once constructed. A missing or
/// malformed document for any supported language is a fatal configuration
/// error, never a runtime miss.
#[derive(Debug, Clone)]
pub struct CatalogSet {
    catalogs: HashMap<Language, Catalog>,
}

impl CatalogSet {
    /// Load `<code>.json` for every supported language from a directory
    pub fn load_from_dir<P: AsRef<Path>>(base_dir: P) -> I18nResult<Self> {
        let base_dir = base_dir.as_ref();
        let mut catalogs = HashMap::new();

        for language in Language::all() {
            let path = base_dir.join(language.catalog_file());
            debug!("Loading catalog file: {:?}", path);

            let content = fs::read_to_string(&path).map_err(|source| I18nError::CatalogRead {
                path: path.clone(),
                source,
            })?;

            catalogs.insert(language, Catalog::from_json(language, &content)?);
        }

        info!("Loaded {} language catalogs from {:?}", catalogs.len(), base_dir);
        Ok(Self { catalogs })
    }

    /// Build a catalog set from in-memory JSON documents
    ///
    /// Every supported language must be covered, matching the eager-loading
    /// rule of `load_from_dir`.
    pub fn from_sources(sources: &[(Language, &str)]) -> I18nResult<Self> {
        let mut catalogs = HashMap::new();

        for (language, json) in sources {
            catalogs.insert(*language, Catalog::from_json(*language, json)?);
        }

        for language in Language::all() {
            if !catalogs.contains_key(&language) {
                return Err(I18nError::CatalogMissing {
                    language: language.code().to_string(),
                });
            }
        }

        Ok(Self { catalogs })
    }

    /// Look up a key path in one language's catalog
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.catalogs.get(&language)?.resolve(key)
    }

    /// Get all languages with a loaded catalog
    pub fn languages(&self) -> Vec<Language> {
        self.catalogs.keys().copied().collect()
    }
}
