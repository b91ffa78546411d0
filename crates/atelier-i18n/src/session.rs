//! Localization session: active-language lifecycle and key resolution

use crate::catalog::CatalogSet;
use crate::language::{Direction, Language};
use crate::store::LanguageStore;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Observable localization state.
///
/// `direction` is derived from `language` at every write, so the two fields
/// cannot desynchronize: observers always see them change as one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizationState {
    /// The active language.
    pub language: Language,
    /// Layout direction for the active language.
    pub direction: Direction,
}

impl LocalizationState {
    fn for_language(language: Language) -> Self {
        Self {
            language,
            direction: language.direction(),
        }
    }
}

/// Entry in the fixed-order language picker list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption {
    pub language: Language,
    pub display_name: &'static str,
    pub flag: &'static str,
}

/// Owns the active language and resolves keys against the catalogs.
///
/// A session value only exists in the ready state: `initialize` performs the
/// one-time restore from durable storage and returns a fully usable session.
/// `translate` is a pure read; `set_language` is the sole mutator.
pub struct LocalizationSession {
    catalogs: CatalogSet,
    store: Box<dyn LanguageStore>,
    state: watch::Sender<LocalizationState>,
}

impl std::fmt::Debug for LocalizationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalizationSession")
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

impl LocalizationSession {
    /// Create a ready session, restoring the persisted language selection
    ///
    /// Runs once per session. The persisted identifier is validated against
    /// the supported set; an absent, unreadable, or unrecognized value falls
    /// back to the default language.
    pub fn initialize(catalogs: CatalogSet, store: Box<dyn LanguageStore>) -> Self {
        let language = store
            .load()
            .and_then(|code| {
                let parsed = Language::from_code(&code);
                if parsed.is_none() {
                    debug!("Discarding unrecognized persisted language: {:?}", code);
                }
                parsed
            })
            .unwrap_or_default();

        info!("Localization session ready with language: {}", language);
        let (state, _) = watch::channel(LocalizationState::for_language(language));

        Self {
            catalogs,
            store,
            state,
        }
    }

    /// Resolve a key to a display string
    ///
    /// Resolution order: the active language's catalog, then the default
    /// language's catalog (when the active language differs), then the
    /// caller-supplied fallback literal, then the raw key itself. Never
    /// fails, so the UI never renders empty text for a missing translation.
    pub fn translate(&self, key: &str, fallback: Option<&str>) -> String {
        let language = self.state.borrow().language;

        if let Some(value) = self.catalogs.lookup(language, key) {
            return value.to_string();
        }

        if language != Language::DEFAULT {
            if let Some(value) = self.catalogs.lookup(Language::DEFAULT, key) {
                debug!(
                    "Key '{}' not found for language {}, falling back to {}",
                    key,
                    language,
                    Language::DEFAULT
                );
                return value.to_string();
            }
        }

        match fallback {
            Some(literal) => literal.to_string(),
            None => key.to_string(),
        }
    }

    /// Switch the active language, persist the choice, and notify subscribers
    ///
    /// Language and direction update as one atomic step. Re-selecting the
    /// current language still re-persists and re-signals. A persistence
    /// failure is logged and never blocks the change itself.
    pub fn set_language(&self, language: Language) {
        self.state
            .send_replace(LocalizationState::for_language(language));
        debug!("Active language set to: {}", language);

        if let Err(e) = self.store.save(language.code()) {
            warn!("Failed to persist language selection '{}': {}", language, e);
        }
    }

    /// Switch the active language from a raw identifier
    ///
    /// Identifiers outside the supported set are silently ignored; callers
    /// only offer supported values through the UI, so this is a guard rather
    /// than a reported error.
    pub fn set_language_code(&self, code: &str) {
        match Language::from_code(code) {
            Some(language) => self.set_language(language),
            None => debug!("Ignoring unsupported language selection: {:?}", code),
        }
    }

    /// Get the current observable state
    pub fn state(&self) -> LocalizationState {
        *self.state.borrow()
    }

    /// Get the active language
    pub fn current_language(&self) -> Language {
        self.state.borrow().language
    }

    /// Get the layout direction for the active language
    pub fn direction(&self) -> Direction {
        self.state.borrow().direction
    }

    /// Subscribe to state changes
    ///
    /// Presentation collaborators re-render on change and apply the new
    /// direction to the host document. Receivers wake on every
    /// `set_language`, including idempotent ones.
    pub fn subscribe(&self) -> watch::Receiver<LocalizationState> {
        self.state.subscribe()
    }

    /// Check whether a key resolves in the active or default language
    pub fn has_translation(&self, key: &str) -> bool {
        let language = self.current_language();
        self.catalogs.lookup(language, key).is_some()
            || (language != Language::DEFAULT
                && self.catalogs.lookup(Language::DEFAULT, key).is_some())
    }

    /// Get the fixed-order entries for a language picker
    ///
    /// Static metadata; does not depend on catalog contents.
    pub fn supported_languages(&self) -> Vec<LanguageOption> {
        Language::all()
            .into_iter()
            .map(|language| LanguageOption {
                language,
                display_name: language.display_name(),
                flag: language.flag(),
            })
            .collect()
    }
}
