use std::path::{Path, PathBuf};

use i18n_resolver_core::{
    CandidateList, CandidateSources, LanguageTag, build_candidates, parse_accept_language,
};
use tracing::{debug, info, warn};

use crate::config::{ConfigError, I18nConfig};
use crate::dictionary::Dictionary;
use crate::error::{LoadFailure, RuntimeError, RuntimeResult};
use crate::provider::{DictProvider, DirDictProvider};
use crate::source::RequestSource;

enum DictState {
    Loaded(Dictionary),
    Failed(RuntimeError),
}

/// Request-scoped translator. The dictionary is loaded on first use and
/// never reloaded; a failed load is remembered and reported again.
pub struct I18n {
    default_lang: LanguageTag,
    langs_path: PathBuf,
    source: Box<dyn RequestSource>,
    provider: Box<dyn DictProvider>,
    // None until the first load attempt
    state: Option<DictState>,
}

impl I18n {
    pub fn new(
        default_lang: LanguageTag,
        source: impl RequestSource + 'static,
        provider: impl DictProvider + 'static,
    ) -> Self {
        Self {
            default_lang,
            langs_path: PathBuf::from("langs"),
            source: Box::new(source),
            provider: Box::new(provider),
            state: None,
        }
    }

    pub fn from_config(
        config: &I18nConfig,
        source: impl RequestSource + 'static,
    ) -> Result<Self, ConfigError> {
        let default_lang = LanguageTag::parse(&config.default_lang)?;
        let mut i18n = Self::new(default_lang, source, DirDictProvider::new());
        i18n.set_langs_path(&config.langs_path);
        Ok(i18n)
    }

    pub fn set_default_lang(&mut self, lang: LanguageTag) {
        self.default_lang = lang;
    }

    pub fn default_lang(&self) -> &LanguageTag {
        &self.default_lang
    }

    pub fn set_langs_path(&mut self, path: impl AsRef<Path>) {
        self.langs_path = path.as_ref().to_path_buf();
    }

    pub fn langs_path(&self) -> &Path {
        &self.langs_path
    }

    /// Replaces the provider. Has no effect once a load has been attempted.
    pub fn set_dict_provider(&mut self, provider: impl DictProvider + 'static) {
        self.provider = Box::new(provider);
    }

    /// Explicit override, session language, browser languages, then the
    /// default. Does not trigger a load.
    pub fn available_langs(&self) -> CandidateList {
        let sources = CandidateSources {
            explicit: source_tag(self.source.explicit_lang(), "explicit"),
            session: source_tag(self.source.session_lang(), "session"),
            accepted: self.http_accept_languages(),
        };
        build_candidates(sources, &self.default_lang)
    }

    pub fn http_accept_languages(&self) -> Vec<LanguageTag> {
        self.source
            .accept_language()
            .map(|raw| parse_accept_language(&raw))
            .unwrap_or_default()
    }

    pub fn load(&mut self) -> RuntimeResult<&Dictionary> {
        let state = match self.state.take() {
            Some(state) => state,
            None => match self.fetch_dictionary() {
                Ok(dictionary) => DictState::Loaded(dictionary),
                Err(err) => DictState::Failed(err),
            },
        };
        match self.state.insert(state) {
            DictState::Loaded(dictionary) => Ok(&*dictionary),
            DictState::Failed(err) => Err(err.clone()),
        }
    }

    pub fn get(&mut self, key: &str) -> RuntimeResult<String> {
        Ok(self.load()?.translate(key))
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, Some(DictState::Loaded(_)))
    }

    pub fn loaded_lang(&self) -> Option<&LanguageTag> {
        match &self.state {
            Some(DictState::Loaded(dictionary)) => Some(dictionary.lang()),
            _ => None,
        }
    }

    fn fetch_dictionary(&mut self) -> RuntimeResult<Dictionary> {
        let candidates = self.available_langs();
        debug!(candidates = ?candidates.as_slice(), "loading dictionary");
        self.provider.set_langs_path(&self.langs_path);
        match self.provider.load(&candidates) {
            Some(dictionary) if !dictionary.is_empty() => {
                info!(lang = %dictionary.lang(), messages = dictionary.len(), "dictionary loaded");
                Ok(dictionary)
            }
            _ => {
                warn!(
                    langs_path = %self.langs_path.display(),
                    candidates = candidates.len(),
                    "no dictionary matches the candidate languages"
                );
                Err(RuntimeError::CantLoadDictionary {
                    reason: LoadFailure::NoMatchingFiles,
                })
            }
        }
    }
}

fn source_tag(value: Option<String>, origin: &'static str) -> Option<LanguageTag> {
    let value = value?;
    if value.trim().is_empty() {
        return None;
    }
    match LanguageTag::parse(&value) {
        Ok(tag) => Some(tag),
        Err(err) => {
            debug!(origin, value = %value, error = %err, "ignoring language preference");
            None
        }
    }
}
