use std::collections::BTreeMap;

use i18n_resolver_runtime::{I18nConfig, LanguageTag, RequestSource};
use tracing::debug;

pub const ACCEPT_LANGUAGE: &str = "accept-language";

/// Snapshot of the parts of an HTTP request the resolver reads: query
/// parameters, session values and headers. Header names are matched
/// case-insensitively.
#[derive(Debug, Clone)]
pub struct RequestContext {
    query: BTreeMap<String, String>,
    session: BTreeMap<String, String>,
    headers: BTreeMap<String, String>,
    lang_param: String,
    session_key: String,
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::from_config(&I18nConfig::default())
    }
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &I18nConfig) -> Self {
        Self {
            query: BTreeMap::new(),
            session: BTreeMap::new(),
            headers: BTreeMap::new(),
            lang_param: config.lang_param.clone(),
            session_key: config.session_key.clone(),
        }
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    pub fn with_session(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.session.insert(name.into(), value.into());
        self
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Stores `lang` in the session so later requests prefer it.
    pub fn remember_lang(&mut self, lang: &LanguageTag) {
        debug!(lang = %lang, key = %self.session_key, "remembering session language");
        self.session
            .insert(self.session_key.clone(), lang.to_string());
    }

    pub fn query(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn session(&self) -> &BTreeMap<String, String> {
        &self.session
    }

    pub fn into_session(self) -> BTreeMap<String, String> {
        self.session
    }
}

impl RequestSource for RequestContext {
    fn explicit_lang(&self) -> Option<String> {
        self.query(&self.lang_param).map(str::to_string)
    }

    fn session_lang(&self) -> Option<String> {
        self.session.get(&self.session_key).cloned()
    }

    fn accept_language(&self) -> Option<String> {
        self.header(ACCEPT_LANGUAGE).map(str::to_string)
    }
}
