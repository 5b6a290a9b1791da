use std::collections::BTreeMap;

use i18n_resolver_core::LanguageTag;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    lang: LanguageTag,
    messages: BTreeMap<String, String>,
}

impl Dictionary {
    pub fn new(lang: LanguageTag, messages: BTreeMap<String, String>) -> Self {
        Self { lang, messages }
    }

    pub fn lang(&self) -> &LanguageTag {
        &self.lang
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Looks up `key`, substituting `[missing key: <key>]` when absent.
    pub fn translate(&self, key: &str) -> String {
        match self.get(key) {
            Some(message) => message.to_string(),
            None => missing_key(key),
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

pub fn missing_key(key: &str) -> String {
    format!("[missing key: {key}]")
}
