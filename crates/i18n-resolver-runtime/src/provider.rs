use std::path::{Path, PathBuf};

use i18n_resolver_core::CandidateList;
use tracing::{debug, warn};

use crate::dictionary::Dictionary;
use crate::loader::load_messages;

/// Resolves a candidate list to the dictionary of the first language it
/// has a source for.
pub trait DictProvider {
    fn set_langs_path(&mut self, path: &Path);

    /// Returns `None` when no candidate matches any available source.
    fn load(&mut self, candidates: &CandidateList) -> Option<Dictionary>;
}

const EXTENSIONS: [&str; 2] = ["json", "toml"];

/// Reads `<langs_path>/<tag>.json` or `<langs_path>/<tag>.toml`.
#[derive(Debug, Clone, Default)]
pub struct DirDictProvider {
    langs_path: PathBuf,
}

impl DirDictProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn langs_path(&self) -> &Path {
        &self.langs_path
    }
}

impl DictProvider for DirDictProvider {
    fn set_langs_path(&mut self, path: &Path) {
        self.langs_path = path.to_path_buf();
    }

    fn load(&mut self, candidates: &CandidateList) -> Option<Dictionary> {
        for lang in candidates {
            for ext in EXTENSIONS {
                let path = self.langs_path.join(format!("{lang}.{ext}"));
                if !path.is_file() {
                    continue;
                }
                match load_messages(&path) {
                    Ok(messages) if messages.is_empty() => {
                        debug!(path = %path.display(), "skipping empty dictionary");
                    }
                    Ok(messages) => {
                        debug!(lang = %lang, path = %path.display(), "loaded dictionary");
                        return Some(Dictionary::new(lang.clone(), messages));
                    }
                    Err(err) => {
                        warn!(path = %path.display(), error = %err, "skipping unreadable dictionary");
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{DictProvider, DirDictProvider};
    use i18n_resolver_core::{CandidateSources, LanguageTag, build_candidates};
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        path.push(format!("i18n_resolver_provider_{nanos}"));
        fs::create_dir_all(&path).expect("dir");
        path
    }

    fn tag(value: &str) -> LanguageTag {
        LanguageTag::parse(value).expect("valid tag")
    }

    fn candidates(accepted: &[&str], default_lang: &str) -> i18n_resolver_core::CandidateList {
        let sources = CandidateSources {
            accepted: accepted.iter().map(|value| tag(value)).collect(),
            ..CandidateSources::default()
        };
        build_candidates(sources, &tag(default_lang))
    }

    #[test]
    fn picks_first_candidate_with_file() {
        let dir = temp_dir();
        fs::write(dir.join("fr.json"), r#"{"hello": "Bonjour"}"#).expect("write");
        fs::write(dir.join("en.toml"), r#"hello = "Hello""#).expect("write");

        let mut provider = DirDictProvider::new();
        provider.set_langs_path(&dir);
        let dict = provider
            .load(&candidates(&["de", "fr"], "en"))
            .expect("dictionary");
        assert_eq!(dict.lang().as_str(), "fr");
        assert_eq!(dict.get("hello"), Some("Bonjour"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn skips_malformed_file() {
        let dir = temp_dir();
        fs::write(dir.join("fr.json"), "{ not json").expect("write");
        fs::write(dir.join("en.toml"), "[menu]\nopen = \"Open\"").expect("write");

        let mut provider = DirDictProvider::new();
        provider.set_langs_path(&dir);
        let dict = provider
            .load(&candidates(&["fr"], "en"))
            .expect("dictionary");
        assert_eq!(dict.lang().as_str(), "en");
        assert_eq!(dict.get("menu.open"), Some("Open"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn skips_empty_file() {
        let dir = temp_dir();
        fs::write(dir.join("fr.json"), "{}").expect("write");
        fs::write(dir.join("en.json"), r#"{"a": "A"}"#).expect("write");

        let mut provider = DirDictProvider::new();
        provider.set_langs_path(&dir);
        let dict = provider
            .load(&candidates(&["fr"], "en"))
            .expect("dictionary");
        assert_eq!(dict.lang().as_str(), "en");
        assert_eq!(dict.get("a"), Some("A"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn returns_none_without_matching_files() {
        let dir = temp_dir();
        let mut provider = DirDictProvider::new();
        provider.set_langs_path(&dir);
        assert!(provider.load(&candidates(&["it"], "en")).is_none());
        assert_eq!(provider.langs_path(), dir.as_path());

        fs::remove_dir_all(&dir).ok();
    }
}
