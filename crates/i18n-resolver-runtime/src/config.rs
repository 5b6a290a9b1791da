use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid default language: {0}")]
    DefaultLang(#[from] i18n_resolver_core::CoreError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    pub default_lang: String,
    pub langs_path: String,
    pub lang_param: String,
    pub session_key: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_lang: "en".to_string(),
            langs_path: "langs".to_string(),
            lang_param: "lang".to_string(),
            session_key: "lang".to_string(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<I18nConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn load_config_or_default(path: &Path) -> Result<I18nConfig, ConfigError> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(I18nConfig::default())
    }
}
