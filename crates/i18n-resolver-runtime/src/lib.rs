#![forbid(unsafe_code)]

mod config;
mod dictionary;
mod error;
mod i18n;
mod loader;
mod provider;
mod source;

pub use crate::config::{ConfigError, I18nConfig, load_config, load_config_or_default};
pub use crate::dictionary::{Dictionary, missing_key};
pub use crate::error::{LoadFailure, RuntimeError, RuntimeResult};
pub use crate::i18n::I18n;
pub use crate::loader::{DictFileError, load_messages, parse_json_messages, parse_toml_messages};
pub use crate::provider::{DictProvider, DirDictProvider};
pub use crate::source::{NoRequest, RequestSource};
pub use i18n_resolver_core::{
    AcceptLanguage, CandidateList, CandidateSources, LanguageTag, WeightedTag, build_candidates,
    parse_accept_language,
};
