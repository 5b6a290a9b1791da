#![forbid(unsafe_code)]

mod request;

pub use crate::request::{ACCEPT_LANGUAGE, RequestContext};
pub use i18n_resolver_runtime::{
    AcceptLanguage, CandidateList, ConfigError, DictProvider, Dictionary, DirDictProvider, I18n,
    I18nConfig, LanguageTag, LoadFailure, NoRequest, RequestSource, RuntimeError, RuntimeResult,
    load_config, load_config_or_default, parse_accept_language,
};
