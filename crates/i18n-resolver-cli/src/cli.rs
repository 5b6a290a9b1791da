use std::io::Write;
use std::path::PathBuf;

use i18n_resolver_server::{I18n, RequestContext, load_config_or_default};
use tracing::info;

use crate::error::CliAppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub config_path: PathBuf,
    pub langs_path: Option<PathBuf>,
    pub lang: Option<String>,
    pub session: Option<String>,
    pub accept_language: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("i18n-resolver.toml"),
            langs_path: None,
            lang: None,
            session: None,
            accept_language: None,
        }
    }
}

pub fn run() -> Result<(), CliAppError> {
    let args = std::env::args().skip(1).collect();
    let stdout = std::io::stdout();
    run_with(args, &mut stdout.lock())
}

pub fn run_with(args: Vec<String>, out: &mut impl Write) -> Result<(), CliAppError> {
    let mut args = args.into_iter();
    let command = args.next().ok_or_else(|| CliAppError::Usage(usage()))?;
    match command.as_str() {
        "langs" => {
            let (options, _) = parse_options(args.collect(), false)?;
            let i18n = build_i18n(&options)?;
            for lang in &i18n.available_langs() {
                writeln!(out, "{lang}")?;
            }
            Ok(())
        }
        "get" => {
            let (options, key) = parse_options(args.collect(), true)?;
            let key = key.ok_or_else(|| CliAppError::Usage(usage()))?;
            let mut i18n = build_i18n(&options)?;
            let message = i18n.get(&key)?;
            if let Some(lang) = i18n.loaded_lang() {
                info!(lang = %lang, key = %key, "resolved message");
            }
            writeln!(out, "{message}")?;
            Ok(())
        }
        _ => Err(CliAppError::Usage(usage())),
    }
}

fn build_i18n(options: &RequestOptions) -> Result<I18n, CliAppError> {
    let mut config = load_config_or_default(&options.config_path)?;
    if let Some(path) = &options.langs_path {
        config.langs_path = path.display().to_string();
    }

    let mut request = RequestContext::from_config(&config);
    if let Some(lang) = &options.lang {
        request = request.with_query(config.lang_param.clone(), lang.clone());
    }
    if let Some(session) = &options.session {
        request = request.with_session(config.session_key.clone(), session.clone());
    }
    if let Some(header) = &options.accept_language {
        request = request.with_header("Accept-Language", header.clone());
    }

    Ok(I18n::from_config(&config, request)?)
}

fn parse_options(
    args: Vec<String>,
    with_key: bool,
) -> Result<(RequestOptions, Option<String>), CliAppError> {
    let mut options = RequestOptions::default();
    let mut key = None;
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => options.config_path = PathBuf::from(next_value("--config", &mut iter)?),
            "--langs-path" => {
                options.langs_path = Some(PathBuf::from(next_value("--langs-path", &mut iter)?))
            }
            "--lang" => options.lang = Some(next_value("--lang", &mut iter)?),
            "--session" => options.session = Some(next_value("--session", &mut iter)?),
            "--accept-language" => {
                options.accept_language = Some(next_value("--accept-language", &mut iter)?)
            }
            "--key" if with_key => key = Some(next_value("--key", &mut iter)?),
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    Ok((options, key))
}

fn next_value(flag: &str, iter: &mut impl Iterator<Item = String>) -> Result<String, CliAppError> {
    iter.next()
        .ok_or_else(|| CliAppError::Usage(format!("{flag} requires a value\n\n{}", usage())))
}

fn usage() -> String {
    "usage: i18n-resolver-cli langs [--config <path>] [--langs-path <dir>] [--lang <tag>] [--session <tag>] [--accept-language <header>]\n       i18n-resolver-cli get --key <key> [--config <path>] [--langs-path <dir>] [--lang <tag>] [--session <tag>] [--accept-language <header>]".to_string()
}
