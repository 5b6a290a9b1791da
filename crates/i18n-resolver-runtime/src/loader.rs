use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictFileError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported value at {0}")]
    UnsupportedValue(String),
    #[error("unsupported dictionary format: {0}")]
    UnsupportedFormat(String),
}

pub fn load_messages(path: &Path) -> Result<BTreeMap<String, String>, DictFileError> {
    let contents = fs::read_to_string(path)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json_messages(&contents),
        Some("toml") => parse_toml_messages(&contents),
        other => Err(DictFileError::UnsupportedFormat(
            other.unwrap_or_default().to_string(),
        )),
    }
}

pub fn parse_json_messages(contents: &str) -> Result<BTreeMap<String, String>, DictFileError> {
    let root: serde_json::Map<String, serde_json::Value> = serde_json::from_str(contents)?;
    let mut messages = BTreeMap::new();
    for (key, value) in root {
        flatten_json(&key, value, &mut messages)?;
    }
    Ok(messages)
}

pub fn parse_toml_messages(contents: &str) -> Result<BTreeMap<String, String>, DictFileError> {
    let root: toml::Table = toml::from_str(contents)?;
    let mut messages = BTreeMap::new();
    for (key, value) in root {
        flatten_toml(&key, value, &mut messages)?;
    }
    Ok(messages)
}

fn flatten_json(
    prefix: &str,
    value: serde_json::Value,
    out: &mut BTreeMap<String, String>,
) -> Result<(), DictFileError> {
    use serde_json::Value;

    let text = match value {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Object(map) => {
            for (key, child) in map {
                flatten_json(&format!("{prefix}.{key}"), child, out)?;
            }
            return Ok(());
        }
        Value::Null | Value::Array(_) => {
            return Err(DictFileError::UnsupportedValue(prefix.to_string()));
        }
    };
    out.insert(prefix.to_string(), text);
    Ok(())
}

fn flatten_toml(
    prefix: &str,
    value: toml::Value,
    out: &mut BTreeMap<String, String>,
) -> Result<(), DictFileError> {
    use toml::Value;

    let text = match value {
        Value::String(text) => text,
        Value::Integer(number) => number.to_string(),
        Value::Float(number) => number.to_string(),
        Value::Boolean(flag) => flag.to_string(),
        Value::Table(table) => {
            for (key, child) in table {
                flatten_toml(&format!("{prefix}.{key}"), child, out)?;
            }
            return Ok(());
        }
        Value::Datetime(_) | Value::Array(_) => {
            return Err(DictFileError::UnsupportedValue(prefix.to_string()));
        }
    };
    out.insert(prefix.to_string(), text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{DictFileError, parse_json_messages, parse_toml_messages};

    #[test]
    fn flattens_nested_json() {
        let messages =
            parse_json_messages(r#"{"home": {"title": "Hi", "count": 3}, "ok": true}"#)
                .expect("messages");
        assert_eq!(messages.get("home.title").map(String::as_str), Some("Hi"));
        assert_eq!(messages.get("home.count").map(String::as_str), Some("3"));
        assert_eq!(messages.get("ok").map(String::as_str), Some("true"));
    }

    #[test]
    fn flattens_toml_tables() {
        let contents = r#"
greeting = "Hello"

[menu]
open = "Open"
"#;
        let messages = parse_toml_messages(contents).expect("messages");
        assert_eq!(messages.get("greeting").map(String::as_str), Some("Hello"));
        assert_eq!(messages.get("menu.open").map(String::as_str), Some("Open"));
    }

    #[test]
    fn rejects_arrays() {
        let err = parse_json_messages(r#"{"list": ["a"]}"#).expect_err("array should fail");
        assert!(matches!(err, DictFileError::UnsupportedValue(key) if key == "list"));
    }

    #[test]
    fn rejects_non_object_root() {
        assert!(parse_json_messages("[1, 2]").is_err());
    }
}
