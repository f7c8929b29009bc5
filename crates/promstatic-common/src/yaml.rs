//! YAML parsing using yaml-rust2
//!
//! Documents are converted to `serde_json::Value` so resources can be
//! deserialized into typed structs with serde.

use serde_json::{Map, Number, Value};
use yaml_rust2::{Yaml, YamlLoader};

/// Error type for YAML parsing
#[derive(Debug, Clone)]
pub struct YamlError(String);

impl YamlError {
    /// Create a YAML error with the given message
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl std::fmt::Display for YamlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for YamlError {}

/// Parse a (possibly multi-document) YAML stream.
///
/// Each document separated by `---` becomes a separate Value. Empty documents
/// come back as `Value::Null`; callers decide whether to skip them.
pub fn parse_documents(input: &str) -> Result<Vec<Value>, YamlError> {
    let docs = YamlLoader::load_from_str(input).map_err(|e| YamlError(e.to_string()))?;
    docs.into_iter().map(yaml_to_json).collect()
}

/// Parse a single YAML document, returning `Value::Null` for empty input.
pub fn parse_document(input: &str) -> Result<Value, YamlError> {
    Ok(parse_documents(input)?
        .into_iter()
        .next()
        .unwrap_or(Value::Null))
}

fn yaml_to_json(node: Yaml) -> Result<Value, YamlError> {
    convert(node, "")
}

/// Convert one node; `at` is its dotted location, used in error messages.
fn convert(node: Yaml, at: &str) -> Result<Value, YamlError> {
    let value = match node {
        Yaml::Null => Value::Null,
        Yaml::Boolean(b) => Value::Bool(b),
        Yaml::Integer(i) => Value::from(i),
        // .inf and .nan have no JSON form; keep the literal
        Yaml::Real(text) => match text.parse::<f64>().ok().and_then(Number::from_f64) {
            Some(number) => Value::Number(number),
            None => Value::String(text),
        },
        Yaml::String(s) => Value::String(s),
        Yaml::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| convert(item, &format!("{}[{}]", at, i)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)?,
        Yaml::Hash(entries) => {
            let mut object = Map::with_capacity(entries.len());
            for (key, node) in entries {
                let key = mapping_key(key, at)?;
                let child = if at.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", at, key)
                };
                object.insert(key, convert(node, &child)?);
            }
            Value::Object(object)
        }
        Yaml::Alias(_) => return Err(located(at, "aliases are not supported")),
        Yaml::BadValue => return Err(located(at, "invalid value")),
    };
    Ok(value)
}

fn mapping_key(key: Yaml, at: &str) -> Result<String, YamlError> {
    match key {
        Yaml::String(s) | Yaml::Real(s) => Ok(s),
        Yaml::Integer(i) => Ok(i.to_string()),
        Yaml::Boolean(b) => Ok(b.to_string()),
        Yaml::Null => Ok("null".to_string()),
        _ => Err(located(at, "mapping keys must be scalars")),
    }
}

fn located(at: &str, message: &str) -> YamlError {
    if at.is_empty() {
        YamlError::new(message)
    } else {
        YamlError::new(format!("{}: {}", at, message))
    }
}
