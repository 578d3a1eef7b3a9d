//! Value sources: per-environment values keyed by variable name.
//!
//! The on-disk format is a JSON object. Parsing goes through
//! `serde_json::Value` first so errors can name the offending key path.

use indexmap::IndexMap;
use thiserror::Error;

use crate::Value;

/// Errors produced while loading a value source.
#[derive(Debug, Error)]
pub enum ValueSourceError {
    #[error("value source is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("value source must be a JSON object at the top level, found {found}")]
    NotAnObject { found: &'static str },

    #[error("null is not a supported value (at `{path}`)")]
    Null { path: String },
}

/// Ordered mapping from variable name to value.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ValueSource {
    entries: IndexMap<String, Value>,
}

impl ValueSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object into a value source.
    pub fn from_json_str(text: &str) -> Result<Self, ValueSourceError> {
        let root: serde_json::Value = serde_json::from_str(text)?;
        let object = match root {
            serde_json::Value::Object(object) => object,
            other => {
                return Err(ValueSourceError::NotAnObject {
                    found: json_kind(&other),
                })
            }
        };

        let mut entries = IndexMap::with_capacity(object.len());
        for (key, value) in object {
            let converted = convert(value, &key)?;
            entries.insert(key, converted);
        }
        tracing::debug!(count = entries.len(), "loaded value source");
        Ok(Self { entries })
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Insert or replace a value, keeping the original position on replace.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The whole source as one mapping with keys sorted at every level.
    pub fn canonical(&self) -> Value {
        Value::Mapping(self.entries.clone()).canonical()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ValueSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn convert(value: serde_json::Value, path: &str) -> Result<Value, ValueSourceError> {
    Ok(match value {
        serde_json::Value::Null => {
            return Err(ValueSourceError::Null {
                path: path.to_string(),
            })
        }
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            // u64 beyond i64::MAX and every non-integer
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| convert(item, &format!("{path}[{i}]")))
                .collect::<Result<_, _>>()?,
        ),
        serde_json::Value::Object(object) => {
            let mut map = IndexMap::with_capacity(object.len());
            for (key, item) in object {
                let converted = convert(item, &format!("{path}.{key}"))?;
                map.insert(key, converted);
            }
            Value::Mapping(map)
        }
    })
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests;
