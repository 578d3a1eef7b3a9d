//! Dynamically typed configuration values.

use indexmap::IndexMap;
use serde::Serialize;

/// A value from the value source.
///
/// Booleans are their own variant rather than a 0/1 number. The dictionary
/// renderer depends on that to print `false` instead of `0`.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Array(Vec<Value>),
    Mapping(IndexMap<String, Value>),
}

impl Value {
    /// Short name of the variant, used in type mismatch messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::Array(_) => "array",
            Self::Mapping(_) => "mapping",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Copy of this value with every mapping's keys sorted.
    ///
    /// Two values that differ only in key order have equal canonical forms.
    #[must_use]
    pub fn canonical(&self) -> Self {
        match self {
            Self::Array(items) => Self::Array(items.iter().map(Self::canonical).collect()),
            Self::Mapping(map) => {
                let mut sorted: IndexMap<String, Value> = map
                    .iter()
                    .map(|(key, value)| (key.clone(), value.canonical()))
                    .collect();
                sorted.sort_keys();
                Self::Mapping(sorted)
            }
            scalar => scalar.clone(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
