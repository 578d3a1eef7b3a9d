//! Mapping files: the ordered list of declared variables.
//!
//! # Format
//!
//! ```text
//! // comments start with `//` or `#`
//! entryPointURL : URL
//! retryCount    : Int
//! environment   : Environment
//! ```
//!
//! One `name : Type` pair per line. Blank lines and comments are skipped.
//! Declaration order is output order.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{TypeTag, VariableSpec};

/// A malformed mapping line.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct MappingError {
    /// 1-based line number.
    pub line: usize,
    pub message: String,
}

/// Ordered variable declarations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mapping {
    specs: Vec<VariableSpec>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse mapping-file text.
    ///
    /// A name declared twice keeps its first position and takes the type of
    /// its last declaration.
    pub fn parse(text: &str) -> Result<Self, MappingError> {
        let mut specs: Vec<VariableSpec> = Vec::new();
        let mut positions: FxHashMap<String, usize> = FxHashMap::default();

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with("//") || line.starts_with('#') {
                continue;
            }

            let Some((name, type_name)) = line.split_once(':') else {
                return Err(MappingError {
                    line: index + 1,
                    message: format!("expected `name : Type`, found `{line}`"),
                });
            };
            let (name, type_name) = (name.trim(), type_name.trim());
            if name.is_empty() {
                return Err(MappingError {
                    line: index + 1,
                    message: "missing variable name before `:`".to_string(),
                });
            }
            if type_name.is_empty() {
                return Err(MappingError {
                    line: index + 1,
                    message: format!("missing type for `{name}`"),
                });
            }

            let spec = VariableSpec::new(name, TypeTag::from_name(type_name));
            if let Some(&position) = positions.get(name) {
                tracing::warn!(name, line = index + 1, "variable declared more than once");
                specs[position] = spec;
            } else {
                positions.insert(name.to_string(), specs.len());
                specs.push(spec);
            }
        }

        tracing::debug!(count = specs.len(), "parsed mapping");
        Ok(Self { specs })
    }

    pub fn push(&mut self, spec: VariableSpec) {
        self.specs.push(spec);
    }

    pub fn specs(&self) -> &[VariableSpec] {
        &self.specs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VariableSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// First variable declared with the given type.
    pub fn first_of_type(&self, type_tag: &TypeTag) -> Option<&VariableSpec> {
        self.specs.iter().find(|spec| &spec.type_tag == type_tag)
    }
}

impl FromIterator<VariableSpec> for Mapping {
    fn from_iter<I: IntoIterator<Item = VariableSpec>>(iter: I) -> Self {
        Self {
            specs: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = &'a VariableSpec;
    type IntoIter = std::slice::Iter<'a, VariableSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}
