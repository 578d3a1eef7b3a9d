//! Variable declarations.

use crate::TypeTag;

/// One declared configuration property: a name and its semantic type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct VariableSpec {
    pub name: String,
    pub type_tag: TypeTag,
}

impl VariableSpec {
    pub fn new(name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self {
            name: name.into(),
            type_tag,
        }
    }
}
