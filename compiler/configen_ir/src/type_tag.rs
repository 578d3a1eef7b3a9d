//! Semantic type tags.
//!
//! A `TypeTag` decides how a variable is declared and how its value is
//! rendered. The set is closed: any type name the mapping file uses that is
//! not one of the built-in names becomes `Custom` and is passed through to the
//! templates verbatim.

use std::fmt;

/// Semantic type of a configuration variable.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeTag {
    /// Floating point number.
    Double,
    /// Integer number.
    Int,
    /// Quoted string.
    String,
    /// Boolean, rendered with the template's true/false strings.
    Bool,
    /// Absolute URL with a host.
    Url,
    /// Key material for encrypted fields; rendered as a byte array.
    EncryptionKey,
    /// String rendered as the list of its UTF-8 bytes.
    ByteArray,
    /// String encrypted with the `EncryptionKey` field, rendered as bytes.
    Encrypted,
    /// Nested mapping rendered as a dictionary literal.
    Dictionary,
    /// Any other type name; the value is substituted verbatim.
    Custom(String),
}

impl TypeTag {
    /// Resolve a mapping-file type name.
    ///
    /// Matching is exact and case-sensitive, `"url"` is a custom type.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Double" => Self::Double,
            "Int" => Self::Int,
            "String" => Self::String,
            "Bool" => Self::Bool,
            "URL" => Self::Url,
            "EncryptionKey" => Self::EncryptionKey,
            "ByteArray" => Self::ByteArray,
            "Encrypted" => Self::Encrypted,
            "Dictionary" => Self::Dictionary,
            other => Self::Custom(other.to_string()),
        }
    }

    /// The name as written in a mapping file.
    pub fn name(&self) -> &str {
        match self {
            Self::Double => "Double",
            Self::Int => "Int",
            Self::String => "String",
            Self::Bool => "Bool",
            Self::Url => "URL",
            Self::EncryptionKey => "EncryptionKey",
            Self::ByteArray => "ByteArray",
            Self::Encrypted => "Encrypted",
            Self::Dictionary => "Dictionary",
            Self::Custom(name) => name,
        }
    }

    /// Whether values of this type are emitted as a byte list.
    pub fn is_byte_array(&self) -> bool {
        matches!(self, Self::EncryptionKey | Self::ByteArray | Self::Encrypted)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
