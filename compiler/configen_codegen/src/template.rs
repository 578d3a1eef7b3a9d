//! Output templates.
//!
//! A template is plain text with a fixed token vocabulary. Rendering is
//! `str::replace` of each token; there is no escaping, nesting or control
//! flow. Declarations and definitions use separate `Template` values that
//! share the tokens below.

use configen_ir::TypeTag;

/// Replaced with the variable name in every line pattern.
pub const VARIABLE_NAME_TOKEN: &str = "$VARIABLE_NAME";
/// Replaced with the rendered literal in definition line patterns.
pub const VALUE_TOKEN: &str = "$VALUE";
/// Replaced with the custom type name in the custom line pattern.
pub const CUSTOM_TYPE_TOKEN: &str = "$CUSTOM_TYPE";
/// Replaced with the concatenated lines in the skeleton.
pub const BODY_TOKEN: &str = "$BODY";

/// Literal syntax used when rendering `Dictionary` values.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum DictionaryStyle {
    /// `["key": 1, "flag": true]`, `[:]` when empty.
    Swift,
    /// `@{@"key": @(1), @"flag": @YES}`.
    ObjectiveC,
}

/// One line pattern per semantic type.
///
/// `EncryptionKey`, `ByteArray` and `Encrypted` all use `byte_array`, or
/// `empty_byte_array` when they render no bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinePatterns {
    pub double: String,
    pub integer: String,
    pub string: String,
    pub boolean: String,
    pub url: String,
    pub byte_array: String,
    pub empty_byte_array: String,
    pub dictionary: String,
    pub custom: String,
}

/// Skeleton, imports and per-type line patterns for one output file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    /// Emitted after the auto-generation notice.
    pub imports: String,
    /// File body containing [`BODY_TOKEN`].
    pub skeleton: String,
    pub patterns: LinePatterns,
    /// Appended to every rendered line (`;` for C-family headers).
    pub line_terminator: String,
    pub true_string: String,
    pub false_string: String,
    pub dictionary_style: DictionaryStyle,
}

impl Template {
    /// Line pattern for a type, with the custom type token already resolved.
    pub fn line_for(&self, type_tag: &TypeTag) -> String {
        let patterns = &self.patterns;
        match type_tag {
            TypeTag::Double => patterns.double.clone(),
            TypeTag::Int => patterns.integer.clone(),
            TypeTag::String => patterns.string.clone(),
            TypeTag::Bool => patterns.boolean.clone(),
            TypeTag::Url => patterns.url.clone(),
            TypeTag::EncryptionKey | TypeTag::ByteArray | TypeTag::Encrypted => {
                patterns.byte_array.clone()
            }
            TypeTag::Dictionary => patterns.dictionary.clone(),
            TypeTag::Custom(name) => patterns.custom.replace(CUSTOM_TYPE_TOKEN, name),
        }
    }

    /// Line pattern for a rendered definition.
    pub fn definition_line_for(&self, type_tag: &TypeTag, literal: &str) -> String {
        if type_tag.is_byte_array() && literal.is_empty() {
            self.patterns.empty_byte_array.clone()
        } else {
            self.line_for(type_tag)
        }
    }

    pub fn bool_string(&self, value: bool) -> &str {
        if value {
            &self.true_string
        } else {
            &self.false_string
        }
    }

    /// Wrap rendered lines into a complete file.
    pub fn assemble(&self, notice: &str, body: &str) -> String {
        let mut out = String::with_capacity(
            notice.len() + self.imports.len() + self.skeleton.len() + body.len(),
        );
        out.push_str(notice);
        out.push_str(&self.imports);
        out.push_str(&self.skeleton.replace(BODY_TOKEN, body));
        out
    }
}
