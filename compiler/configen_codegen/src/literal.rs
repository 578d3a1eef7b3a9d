//! Value coercion and literal rendering.
//!
//! Checks that a value's dynamic type fits the variable's semantic type and
//! renders the text that replaces [`VALUE_TOKEN`](crate::VALUE_TOKEN).

use configen_ir::{TypeTag, Value, VariableSpec};
use indexmap::IndexMap;
use url::Url;

use crate::encryption::EncryptionSetup;
use crate::{bytes, DictionaryStyle, GenerateError, Template};

/// Render the literal for one variable.
///
/// `encryption` is consulted only for `Encrypted` variables.
pub fn render_literal(
    spec: &VariableSpec,
    value: &Value,
    template: &Template,
    encryption: &EncryptionSetup,
) -> Result<String, GenerateError> {
    let name = spec.name.as_str();
    match &spec.type_tag {
        TypeTag::Double => match value {
            Value::Integer(n) => Ok(n.to_string()),
            Value::Float(f) => Ok(float_text(*f)),
            other => Err(GenerateError::type_mismatch(name, "number", other)),
        },
        TypeTag::Int => match value {
            Value::Integer(n) => Ok(n.to_string()),
            other => Err(GenerateError::type_mismatch(name, "integer", other)),
        },
        TypeTag::String => Ok(escape_string(expect_string(name, value)?)),
        TypeTag::Bool => value
            .as_bool()
            .map(|b| template.bool_string(b).to_string())
            .ok_or_else(|| GenerateError::type_mismatch(name, "boolean", value)),
        TypeTag::Url => {
            let raw = expect_string(name, value)?;
            validate_url(name, raw)?;
            Ok(escape_string(raw))
        }
        TypeTag::EncryptionKey | TypeTag::ByteArray => {
            Ok(bytes::to_literal(expect_string(name, value)?.as_bytes()))
        }
        TypeTag::Encrypted => {
            let ciphertext = encryption.encrypt_field(name, value)?;
            Ok(bytes::to_literal(&ciphertext))
        }
        TypeTag::Dictionary => value
            .as_mapping()
            .map(|map| dictionary_literal(map, template.dictionary_style))
            .ok_or_else(|| GenerateError::type_mismatch(name, "mapping", value)),
        TypeTag::Custom(_) => Ok(expect_string(name, value)?.to_string()),
    }
}

fn expect_string<'v>(name: &str, value: &'v Value) -> Result<&'v str, GenerateError> {
    value
        .as_str()
        .ok_or_else(|| GenerateError::type_mismatch(name, "string", value))
}

/// A URL is accepted only if it parses as absolute and has a non-empty host.
fn validate_url(name: &str, raw: &str) -> Result<(), GenerateError> {
    let has_host = Url::parse(raw)
        .ok()
        .and_then(|url| url.host_str().map(|host| !host.is_empty()))
        .unwrap_or(false);
    if has_host {
        Ok(())
    } else {
        Err(GenerateError::InvalidUrl {
            name: name.to_string(),
            value: raw.to_string(),
        })
    }
}

/// Render a mapping as a dictionary literal in the given style.
///
/// Entries keep value-source order. Booleans render as booleans, never as
/// the numbers 0/1.
pub fn dictionary_literal(map: &IndexMap<String, Value>, style: DictionaryStyle) -> String {
    let entries: Vec<String> = map
        .iter()
        .map(|(key, value)| {
            format!(
                "{}: {}",
                quoted(key, style),
                element_literal(value, style)
            )
        })
        .collect();

    match style {
        DictionaryStyle::Swift if entries.is_empty() => "[:]".to_string(),
        DictionaryStyle::Swift => format!("[{}]", entries.join(", ")),
        DictionaryStyle::ObjectiveC => format!("@{{{}}}", entries.join(", ")),
    }
}

fn element_literal(value: &Value, style: DictionaryStyle) -> String {
    match (value, style) {
        // Nested empties need a type; only the outer literal is annotated.
        (Value::Mapping(map), DictionaryStyle::Swift) if map.is_empty() => {
            "[:] as [String: Any]".to_string()
        }
        (Value::Array(items), DictionaryStyle::Swift) if items.is_empty() => {
            "[] as [Any]".to_string()
        }
        (Value::String(s), _) => quoted(s, style),
        (Value::Mapping(map), _) => dictionary_literal(map, style),

        (Value::Integer(n), DictionaryStyle::Swift) => n.to_string(),
        (Value::Float(f), DictionaryStyle::Swift) => float_text(*f),
        (Value::Bool(b), DictionaryStyle::Swift) => b.to_string(),
        (Value::Array(items), DictionaryStyle::Swift) => {
            format!("[{}]", join_elements(items, style))
        }

        (Value::Integer(n), DictionaryStyle::ObjectiveC) => format!("@({n})"),
        (Value::Float(f), DictionaryStyle::ObjectiveC) => format!("@({})", float_text(*f)),
        (Value::Bool(b), DictionaryStyle::ObjectiveC) => {
            if *b { "@YES" } else { "@NO" }.to_string()
        }
        (Value::Array(items), DictionaryStyle::ObjectiveC) => {
            format!("@[{}]", join_elements(items, style))
        }
    }
}

fn join_elements(items: &[Value], style: DictionaryStyle) -> String {
    items
        .iter()
        .map(|item| element_literal(item, style))
        .collect::<Vec<_>>()
        .join(", ")
}

fn quoted(s: &str, style: DictionaryStyle) -> String {
    match style {
        DictionaryStyle::Swift => format!("\"{}\"", escape_string(s)),
        DictionaryStyle::ObjectiveC => format!("@\"{}\"", escape_string(s)),
    }
}

/// Debug formatting keeps a trailing `.0` so whole floats stay floats.
fn float_text(f: f64) -> String {
    format!("{f:?}")
}

/// Escape a string for a double-quoted literal.
pub fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}
