//! Byte array literals.
//!
//! Bytes are rendered as `UInt8(n)` expressions joined with `", "`, the
//! element form both built-in targets accept inside an array initializer.

/// Render bytes as a comma-separated list of `UInt8(n)` expressions.
///
/// ```
/// use configen_codegen::bytes::to_literal;
///
/// assert_eq!(to_literal(b"Hi"), "UInt8(72), UInt8(105)");
/// assert_eq!(to_literal(&[]), "");
/// ```
pub fn to_literal(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 11);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str("UInt8(");
        out.push_str(&byte.to_string());
        out.push(')');
    }
    out
}

/// Recover the bytes listed in a literal produced by [`to_literal`].
///
/// Returns `None` if any element is not a `UInt8(n)` expression with `n`
/// in 0..=255.
pub fn parse_literal(text: &str) -> Option<Vec<u8>> {
    let text = text.trim();
    if text.is_empty() {
        return Some(Vec::new());
    }
    text.split(',')
        .map(|element| {
            element
                .trim()
                .strip_prefix("UInt8(")?
                .strip_suffix(')')?
                .parse::<u8>()
                .ok()
        })
        .collect()
}
