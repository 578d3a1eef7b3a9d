//! End-to-end tests for encrypted fields.
//!
//! The ciphertext is read back out of the generated Swift source and
//! decrypted with the key and the published IV.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use configen_codegen::bytes::parse_literal;
use configen_codegen::{EncryptionConfig, GenerateError, Generator, Target};
use configen_ir::{Mapping, ValueSource};
use pretty_assertions::assert_eq;

const KEY: &str = "0123456789abcdef0123456789abcdef";

fn mapping() -> Mapping {
    Mapping::parse("apiSecret : Encrypted\nencryptionKey : EncryptionKey\nhost : URL\n").unwrap()
}

fn values(secret: &str) -> ValueSource {
    ValueSource::from_json_str(&format!(
        r#"{{"apiSecret": "{secret}", "encryptionKey": "{KEY}", "host": "https://api.example.com"}}"#
    ))
    .unwrap()
}

fn generate(values: &ValueSource) -> String {
    let files = Generator::new("Secrets", Target::Swift)
        .generate(&mapping(), values)
        .unwrap();
    files.into_iter().next().unwrap().contents
}

/// Bytes of `static let <name>: [UInt8] = [...]`.
fn byte_field(source: &str, name: &str) -> Vec<u8> {
    let prefix = format!("  static let {name}: [UInt8] = [");
    let line = source
        .lines()
        .find(|line| line.starts_with(&prefix))
        .unwrap();
    let list = line.strip_prefix(&prefix).unwrap().strip_suffix(']').unwrap();
    parse_literal(list).unwrap()
}

#[test]
fn encrypted_field_round_trips() {
    let source = generate(&values("s3cr3t value"));
    let iv = byte_field(&source, "encryptionKeyIV");
    let key = byte_field(&source, "encryptionKey");
    let ciphertext = byte_field(&source, "apiSecret");
    assert_eq!(key, KEY.as_bytes());
    assert_eq!(iv.len(), 16);

    let config = EncryptionConfig {
        key,
        iv: String::from_utf8(iv).unwrap(),
        field_name: "encryptionKey".to_string(),
    };
    assert_eq!(
        config.decrypt("apiSecret", &ciphertext).unwrap(),
        b"s3cr3t value"
    );
}

#[test]
fn iv_field_is_last_line() {
    let source = generate(&values("x"));
    let fields: Vec<&str> = source
        .lines()
        .filter_map(|line| line.strip_prefix("  static let "))
        .map(|rest| rest.split(':').next().unwrap())
        .collect();
    assert_eq!(
        fields,
        vec!["apiSecret", "encryptionKey", "host", "encryptionKeyIV"]
    );
}

#[test]
fn same_input_same_ciphertext() {
    assert_eq!(generate(&values("abc")), generate(&values("abc")));
}

#[test]
fn changed_input_changes_iv_and_ciphertext() {
    let first = generate(&values("abc"));
    let mut changed = values("abc");
    changed.insert("host", "https://api2.example.com");
    let second = generate(&changed);

    assert_ne!(
        byte_field(&first, "encryptionKeyIV"),
        byte_field(&second, "encryptionKeyIV")
    );
    assert_ne!(byte_field(&first, "apiSecret"), byte_field(&second, "apiSecret"));
}

#[test]
fn encrypted_without_key_field_fails() {
    let mapping = Mapping::parse("apiSecret : Encrypted").unwrap();
    let values = ValueSource::from_json_str(r#"{"apiSecret": "x"}"#).unwrap();
    let err = Generator::new("Secrets", Target::Swift)
        .generate(&mapping, &values)
        .unwrap_err();
    assert!(matches!(err, GenerateError::EncryptionMisconfigured { .. }));
}

#[test]
fn invalid_key_length_fails() {
    let mapping = Mapping::parse("k : EncryptionKey\ns : Encrypted").unwrap();
    let values = ValueSource::from_json_str(r#"{"k": "too short", "s": "x"}"#).unwrap();
    let err = Generator::new("Secrets", Target::Swift)
        .generate(&mapping, &values)
        .unwrap_err();
    assert!(matches!(err, GenerateError::EncryptionFailure { ref name, .. } if name == "s"));
}
