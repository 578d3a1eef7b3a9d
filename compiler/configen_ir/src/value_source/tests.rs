#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_parse_scalars() {
    let source = ValueSource::from_json_str(
        r#"{"retryCount": 4, "ratio": 0.25, "enabled": true, "name": "prod"}"#,
    )
    .unwrap();
    assert_eq!(source.get("retryCount"), Some(&Value::Integer(4)));
    assert_eq!(source.get("ratio"), Some(&Value::Float(0.25)));
    assert_eq!(source.get("enabled"), Some(&Value::Bool(true)));
    assert_eq!(source.get("name"), Some(&Value::from("prod")));
    assert_eq!(source.get("missing"), None);
}

#[test]
fn test_preserves_key_order() {
    let source = ValueSource::from_json_str(r#"{"b": 1, "a": 2, "c": 3}"#).unwrap();
    let keys: Vec<_> = source.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
}

#[test]
fn test_nested_booleans_stay_booleans() {
    let source =
        ValueSource::from_json_str(r#"{"dict": {"flag": false, "zero": 0, "inner": {"on": true}}}"#)
            .unwrap();
    let dict = source.get("dict").unwrap().as_mapping().unwrap();
    assert_eq!(dict.get("flag"), Some(&Value::Bool(false)));
    assert_eq!(dict.get("zero"), Some(&Value::Integer(0)));
    let inner = dict.get("inner").unwrap().as_mapping().unwrap();
    assert_eq!(inner.get("on"), Some(&Value::Bool(true)));
}

#[test]
fn test_top_level_must_be_object() {
    let err = ValueSource::from_json_str("[1, 2]").unwrap_err();
    assert!(matches!(err, ValueSourceError::NotAnObject { found: "array" }));
}

#[test]
fn test_null_reports_path() {
    let err = ValueSource::from_json_str(r#"{"dict": {"list": [1, null]}}"#).unwrap_err();
    match err {
        ValueSourceError::Null { path } => assert_eq!(path, "dict.list[1]"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_invalid_json() {
    let err = ValueSource::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, ValueSourceError::Json(_)));
}

#[test]
fn test_insert_replaces_in_place() {
    let mut source: ValueSource = [("a", 1_i64), ("b", 2_i64)].into_iter().collect();
    source.insert("a", Value::from("x"));
    source.insert("c", Value::from(true));
    let keys: Vec<_> = source.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["a", "b", "c"]);
    assert_eq!(source.get("a"), Some(&Value::from("x")));
    assert_eq!(source.len(), 3);
}

#[test]
fn test_canonical_ignores_order() {
    let first = ValueSource::from_json_str(r#"{"a": 1, "b": {"x": 1, "y": 2}}"#).unwrap();
    let second = ValueSource::from_json_str(r#"{"b": {"y": 2, "x": 1}, "a": 1}"#).unwrap();
    let first_keys: Vec<_> = first.iter().map(|(k, _)| k).collect();
    assert_eq!(first_keys, vec!["a", "b"]);
    assert_eq!(
        serde_json::to_string(&first.canonical()).unwrap(),
        serde_json::to_string(&second.canonical()).unwrap()
    );
}
