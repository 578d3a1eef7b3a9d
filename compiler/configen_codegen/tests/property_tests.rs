//! Property-based tests for the generation engine.
//!
//! These tests use proptest to verify:
//! 1. Byte literals round-trip for arbitrary bytes
//! 2. Output line order follows mapping order
//! 3. Generation is deterministic
//! 4. Any change to the value source changes the derived IV

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use configen_codegen::bytes::{parse_literal, to_literal};
use configen_codegen::encryption::derive_iv;
use configen_codegen::{render_declarations, render_definitions, Target};
use configen_ir::{Mapping, TypeTag, Value, ValueSource, VariableSpec};
use proptest::prelude::*;

// -- Strategies --

/// Unique identifiers in random order.
fn names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z][a-zA-Z0-9]{0,12}", 1..12)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

/// A (type, value) pair that renders without error.
fn typed_value_strategy() -> impl Strategy<Value = (TypeTag, Value)> {
    prop_oneof![
        any::<i64>().prop_map(|n| (TypeTag::Int, Value::Integer(n))),
        (-1.0e6f64..1.0e6).prop_map(|f| (TypeTag::Double, Value::Float(f))),
        "[a-zA-Z0-9 ]{0,16}".prop_map(|s| (TypeTag::String, Value::String(s))),
        any::<bool>().prop_map(|b| (TypeTag::Bool, Value::Bool(b))),
        "[a-z]{1,10}".prop_map(|host| (
            TypeTag::Url,
            Value::String(format!("https://{host}.example.com/"))
        )),
        "[ -~]{0,16}".prop_map(|s| (TypeTag::ByteArray, Value::String(s))),
    ]
}

fn inputs_strategy() -> impl Strategy<Value = (Mapping, ValueSource)> {
    names_strategy().prop_flat_map(|names| {
        let count = names.len();
        prop::collection::vec(typed_value_strategy(), count).prop_map(move |typed| {
            let mut mapping = Mapping::new();
            let mut values = ValueSource::new();
            for (name, (type_tag, value)) in names.iter().zip(typed) {
                mapping.push(VariableSpec::new(name.clone(), type_tag));
                values.insert(name.clone(), value);
            }
            (mapping, values)
        })
    })
}

fn swift_field_names(source: &str) -> Vec<String> {
    source
        .lines()
        .filter_map(|line| line.strip_prefix("  static let "))
        .map(|rest| rest.split(':').next().unwrap_or_default().to_string())
        .collect()
}

fn objc_declared_names(source: &str) -> Vec<String> {
    source
        .lines()
        .filter(|line| line.starts_with("+ ("))
        .filter_map(|line| line.rsplit(')').next())
        .map(|rest| rest.trim_end_matches(';').to_string())
        .collect()
}

// -- Properties --

proptest! {
    #[test]
    fn byte_literal_round_trips(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let literal = to_literal(&bytes);
        prop_assert_eq!(parse_literal(&literal), Some(bytes));
    }

    #[test]
    fn byte_literal_element_count(bytes in prop::collection::vec(any::<u8>(), 1..64)) {
        let literal = to_literal(&bytes);
        prop_assert_eq!(literal.matches("UInt8(").count(), bytes.len());
        prop_assert_eq!(literal.matches(", ").count(), bytes.len() - 1);
    }

    #[test]
    fn definitions_follow_mapping_order((mapping, values) in inputs_strategy()) {
        let template = Target::Swift.definitions("Env");
        let out = render_definitions(&mapping, &values, &template, "").unwrap();
        let expected: Vec<String> = mapping.iter().map(|spec| spec.name.clone()).collect();
        prop_assert_eq!(swift_field_names(&out), expected);
    }

    #[test]
    fn declarations_follow_mapping_order((mapping, _values) in inputs_strategy()) {
        let template = Target::ObjectiveC.declarations("Env").expect("objc has a header");
        let out = render_declarations(&mapping, &template, "");
        let expected: Vec<String> = mapping.iter().map(|spec| spec.name.clone()).collect();
        prop_assert_eq!(objc_declared_names(&out), expected);
    }

    #[test]
    fn generation_is_deterministic((mapping, values) in inputs_strategy()) {
        let template = Target::Swift.definitions("Env");
        let first = render_definitions(&mapping, &values, &template, "// n\n").unwrap();
        let second = render_definitions(&mapping.clone(), &values.clone(), &template, "// n\n").unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn iv_tracks_every_value(
        (_mapping, values) in inputs_strategy(),
        index in any::<prop::sample::Index>(),
        replacement in "[a-z]{1,8}",
    ) {
        let (name, original) = values.iter().nth(index.index(values.len())).unwrap();
        let name = name.to_string();
        let changed_value = Value::String(format!("{replacement}-changed"));
        prop_assume!(original != &changed_value);

        let mut changed = values.clone();
        changed.insert(name, changed_value);
        prop_assert_ne!(derive_iv(&values).unwrap(), derive_iv(&changed).unwrap());
    }
}
