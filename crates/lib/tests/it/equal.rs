//! deep_equal integration tests

use deepnest::{
    deep::{deep_dup, deep_equal},
    node::{Key, Mapping, Node},
};

use crate::helpers::*;

#[test]
fn test_equal_sequences_of_mixed_scalars() {
    let left = Node::from_iter([
        Node::from(1),
        Node::from("hi"),
        Node::from(2.0),
        Node::from(true),
    ]);
    let right = deep_dup(&left);
    assert!(deep_equal(&left, &right));

    let reordered = Node::from_iter([
        Node::from("hi"),
        Node::from(1),
        Node::from(2.0),
        Node::from(true),
    ]);
    assert!(!deep_equal(&left, &reordered));
}

#[test]
fn test_equal_is_reflexive() {
    let payload = setup_nested_payload();
    assert!(deep_equal(&payload, &payload));

    let nan = Node::from(f64::NAN);
    assert!(deep_equal(&nan, &nan));
}

#[test]
fn test_equal_is_symmetric() {
    let pairs = [
        (json(r#"{"a": 1}"#), json(r#"{"a": 1, "b": 2}"#)),
        (json("[1, 2]"), json("[1, 2, 3]")),
        (json(r#"{"a": [1]}"#), json(r#"{"a": [1]}"#)),
        (Node::from(1), Node::from(1.0)),
    ];
    for (a, b) in &pairs {
        assert_eq!(deep_equal(a, b), deep_equal(b, a), "{a} vs {b}");
    }
}

#[test]
fn test_scalar_type_is_part_of_equality() {
    assert!(!deep_equal(&Node::from(1), &Node::from(1.0)));
    assert!(!deep_equal(&Node::from(1), &Node::from("1")));
    assert!(!deep_equal(&Node::from("a"), &Node::symbol("a")));
    assert!(!deep_equal(&Node::NULL, &Node::from(false)));
    assert!(!deep_equal(&Node::from(0), &Node::from(false)));
}

#[test]
fn test_mapping_order_is_ignored() {
    let left = json(r#"{"a": 1, "b": {"c": 2, "d": 3}}"#);
    let right = json(r#"{"b": {"d": 3, "c": 2}, "a": 1}"#);
    assert!(deep_equal(&left, &right));
}

#[test]
fn test_sequence_order_is_significant_at_depth() {
    let left = json(r#"{"a": {"list": [1, 2]}}"#);
    let right = json(r#"{"a": {"list": [2, 1]}}"#);
    assert!(!deep_equal(&left, &right));
}

#[test]
fn test_different_kinds_are_never_equal() {
    let kinds = [Node::mapping(), Node::sequence(), Node::NULL];
    for (i, a) in kinds.iter().enumerate() {
        for (j, b) in kinds.iter().enumerate() {
            assert_eq!(deep_equal(a, b), i == j, "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn test_mappings_with_different_key_sets() {
    let left = json(r#"{"a": 1, "b": null}"#);
    let right = json(r#"{"a": 1, "c": null}"#);
    assert!(!deep_equal(&left, &right));

    let missing = json(r#"{"a": 1}"#);
    assert!(!deep_equal(&left, &missing));
    assert!(!deep_equal(&missing, &left));
}

#[test]
fn test_key_type_matters() {
    let int_key = Node::from(Mapping::new().with(Key::Int(1), "x"));
    let text_key = Node::from(Mapping::new().with("1", "x"));
    assert!(!deep_equal(&int_key, &text_key));

    let symbol_key = sym_map([("a", 1)]);
    assert!(!deep_equal(&symbol_key, &json(r#"{"a": 1}"#)));
}
