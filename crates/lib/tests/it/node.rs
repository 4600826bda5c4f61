//! Node model and JSON interop tests

use deepnest::{
    DeepOps,
    node::{Key, Kind, Mapping, Node, Scalar},
};
use serde_json::json as json_value;

use crate::helpers::*;

#[test]
fn test_classify_covers_every_kind() {
    assert_eq!(Node::mapping().classify(), Kind::Mapping);
    assert_eq!(Node::sequence().classify(), Kind::Sequence);
    for scalar in [Node::NULL, Node::from(1), Node::from("a"), Node::symbol("s")] {
        assert_eq!(scalar.classify(), Kind::Scalar);
    }
}

#[test]
fn test_json_numbers_keep_integer_and_float_apart() {
    let node = json(r#"{"int": 1, "float": 1.0, "big": 18446744073709551615}"#);

    assert_eq!(node.get("int").and_then(Node::as_scalar), Some(&Scalar::Int(1)));
    assert_eq!(
        node.get("float").and_then(Node::as_scalar),
        Some(&Scalar::Float(1.0))
    );
    assert!(matches!(
        node.get("big").and_then(Node::as_scalar),
        Some(Scalar::Float(_))
    ));
}

#[test]
fn test_json_round_trip_through_text() {
    let original = json(r#"{"a": [1, 2.5, "x", null, true], "b": {"c": {}}}"#);

    let rendered = original.to_json_string().unwrap();
    let parsed = Node::from_json_str(&rendered).unwrap();

    assert!(parsed.deep_equal(&original));
}

#[test]
fn test_symbols_render_as_json_strings() {
    let node = Node::from(
        Mapping::new()
            .with(Key::symbol("kind"), Node::symbol("web"))
            .with(Key::Int(1), "one"),
    );

    let value = node.to_json().unwrap();
    assert_eq!(value, json_value!({"kind": "web", "1": "one"}));
}

#[test]
fn test_non_finite_float_fails_json_conversion() {
    let node = Node::from(Mapping::new().with("bad", f64::INFINITY));

    let err = node.to_json().unwrap_err();
    assert!(err.is_serialization_error());
    assert!(!err.is_invalid_argument());
}

#[test]
fn test_invalid_json_is_a_serialization_error() {
    let err = Node::from_json_str("{not json").unwrap_err();
    assert!(err.is_serialization_error());
    assert_eq!(err.module(), "serialize");
}

#[test]
fn test_from_json_value_matches_parsed_text() {
    let value = json_value!({"a": {"b": [1, {"c": null}]}});
    let from_value = Node::from(&value);
    let from_text = json(r#"{"a": {"b": [1, {"c": null}]}}"#);

    assert!(from_value.deep_equal(&from_text));
}

#[test]
fn test_serde_deserializes_mapping_directly() {
    let map: Mapping = serde_json::from_str(r#"{"x": 1, "y": [true]}"#).unwrap();
    assert_eq!(map.get("x"), Some(&Node::from(1)));
    assert_eq!(map.len(), 2);

    let not_map = serde_json::from_str::<Mapping>("[1, 2]");
    assert!(not_map.is_err());
}

#[test]
fn test_display_forms() {
    let node = Node::from(
        Mapping::new()
            .with("t", "text")
            .with(Key::symbol("s"), Node::symbol("sym"))
            .with("n", Node::NULL)
            .with("l", vec![Node::from(1), Node::from(1.5)]),
    );
    assert_eq!(
        node.to_string(),
        r#"{"t": "text", s: :sym, "n": null, "l": [1, 1.5]}"#
    );
}

#[test]
fn test_type_names() {
    let payload = setup_nested_payload();
    let names: Vec<_> = payload
        .as_mapping()
        .unwrap()
        .values()
        .map(Node::type_name)
        .collect();
    assert_eq!(
        names,
        vec![
            "text", "int", "float", "bool", "null", "symbol", "sequence", "mapping", "text",
        ]
    );
}
