//! Key and value transform integration tests

use deepnest::{
    deep::{
        deep_equal, deep_stringify_keys, deep_stringify_values, deep_symbolize_keys,
        deep_transform_keys, deep_transform_values,
    },
    node::{Key, Mapping, Node, Scalar},
};

use crate::helpers::*;

fn upper(key: &Key) -> Key {
    Key::text(key.to_string().to_uppercase())
}

#[test]
fn test_transform_keys_uppercases_symbol_keys() {
    let node = Node::from(
        Mapping::new()
            .with(Key::symbol("str"), "String")
            .with(Key::symbol("num"), 27),
    );

    let result = deep_transform_keys(&node, upper);

    assert!(deep_equal(&result, &json(r#"{"STR": "String", "NUM": 27}"#)));
}

#[test]
fn test_transform_keys_reaches_mappings_inside_sequences() {
    let node = json(r#"{"outer": [{"inner": {"deep": 1}}, 2, [{"again": true}]]}"#);

    let result = deep_transform_keys(&node, upper);

    assert!(deep_equal(
        &result,
        &json(r#"{"OUTER": [{"INNER": {"DEEP": 1}}, 2, [{"AGAIN": true}]]}"#)
    ));
}

#[test]
fn test_transform_keys_leaves_scalars_alone() {
    let mut calls = 0;
    let result = deep_transform_keys(&json(r#"[1, "a", null]"#), |key| {
        calls += 1;
        key.clone()
    });

    assert_eq!(calls, 0);
    assert!(deep_equal(&result, &json(r#"[1, "a", null]"#)));
}

#[test]
fn test_transform_keys_collision_keeps_later_value() {
    let node = json(r#"{"a": 1, "A": 2, "b": 3}"#);

    let result = deep_transform_keys(&node, upper);
    let map = result.as_mapping().unwrap();

    assert_eq!(map.len(), 2);
    assert_eq!(map.get("A"), Some(&Node::from(2)));
    assert_eq!(key_names(&result), vec!["A", "B"]);
}

#[test]
fn test_transform_values_applies_to_every_leaf() {
    let node = json(r#"{"a": 1, "b": [2, {"c": 3}], "d": "x"}"#);

    let result = deep_transform_values(&node, |leaf| match leaf {
        Scalar::Int(n) => Scalar::Int(n * 10),
        other => other.clone(),
    });

    assert!(deep_equal(
        &result,
        &json(r#"{"a": 10, "b": [20, {"c": 30}], "d": "x"}"#)
    ));
}

#[test]
fn test_transform_values_keeps_keys_and_shape() {
    let payload = setup_nested_payload();

    let result = deep_transform_values(&payload, |_| Scalar::Null);

    assert_eq!(key_names(&result), key_names(&payload));
    let hosts = result.get(Key::symbol("hosts")).unwrap();
    assert_eq!(hosts.as_sequence().map(Vec::len), Some(2));
    assert!(result.get(Key::symbol("name")).unwrap().is_null());
}

#[test]
fn test_stringify_keys_converts_every_key_kind() {
    let node = Node::from(
        Mapping::new()
            .with(Key::symbol("sym"), 1)
            .with(Key::Int(2), 2)
            .with(Key::Bool(true), 3)
            .with("text", sym_map([("nested", 4)])),
    );

    let result = deep_stringify_keys(&node);

    assert!(deep_equal(
        &result,
        &json(r#"{"sym": 1, "2": 2, "true": 3, "text": {"nested": 4}}"#)
    ));
}

#[test]
fn test_symbolize_keys_converts_text_keys_only() {
    let node = Node::from(
        Mapping::new()
            .with("name", "x")
            .with(Key::Int(7), json(r#"{"inner": [{"leaf": 1}]}"#)),
    );

    let result = deep_symbolize_keys(&node);

    let expected = Node::from(
        Mapping::new().with(Key::symbol("name"), "x").with(
            Key::Int(7),
            Node::from(Mapping::new().with(
                Key::symbol("inner"),
                vec![sym_map([("leaf", 1)])],
            )),
        ),
    );
    assert!(deep_equal(&result, &expected));
}

#[test]
fn test_symbolize_then_stringify_round_trips_text_keys() {
    let original = json(r#"{"a": {"b": [{"c": 1}]}, "d": 2}"#);

    let symbolized = deep_symbolize_keys(&original);
    assert!(!deep_equal(&symbolized, &original));

    let restored = deep_stringify_keys(&symbolized);
    assert!(deep_equal(&restored, &original));
}

#[test]
fn test_stringify_then_symbolize_restores_symbol_keys() {
    let original = sym_map([
        (
            "servers",
            seq([
                sym_map([("host", Node::from("a")), ("tags", seq([sym_map([("k", 1)])]))]),
                sym_map([("host", Node::from("b")), ("tags", Node::sequence())]),
            ]),
        ),
        ("limits", sym_map([("cpu", 2), ("mem", 512)])),
    ]);

    let stringified = deep_stringify_keys(&original);
    assert!(stringified.as_mapping().unwrap().keys().all(|key| !key.is_symbol()));

    let restored = deep_symbolize_keys(&stringified);
    assert!(deep_equal(&restored, &original));
}

#[test]
fn test_stringify_values_renders_display_forms() {
    let node = Node::from(
        Mapping::new()
            .with("int", 1)
            .with("float", 2.5)
            .with("bool", false)
            .with("null", Node::NULL)
            .with("sym", Node::symbol("s"))
            .with("list", vec![Node::from(3), Node::from("t")]),
    );

    let result = deep_stringify_values(&node);

    assert!(deep_equal(
        &result,
        &json(
            r#"{"int": "1", "float": "2.5", "bool": "false", "null": "",
                "sym": "s", "list": ["3", "t"]}"#
        )
    ));
}

#[test]
fn test_transforms_do_not_modify_input() {
    let payload = setup_nested_payload();

    let _ = deep_stringify_keys(&payload);
    let _ = deep_stringify_values(&payload);

    assert!(deep_equal(&payload, &setup_nested_payload()));
}
