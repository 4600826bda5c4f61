//! DeepOps extension method tests

use deepnest::{
    DeepOps,
    node::{Key, Mapping, Node, Scalar},
};
use serde_json::json as json_value;

use crate::helpers::*;

#[test]
fn test_methods_on_node_match_free_functions() {
    let payload = setup_nested_payload();

    assert!(payload.deep_dup().deep_equal(&payload));
    assert!(
        payload
            .deep_stringify_keys()
            .deep_symbolize_keys()
            .deep_equal(&payload.deep_transform_keys(|k| k.to_text().to_symbol()))
    );
    assert!(
        payload
            .deep_stringify_values()
            .deep_equal(&deepnest::deep_stringify_values(&payload))
    );
}

#[test]
fn test_merge_on_mapping_receiver() {
    let base = Mapping::new().with("a", 100).with("b", 200);
    let overlay = Mapping::new().with("b", 300).with("c", 400);

    let merged = base.deep_merge(&overlay).unwrap();
    assert_eq!(merged, Mapping::new().with("a", 100).with("b", 300).with("c", 400));

    let summed = base.deep_merge_with(&overlay, sum_ints).unwrap();
    assert_eq!(summed.get("b"), Some(&Node::from(500)));
}

#[test]
fn test_mapping_receiver_rejects_scalar_overlay() {
    let base = Mapping::new().with("a", 1);
    let err = base.deep_merge(&5i64).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_scalar_receivers() {
    assert!(1i64.deep_equal(&Node::from(1)));
    assert!(!1i64.deep_equal(&1.0f64));
    assert!("hi".deep_equal(&String::from("hi")));
    assert!(true.deep_equal(&Scalar::Bool(true)));

    assert_eq!(42i64.deep_dup(), Node::from(42));
    assert_eq!(2.5f64.deep_stringify_values(), Node::from("2.5"));
    assert_eq!("x".deep_stringify_keys(), Node::from("x"));

    let err = "text".deep_merge(&Mapping::new()).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_every_numeric_width_is_a_receiver() {
    assert_eq!(42i32.deep_dup(), Node::from(42i64));
    assert!(7u32.deep_equal(&7i64));
    assert!(1.5f32.deep_equal(&1.5f64));
    assert_eq!(0.25f32.deep_stringify_values(), Node::from("0.25"));

    // Width does not change the scalar type: integers stay distinct from floats
    assert!(!3i32.deep_equal(&3.0f32));
    assert!(
        5u32.deep_merge(&Mapping::new())
            .unwrap_err()
            .is_invalid_argument()
    );
}

#[test]
fn test_sequence_receiver() {
    let list = vec![Node::from(Mapping::new().with("k", 1)), Node::from(2)];

    let symbolized = list.deep_symbolize_keys();
    assert!(symbolized.deep_equal(&seq([sym_map([("k", 1)]), Node::from(2)])));

    assert!(list.deep_merge(&Mapping::new()).unwrap_err().is_invalid_argument());
}

#[test]
fn test_json_value_receiver() {
    let defaults = json_value!({"server": {"port": 80, "tls": false}, "name": "svc"});
    let local = json_value!({"server": {"tls": true}});

    let merged = defaults.deep_merge(&local).unwrap();

    assert!(merged.deep_equal(&json_value!({
        "server": {"port": 80, "tls": true},
        "name": "svc"
    })));
    assert_eq!(
        merged.get("server").and_then(|s| s.get("tls")),
        Some(&Node::from(true))
    );
}

#[test]
fn test_mixed_receivers_compare_structurally() {
    let from_json = json_value!({"a": [1, "b"]});
    let built = Mapping::new().with("a", vec![Node::from(1), Node::from("b")]);
    let node = json(r#"{"a": [1, "b"]}"#);

    assert!(from_json.deep_equal(&built));
    assert!(built.deep_equal(&node));
    assert!(node.deep_equal(&from_json));
}

#[test]
fn test_transform_closures_through_methods() {
    let node = json(r#"{"count": 1, "nested": {"count": 2}}"#);

    let renamed = node.deep_transform_keys(|key| match key.as_str() {
        Some("count") => Key::text("total"),
        _ => key.clone(),
    });
    assert!(renamed.deep_equal(&json(r#"{"total": 1, "nested": {"total": 2}}"#)));

    let negated = node.deep_transform_values(|leaf| match leaf.as_int() {
        Some(n) => Scalar::Int(-n),
        None => leaf.clone(),
    });
    assert!(negated.deep_equal(&json(r#"{"count": -1, "nested": {"count": -2}}"#)));
}
