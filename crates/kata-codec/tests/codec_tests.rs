//! Integration tests for serialization and typed deserialization.

use std::collections::BTreeMap;

use kata_codec::{CodecError, Rectangle, bind, deserialize, parse, serialize};
use serde_json::{Value, json};

#[test]
fn test_serialize_rectangle() {
    let text = serialize(&Rectangle::new(2.5, 4.0)).unwrap();
    assert_eq!(text, r#"{"width":2.5,"height":4.0}"#);
}

#[test]
fn test_deserialize_binds_behavior() {
    let rect: Rectangle = deserialize(r#"{"width": 6, "height": 7}"#).unwrap();
    assert_eq!(rect, Rectangle::new(6.0, 7.0));
    assert!((rect.area() - 42.0).abs() < f32::EPSILON);
}

#[test]
fn test_parse_then_bind() {
    let record = parse(r#"{"height": 2, "width": 5}"#).unwrap();
    assert_eq!(record["width"], json!(5));

    let rect: Rectangle = bind(record).unwrap();
    assert!((rect.area() - 10.0).abs() < f32::EPSILON);
}

#[test]
fn test_plain_values_round_trip() {
    let value = json!({
        "zeta": 1,
        "alpha": "text",
        "flag": true,
        "nothing": null,
        "list": [1, 2.5, "three", [false]],
        "nested": { "b": 2, "a": 1 }
    });

    let text = serialize(&value).unwrap();
    assert_eq!(
        text,
        r#"{"zeta":1,"alpha":"text","flag":true,"nothing":null,"list":[1,2.5,"three",[false]],"nested":{"b":2,"a":1}}"#
    );
    assert_eq!(deserialize::<Value>(&text).unwrap(), value);
}

#[test]
fn test_scalars_round_trip() {
    assert_eq!(serialize(&42).unwrap(), "42");
    assert_eq!(serialize("hi").unwrap(), r#""hi""#);
    assert_eq!(serialize(&Option::<u8>::None).unwrap(), "null");
    assert_eq!(deserialize::<Vec<bool>>("[true,false]").unwrap(), [true, false]);
}

#[test]
fn test_malformed_text_is_parse_error() {
    let err = deserialize::<Rectangle>(r#"{"width": 1,"#).unwrap_err();
    assert!(matches!(err, CodecError::Parse(_)));
    assert!(err.to_string().starts_with("malformed input"));

    assert!(matches!(parse("not json"), Err(CodecError::Parse(_))));
}

#[test]
fn test_wrong_fields_are_shape_error() {
    let err = deserialize::<Rectangle>(r#"{"width": 1}"#).unwrap_err();
    assert!(matches!(err, CodecError::Shape(_)));

    let err = deserialize::<Rectangle>(r#"{"width": "wide", "height": 1}"#).unwrap_err();
    assert!(matches!(err, CodecError::Shape(_)));
}

#[test]
fn test_non_string_keys_fail_to_encode() {
    let mut map = BTreeMap::new();
    let _ = map.insert(vec![1_u8], "x");
    assert!(matches!(serialize(&map), Err(CodecError::Encode(_))));
}
