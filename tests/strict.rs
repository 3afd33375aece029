use rstest::rstest;
use serde_json::json;

use formtree::{serialize_with_options, Error, SerializeOptions};

fn strict() -> SerializeOptions {
    SerializeOptions::new().with_strict(true)
}

#[rstest]
#[case::descend_through_scalar(vec![("a", "flat"), ("a.b", "deep")])]
#[case::descend_through_scalar_element(vec![("a[0]", "flat"), ("a[0].b", "deep")])]
#[case::non_numeric_key_on_array(vec![("a[]", "x"), ("a.b", "y")])]
#[case::append_to_root(vec![("[]", "v")])]
#[case::append_to_object(vec![("a.b", "1"), ("a[]", "2")])]
fn strict_mode_rejects_shape_conflicts(#[case] fields: Vec<(&str, &str)>) {
    let err = serialize_with_options(fields, &strict()).unwrap_err();
    assert!(matches!(err, Error::PathConflict { .. }));
}

#[test]
fn conflict_error_names_the_field_and_segment() {
    let err = serialize_with_options([("a", "flat"), ("a.b", "deep")], &strict()).unwrap_err();
    match err {
        Error::PathConflict { field, segment, .. } => {
            assert_eq!(field, "a.b");
            assert_eq!(segment, "a");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn strict_mode_accepts_well_formed_input() {
    let tree = serialize_with_options(
        [("a.b", "1"), ("a.c[]", "x"), ("a.c[]", "y"), ("a.b", "2")],
        &strict(),
    )
    .unwrap();
    assert_eq!(tree, json!({"a": {"b": ["1", "2"], "c": ["x", "y"]}}));
}

// The lenient counterparts of every strict rejection above: serialization
// stays total and each field still lands somewhere in the tree.

#[rstest]
#[case::descend_through_scalar(
    vec![("a", "flat"), ("a.b", "deep")],
    json!({"a": {"b": "deep"}})
)]
#[case::descend_through_scalar_element(
    vec![("a[0]", "flat"), ("a[0].b", "deep")],
    json!({"a": [{"b": "deep"}]})
)]
#[case::non_numeric_key_on_array(
    vec![("a[]", "x"), ("a.b", "y")],
    json!({"a": ["x", "y"]})
)]
#[case::append_to_root(
    vec![("[]", "v")],
    json!({"": "v"})
)]
#[case::append_to_object(
    vec![("a.b", "1"), ("a[]", "2")],
    json!({"a": {"b": "1", "": "2"}})
)]
fn lenient_mode_degrades_best_effort(
    #[case] fields: Vec<(&str, &str)>,
    #[case] expected: serde_json::Value,
) {
    let options = SerializeOptions::new();
    assert_eq!(serialize_with_options(fields, &options).unwrap(), expected);
}
