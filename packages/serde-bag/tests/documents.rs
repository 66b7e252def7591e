//! Layering JSON documents into one bag.

use databag_serde::{bag_from_json_str, bag_to_json, Bag, DataBag, TypedBag, Value};
use serde::Deserialize;

const DEFAULTS: &str = r#"{
    "messages": {
        "foo": {"bar": "This is test"},
        "boo": "This is boo value"
    }
}"#;

const OVERRIDES: &str = r#"{
    "messages": {
        "foo": {"bar": "This is another test"},
        "bar": {"foo": "This is a test"}
    },
    "validations": {
        "invalid": {"foo": "Invalid value"}
    }
}"#;

#[derive(Debug, PartialEq, Deserialize)]
struct Invalid {
    foo: String,
}

#[test]
fn merged_documents_resolve_by_namespace() {
    let mut bag = bag_from_json_str(DEFAULTS).unwrap();
    bag.merge(&bag_from_json_str(OVERRIDES).unwrap());

    assert_eq!(
        bag.get("messages.foo.bar"),
        Some(&Value::from("This is another test"))
    );
    assert_eq!(bag.get("messages.boo"), Some(&Value::from("This is boo value")));
    assert_eq!(bag.get("messages.bar.foo"), Some(&Value::from("This is a test")));

    let invalid: Invalid = bag.get_as("validations.invalid").unwrap().unwrap();
    assert_eq!(
        invalid,
        Invalid {
            foo: "Invalid value".to_string()
        }
    );
}

#[test]
fn rendered_document_reflects_merge() {
    let mut bag = DataBag::new();
    bag.set("a.b.c.d", Value::from("this is d value"));
    bag.set("a.b.c.f", Value::from("this is f value"));
    bag.set("foo.bar", Value::from("this is bar value"));

    let other = bag_from_json_str(
        r#"{"a": {"b": {"c": {"f": "this is the other f value"}}}, "foo": {"bar": "this is the other bar value"}}"#,
    )
    .unwrap();
    bag.merge(&other);

    assert_eq!(
        bag_to_json(&bag, false).unwrap(),
        concat!(
            r#"{"a":{"b":{"c":{"d":"this is d value","f":"this is the other f value"}}},"#,
            r#""foo":{"bar":"this is the other bar value"}}"#
        )
    );
}
