//! Reading and writing whole bags as JSON documents.

use std::io::Read;

use databag::{Bag, DataBag, Error, Value};

use crate::convert::{json_to_value, value_to_json};

/// Parse a JSON document into a bag.
///
/// The document root must be an object; its keys become the bag's top-level
/// keys as they are, without namespace splitting.
///
/// # Example
///
/// ```rust
/// use databag::{Bag, Value};
/// use databag_serde::bag_from_json_str;
///
/// let bag = bag_from_json_str(r#"{"server": {"port": 8080}}"#).unwrap();
/// assert_eq!(bag.get("server.port"), Some(&Value::from(8080i64)));
/// ```
pub fn bag_from_json_str(document: &str) -> Result<DataBag, Error> {
    let json: serde_json::Value =
        serde_json::from_str(document).map_err(|e| Error::decode(e.to_string()))?;
    bag_from_json(json)
}

/// Parse a JSON document held in bytes into a bag.
pub fn bag_from_json_slice(document: &[u8]) -> Result<DataBag, Error> {
    let json: serde_json::Value =
        serde_json::from_slice(document).map_err(|e| Error::decode(e.to_string()))?;
    bag_from_json(json)
}

/// Parse a JSON document from a reader into a bag.
pub fn bag_from_reader(reader: impl Read) -> Result<DataBag, Error> {
    let json: serde_json::Value =
        serde_json::from_reader(reader).map_err(|e| Error::decode(e.to_string()))?;
    bag_from_json(json)
}

/// Turn a parsed JSON document into a bag.
pub fn bag_from_json(json: serde_json::Value) -> Result<DataBag, Error> {
    match json_to_value(json) {
        Value::Map(map) => {
            log::debug!("decoded JSON document with {} top-level keys", map.len());
            Ok(DataBag::from_map(map))
        }
        other => Err(Error::NotAMap {
            found: other.kind(),
        }),
    }
}

/// Render a bag's contents as a JSON document.
pub fn bag_to_json(bag: &dyn Bag, pretty: bool) -> Result<String, Error> {
    value_to_json_string(Value::Map(bag.all().clone()), pretty)
}

/// Render a single value as JSON text, pretty-printed or on one line.
pub fn value_to_json_string(value: Value, pretty: bool) -> Result<String, Error> {
    let json = value_to_json(value);
    let rendered = if pretty {
        serde_json::to_string_pretty(&json)
    } else {
        serde_json::to_string(&json)
    };
    rendered.map_err(|e| Error::encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_document_becomes_bag() {
        let bag = bag_from_json_str(r#"{"a": {"b": {"c": 10}}, "b": 20}"#).unwrap();
        assert_eq!(bag.get("a.b.c"), Some(&Value::from(10i64)));
        assert_eq!(bag.get("b"), Some(&Value::from(20i64)));
    }

    #[test]
    fn dotted_json_keys_stay_literal() {
        let bag = bag_from_json_str(r#"{"a.b": 1}"#).unwrap();
        assert!(bag.all().contains_key("a.b"));
        assert_eq!(bag.get("a.b"), None);
    }

    #[test]
    fn non_object_root_rejected() {
        let err = bag_from_json_str("[1, 2, 3]").unwrap_err();
        assert_eq!(err, Error::NotAMap { found: "array" });

        let err = bag_from_json_str("\"text\"").unwrap_err();
        assert_eq!(err, Error::NotAMap { found: "string" });
    }

    #[test]
    fn syntax_error_is_decode_error() {
        let err = bag_from_json_str("{not json").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn slice_and_reader_agree() {
        let doc = br#"{"x": {"y": true}}"#;
        let from_slice = bag_from_json_slice(doc).unwrap();
        let from_reader = bag_from_reader(&doc[..]).unwrap();
        assert_eq!(from_slice, from_reader);
    }

    #[test]
    fn compact_rendering_is_key_ordered() {
        let mut bag = DataBag::new();
        bag.set("z", Value::from(1i64));
        bag.set("a.b", Value::from("x"));
        assert_eq!(bag_to_json(&bag, false).unwrap(), r#"{"a":{"b":"x"},"z":1}"#);
    }

    #[test]
    fn single_values_render_like_documents() {
        assert_eq!(value_to_json_string(Value::from(8080i64), true).unwrap(), "8080");
        assert_eq!(
            value_to_json_string(Value::from(vec!["a", "b"]), false).unwrap(),
            r#"["a","b"]"#
        );
        assert_eq!(
            value_to_json_string(Value::from(vec!["a"]), true).unwrap(),
            "[\n  \"a\"\n]"
        );
    }

    #[test]
    fn pretty_rendering_parses_back() {
        let bag = bag_from_json_str(r#"{"list": [1, 2], "nested": {"k": null}}"#).unwrap();
        let rendered = bag_to_json(&bag, true).unwrap();
        assert!(rendered.contains('\n'));
        assert_eq!(bag_from_json_str(&rendered).unwrap(), bag);
    }
}
