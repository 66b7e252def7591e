//! Serde Integration for data bags
//!
//! This layer connects bags to the serde ecosystem. It adds:
//! - `TypedBag`: Read and write Rust types at a namespace
//! - JSON documents to and from whole bags
//! - Value <-> serde conversions
//!
//! # Example
//!
//! ```rust
//! use databag::{Bag, Value};
//! use databag_serde::{bag_from_json_str, bag_to_json};
//!
//! let mut defaults = bag_from_json_str(r#"{"log": {"level": "info", "json": false}}"#).unwrap();
//! let overrides = bag_from_json_str(r#"{"log": {"level": "debug"}}"#).unwrap();
//!
//! defaults.merge(&overrides);
//! assert_eq!(
//!     bag_to_json(&defaults, false).unwrap(),
//!     r#"{"log":{"json":false,"level":"debug"}}"#
//! );
//! ```

mod convert;
mod json;
mod typed;

pub use convert::{from_value, json_to_value, to_value, value_to_json};
pub use json::{
    bag_from_json, bag_from_json_slice, bag_from_json_str, bag_from_reader, bag_to_json,
    value_to_json_string,
};
pub use typed::TypedBag;

// Re-export core types for convenience
pub use databag::{Bag, DataBag, Error, Map, Value};
