//! databag: a hierarchical key-value container
//!
//! A data bag stores values under dotted namespaces and deep-merges nested
//! maps. It is the in-memory state behind layered configuration: defaults,
//! overrides, and computed values are combined with override-wins-on-leaf
//! semantics.
//!
//! - `Value`: Tree of maps, arrays, and scalars
//! - `Namespace`: A name like `"a.b.c"` split on the bag's separator
//! - `Bag`: The accessor interface (get, set, all, merge)
//! - `DataBag`: The in-memory container
//! - `deep_merge`: Merge any number of maps, later ones winning
//!
//! # Example
//!
//! ```rust
//! use databag::{Bag, DataBag, Value};
//!
//! let mut bag = DataBag::new();
//! bag.set("a.b.c.d", Value::from("this is some value"));
//!
//! assert_eq!(bag.get("a.b.c.d"), Some(&Value::from("this is some value")));
//! assert!(bag.get("a.b").unwrap().is_map());
//! ```

mod bag;
mod error;
pub mod merge;
mod namespace;
mod value;

pub use bag::{Bag, DataBag};
pub use error::Error;
pub use merge::{deep_copy, deep_merge};
pub use namespace::{Namespace, Separator, DEFAULT_SEPARATOR};
pub use value::{Map, Value};
