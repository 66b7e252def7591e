//! Deep copy and deep merge of nested maps.
//!
//! Merging is override-wins-on-leaf: where both sides hold a map under the
//! same key the two maps are merged recursively, anywhere else the later
//! value replaces the earlier one.

use std::collections::btree_map::Entry;

use crate::value::{Map, Value};

/// Copy every entry of `src` into `dst`.
///
/// Nested maps are copied all the way down, so `dst` shares nothing with
/// `src` afterwards. Keys of `dst` missing from `src` are left alone, keys
/// present in both are replaced whole.
pub fn deep_copy(dst: &mut Map, src: &Map) {
    for (key, value) in src {
        let copied = match value {
            Value::Map(nested) => {
                let mut tmp = Map::new();
                deep_copy(&mut tmp, nested);
                Value::Map(tmp)
            }
            leaf => leaf.clone(),
        };
        dst.insert(key.clone(), copied);
    }
}

/// Merge `overlay` into `base` in place.
pub fn merge_into(base: &mut Map, overlay: &Map) {
    for (key, incoming) in overlay {
        match (base.get_mut(key), incoming) {
            (Some(Value::Map(existing)), Value::Map(nested)) => merge_into(existing, nested),
            (Some(existing), _) => *existing = incoming.clone(),
            (None, _) => {
                base.insert(key.clone(), incoming.clone());
            }
        }
    }
}

/// Merge `overlay` into `base` in place, consuming the overlay.
pub fn merge_into_owned(base: &mut Map, overlay: Map) {
    for (key, incoming) in overlay {
        match base.entry(key) {
            Entry::Occupied(mut slot) => match (slot.get_mut(), incoming) {
                (Value::Map(existing), Value::Map(nested)) => merge_into_owned(existing, nested),
                (existing, incoming) => *existing = incoming,
            },
            Entry::Vacant(slot) => {
                slot.insert(incoming);
            }
        }
    }
}

/// Merge any number of maps, left to right; later maps win on leaves.
///
/// The inputs are not modified. No maps give an empty map and a single map
/// gives a copy of it.
///
/// # Example
///
/// ```rust
/// use databag::{deep_merge, Map, Value};
///
/// let mut defaults = Map::new();
/// defaults.insert("port".into(), Value::from(80i64));
/// defaults.insert("host".into(), Value::from("localhost"));
///
/// let mut overrides = Map::new();
/// overrides.insert("port".into(), Value::from(8080i64));
///
/// let merged = deep_merge([&defaults, &overrides]);
/// assert_eq!(merged.get("port"), Some(&Value::from(8080i64)));
/// assert_eq!(merged.get("host"), Some(&Value::from("localhost")));
/// ```
pub fn deep_merge<'a>(maps: impl IntoIterator<Item = &'a Map>) -> Map {
    let mut maps = maps.into_iter();
    let mut merged = Map::new();

    if let Some(first) = maps.next() {
        deep_copy(&mut merged, first);
    }
    for overlay in maps {
        merge_into(&mut merged, overlay);
    }

    merged
}
