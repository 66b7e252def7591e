//! The `Bag` accessor interface and the `DataBag` container.

use crate::merge;
use crate::namespace::{Namespace, Separator};
use crate::value::{Map, Value};
use crate::Error;

/// Read, write, and merge values addressed by dotted namespaces.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `&dyn Bag` and `Box<dyn Bag>`.
pub trait Bag {
    /// Look up the value at `name`.
    ///
    /// # Returns
    ///
    /// * `None` - some key along the way is missing, or an intermediate
    ///   value is not a map.
    /// * `Some(value)` - the value at the last component, maps included.
    fn get(&self, name: &str) -> Option<&Value>;

    /// Store `value` at `name`, returning the value it replaced.
    ///
    /// Missing intermediate maps are created. An intermediate value that is
    /// not a map is discarded and replaced by a new map, so a write always
    /// succeeds.
    fn set(&mut self, name: &str, value: Value) -> Option<Value>;

    /// The root map.
    fn all(&self) -> &Map;

    /// Deep-merge `other` into this bag. `other` wins on leaves.
    fn merge(&mut self, other: &dyn Bag);
}

impl<T: Bag + ?Sized> Bag for Box<T> {
    fn get(&self, name: &str) -> Option<&Value> {
        (**self).get(name)
    }

    fn set(&mut self, name: &str, value: Value) -> Option<Value> {
        (**self).set(name, value)
    }

    fn all(&self) -> &Map {
        (**self).all()
    }

    fn merge(&mut self, other: &dyn Bag) {
        (**self).merge(other)
    }
}

/// An in-memory bag of nested maps.
///
/// # Example
///
/// ```rust
/// use databag::{Bag, DataBag, Value};
///
/// let mut defaults = DataBag::new();
/// defaults.set("server.port", Value::from(80i64));
/// defaults.set("server.host", Value::from("localhost"));
///
/// let mut overrides = DataBag::new();
/// overrides.set("server.port", Value::from(8080i64));
///
/// defaults.merge(&overrides);
/// assert_eq!(defaults.get("server.port"), Some(&Value::from(8080i64)));
/// assert_eq!(defaults.get("server.host"), Some(&Value::from("localhost")));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataBag {
    data: Map,
    separator: Separator,
}

impl DataBag {
    /// Create an empty bag using the default `.` separator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bag over an existing map using the default separator.
    pub fn from_map(data: Map) -> Self {
        Self {
            data,
            separator: Separator::default(),
        }
    }

    /// Create an empty bag with a custom separator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySeparator`] if `sep` is empty.
    pub fn with_separator(sep: &str) -> Result<Self, Error> {
        Self::new().separated(sep)
    }

    /// Switch this bag to a different separator. The data is untouched;
    /// only how later names are split changes.
    pub fn separated(self, sep: &str) -> Result<Self, Error> {
        Ok(Self {
            data: self.data,
            separator: Separator::new(sep)?,
        })
    }

    /// The separator names are split on.
    pub fn separator(&self) -> &Separator {
        &self.separator
    }

    /// Split `name` the way this bag does.
    pub fn namespace<'a>(&'a self, name: &'a str) -> Namespace<'a> {
        self.separator.split(name)
    }

    /// Consume the bag, returning its root map.
    pub fn into_map(self) -> Map {
        self.data
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether a value exists at `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Mutable lookup with the same resolution rules as [`Bag::get`].
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        let ns = self.separator.split(name);
        let mut cursor = &mut self.data;
        for key in ns.parents() {
            cursor = cursor.get_mut(*key)?.as_map_mut()?;
        }
        cursor.get_mut(ns.leaf())
    }

    /// Remove and return the value at `name`.
    ///
    /// Never creates anything: a missing or non-map intermediate gives `None`.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let ns = self.separator.split(name);
        let mut cursor = &mut self.data;
        for key in ns.parents() {
            cursor = cursor.get_mut(*key)?.as_map_mut()?;
        }
        cursor.remove(ns.leaf())
    }

    /// Merge several bags in order; the last one wins on leaves.
    pub fn merge_all<'a, B>(&mut self, bags: impl IntoIterator<Item = &'a B>)
    where
        B: Bag + 'a,
    {
        for bag in bags {
            self.merge(bag);
        }
    }

    /// Merge `other` into this bag, consuming it instead of copying.
    pub fn absorb(&mut self, other: DataBag) {
        log::debug!(
            "absorbing {} top-level keys into bag of {}",
            other.data.len(),
            self.data.len()
        );
        merge::merge_into_owned(&mut self.data, other.data);
    }

    /// Every leaf with its full dotted name, in key order.
    ///
    /// Leaves are non-map values and empty maps.
    pub fn leaves(&self) -> impl Iterator<Item = (String, &Value)> + '_ {
        let mut out = Vec::new();
        collect_leaves(&self.data, None, self.separator.as_str(), &mut out);
        out.into_iter()
    }
}

fn collect_leaves<'a>(
    map: &'a Map,
    prefix: Option<&str>,
    sep: &str,
    out: &mut Vec<(String, &'a Value)>,
) {
    for (key, value) in map {
        let name = match prefix {
            Some(prefix) => format!("{}{}{}", prefix, sep, key),
            None => key.clone(),
        };
        match value {
            Value::Map(child) if !child.is_empty() => {
                collect_leaves(child, Some(name.as_str()), sep, out)
            }
            _ => out.push((name, value)),
        }
    }
}

impl Bag for DataBag {
    fn get(&self, name: &str) -> Option<&Value> {
        let ns = self.separator.split(name);
        let mut cursor = &self.data;
        for key in ns.parents() {
            cursor = cursor.get(*key)?.as_map()?;
        }
        cursor.get(ns.leaf())
    }

    fn set(&mut self, name: &str, value: Value) -> Option<Value> {
        let ns = self.separator.split(name);
        let mut cursor = &mut self.data;
        for key in ns.parents() {
            let slot = cursor.entry((*key).to_string()).or_insert_with(Value::map);
            if !slot.is_map() {
                log::trace!(
                    "replacing {} at '{}' with a map while setting '{}'",
                    slot.kind(),
                    key,
                    ns
                );
            }
            cursor = slot.make_map();
        }
        cursor.insert(ns.leaf().to_string(), value)
    }

    fn all(&self) -> &Map {
        &self.data
    }

    fn merge(&mut self, other: &dyn Bag) {
        log::debug!(
            "merging {} top-level keys into bag of {}",
            other.all().len(),
            self.data.len()
        );
        merge::merge_into(&mut self.data, other.all());
    }
}

impl From<Map> for DataBag {
    fn from(data: Map) -> Self {
        Self::from_map(data)
    }
}

impl From<DataBag> for Map {
    fn from(bag: DataBag) -> Self {
        bag.into_map()
    }
}

impl<K: AsRef<str>, V: Into<Value>> Extend<(K, V)> for DataBag {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name.as_ref(), value.into());
        }
    }
}

impl<K: AsRef<str>, V: Into<Value>> FromIterator<(K, V)> for DataBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = DataBag::new();
        bag.extend(iter);
        bag
    }
}

/// Macro for building a bag from `name => value` pairs.
///
/// Names are namespaces, so nested maps are created as needed.
///
/// # Example
///
/// ```rust
/// use databag::{databag, Bag, Value};
///
/// let bag = databag! {
///     "a.b.c" => 10i64,
///     "greeting" => "hello",
/// };
/// assert_eq!(bag.get("a.b.c"), Some(&Value::from(10i64)));
/// ```
#[macro_export]
macro_rules! databag {
    () => {
        $crate::DataBag::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut bag = $crate::DataBag::new();
        $(
            $crate::Bag::set(&mut bag, $name, $crate::Value::from($value));
        )+
        bag
    }};
}
