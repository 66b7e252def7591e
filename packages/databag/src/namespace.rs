//! Dotted namespaces: how a name like `"a.b.c"` addresses a nested value.

use std::fmt;
use std::iter;

use crate::Error;

/// Separator used by bags unless configured otherwise.
pub const DEFAULT_SEPARATOR: &str = ".";

/// A validated, non-empty namespace separator.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Separator(String);

impl Separator {
    /// Create a separator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySeparator`] for `""`.
    pub fn new(sep: impl Into<String>) -> Result<Self, Error> {
        let sep = sep.into();
        if sep.is_empty() {
            return Err(Error::EmptySeparator);
        }
        Ok(Separator(sep))
    }

    /// The separator text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split a name into its namespace components.
    pub fn split<'a>(&'a self, name: &'a str) -> Namespace<'a> {
        Namespace::split(name, self)
    }
}

impl Default for Separator {
    fn default() -> Self {
        Separator(DEFAULT_SEPARATOR.to_string())
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A name split into the keys it walks through.
///
/// Splitting is literal. Every occurrence of the separator splits, and empty
/// pieces stay as empty keys, so `"a..b"` addresses `a` -> `""` -> `b`.
/// There is no escaping: a key can never contain the separator.
///
/// A namespace always has at least one component, its leaf.
///
/// # Examples
///
/// ```rust
/// use databag::{Namespace, Separator};
///
/// let sep = Separator::default();
/// let ns = Namespace::split("this.is.a.test", &sep);
/// assert_eq!(ns.len(), 4);
/// assert_eq!(ns.leaf(), "test");
/// assert_eq!(ns.parents(), ["this", "is", "a"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Namespace<'a> {
    parents: Vec<&'a str>,
    leaf: &'a str,
    separator: &'a Separator,
}

impl<'a> Namespace<'a> {
    /// Split `name` on `separator`.
    pub fn split(name: &'a str, separator: &'a Separator) -> Self {
        let mut parents: Vec<&'a str> = name.split(separator.as_str()).collect();
        // `str::split` yields at least one piece, even for "".
        let leaf = parents.pop().unwrap_or(name);
        Namespace {
            parents,
            leaf,
            separator,
        }
    }

    /// Number of components, leaf included.
    pub fn len(&self) -> usize {
        self.parents.len() + 1
    }

    /// Always false; present for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the name addresses a key of the root map directly.
    pub fn is_top_level(&self) -> bool {
        self.parents.is_empty()
    }

    /// The components leading to the leaf's parent map.
    pub fn parents(&self) -> &[&'a str] {
        &self.parents
    }

    /// The final component.
    pub fn leaf(&self) -> &'a str {
        self.leaf
    }

    /// Iterate over all components, root first.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.parents.iter().copied().chain(iter::once(self.leaf))
    }
}

impl fmt::Display for Namespace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for parent in &self.parents {
            write!(f, "{}{}", parent, self.separator)?;
        }
        f.write_str(self.leaf)
    }
}
