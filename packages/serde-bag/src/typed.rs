//! Typed access extension trait.

use databag::{Bag, Error, Value};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::convert::{from_value, to_value, value_to_json};

/// Extension trait for typed reads and writes.
///
/// This trait is automatically implemented for all `Bag` implementations.
///
/// # Example
///
/// ```rust
/// use databag::DataBag;
/// use databag_serde::TypedBag;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct Listener {
///     host: String,
///     port: u16,
/// }
///
/// let mut bag = DataBag::new();
/// let listener = Listener { host: "localhost".into(), port: 8080 };
/// bag.set_as("server.listener", &listener).unwrap();
///
/// let port: Option<u16> = bag.get_as("server.listener.port").unwrap();
/// assert_eq!(port, Some(8080));
/// ```
pub trait TypedBag: Bag {
    /// Read the value at `name` and deserialize it into a Rust type.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - nothing is stored at `name`.
    /// * `Ok(Some(value))` - the deserialized value.
    /// * `Err(Error::Decode)` - the stored value has the wrong shape.
    fn get_as<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, Error> {
        let Some(value) = self.get(name) else {
            return Ok(None);
        };
        from_value(value.clone()).map(Some)
    }

    /// Read the value at `name` as a serde_json::Value.
    fn get_json(&self, name: &str) -> Option<serde_json::Value> {
        self.get(name).cloned().map(value_to_json)
    }

    /// Serialize a Rust type and store it at `name`.
    ///
    /// Returns the value it replaced, like [`Bag::set`].
    fn set_as<T: Serialize>(&mut self, name: &str, data: &T) -> Result<Option<Value>, Error> {
        let value = to_value(data)?;
        Ok(self.set(name, value))
    }
}

// Blanket implementation for all Bags
impl<B: Bag + ?Sized> TypedBag for B {}
