//! Field maps passed through an update.
//!
//! A [`Patch`] carries the field changes requested by an `update` call and
//! [`UpdateOptions`] carries call-scoped metadata (who is updating, why,
//! and so on). Both are opaque to the hook pipeline: it borrows them and
//! hands the same borrow to every hook and to the mutation executor.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Mapping from field name to an arbitrary JSON value.
pub type FieldMap = serde_json::Map<String, Value>;

/// Macro to define a newtype over [`FieldMap`] with builder and getter helpers.
macro_rules! define_record {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(FieldMap);

        impl $name {
            /// Create an empty map.
            pub fn new() -> Self {
                Self(FieldMap::new())
            }

            /// Inserts a value.
            pub fn with_data(mut self, key: &str, value: Value) -> Self {
                self.0.insert(key.to_string(), value);
                self
            }

            /// Inserts a string value.
            pub fn with_string(self, key: &str, value: &str) -> Self {
                self.with_data(key, Value::from(value))
            }

            /// Inserts an integer value.
            pub fn with_int(self, key: &str, value: i64) -> Self {
                self.with_data(key, Value::from(value))
            }

            /// Inserts a boolean value.
            pub fn with_bool(self, key: &str, value: bool) -> Self {
                self.with_data(key, Value::from(value))
            }

            /// Gets a value by key.
            pub fn get_data(&self, key: &str) -> Option<&Value> {
                self.0.get(key)
            }

            /// Gets a string value.
            pub fn get_string(&self, key: &str) -> Option<&str> {
                self.0.get(key).and_then(|v| v.as_str())
            }

            /// Gets an i64 value.
            pub fn get_i64(&self, key: &str) -> Option<i64> {
                self.0.get(key).and_then(|v| v.as_i64())
            }

            /// Gets a bool value.
            pub fn get_bool(&self, key: &str) -> Option<bool> {
                self.0.get(key).and_then(|v| v.as_bool())
            }

            /// Whether the map holds the given key.
            pub fn contains(&self, key: &str) -> bool {
                self.0.contains_key(key)
            }

            /// Number of entries.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Whether the map is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Iterates over entries in key order.
            pub fn iter(&self) -> serde_json::map::Iter<'_> {
                self.0.iter()
            }

            /// Borrows the underlying map.
            pub fn as_map(&self) -> &FieldMap {
                &self.0
            }

            /// Returns the underlying map.
            pub fn into_inner(self) -> FieldMap {
                self.0
            }
        }

        impl From<FieldMap> for $name {
            fn from(map: FieldMap) -> Self {
                Self(map)
            }
        }
    };
}

define_record! {
    /// Field changes requested by a single `update` call.
    Patch
}

define_record! {
    /// Call-scoped metadata for a single `update` call.
    UpdateOptions
}
