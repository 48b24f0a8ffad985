//! Specification extensions (`x-` fields)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Whether `key` names a vendor extension, i.e. starts with `x-` in any case
pub fn is_extension_key(key: &str) -> bool {
    key.get(..2)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("x-"))
}

/// Vendor extension fields attached to an entity.
///
/// Only keys accepted by [`is_extension_key`] are ever stored, so merging the
/// bag into an encoded object can never shadow a well-known field.
/// Serializes as a plain map; deserializing drops non-extension keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "IndexMap<String, Value>",
    into = "IndexMap<String, Value>"
)]
pub struct Extensions(IndexMap<String, Value>);

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every extension key of an object; other keys are skipped
    pub fn from_object(object: &Map<String, Value>) -> Self {
        object
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Insert an extension. Returns `false` and stores nothing when `key`
    /// is not an extension key.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> bool {
        let key = key.into();
        if !is_extension_key(&key) {
            return false;
        }
        self.0.insert(key, value);
        true
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Copy every extension into an encoded object
    pub fn merge_into(&self, object: &mut Map<String, Value>) {
        for (key, value) in &self.0 {
            object.insert(key.clone(), value.clone());
        }
    }
}

impl FromIterator<(String, Value)> for Extensions {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut extensions = Extensions::new();
        for (key, value) in iter {
            extensions.insert(key, value);
        }
        extensions
    }
}

impl From<IndexMap<String, Value>> for Extensions {
    fn from(map: IndexMap<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl From<Extensions> for IndexMap<String, Value> {
    fn from(extensions: Extensions) -> Self {
        extensions.0
    }
}

impl<'a> IntoIterator for &'a Extensions {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Extensions {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
