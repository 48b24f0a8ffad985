//! Paths object
//!
//! Path templates and extensions share one flat object. Keys starting with
//! `x-` go to the extension bag, everything else is a path.

use crate::PathItem;
use openapi_graph_common::{
    is_extension_key, Codec, Extensions, IndexMap, ObjectReader, ObjectWriter, Result, Value,
};

/// Relative paths to the individual endpoints and their operations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paths {
    /// Path items keyed by path template, e.g. `/pets/{petId}`. Extension
    /// keys placed here are not encoded; use [`Paths::insert`].
    pub items: IndexMap<String, PathItem>,

    pub extensions: Extensions,
}

impl Paths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&PathItem> {
        self.items.get(path)
    }

    pub fn get_mut(&mut self, path: &str) -> Option<&mut PathItem> {
        self.items.get_mut(path)
    }

    /// Insert a path item. Returns `false` and stores nothing when `path`
    /// is an extension key.
    pub fn insert(&mut self, path: impl Into<String>, item: PathItem) -> bool {
        let path = path.into();
        if is_extension_key(&path) {
            return false;
        }
        self.items.insert(path, item);
        true
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, PathItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Paths {
    type Item = (&'a String, &'a PathItem);
    type IntoIter = indexmap::map::Iter<'a, String, PathItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<(String, PathItem)> for Paths {
    fn from_iter<I: IntoIterator<Item = (String, PathItem)>>(iter: I) -> Self {
        Paths {
            items: iter
                .into_iter()
                .filter(|(path, _)| !is_extension_key(path))
                .collect(),
            extensions: Extensions::new(),
        }
    }
}

impl Codec for Paths {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.entries(&self.items)?;
        obj.extensions(&self.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        if let Some((path, _)) = object.fields().find(|(key, _)| !is_path_key(key)) {
            tracing::debug!(path = path.as_str(), "path template does not start with '/'");
        }
        Ok(Paths {
            items: object.entries(&[])?,
            extensions: object.extensions(),
        })
    }
}

fn is_path_key(key: &str) -> bool {
    key.starts_with('/') || is_extension_key(key)
}

generic_serde!(Paths);
