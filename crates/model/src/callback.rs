//! Callback object
//!
//! A callback is one flat object: an optional `$ref`, extension keys, and
//! any number of runtime expressions each mapping to a path item.

use crate::PathItem;
use openapi_graph_common::{
    is_extension_key, Codec, Extensions, IndexMap, ObjectReader, ObjectWriter, Result, Value,
};

/// Out-of-band requests the API may make, keyed by runtime expression
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Callback {
    pub reference: Option<String>,

    /// Path items keyed by runtime expression, e.g.
    /// `{$request.body#/callbackUrl}`. `$ref` and extension keys placed here
    /// are not encoded; use [`Callback::insert`].
    pub items: IndexMap<String, PathItem>,

    pub extensions: Extensions,
}

impl Callback {
    pub fn get(&self, expression: &str) -> Option<&PathItem> {
        self.items.get(expression)
    }

    /// Insert a path item. Returns `false` and stores nothing when
    /// `expression` is `$ref` or an extension key.
    pub fn insert(&mut self, expression: impl Into<String>, item: PathItem) -> bool {
        let expression = expression.into();
        if expression == "$ref" || is_extension_key(&expression) {
            return false;
        }
        self.items.insert(expression, item);
        true
    }
}

impl Codec for Callback {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.string("$ref", self.reference.as_deref());
        obj.entries(&self.items)?;
        obj.extensions(&self.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        Ok(Callback {
            reference: object.optional_string("$ref")?,
            items: object.entries(&["$ref"])?,
            extensions: object.extensions(),
        })
    }
}

generic_serde!(Callback);
