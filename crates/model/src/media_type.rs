//! MediaType and Encoding objects

use crate::{Example, Header, Schema};
use openapi_graph_common::{
    Codec, Extensions, IndexMap, ObjectReader, ObjectWriter, Result, Value,
};

/// Schema and examples for one media type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaType {
    pub schema: Option<Schema>,
    pub example: Option<Value>,
    pub examples: IndexMap<String, Example>,

    /// Per-property serialization, keyed by property name. Only applies to
    /// multipart and form-urlencoded request bodies.
    pub encoding: IndexMap<String, Encoding>,

    pub extensions: Extensions,
}

/// Serialization rules for a single property of a request body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Encoding {
    pub content_type: Option<String>,
    pub headers: IndexMap<String, Header>,
    pub style: Option<String>,
    pub explode: bool,
    pub allow_reserved: bool,
    pub extensions: Extensions,
}

impl Codec for MediaType {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.entity("schema", self.schema.as_ref())?;
        obj.any("example", self.example.as_ref());
        obj.entity_map("examples", &self.examples)?;
        obj.entity_map("encoding", &self.encoding)?;
        obj.extensions(&self.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        Ok(MediaType {
            schema: object.entity("schema")?,
            example: object.any("example"),
            examples: object.entity_map("examples")?,
            encoding: object.entity_map("encoding")?,
            extensions: object.extensions(),
        })
    }
}

impl Codec for Encoding {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.string("contentType", self.content_type.as_deref());
        obj.entity_map("headers", &self.headers)?;
        obj.string("style", self.style.as_deref());
        obj.flag("explode", self.explode);
        obj.flag("allowReserved", self.allow_reserved);
        obj.extensions(&self.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        Ok(Encoding {
            content_type: object.optional_string("contentType")?,
            headers: object.entity_map("headers")?,
            style: object.optional_string("style")?,
            explode: object.flag("explode")?,
            allow_reserved: object.flag("allowReserved")?,
            extensions: object.extensions(),
        })
    }
}

generic_serde!(MediaType, Encoding);
