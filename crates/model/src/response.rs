//! Response object

use crate::{Header, Link, MediaType};
use openapi_graph_common::{
    Codec, Extensions, IndexMap, ObjectReader, ObjectWriter, Result, Value,
};

/// A single response from an API operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    pub reference: Option<String>,

    /// Required even when empty
    pub description: String,

    pub headers: IndexMap<String, Header>,

    /// Response payloads by media type. Keys are stored verbatim; a
    /// wildcard entry such as `*/*` does not shadow a specific one.
    pub content: IndexMap<String, MediaType>,

    pub links: IndexMap<String, Link>,
    pub extensions: Extensions,
}

impl Response {
    /// Response that only holds a `$ref`
    pub fn reference(target: impl Into<String>) -> Self {
        Response {
            reference: Some(target.into()),
            ..Default::default()
        }
    }
}

impl Codec for Response {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.string("$ref", self.reference.as_deref());
        obj.required_string("description", &self.description);
        obj.entity_map("headers", &self.headers)?;
        obj.entity_map("content", &self.content)?;
        obj.entity_map("links", &self.links)?;
        obj.extensions(&self.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        Ok(Response {
            reference: object.optional_string("$ref")?,
            description: object.string("description")?,
            headers: object.entity_map("headers")?,
            content: object.entity_map("content")?,
            links: object.entity_map("links")?,
            extensions: object.extensions(),
        })
    }
}

generic_serde!(Response);
