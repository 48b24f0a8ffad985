//! RequestBody object

use crate::MediaType;
use openapi_graph_common::{
    Codec, Extensions, IndexMap, ObjectReader, ObjectWriter, Result, Value,
};

/// A single request body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestBody {
    pub reference: Option<String>,
    pub description: Option<String>,

    /// Body content by media type or media type range
    pub content: IndexMap<String, MediaType>,

    pub required: bool,
    pub extensions: Extensions,
}

impl Codec for RequestBody {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.string("$ref", self.reference.as_deref());
        obj.string("description", self.description.as_deref());
        obj.required_entity_map("content", &self.content)?;
        obj.flag("required", self.required);
        obj.extensions(&self.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        Ok(RequestBody {
            reference: object.optional_string("$ref")?,
            description: object.optional_string("description")?,
            content: object.entity_map("content")?,
            required: object.flag("required")?,
            extensions: object.extensions(),
        })
    }
}

generic_serde!(RequestBody);
