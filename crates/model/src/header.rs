//! Header object
//!
//! `Header` is also the body of a [`Parameter`](crate::Parameter): a
//! parameter is a header plus its name and location, read from and written
//! to the same flat object.

use crate::{Example, MediaType, Schema};
use openapi_graph_common::{
    Codec, Extensions, IndexMap, ObjectReader, ObjectWriter, Result, Value,
};

/// Describes a single header (or, embedded in a parameter, a single
/// parameter) of an operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    pub reference: Option<String>,
    pub description: Option<String>,
    pub required: bool,
    pub deprecated: bool,
    pub allow_empty_value: bool,

    /// Serialization style, e.g. `simple` or `form`
    pub style: Option<String>,
    pub explode: bool,
    pub allow_reserved: bool,

    pub schema: Option<Schema>,
    pub example: Option<Value>,
    pub examples: IndexMap<String, Example>,

    /// Alternative to `schema` for complex serialization; holds at most one
    /// entry
    pub content: IndexMap<String, MediaType>,

    pub extensions: Extensions,
}

impl Header {
    /// Write every field except `$ref` and the extensions, which the
    /// embedding entity places itself
    pub(crate) fn write_body(&self, obj: &mut ObjectWriter) -> Result<()> {
        obj.string("description", self.description.as_deref());
        obj.flag("required", self.required);
        obj.flag("deprecated", self.deprecated);
        obj.flag("allowEmptyValue", self.allow_empty_value);
        obj.string("style", self.style.as_deref());
        obj.flag("explode", self.explode);
        obj.flag("allowReserved", self.allow_reserved);
        obj.entity("schema", self.schema.as_ref())?;
        obj.any("example", self.example.as_ref());
        obj.entity_map("examples", &self.examples)?;
        obj.entity_map("content", &self.content)?;
        Ok(())
    }
}

impl Codec for Header {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.string("$ref", self.reference.as_deref());
        self.write_body(&mut obj)?;
        obj.extensions(&self.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        Ok(Header {
            reference: object.optional_string("$ref")?,
            description: object.optional_string("description")?,
            required: object.flag("required")?,
            deprecated: object.flag("deprecated")?,
            allow_empty_value: object.flag("allowEmptyValue")?,
            style: object.optional_string("style")?,
            explode: object.flag("explode")?,
            allow_reserved: object.flag("allowReserved")?,
            schema: object.entity("schema")?,
            example: object.any("example"),
            examples: object.entity_map("examples")?,
            content: object.entity_map("content")?,
            extensions: object.extensions(),
        })
    }
}

generic_serde!(Header);
