//! Example object

use openapi_graph_common::{Codec, Extensions, ObjectReader, ObjectWriter, Result, Value};

/// A named example of a payload, given either inline or by URL
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Example {
    pub reference: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,

    /// Embedded literal example. Mutually exclusive with `external_value`.
    pub value: Option<Value>,

    /// URL of an example that cannot be embedded
    pub external_value: Option<String>,

    pub extensions: Extensions,
}

impl Codec for Example {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.string("$ref", self.reference.as_deref());
        obj.string("summary", self.summary.as_deref());
        obj.string("description", self.description.as_deref());
        obj.any("value", self.value.as_ref());
        obj.string("externalValue", self.external_value.as_deref());
        obj.extensions(&self.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        Ok(Example {
            reference: object.optional_string("$ref")?,
            summary: object.optional_string("summary")?,
            description: object.optional_string("description")?,
            value: object.any("value"),
            external_value: object.optional_string("externalValue")?,
            extensions: object.extensions(),
        })
    }
}

generic_serde!(Example);
