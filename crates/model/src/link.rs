//! Link object

use crate::Server;
use openapi_graph_common::{
    Codec, Extensions, IndexMap, ObjectReader, ObjectWriter, Result, Value,
};

/// A design-time link from a response to another operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Link {
    pub reference: Option<String>,

    /// Relative or absolute reference to the target operation
    pub operation_ref: Option<String>,

    /// Name of the target operation; mutually exclusive with
    /// `operation_ref`
    pub operation_id: Option<String>,

    /// Parameter values for the target operation: constants or runtime
    /// expressions
    pub parameters: IndexMap<String, Value>,

    pub request_body: Option<Value>,
    pub description: Option<String>,
    pub server: Option<Server>,
    pub extensions: Extensions,
}

impl Codec for Link {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.string("$ref", self.reference.as_deref());
        obj.string("operationRef", self.operation_ref.as_deref());
        obj.string("operationId", self.operation_id.as_deref());
        obj.value_map("parameters", &self.parameters);
        obj.any("requestBody", self.request_body.as_ref());
        obj.string("description", self.description.as_deref());
        obj.entity("server", self.server.as_ref())?;
        obj.extensions(&self.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        Ok(Link {
            reference: object.optional_string("$ref")?,
            operation_ref: object.optional_string("operationRef")?,
            operation_id: object.optional_string("operationId")?,
            parameters: object.value_map("parameters")?,
            request_body: object.any("requestBody"),
            description: object.optional_string("description")?,
            server: object.entity("server")?,
            extensions: object.extensions(),
        })
    }
}

generic_serde!(Link);
