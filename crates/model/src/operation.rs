//! Operation object

use crate::{
    Callback, ExternalDocumentation, Parameter, RequestBody, Response, SecurityRequirement,
    Server,
};
use openapi_graph_common::{
    Codec, Extensions, IndexMap, ObjectReader, ObjectWriter, Result, Value,
};

/// A single API operation on a path
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Operation {
    pub tags: Vec<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub external_docs: Option<ExternalDocumentation>,

    /// Unique identifier of the operation across the document
    pub operation_id: Option<String>,

    pub parameters: Vec<Parameter>,
    pub request_body: Option<RequestBody>,

    /// Responses keyed by HTTP status code or `default`
    pub responses: IndexMap<String, Response>,

    /// Callbacks keyed by an identifier unique to this operation
    pub callbacks: IndexMap<String, Callback>,

    pub deprecated: bool,

    /// `None` inherits the document-level requirements; `Some(vec![])`
    /// removes them for this operation
    pub security: Option<Vec<SecurityRequirement>>,

    pub servers: Vec<Server>,
    pub extensions: Extensions,
}

impl Operation {
    /// Response for a status code, falling back to `default`
    pub fn response(&self, status: &str) -> Option<&Response> {
        self.responses
            .get(status)
            .or_else(|| self.responses.get("default"))
    }
}

impl Codec for Operation {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.strings("tags", &self.tags);
        obj.string("summary", self.summary.as_deref());
        obj.string("description", self.description.as_deref());
        obj.entity("externalDocs", self.external_docs.as_ref())?;
        obj.string("operationId", self.operation_id.as_deref());
        obj.entities("parameters", &self.parameters)?;
        obj.entity("requestBody", self.request_body.as_ref())?;
        obj.required_entity_map("responses", &self.responses)?;
        obj.entity_map("callbacks", &self.callbacks)?;
        obj.flag("deprecated", self.deprecated);
        if let Some(security) = &self.security {
            obj.required_entities("security", security)?;
        }
        obj.entities("servers", &self.servers)?;
        obj.extensions(&self.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        Ok(Operation {
            tags: object.strings("tags")?,
            summary: object.optional_string("summary")?,
            description: object.optional_string("description")?,
            external_docs: object.entity("externalDocs")?,
            operation_id: object.optional_string("operationId")?,
            parameters: object.entities("parameters")?,
            request_body: object.entity("requestBody")?,
            responses: object.entity_map("responses")?,
            callbacks: object.entity_map("callbacks")?,
            deprecated: object.flag("deprecated")?,
            security: object.optional_entities("security")?,
            servers: object.entities("servers")?,
            extensions: object.extensions(),
        })
    }
}

generic_serde!(Operation);
