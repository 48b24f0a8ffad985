//! Components object

use crate::{
    Callback, Example, Header, Link, Parameter, RequestBody, Response, Schema, SecurityScheme,
};
use openapi_graph_common::{
    Codec, Extensions, IndexMap, ObjectReader, ObjectWriter, Result, Value,
};

/// Reusable objects referenced from elsewhere in the document.
///
/// The maps are independent of each other; nothing checks that a `$ref`
/// points at an existing entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Components {
    pub schemas: IndexMap<String, Schema>,
    pub responses: IndexMap<String, Response>,
    pub parameters: IndexMap<String, Parameter>,
    pub examples: IndexMap<String, Example>,
    pub request_bodies: IndexMap<String, RequestBody>,
    pub headers: IndexMap<String, Header>,
    pub security_schemes: IndexMap<String, SecurityScheme>,
    pub links: IndexMap<String, Link>,
    pub callbacks: IndexMap<String, Callback>,
    pub extensions: Extensions,
}

impl Components {
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
            && self.responses.is_empty()
            && self.parameters.is_empty()
            && self.examples.is_empty()
            && self.request_bodies.is_empty()
            && self.headers.is_empty()
            && self.security_schemes.is_empty()
            && self.links.is_empty()
            && self.callbacks.is_empty()
            && self.extensions.is_empty()
    }
}

impl Codec for Components {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.entity_map("schemas", &self.schemas)?;
        obj.entity_map("responses", &self.responses)?;
        obj.entity_map("parameters", &self.parameters)?;
        obj.entity_map("examples", &self.examples)?;
        obj.entity_map("requestBodies", &self.request_bodies)?;
        obj.entity_map("headers", &self.headers)?;
        obj.entity_map("securitySchemes", &self.security_schemes)?;
        obj.entity_map("links", &self.links)?;
        obj.entity_map("callbacks", &self.callbacks)?;
        obj.extensions(&self.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        Ok(Components {
            schemas: object.entity_map("schemas")?,
            responses: object.entity_map("responses")?,
            parameters: object.entity_map("parameters")?,
            examples: object.entity_map("examples")?,
            request_bodies: object.entity_map("requestBodies")?,
            headers: object.entity_map("headers")?,
            security_schemes: object.entity_map("securitySchemes")?,
            links: object.entity_map("links")?,
            callbacks: object.entity_map("callbacks")?,
            extensions: object.extensions(),
        })
    }
}

generic_serde!(Components);
