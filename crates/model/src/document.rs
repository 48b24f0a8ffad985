//! The root OpenAPI document

use crate::{Components, ExternalDocumentation, Info, Paths, SecurityRequirement, Server, Tag};
use openapi_graph_common::{Codec, Extensions, ObjectReader, ObjectWriter, Result, Value};

/// Root object of an OpenAPI 3.x document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenApi {
    /// Version of the OpenAPI specification the document follows, e.g.
    /// `3.0.3`
    pub openapi: String,

    pub info: Info,
    pub servers: Vec<Server>,
    pub paths: Paths,
    pub components: Option<Components>,

    /// Alternative requirements, any one of which grants access to the API
    pub security: Vec<SecurityRequirement>,

    pub tags: Vec<Tag>,
    pub external_docs: Option<ExternalDocumentation>,
    pub extensions: Extensions,
}

impl OpenApi {
    pub fn new(openapi: impl Into<String>, info: Info) -> Self {
        OpenApi {
            openapi: openapi.into(),
            info,
            ..Default::default()
        }
    }

    /// Look up a tag declared at the document level
    pub fn tag(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.name == name)
    }
}

impl Codec for OpenApi {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.required_string("openapi", &self.openapi);
        obj.required_entity("info", &self.info)?;
        obj.entities("servers", &self.servers)?;
        obj.required_entity("paths", &self.paths)?;
        obj.entity("components", self.components.as_ref())?;
        obj.entities("security", &self.security)?;
        obj.entities("tags", &self.tags)?;
        obj.entity("externalDocs", self.external_docs.as_ref())?;
        obj.extensions(&self.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        let document = OpenApi {
            openapi: object.string("openapi")?,
            info: object.required_entity("info")?,
            servers: object.entities("servers")?,
            paths: object.required_entity("paths")?,
            components: object.entity("components")?,
            security: object.entities("security")?,
            tags: object.entities("tags")?,
            external_docs: object.entity("externalDocs")?,
            extensions: object.extensions(),
        };
        tracing::trace!(
            openapi = document.openapi.as_str(),
            paths = document.paths.len(),
            "decoded document"
        );
        Ok(document)
    }
}

generic_serde!(OpenApi);
