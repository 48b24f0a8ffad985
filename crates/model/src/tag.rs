//! Tag and ExternalDocumentation objects

use openapi_graph_common::{Codec, Extensions, ObjectReader, ObjectWriter, Result, Value};

/// Metadata for a tag used by operations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tag {
    pub name: String,
    pub description: Option<String>,
    pub external_docs: Option<ExternalDocumentation>,
    pub extensions: Extensions,
}

/// A reference to external documentation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExternalDocumentation {
    pub description: Option<String>,
    pub url: String,
    pub extensions: Extensions,
}

impl Codec for Tag {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.required_string("name", &self.name);
        obj.string("description", self.description.as_deref());
        obj.entity("externalDocs", self.external_docs.as_ref())?;
        obj.extensions(&self.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        Ok(Tag {
            name: object.string("name")?,
            description: object.optional_string("description")?,
            external_docs: object.entity("externalDocs")?,
            extensions: object.extensions(),
        })
    }
}

impl Codec for ExternalDocumentation {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.string("description", self.description.as_deref());
        obj.required_string("url", &self.url);
        obj.extensions(&self.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        Ok(ExternalDocumentation {
            description: object.optional_string("description")?,
            url: object.string("url")?,
            extensions: object.extensions(),
        })
    }
}

generic_serde!(Tag, ExternalDocumentation);
