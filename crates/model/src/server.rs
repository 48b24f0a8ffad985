//! Server and ServerVariable objects

use openapi_graph_common::{
    Codec, Extensions, IndexMap, ObjectReader, ObjectWriter, Result, Value,
};

/// A server hosting the API
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Server {
    /// Target host URL; may be relative and may contain `{variable}`
    /// placeholders
    pub url: String,

    pub description: Option<String>,

    /// Substitution values for the placeholders in `url`
    pub variables: IndexMap<String, ServerVariable>,

    pub extensions: Extensions,
}

/// A variable for server URL template substitution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerVariable {
    /// Allowed values. Always strings, even when the document spelled them
    /// as bare numbers.
    pub enum_values: Vec<String>,

    /// Value used when no other is supplied
    pub default: String,

    pub description: Option<String>,

    pub extensions: Extensions,
}

impl Codec for Server {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.required_string("url", &self.url);
        obj.string("description", self.description.as_deref());
        obj.entity_map("variables", &self.variables)?;
        obj.extensions(&self.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        Ok(Server {
            url: object.string("url")?,
            description: object.optional_string("description")?,
            variables: object.entity_map("variables")?,
            extensions: object.extensions(),
        })
    }
}

impl Codec for ServerVariable {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.strings("enum", &self.enum_values);
        obj.required_string("default", &self.default);
        obj.string("description", self.description.as_deref());
        obj.extensions(&self.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        Ok(ServerVariable {
            enum_values: object.strings("enum")?,
            default: object.string("default")?,
            description: object.optional_string("description")?,
            extensions: object.extensions(),
        })
    }
}

generic_serde!(Server, ServerVariable);
