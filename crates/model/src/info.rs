//! API metadata: Info, Contact and License objects

use openapi_graph_common::{Codec, Extensions, ObjectReader, ObjectWriter, Result, Value};

/// Metadata about the API
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Info {
    /// Title of the API
    pub title: String,

    /// Short description; CommonMark allowed
    pub description: Option<String>,

    /// URL to the terms of service
    pub terms_of_service: Option<String>,

    /// Contact information for the exposed API
    pub contact: Option<Contact>,

    /// License information for the exposed API
    pub license: Option<License>,

    /// Version of the API document (not of the OpenAPI specification)
    pub version: String,

    pub extensions: Extensions,
}

/// Contact information for the exposed API
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contact {
    pub name: Option<String>,
    pub url: Option<String>,
    pub email: Option<String>,
    pub extensions: Extensions,
}

/// License information for the exposed API
#[derive(Debug, Clone, Default, PartialEq)]
pub struct License {
    /// License name, e.g. "Apache 2.0"
    pub name: String,

    /// URL to the license text
    pub url: Option<String>,

    pub extensions: Extensions,
}

impl Codec for Info {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.required_string("title", &self.title);
        obj.string("description", self.description.as_deref());
        obj.string("termsOfService", self.terms_of_service.as_deref());
        obj.entity("contact", self.contact.as_ref())?;
        obj.entity("license", self.license.as_ref())?;
        obj.required_string("version", &self.version);
        obj.extensions(&self.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        Ok(Info {
            title: object.string("title")?,
            description: object.optional_string("description")?,
            terms_of_service: object.optional_string("termsOfService")?,
            contact: object.entity("contact")?,
            license: object.entity("license")?,
            version: object.string("version")?,
            extensions: object.extensions(),
        })
    }
}

impl Codec for Contact {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.string("name", self.name.as_deref());
        obj.string("url", self.url.as_deref());
        obj.string("email", self.email.as_deref());
        obj.extensions(&self.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        Ok(Contact {
            name: object.optional_string("name")?,
            url: object.optional_string("url")?,
            email: object.optional_string("email")?,
            extensions: object.extensions(),
        })
    }
}

impl Codec for License {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.required_string("name", &self.name);
        obj.string("url", self.url.as_deref());
        obj.extensions(&self.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        Ok(License {
            name: object.string("name")?,
            url: object.optional_string("url")?,
            extensions: object.extensions(),
        })
    }
}

generic_serde!(Info, Contact, License);
