//! Schema object and its helpers: Discriminator, XML and
//! `additionalProperties`
//!
//! `Schema` is recursive. Children are owned (boxed where single) so every
//! level of a decoded tree is an independent value.

use crate::ExternalDocumentation;
use openapi_graph_common::{
    bool_word, Codec, Extensions, IndexMap, OasError, ObjectReader, ObjectWriter, Result, Value,
};

/// Definition of an input or output data type: an extended subset of JSON
/// Schema
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    /// `$ref` to another schema, stored verbatim
    pub reference: Option<String>,

    /// Allows sending a `null` value for the defined schema
    pub nullable: bool,

    /// Polymorphism support: names the property that selects the concrete
    /// schema
    pub discriminator: Option<Discriminator>,

    /// Property may appear in responses but should not be sent in requests
    pub read_only: bool,

    /// Property may be sent in requests but should not appear in responses
    pub write_only: bool,

    /// XML representation metadata, only meaningful on property schemas
    pub xml: Option<Xml>,

    pub external_docs: Option<ExternalDocumentation>,

    /// Free-form example instance
    pub example: Option<Value>,

    pub deprecated: bool,

    // Numeric constraints stay untyped: the literal may be an integer or a
    // float and is emitted back as written.
    pub multiple_of: Option<Value>,
    pub maximum: Option<Value>,
    pub exclusive_maximum: bool,
    pub minimum: Option<Value>,
    pub exclusive_minimum: bool,
    pub max_length: Option<Value>,
    pub min_length: Option<Value>,

    /// Regular expression, ECMA 262 dialect
    pub pattern: Option<String>,

    /// Schema of array elements
    pub items: Option<Box<Schema>>,

    pub max_items: Option<Value>,
    pub min_items: Option<Value>,
    pub unique_items: bool,
    pub max_properties: Option<Value>,
    pub min_properties: Option<Value>,

    /// Names of properties that must be present
    pub required: Vec<String>,

    /// Property schemas by property name
    pub properties: IndexMap<String, Schema>,

    /// Schema (or permission flag) for properties not listed in
    /// `properties`
    pub additional_properties: Option<AdditionalProperties>,

    /// Allowed instance values
    pub enum_values: Vec<Value>,

    /// Primitive type: string, number, integer, boolean, array or object
    pub schema_type: Option<String>,

    pub all_of: Vec<Schema>,
    pub any_of: Vec<Schema>,
    pub one_of: Vec<Schema>,
    pub not: Option<Box<Schema>>,

    pub title: Option<String>,
    pub description: Option<String>,

    /// Value assumed when the instance is not provided
    pub default: Option<Value>,

    /// Refinement of `schema_type`, e.g. int32 or date-time
    pub format: Option<String>,

    pub extensions: Extensions,
}

/// Value of `additionalProperties`: either a plain permission flag or a
/// schema the extra properties must satisfy
#[derive(Debug, Clone, PartialEq)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<Schema>),
}

/// Selects the concrete schema of a polymorphic payload by a property value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Discriminator {
    /// Name of the payload property holding the discriminating value
    pub property_name: String,

    /// Payload values to schema names or references
    pub mapping: IndexMap<String, String>,
}

/// XML representation metadata for a property
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Xml {
    pub name: Option<String>,
    pub namespace: Option<String>,
    pub prefix: Option<String>,

    /// Translate the property to an attribute instead of an element
    pub attribute: bool,

    /// Wrap array items in an enclosing element
    pub wrapped: bool,

    pub extensions: Extensions,
}

impl Schema {
    /// Schema that only holds a `$ref`
    pub fn reference(target: impl Into<String>) -> Self {
        Schema {
            reference: Some(target.into()),
            ..Default::default()
        }
    }

    /// Schema of the given primitive type
    pub fn of_type(schema_type: impl Into<String>) -> Self {
        Schema {
            schema_type: Some(schema_type.into()),
            ..Default::default()
        }
    }
}

impl Codec for Schema {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.string("$ref", self.reference.as_deref());
        obj.string("title", self.title.as_deref());
        obj.string("description", self.description.as_deref());
        obj.string("type", self.schema_type.as_deref());
        obj.string("format", self.format.as_deref());
        obj.flag("nullable", self.nullable);
        obj.entity("discriminator", self.discriminator.as_ref())?;
        obj.flag("readOnly", self.read_only);
        obj.flag("writeOnly", self.write_only);
        obj.entity("xml", self.xml.as_ref())?;
        obj.entity("externalDocs", self.external_docs.as_ref())?;
        obj.any("example", self.example.as_ref());
        obj.flag("deprecated", self.deprecated);
        obj.any("multipleOf", self.multiple_of.as_ref());
        obj.any("maximum", self.maximum.as_ref());
        obj.flag("exclusiveMaximum", self.exclusive_maximum);
        obj.any("minimum", self.minimum.as_ref());
        obj.flag("exclusiveMinimum", self.exclusive_minimum);
        obj.any("maxLength", self.max_length.as_ref());
        obj.any("minLength", self.min_length.as_ref());
        obj.string("pattern", self.pattern.as_deref());
        obj.entity("items", self.items.as_deref())?;
        obj.any("maxItems", self.max_items.as_ref());
        obj.any("minItems", self.min_items.as_ref());
        obj.flag("uniqueItems", self.unique_items);
        obj.any("maxProperties", self.max_properties.as_ref());
        obj.any("minProperties", self.min_properties.as_ref());
        obj.strings("required", &self.required);
        obj.entity_map("properties", &self.properties)?;
        match &self.additional_properties {
            Some(AdditionalProperties::Allowed(allowed)) => {
                obj.insert("additionalProperties", Value::Bool(*allowed))
            }
            Some(AdditionalProperties::Schema(schema)) => {
                obj.required_entity("additionalProperties", schema.as_ref())?
            }
            None => {}
        }
        obj.values("enum", &self.enum_values);
        obj.entities("allOf", &self.all_of)?;
        obj.entities("anyOf", &self.any_of)?;
        obj.entities("oneOf", &self.one_of)?;
        obj.entity("not", self.not.as_deref())?;
        obj.any("default", self.default.as_ref());
        obj.extensions(&self.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        Ok(Schema {
            reference: object.optional_string("$ref")?,
            nullable: object.flag("nullable")?,
            discriminator: object.entity("discriminator")?,
            read_only: object.flag("readOnly")?,
            write_only: object.flag("writeOnly")?,
            xml: object.entity("xml")?,
            external_docs: object.entity("externalDocs")?,
            example: object.any("example"),
            deprecated: object.flag("deprecated")?,
            multiple_of: object.number("multipleOf")?,
            maximum: object.number("maximum")?,
            exclusive_maximum: object.flag("exclusiveMaximum")?,
            minimum: object.number("minimum")?,
            exclusive_minimum: object.flag("exclusiveMinimum")?,
            max_length: object.number("maxLength")?,
            min_length: object.number("minLength")?,
            pattern: object.optional_string("pattern")?,
            items: object.entity::<Schema>("items")?.map(Box::new),
            max_items: object.number("maxItems")?,
            min_items: object.number("minItems")?,
            unique_items: object.flag("uniqueItems")?,
            max_properties: object.number("maxProperties")?,
            min_properties: object.number("minProperties")?,
            required: object.strings("required")?,
            properties: object.entity_map("properties")?,
            additional_properties: decode_additional_properties(object)?,
            enum_values: object.values("enum")?,
            schema_type: object.optional_string("type")?,
            all_of: object.entities("allOf")?,
            any_of: object.entities("anyOf")?,
            one_of: object.entities("oneOf")?,
            not: object.entity::<Schema>("not")?.map(Box::new),
            title: object.optional_string("title")?,
            description: object.optional_string("description")?,
            default: object.any("default"),
            format: object.optional_string("format")?,
            extensions: object.extensions(),
        })
    }
}

fn decode_additional_properties(
    object: &ObjectReader<'_>,
) -> Result<Option<AdditionalProperties>> {
    let Some(value) = object.raw("additionalProperties") else {
        return Ok(None);
    };
    match value {
        Value::Bool(allowed) => Ok(Some(AdditionalProperties::Allowed(*allowed))),
        other => match other.as_str().and_then(bool_word) {
            Some(allowed) => Ok(Some(AdditionalProperties::Allowed(allowed))),
            None => Schema::from_generic_with(other, object.options())
                .map(|schema| Some(AdditionalProperties::Schema(Box::new(schema))))
                .map_err(|e: OasError| e.within("additionalProperties")),
        },
    }
}

impl Codec for Discriminator {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.required_string("propertyName", &self.property_name);
        obj.string_map("mapping", &self.mapping);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        Ok(Discriminator {
            property_name: object.string("propertyName")?,
            mapping: object.string_map("mapping")?,
        })
    }
}

impl Codec for Xml {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.string("name", self.name.as_deref());
        obj.string("namespace", self.namespace.as_deref());
        obj.string("prefix", self.prefix.as_deref());
        obj.flag("attribute", self.attribute);
        obj.flag("wrapped", self.wrapped);
        obj.extensions(&self.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        Ok(Xml {
            name: object.optional_string("name")?,
            namespace: object.optional_string("namespace")?,
            prefix: object.optional_string("prefix")?,
            attribute: object.flag("attribute")?,
            wrapped: object.flag("wrapped")?,
            extensions: object.extensions(),
        })
    }
}

generic_serde!(Schema, Discriminator, Xml);
