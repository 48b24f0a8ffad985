//! Parameter object

use crate::Header;
use openapi_graph_common::{Codec, ObjectReader, ObjectWriter, Result, Value};

/// A single operation parameter, identified by `name` and `location`.
///
/// Everything else about the parameter lives in the embedded [`Header`],
/// including its `$ref` and extensions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameter {
    pub name: String,

    /// The `in` field: query, header, path or cookie. Not validated.
    pub location: String,

    pub header: Header,
}

impl Parameter {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Parameter {
            name: name.into(),
            location: location.into(),
            header: Header::default(),
        }
    }

    /// Parameter that only holds a `$ref`
    pub fn reference(target: impl Into<String>) -> Self {
        Parameter {
            header: Header {
                reference: Some(target.into()),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

impl Codec for Parameter {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.string("$ref", self.header.reference.as_deref());
        obj.required_string("name", &self.name);
        obj.required_string("in", &self.location);
        self.header.write_body(&mut obj)?;
        obj.extensions(&self.header.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        Ok(Parameter {
            name: object.string("name")?,
            location: object.string("in")?,
            header: Header::decode_object(object)?,
        })
    }
}

generic_serde!(Parameter);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::assert_round_trip;
    use crate::{Extensions, Schema};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parameter_round_trip() {
        let mut extensions = Extensions::new();
        extensions.insert("x-example-group", json!("pets"));
        assert_round_trip(&Parameter {
            name: "petId".to_string(),
            location: "path".to_string(),
            header: Header {
                description: Some("ID of pet to use".to_string()),
                required: true,
                style: Some("simple".to_string()),
                schema: Some(Schema {
                    schema_type: Some("array".to_string()),
                    items: Some(Box::new(Schema::of_type("string"))),
                    ..Default::default()
                }),
                extensions,
                ..Default::default()
            },
        });
    }

    #[test]
    fn test_header_fields_are_flat() {
        let mut parameter = Parameter::new("limit", "query");
        parameter.header.required = true;
        parameter.header.schema = Some(Schema::of_type("integer"));
        assert_eq!(
            parameter.to_generic().unwrap(),
            json!({
                "name": "limit",
                "in": "query",
                "required": true,
                "schema": {"type": "integer"}
            })
        );
    }

    #[test]
    fn test_decode_flat_object_into_header() {
        let parameter = Parameter::from_yaml_str(
            "name: token\nin: header\ndescription: token to be passed as a header\nrequired: true\nx-secret: true\n",
        )
        .unwrap();
        assert_eq!(parameter.name, "token");
        assert_eq!(parameter.location, "header");
        assert!(parameter.header.required);
        assert_eq!(
            parameter.header.description.as_deref(),
            Some("token to be passed as a header")
        );
        assert_eq!(parameter.header.extensions.get("x-secret"), Some(&json!(true)));
    }

    #[test]
    fn test_reference_parameter_still_emits_name_and_in() {
        let parameter = Parameter::reference("#/components/parameters/limit");
        assert_eq!(
            parameter.to_generic().unwrap(),
            json!({"$ref": "#/components/parameters/limit", "name": "", "in": ""})
        );
        assert_round_trip(&parameter);
    }
}
