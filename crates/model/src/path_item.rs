//! PathItem object and the HTTP methods it holds operations for

use crate::{Operation, Parameter, Server};
use openapi_graph_common::{Codec, Extensions, ObjectReader, ObjectWriter, Result, Value};
use std::fmt;

/// HTTP methods a path item can hold an operation for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl Method {
    /// All methods, in the order path items list them
    pub const ALL: [Method; 8] = [
        Method::Get,
        Method::Put,
        Method::Post,
        Method::Delete,
        Method::Options,
        Method::Head,
        Method::Patch,
        Method::Trace,
    ];

    /// Field name of the method in a path item
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Put => "put",
            Method::Post => "post",
            Method::Delete => "delete",
            Method::Options => "options",
            Method::Head => "head",
            Method::Patch => "patch",
            Method::Trace => "trace",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operations available on a single path
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
    pub reference: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,

    pub get: Option<Operation>,
    pub put: Option<Operation>,
    pub post: Option<Operation>,
    pub delete: Option<Operation>,
    pub options: Option<Operation>,
    pub head: Option<Operation>,
    pub patch: Option<Operation>,
    pub trace: Option<Operation>,

    /// Servers overriding the document-level ones for this path
    pub servers: Vec<Server>,

    /// Parameters shared by every operation on this path
    pub parameters: Vec<Parameter>,

    pub extensions: Extensions,
}

impl PathItem {
    pub fn operation(&self, method: Method) -> Option<&Operation> {
        match method {
            Method::Get => self.get.as_ref(),
            Method::Put => self.put.as_ref(),
            Method::Post => self.post.as_ref(),
            Method::Delete => self.delete.as_ref(),
            Method::Options => self.options.as_ref(),
            Method::Head => self.head.as_ref(),
            Method::Patch => self.patch.as_ref(),
            Method::Trace => self.trace.as_ref(),
        }
    }

    pub fn operation_mut(&mut self, method: Method) -> &mut Option<Operation> {
        match method {
            Method::Get => &mut self.get,
            Method::Put => &mut self.put,
            Method::Post => &mut self.post,
            Method::Delete => &mut self.delete,
            Method::Options => &mut self.options,
            Method::Head => &mut self.head,
            Method::Patch => &mut self.patch,
            Method::Trace => &mut self.trace,
        }
    }

    /// Populated operations in method order
    pub fn operations(&self) -> impl Iterator<Item = (Method, &Operation)> {
        Method::ALL
            .into_iter()
            .filter_map(move |method| self.operation(method).map(|op| (method, op)))
    }
}

impl Codec for PathItem {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.string("$ref", self.reference.as_deref());
        obj.string("summary", self.summary.as_deref());
        obj.string("description", self.description.as_deref());
        for (method, operation) in self.operations() {
            obj.required_entity(method.as_str(), operation)?;
        }
        obj.entities("servers", &self.servers)?;
        obj.entities("parameters", &self.parameters)?;
        obj.extensions(&self.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        Ok(PathItem {
            reference: object.optional_string("$ref")?,
            summary: object.optional_string("summary")?,
            description: object.optional_string("description")?,
            get: object.entity("get")?,
            put: object.entity("put")?,
            post: object.entity("post")?,
            delete: object.entity("delete")?,
            options: object.entity("options")?,
            head: object.entity("head")?,
            patch: object.entity("patch")?,
            trace: object.entity("trace")?,
            servers: object.entities("servers")?,
            parameters: object.entities("parameters")?,
            extensions: object.extensions(),
        })
    }
}

generic_serde!(PathItem);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::assert_round_trip;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn named(operation_id: &str) -> Operation {
        Operation {
            operation_id: Some(operation_id.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_every_method_slot_round_trips() {
        let mut item = PathItem {
            summary: Some("Everything".to_string()),
            parameters: vec![Parameter::new("id", "path")],
            ..Default::default()
        };
        for method in Method::ALL {
            *item.operation_mut(method) = Some(named(method.as_str()));
        }
        assert_round_trip(&item);
        assert_eq!(item.operations().count(), 8);
    }

    #[test]
    fn test_operations_in_method_order() {
        let item = PathItem::from_yaml_str(
            "post:\n  operationId: create\n  responses: {}\nget:\n  operationId: list\n  responses: {}\n",
        )
        .unwrap();
        let ids: Vec<(Method, &str)> = item
            .operations()
            .map(|(method, op)| (method, op.operation_id.as_deref().unwrap_or_default()))
            .collect();
        assert_eq!(ids, vec![(Method::Get, "list"), (Method::Post, "create")]);
        assert!(item.operation(Method::Delete).is_none());
    }

    #[test]
    fn test_null_operation_decodes_as_empty() {
        let item = PathItem::from_json_str(r#"{"get": null}"#).unwrap();
        assert_eq!(item.get, Some(Operation::default()));
    }

    #[test]
    fn test_operation_failure_location() {
        let err = PathItem::from_json_str(r#"{"put": "nope"}"#).unwrap_err();
        assert_eq!(err.location(), "/put");
    }

    #[test]
    fn test_reference_path_item() {
        let item = PathItem {
            reference: Some("#/components/pathItems/Pets".to_string()),
            ..Default::default()
        };
        assert_eq!(
            item.to_generic().unwrap(),
            json!({"$ref": "#/components/pathItems/Pets"})
        );
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Options.to_string(), "options");
    }
}
