//! Typed OpenAPI 3.x object graph
//!
//! Every entity of an OpenAPI document is a plain Rust value that converts to
//! and from one generic form ([`Value`]). JSON and YAML are both produced from
//! and parsed into that form, so the two formats always agree. Fields prefixed
//! with `x-` are kept in each entity's [`Extensions`] bag; other unknown
//! fields are dropped.
//!
//! ## Usage
//! ```rust
//! use openapi_graph_model::{Codec, OpenApi};
//!
//! let doc = OpenApi::from_json_str(
//!     r#"{"openapi":"3.0.0","info":{"title":"T","version":"1.0.0"},"paths":{}}"#,
//! )?;
//! assert_eq!(doc.info.title, "T");
//!
//! let yaml = doc.to_yaml()?;
//! assert_eq!(OpenApi::from_yaml_str(&yaml)?, doc);
//! # Ok::<(), openapi_graph_model::OasError>(())
//! ```
//!
//! `$ref` strings are stored verbatim and never resolved.

#[macro_use]
mod macros;

mod callback;
mod components;
mod document;
mod example;
mod header;
mod info;
mod link;
mod media_type;
mod operation;
mod parameter;
mod path_item;
mod paths;
mod request_body;
mod response;
mod schema;
mod security;
mod server;
mod tag;

pub use callback::Callback;
pub use components::Components;
pub use document::OpenApi;
pub use example::Example;
pub use header::Header;
pub use info::{Contact, Info, License};
pub use link::Link;
pub use media_type::{Encoding, MediaType};
pub use operation::Operation;
pub use parameter::Parameter;
pub use path_item::{Method, PathItem};
pub use paths::Paths;
pub use request_body::RequestBody;
pub use response::Response;
pub use schema::{AdditionalProperties, Discriminator, Schema, Xml};
pub use security::{OAuthFlow, OAuthFlows, SecurityRequirement, SecurityScheme};
pub use server::{Server, ServerVariable};
pub use tag::{ExternalDocumentation, Tag};

pub use openapi_graph_common::{
    is_extension_key, Codec, DecodeOptions, Extensions, Format, IndexMap, OasError, Result,
    Value,
};
