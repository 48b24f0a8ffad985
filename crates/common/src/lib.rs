//! Common types and utilities for the OpenAPI object graph
//!
//! This crate contains the entity-agnostic half of the codec: the generic
//! form every entity is converted through, the vendor extension bag, the
//! error type, decode configuration, and the reader/writer helpers entity
//! codecs are written with.

mod codec;
mod extensions;
mod format;
mod options;
mod value;

pub use codec::{Codec, ObjectReader, ObjectWriter};
pub use extensions::{is_extension_key, Extensions};
pub use format::Format;
pub use options::DecodeOptions;
pub use value::{bool_word, kind, normalize, stringify};

pub use indexmap::IndexMap;
pub use serde_json::{Map, Number, Value};

use thiserror::Error;

/// Errors that can occur while encoding or decoding an OpenAPI entity
#[derive(Error, Debug)]
pub enum OasError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("expected {expected}, found {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid value at `{field}`")]
    Field {
        field: String,
        #[source]
        source: Box<OasError>,
    },
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, OasError>;

impl OasError {
    /// Wrap this error with the name of the field, index or key it occurred under
    pub fn within(self, field: impl Into<String>) -> Self {
        OasError::Field {
            field: field.into(),
            source: Box::new(self),
        }
    }

    /// JSON pointer to the value that failed, built from the chain of
    /// `Field` contexts. Empty when the failure happened at the top level.
    pub fn location(&self) -> String {
        let mut pointer = String::new();
        let mut current = self;
        while let OasError::Field { field, source } = current {
            pointer.push('/');
            pointer.push_str(&field.replace('~', "~0").replace('/', "~1"));
            current = source;
        }
        pointer
    }

    /// The innermost error, below all `Field` contexts
    pub fn root_cause(&self) -> &OasError {
        let mut current = self;
        while let OasError::Field { source, .. } = current {
            current = source;
        }
        current
    }
}
