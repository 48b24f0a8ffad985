//! Decode configuration

/// Options controlling how strictly the generic form is mapped onto typed
/// entities.
///
/// The default is lenient: a recognized field holding a value of the wrong
/// scalar type is left at its zero value, so slightly malformed third-party
/// documents still load. Strict decoding reports those fields as
/// [`OasError::TypeMismatch`](crate::OasError::TypeMismatch) instead.
///
/// ```
/// use openapi_graph_common::DecodeOptions;
///
/// let options = DecodeOptions::new().with_strict_types(true);
/// assert!(options.strict_types());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    strict_types: bool,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lenient decoding, the default
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Strict decoding: scalar type mismatches are errors
    pub fn strict() -> Self {
        Self { strict_types: true }
    }

    pub fn with_strict_types(mut self, strict: bool) -> Self {
        self.strict_types = strict;
        self
    }

    pub fn strict_types(&self) -> bool {
        self.strict_types
    }
}
