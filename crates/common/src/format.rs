//! Text formats the generic form is serialized to and parsed from

use crate::{normalize, Result, Value};

/// Serialized text format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RFC 8259 JSON
    Json,

    /// YAML
    Yaml,
}

impl Format {
    /// Parse text into the generic form
    pub fn parse(self, input: &[u8]) -> Result<Value> {
        match self {
            Format::Json => Ok(serde_json::from_slice(input)?),
            Format::Yaml => {
                let raw: serde_yaml::Value = serde_yaml::from_slice(input)?;
                Ok(normalize(raw))
            }
        }
    }

    /// Serialize a generic value. JSON output is compact.
    pub fn render(self, value: &Value) -> Result<String> {
        match self {
            Format::Json => Ok(serde_json::to_string(value)?),
            Format::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }

    /// Serialize a generic value, pretty-printing JSON
    pub fn render_pretty(self, value: &Value) -> Result<String> {
        match self {
            Format::Json => Ok(serde_json::to_string_pretty(value)?),
            Format::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}
