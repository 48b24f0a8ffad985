//! Value normalization
//!
//! YAML documents decode into any-keyed maps, possibly tagged. Everything in
//! the object graph works on the canonical generic form instead: string-keyed
//! maps, ordered sequences and scalars. YAML input is normalized once, at the
//! boundary, so no `Value` held by an entity can carry a non-string key.

use serde_json::{Map, Number, Value};

/// Convert a YAML-shaped value into the canonical generic form.
///
/// Sequences and maps are normalized recursively, map keys are stringified,
/// tags are dropped. Never fails: anything that is not a collection passes
/// through as the equivalent scalar.
pub fn normalize(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => normalize_number(&n),
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => {
            Value::Array(items.into_iter().map(normalize).collect())
        }
        serde_yaml::Value::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                object.insert(key_string(key), normalize(value));
            }
            Value::Object(object)
        }
        serde_yaml::Value::Tagged(tagged) => normalize(tagged.value),
    }
}

fn normalize_number(n: &serde_yaml::Number) -> Value {
    if let Some(u) = n.as_u64() {
        return Value::Number(u.into());
    }
    if let Some(i) = n.as_i64() {
        return Value::Number(i.into());
    }
    // JSON has no spelling for NaN or infinities; keep YAML's
    n.as_f64()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(n.to_string()))
}

fn key_string(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        other => stringify(&normalize(other)),
    }
}

/// Default string conversion of a generic value.
///
/// Strings are returned verbatim, other scalars use their display form and
/// collections their compact JSON text.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Boolean spelled as a YAML 1.1 boolean word.
///
/// YAML 1.1 also reads `y`, `yes`, `on` (and `n`, `no`, `off`) as booleans,
/// in lower, capitalized or upper case. The YAML reader follows 1.2 and
/// hands those back as strings, so fields that expect a boolean accept them
/// here.
pub fn bool_word(word: &str) -> Option<bool> {
    match word {
        "y" | "Y" | "yes" | "Yes" | "YES" | "on" | "On" | "ON" | "true" | "True" | "TRUE" => {
            Some(true)
        }
        "n" | "N" | "no" | "No" | "NO" | "off" | "Off" | "OFF" | "false" | "False" | "FALSE" => {
            Some(false)
        }
        _ => None,
    }
}

/// Name of the structural kind of a value, for diagnostics
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
