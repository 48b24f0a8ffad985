//! Generic-form codec
//!
//! Every entity converts to and from one generic value (`to_generic` /
//! `decode_object`). JSON and YAML are only ever produced from, and parsed
//! into, that value, so the two formats cannot drift apart.

use crate::{
    bool_word, is_extension_key, kind, stringify, DecodeOptions, Extensions, Format, OasError, Result,
};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::cell::{Cell, RefCell};

/// Conversion between a typed entity and the generic form
pub trait Codec: Sized {
    /// Build the generic form of this entity. Zero-valued optional fields
    /// are omitted, required fields are always present, extensions go last.
    fn to_generic(&self) -> Result<Value>;

    /// Populate an entity from the fields of one generic object
    fn decode_object(object: &ObjectReader<'_>) -> Result<Self>;

    fn from_generic(value: &Value) -> Result<Self> {
        Self::from_generic_with(value, &DecodeOptions::default())
    }

    fn from_generic_with(value: &Value, options: &DecodeOptions) -> Result<Self> {
        let reader = ObjectReader::new(value, options)?;
        let entity = Self::decode_object(&reader)?;
        reader.report_unrecognized(std::any::type_name::<Self>());
        Ok(entity)
    }

    fn decode(format: Format, input: &[u8]) -> Result<Self> {
        Self::decode_with(format, input, &DecodeOptions::default())
    }

    fn decode_with(format: Format, input: &[u8], options: &DecodeOptions) -> Result<Self> {
        tracing::trace!(
            entity = std::any::type_name::<Self>(),
            ?format,
            bytes = input.len(),
            "decoding"
        );
        let value = format.parse(input)?;
        Self::from_generic_with(&value, options)
    }

    fn from_json(input: &[u8]) -> Result<Self> {
        Self::decode(Format::Json, input)
    }

    fn from_json_str(input: &str) -> Result<Self> {
        Self::from_json(input.as_bytes())
    }

    fn from_yaml(input: &[u8]) -> Result<Self> {
        Self::decode(Format::Yaml, input)
    }

    fn from_yaml_str(input: &str) -> Result<Self> {
        Self::from_yaml(input.as_bytes())
    }

    fn encode(&self, format: Format) -> Result<String> {
        tracing::trace!(entity = std::any::type_name::<Self>(), ?format, "encoding");
        format.render(&self.to_generic()?)
    }

    fn to_json(&self) -> Result<String> {
        self.encode(Format::Json)
    }

    fn to_json_pretty(&self) -> Result<String> {
        Format::Json.render_pretty(&self.to_generic()?)
    }

    fn to_yaml(&self) -> Result<String> {
        self.encode(Format::Yaml)
    }

    /// Fully independent copy made by encoding to the generic form and
    /// decoding it back, so it always agrees with the decoder.
    fn deep_clone(&self) -> Result<Self> {
        Self::from_generic(&self.to_generic()?)
    }
}

/// Read access to the fields of one generic object during decoding.
///
/// Scalar accessors follow the configured [`DecodeOptions`]: a wrong-typed
/// value is either zeroed or reported. Nested entity accessors always fail
/// on a structurally wrong value, wrapping the failure with the field name.
/// `null` in place of an object reads as an object without fields.
pub struct ObjectReader<'a> {
    object: Option<&'a Map<String, Value>>,
    options: &'a DecodeOptions,
    consumed: RefCell<Vec<&'static str>>,
    consumed_all: Cell<bool>,
}

impl<'a> ObjectReader<'a> {
    pub fn new(value: &'a Value, options: &'a DecodeOptions) -> Result<Self> {
        let object = match value {
            Value::Object(object) => Some(object),
            Value::Null => None,
            other => {
                return Err(OasError::UnexpectedShape {
                    expected: "object",
                    found: kind(other),
                })
            }
        };
        Ok(Self {
            object,
            options,
            consumed: RefCell::new(Vec::new()),
            consumed_all: Cell::new(false),
        })
    }

    pub fn options(&self) -> &'a DecodeOptions {
        self.options
    }

    fn get(&self, key: &'static str) -> Option<&'a Value> {
        self.consumed.borrow_mut().push(key);
        self.object?.get(key)
    }

    /// Like `get`, but `null` counts as absent
    fn get_present(&self, key: &'static str) -> Option<&'a Value> {
        self.get(key).filter(|value| !value.is_null())
    }

    fn mismatch<T: Default>(&self, key: &str, expected: &'static str, found: &Value) -> Result<T> {
        if self.options.strict_types() {
            return Err(OasError::TypeMismatch {
                expected,
                found: kind(found),
            }
            .within(key));
        }
        tracing::debug!(
            field = key,
            expected,
            found = kind(found),
            "ignoring mistyped field"
        );
        Ok(T::default())
    }

    /// A required string field; absent reads as empty
    pub fn string(&self, key: &'static str) -> Result<String> {
        Ok(self.optional_string(key)?.unwrap_or_default())
    }

    pub fn optional_string(&self, key: &'static str) -> Result<Option<String>> {
        match self.get_present(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => self.mismatch(key, "string", other),
        }
    }

    /// A boolean flag; absent reads as `false`. YAML 1.1 boolean words
    /// (`yes`, `off`, ...) are accepted in place of `true`/`false`.
    pub fn flag(&self, key: &'static str) -> Result<bool> {
        match self.get_present(key) {
            None => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(other) => match other.as_str().and_then(bool_word) {
                Some(b) => Ok(b),
                None => self.mismatch(key, "boolean", other),
            },
        }
    }

    /// A free-form value, stored untyped
    pub fn any(&self, key: &'static str) -> Option<Value> {
        self.get_present(key).cloned()
    }

    /// Borrow a field's raw value, for fields whose shape decides how they
    /// are decoded
    pub fn raw(&self, key: &'static str) -> Option<&'a Value> {
        self.get_present(key)
    }

    /// A numeric value, kept untyped so integer and float literals survive
    /// as written
    pub fn number(&self, key: &'static str) -> Result<Option<Value>> {
        match self.get_present(key) {
            None => Ok(None),
            Some(value @ Value::Number(_)) => Ok(Some(value.clone())),
            Some(other) => self.mismatch(key, "number", other),
        }
    }

    /// An ordered list of free-form values
    pub fn values(&self, key: &'static str) -> Result<Vec<Value>> {
        match self.get_present(key) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => Ok(items.clone()),
            Some(other) => self.mismatch(key, "array", other),
        }
    }

    /// An ordered list of strings. Elements of other types are converted to
    /// their string form rather than rejected.
    pub fn strings(&self, key: &'static str) -> Result<Vec<String>> {
        match self.get_present(key) {
            None => Ok(Vec::new()),
            Some(value) => self.coerce_strings(key, value),
        }
    }

    /// Convert an array value into strings, element by element
    pub fn coerce_strings(&self, key: &str, value: &Value) -> Result<Vec<String>> {
        match value {
            Value::Array(items) => Ok(items.iter().map(stringify).collect()),
            other => self.mismatch(key, "array", other),
        }
    }

    /// A string-to-string map. Values of other types are converted to their
    /// string form.
    pub fn string_map(&self, key: &'static str) -> Result<IndexMap<String, String>> {
        match self.get_present(key) {
            None => Ok(IndexMap::new()),
            Some(Value::Object(object)) => Ok(object
                .iter()
                .map(|(name, value)| (name.clone(), stringify(value)))
                .collect()),
            Some(other) => self.mismatch(key, "object", other),
        }
    }

    /// A map of free-form values
    pub fn value_map(&self, key: &'static str) -> Result<IndexMap<String, Value>> {
        match self.get_present(key) {
            None => Ok(IndexMap::new()),
            Some(Value::Object(object)) => Ok(object
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect()),
            Some(other) => self.mismatch(key, "object", other),
        }
    }

    /// A nested entity. Present-but-null decodes as the zero entity.
    pub fn entity<T: Codec>(&self, key: &'static str) -> Result<Option<T>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => T::from_generic_with(value, self.options)
                .map(Some)
                .map_err(|e| e.within(key)),
        }
    }

    /// A required nested entity; absent decodes as the zero entity
    pub fn required_entity<T: Codec>(&self, key: &'static str) -> Result<T> {
        match self.get(key) {
            None => T::from_generic_with(&Value::Null, self.options),
            Some(value) => T::from_generic_with(value, self.options).map_err(|e| e.within(key)),
        }
    }

    /// An ordered list of nested entities
    pub fn entities<T: Codec>(&self, key: &'static str) -> Result<Vec<T>> {
        Ok(self.optional_entities(key)?.unwrap_or_default())
    }

    /// An ordered list of nested entities, keeping "absent" apart from an
    /// explicitly empty list
    pub fn optional_entities<T: Codec>(&self, key: &'static str) -> Result<Option<Vec<T>>> {
        match self.get_present(key) {
            None => Ok(None),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    T::from_generic_with(item, self.options).map_err(|e| e.within(index.to_string()))
                })
                .collect::<Result<Vec<_>>>()
                .map(Some)
                .map_err(|e| e.within(key)),
            Some(other) => Err(OasError::UnexpectedShape {
                expected: "array",
                found: kind(other),
            }
            .within(key)),
        }
    }

    /// A map of nested entities keyed by name
    pub fn entity_map<T: Codec>(&self, key: &'static str) -> Result<IndexMap<String, T>> {
        match self.get_present(key) {
            None => Ok(IndexMap::new()),
            Some(Value::Object(object)) => decode_entries(object.iter(), self.options)
                .map_err(|e| e.within(key)),
            Some(other) => Err(OasError::UnexpectedShape {
                expected: "object",
                found: kind(other),
            }
            .within(key)),
        }
    }

    /// Every key of the object that is not an extension and not listed in
    /// `skip`, decoded as `T`. Used by entities whose own keys are free-form
    /// (paths, callback expressions).
    pub fn entries<T: Codec>(&self, skip: &[&str]) -> Result<IndexMap<String, T>> {
        self.consumed_all.set(true);
        let Some(object) = self.object else {
            return Ok(IndexMap::new());
        };
        let entries = object
            .iter()
            .filter(|(key, _)| !is_extension_key(key) && !skip.iter().any(|s| *s == key.as_str()));
        decode_entries(entries, self.options)
    }

    /// Iterate the raw fields of the object, for entities that are plain
    /// maps
    pub fn fields(&self) -> impl Iterator<Item = (&'a String, &'a Value)> {
        self.consumed_all.set(true);
        self.object.into_iter().flat_map(|object| object.iter())
    }

    /// The extension fields of the object
    pub fn extensions(&self) -> Extensions {
        self.object
            .map(Extensions::from_object)
            .unwrap_or_default()
    }

    fn report_unrecognized(&self, entity: &str) {
        if self.consumed_all.get() {
            return;
        }
        let Some(object) = self.object else {
            return;
        };
        let consumed = self.consumed.borrow();
        for key in object.keys() {
            if !is_extension_key(key) && !consumed.iter().any(|c| *c == key.as_str()) {
                tracing::debug!(entity, key = key.as_str(), "dropping unrecognized field");
            }
        }
    }
}

fn decode_entries<'a, T: Codec>(
    entries: impl Iterator<Item = (&'a String, &'a Value)>,
    options: &DecodeOptions,
) -> Result<IndexMap<String, T>> {
    entries
        .map(|(name, value)| {
            T::from_generic_with(value, options)
                .map(|entity| (name.clone(), entity))
                .map_err(|e| e.within(name.as_str()))
        })
        .collect()
}

/// Builder for the generic form of one entity.
///
/// Optional setters skip zero values (`None`, `false`, empty collections);
/// `required_*` setters always write the key.
#[derive(Debug, Default)]
pub struct ObjectWriter {
    object: Map<String, Value>,
}

impl ObjectWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required_string(&mut self, key: &str, value: &str) {
        self.insert(key, Value::String(value.to_string()));
    }

    pub fn string(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.required_string(key, value);
        }
    }

    pub fn flag(&mut self, key: &str, value: bool) {
        if value {
            self.insert(key, Value::Bool(true));
        }
    }

    pub fn any(&mut self, key: &str, value: Option<&Value>) {
        if let Some(value) = value {
            self.insert(key, value.clone());
        }
    }

    pub fn values(&mut self, key: &str, values: &[Value]) {
        if !values.is_empty() {
            self.insert(key, Value::Array(values.to_vec()));
        }
    }

    pub fn strings(&mut self, key: &str, values: &[String]) {
        if !values.is_empty() {
            self.required_strings(key, values);
        }
    }

    pub fn required_strings(&mut self, key: &str, values: &[String]) {
        let items = values.iter().cloned().map(Value::String).collect();
        self.insert(key, Value::Array(items));
    }

    pub fn string_map(&mut self, key: &str, map: &IndexMap<String, String>) {
        if !map.is_empty() {
            self.required_string_map(key, map);
        }
    }

    pub fn required_string_map(&mut self, key: &str, map: &IndexMap<String, String>) {
        let object = map
            .iter()
            .map(|(name, value)| (name.clone(), Value::String(value.clone())))
            .collect();
        self.insert(key, Value::Object(object));
    }

    pub fn value_map(&mut self, key: &str, map: &IndexMap<String, Value>) {
        if !map.is_empty() {
            let object = map
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect();
            self.insert(key, Value::Object(object));
        }
    }

    pub fn entity<T: Codec>(&mut self, key: &str, value: Option<&T>) -> Result<()> {
        match value {
            Some(value) => self.required_entity(key, value),
            None => Ok(()),
        }
    }

    pub fn required_entity<T: Codec>(&mut self, key: &str, value: &T) -> Result<()> {
        let generic = value.to_generic().map_err(|e| e.within(key))?;
        self.insert(key, generic);
        Ok(())
    }

    pub fn entities<T: Codec>(&mut self, key: &str, values: &[T]) -> Result<()> {
        if values.is_empty() {
            return Ok(());
        }
        self.required_entities(key, values)
    }

    pub fn required_entities<T: Codec>(&mut self, key: &str, values: &[T]) -> Result<()> {
        let items = values
            .iter()
            .enumerate()
            .map(|(index, value)| value.to_generic().map_err(|e| e.within(index.to_string())))
            .collect::<Result<Vec<_>>>()
            .map_err(|e| e.within(key))?;
        self.insert(key, Value::Array(items));
        Ok(())
    }

    pub fn entity_map<T: Codec>(&mut self, key: &str, map: &IndexMap<String, T>) -> Result<()> {
        if map.is_empty() {
            return Ok(());
        }
        self.required_entity_map(key, map)
    }

    pub fn required_entity_map<T: Codec>(
        &mut self,
        key: &str,
        map: &IndexMap<String, T>,
    ) -> Result<()> {
        let object = encode_entries(map).map_err(|e| e.within(key))?;
        self.insert(key, Value::Object(object));
        Ok(())
    }

    /// Merge a map of entities directly into this object, one key each.
    /// Extension keys are skipped so they cannot collide with the bag.
    pub fn entries<T: Codec>(&mut self, map: &IndexMap<String, T>) -> Result<()> {
        for (name, value) in map {
            if is_extension_key(name) {
                continue;
            }
            let generic = value.to_generic().map_err(|e| e.within(name.as_str()))?;
            self.insert(name, generic);
        }
        Ok(())
    }

    pub fn extensions(&mut self, extensions: &Extensions) {
        extensions.merge_into(&mut self.object);
    }

    /// Write a raw generic value under `key`
    pub fn insert(&mut self, key: &str, value: Value) {
        self.object.insert(key.to_string(), value);
    }

    pub fn finish(self) -> Value {
        Value::Object(self.object)
    }
}

fn encode_entries<T: Codec>(map: &IndexMap<String, T>) -> Result<Map<String, Value>> {
    map.iter()
        .map(|(name, value)| {
            value
                .to_generic()
                .map(|generic| (name.clone(), generic))
                .map_err(|e| e.within(name.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq)]
    struct Pet {
        name: String,
        tag: Option<String>,
        good: bool,
        labels: Vec<String>,
        friends: IndexMap<String, Pet>,
        extensions: Extensions,
    }

    impl Codec for Pet {
        fn to_generic(&self) -> Result<Value> {
            let mut obj = ObjectWriter::new();
            obj.required_string("name", &self.name);
            obj.string("tag", self.tag.as_deref());
            obj.flag("good", self.good);
            obj.strings("labels", &self.labels);
            obj.entity_map("friends", &self.friends)?;
            obj.extensions(&self.extensions);
            Ok(obj.finish())
        }

        fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
            Ok(Pet {
                name: object.string("name")?,
                tag: object.optional_string("tag")?,
                good: object.flag("good")?,
                labels: object.strings("labels")?,
                friends: object.entity_map("friends")?,
                extensions: object.extensions(),
            })
        }
    }

    #[test]
    fn test_writer_omits_zero_values() {
        let pet = Pet {
            name: "Rex".to_string(),
            ..Default::default()
        };
        assert_eq!(pet.to_generic().unwrap(), json!({"name": "Rex"}));
    }

    #[test]
    fn test_reader_zeroes_mistyped_scalars_by_default() {
        let pet = Pet::from_generic(&json!({"name": 12, "good": "sometimes", "tag": ["a"]})).unwrap();
        assert_eq!(pet, Pet::default());
    }

    #[test]
    fn test_strict_reader_reports_mistyped_scalars() {
        let err = Pet::from_generic_with(&json!({"name": 12}), &DecodeOptions::strict())
            .unwrap_err();
        assert_eq!(err.location(), "/name");
        assert!(matches!(
            err.root_cause(),
            OasError::TypeMismatch {
                expected: "string",
                found: "number"
            }
        ));
    }

    #[test]
    fn test_flags_accept_yaml_1_1_words() {
        let pet = Pet::from_yaml_str("name: Rex\ngood: yes\n").unwrap();
        assert!(pet.good);

        let strict = DecodeOptions::strict();
        let pet = Pet::decode_with(Format::Yaml, b"good: On\n", &strict).unwrap();
        assert!(pet.good);
        let pet = Pet::decode_with(Format::Yaml, b"good: off\n", &strict).unwrap();
        assert!(!pet.good);

        let err = Pet::decode_with(Format::Yaml, b"good: maybe\n", &strict).unwrap_err();
        assert_eq!(err.location(), "/good");
    }

    #[test]
    fn test_strings_are_coerced() {
        let pet = Pet::from_generic(&json!({"labels": [1, true, "x", 2.5]})).unwrap();
        assert_eq!(pet.labels, vec!["1", "true", "x", "2.5"]);
    }

    #[test]
    fn test_nested_failure_carries_location() {
        let err = Pet::from_generic(&json!({"friends": {"Fido": {"friends": {"Tom": 3}}}}))
            .unwrap_err();
        assert_eq!(err.location(), "/friends/Fido/friends/Tom");
        assert!(matches!(
            err.root_cause(),
            OasError::UnexpectedShape {
                expected: "object",
                found: "number"
            }
        ));
    }

    #[test]
    fn test_null_reads_as_empty_object() {
        assert_eq!(Pet::from_generic(&Value::Null).unwrap(), Pet::default());
    }

    #[test]
    fn test_non_object_is_an_error() {
        assert!(Pet::from_generic(&json!([1, 2])).is_err());
    }

    #[test]
    fn test_extensions_are_captured_and_plain_keys_dropped() {
        let pet = Pet::from_generic(&json!({
            "name": "Rex",
            "x-vet": {"visits": 3},
            "color": "brown"
        }))
        .unwrap();
        assert_eq!(pet.extensions.get("x-vet"), Some(&json!({"visits": 3})));
        assert_eq!(pet.extensions.len(), 1);
        assert_eq!(
            pet.to_generic().unwrap(),
            json!({"name": "Rex", "x-vet": {"visits": 3}})
        );
    }

    #[test]
    fn test_json_and_yaml_decode_identically() {
        let json = Pet::from_json_str(r#"{"name": "Rex", "friends": {"Tom": {"name": "Tom"}}}"#)
            .unwrap();
        let yaml = Pet::from_yaml_str("name: Rex\nfriends:\n  Tom:\n    name: Tom\n").unwrap();
        assert_eq!(json, yaml);
    }

    #[test]
    fn test_deep_clone_matches_original() {
        let mut pet = Pet {
            name: "Rex".to_string(),
            tag: Some(String::new()),
            ..Default::default()
        };
        pet.friends.insert(
            "Tom".to_string(),
            Pet {
                name: "Tom".to_string(),
                good: true,
                ..Default::default()
            },
        );
        assert_eq!(pet.deep_clone().unwrap(), pet);
    }
}
