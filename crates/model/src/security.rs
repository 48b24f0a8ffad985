//! Security schemes, OAuth flows and security requirements

use openapi_graph_common::{
    Codec, Extensions, IndexMap, ObjectReader, ObjectWriter, Result, Value,
};

/// A security scheme operations can require
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecurityScheme {
    pub reference: Option<String>,

    /// The `type` field: apiKey, http, oauth2 or openIdConnect
    pub scheme_type: String,

    pub description: Option<String>,

    /// Header, query or cookie parameter name (apiKey)
    pub name: Option<String>,

    /// The `in` field: location of the API key (apiKey)
    pub location: Option<String>,

    /// HTTP authorization scheme, e.g. `bearer` (http)
    pub scheme: Option<String>,

    /// Hint for the bearer token format, e.g. `JWT` (http)
    pub bearer_format: Option<String>,

    /// Supported OAuth flows (oauth2)
    pub flows: Option<OAuthFlows>,

    /// Discovery URL (openIdConnect)
    pub open_id_connect_url: Option<String>,

    pub extensions: Extensions,
}

/// The OAuth flows a scheme supports
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OAuthFlows {
    pub implicit: Option<OAuthFlow>,
    pub password: Option<OAuthFlow>,
    pub client_credentials: Option<OAuthFlow>,
    pub authorization_code: Option<OAuthFlow>,
    pub extensions: Extensions,
}

/// Configuration of one OAuth flow
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OAuthFlow {
    pub authorization_url: String,
    pub token_url: String,
    pub refresh_url: Option<String>,

    /// Scope names to short descriptions; always emitted, even when empty
    pub scopes: IndexMap<String, String>,

    pub extensions: Extensions,
}

/// Security schemes that must all be satisfied, each with the scopes it
/// needs.
///
/// Schemes that do not use scopes map to an empty list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecurityRequirement(IndexMap<String, Vec<String>>);

impl SecurityRequirement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, scheme: impl Into<String>, scopes: Vec<String>) -> Option<Vec<String>> {
        self.0.insert(scheme.into(), scopes)
    }

    /// Scopes required for a scheme, if the scheme is part of this
    /// requirement
    pub fn scopes(&self, scheme: &str) -> Option<&[String]> {
        self.0.get(scheme).map(Vec::as_slice)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Vec<String>> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for SecurityRequirement {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        SecurityRequirement(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SecurityRequirement {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Codec for SecurityScheme {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.string("$ref", self.reference.as_deref());
        obj.required_string("type", &self.scheme_type);
        obj.string("description", self.description.as_deref());
        obj.string("name", self.name.as_deref());
        obj.string("in", self.location.as_deref());
        obj.string("scheme", self.scheme.as_deref());
        obj.string("bearerFormat", self.bearer_format.as_deref());
        obj.entity("flows", self.flows.as_ref())?;
        obj.string("openIdConnectUrl", self.open_id_connect_url.as_deref());
        obj.extensions(&self.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        Ok(SecurityScheme {
            reference: object.optional_string("$ref")?,
            scheme_type: object.string("type")?,
            description: object.optional_string("description")?,
            name: object.optional_string("name")?,
            location: object.optional_string("in")?,
            scheme: object.optional_string("scheme")?,
            bearer_format: object.optional_string("bearerFormat")?,
            flows: object.entity("flows")?,
            open_id_connect_url: object.optional_string("openIdConnectUrl")?,
            extensions: object.extensions(),
        })
    }
}

impl Codec for OAuthFlows {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.entity("implicit", self.implicit.as_ref())?;
        obj.entity("password", self.password.as_ref())?;
        obj.entity("clientCredentials", self.client_credentials.as_ref())?;
        obj.entity("authorizationCode", self.authorization_code.as_ref())?;
        obj.extensions(&self.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        Ok(OAuthFlows {
            implicit: object.entity("implicit")?,
            password: object.entity("password")?,
            client_credentials: object.entity("clientCredentials")?,
            authorization_code: object.entity("authorizationCode")?,
            extensions: object.extensions(),
        })
    }
}

impl Codec for OAuthFlow {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        obj.required_string("authorizationUrl", &self.authorization_url);
        obj.required_string("tokenUrl", &self.token_url);
        obj.string("refreshUrl", self.refresh_url.as_deref());
        obj.required_string_map("scopes", &self.scopes);
        obj.extensions(&self.extensions);
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        Ok(OAuthFlow {
            authorization_url: object.string("authorizationUrl")?,
            token_url: object.string("tokenUrl")?,
            refresh_url: object.optional_string("refreshUrl")?,
            scopes: object.string_map("scopes")?,
            extensions: object.extensions(),
        })
    }
}

impl Codec for SecurityRequirement {
    fn to_generic(&self) -> Result<Value> {
        let mut obj = ObjectWriter::new();
        for (scheme, scopes) in &self.0 {
            obj.required_strings(scheme, scopes);
        }
        Ok(obj.finish())
    }

    fn decode_object(object: &ObjectReader<'_>) -> Result<Self> {
        object
            .fields()
            .map(|(scheme, scopes)| -> Result<(String, Vec<String>)> {
                let scopes = match scopes {
                    Value::Null => Vec::new(),
                    other => object.coerce_strings(scheme, other)?,
                };
                Ok((scheme.clone(), scopes))
            })
            .collect()
    }
}

generic_serde!(SecurityScheme, OAuthFlows, OAuthFlow, SecurityRequirement);
