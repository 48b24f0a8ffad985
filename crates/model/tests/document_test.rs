//! Whole-document tests over the petstore fixture

use anyhow::{anyhow, Result};
use openapi_graph_model::{
    AdditionalProperties, Codec, Contact, DecodeOptions, Discriminator, Extensions, Format,
    Header, Info, License, Link, MediaType, Method, OAuthFlow, OasError, OpenApi, Operation,
    Paths, RequestBody, Response, Schema, SecurityRequirement, SecurityScheme, Server,
    ServerVariable, Tag, Value,
};
use pretty_assertions::assert_eq;
use serde_json::json;

const PETSTORE_YAML: &str = include_str!("data/petstore.yaml");
const PETSTORE_JSON: &str = include_str!("data/petstore.json");

fn petstore() -> Result<OpenApi> {
    Ok(OpenApi::from_yaml_str(PETSTORE_YAML)?)
}

fn operation<'a>(doc: &'a OpenApi, path: &str, method: Method) -> Result<&'a Operation> {
    doc.paths
        .get(path)
        .and_then(|item| item.operation(method))
        .ok_or_else(|| anyhow!("no {method} operation on {path}"))
}

#[test]
fn test_json_and_yaml_fixtures_decode_identically() -> Result<()> {
    let from_yaml = petstore()?;
    let from_json = OpenApi::from_json_str(PETSTORE_JSON)?;
    assert_eq!(from_json, from_yaml);
    Ok(())
}

#[test]
fn test_round_trip_through_both_formats() -> Result<()> {
    let doc = petstore()?;

    let json = doc.to_json()?;
    assert_eq!(OpenApi::from_json_str(&json)?, doc);

    let pretty = doc.to_json_pretty()?;
    assert_eq!(OpenApi::decode(Format::Json, pretty.as_bytes())?, doc);

    let yaml = doc.to_yaml()?;
    assert_eq!(OpenApi::from_yaml_str(&yaml)?, doc);

    assert_eq!(doc.deep_clone()?, doc);
    Ok(())
}

#[test]
fn test_encoding_is_stable() -> Result<()> {
    let doc = petstore()?;
    let once = doc.to_generic()?;
    let twice = OpenApi::from_generic(&once)?.to_generic()?;
    assert_eq!(twice, once);
    Ok(())
}

#[test]
fn test_petstore_content() -> Result<()> {
    let doc = petstore()?;

    assert_eq!(doc.openapi, "3.0.3");
    assert_eq!(
        doc.info.license.as_ref().map(|l| l.name.as_str()),
        Some("Apache 2.0")
    );
    assert_eq!(
        doc.info.extensions.get("x-logo"),
        Some(&json!({"url": "https://example.com/logo.png"}))
    );
    assert_eq!(
        doc.servers[0].variables["port"].enum_values,
        vec!["8443", "443"]
    );
    assert_eq!(doc.paths.len(), 2);

    let list = operation(&doc, "/pets", Method::Get)?;
    assert_eq!(list.operation_id.as_deref(), Some("listPets"));
    assert_eq!(list.security, None);
    let limit = &list.parameters[0];
    assert_eq!((limit.name.as_str(), limit.location.as_str()), ("limit", "query"));
    assert_eq!(
        limit.header.schema.as_ref().and_then(|s| s.maximum.clone()),
        Some(json!(100))
    );
    assert_eq!(
        list.responses["200"].headers["x-next"]
            .schema
            .as_ref()
            .and_then(|s| s.schema_type.as_deref()),
        Some("string")
    );
    assert_eq!(
        list.response("500").and_then(|r| r.reference.as_deref()),
        Some("#/components/responses/Error")
    );

    let create = operation(&doc, "/pets", Method::Post)?;
    let security = create
        .security
        .as_ref()
        .ok_or_else(|| anyhow!("createPets has security"))?;
    assert_eq!(
        security[0].scopes("petstore_auth"),
        Some(&["write:pets".to_string(), "read:pets".to_string()][..])
    );
    let kitty = &create
        .request_body
        .as_ref()
        .ok_or_else(|| anyhow!("createPets has a body"))?
        .content["application/json"]
        .examples["kitty"];
    assert_eq!(
        kitty.value,
        Some(json!({"id": 1, "name": "Kitty", "tag": "cat"}))
    );
    assert_eq!(
        create.responses["201"].links["GetPetById"].parameters["petId"],
        json!("$response.body#/id")
    );
    let callback = &create.callbacks["onAdopted"];
    assert!(callback
        .get("{$request.body#/callbackUrl}")
        .and_then(|item| item.operation(Method::Post))
        .is_some());

    let show = operation(&doc, "/pets/{petId}", Method::Get)?;
    assert_eq!(show.security, Some(Vec::new()));
    let shared = &doc
        .paths
        .get("/pets/{petId}")
        .ok_or_else(|| anyhow!("missing path"))?
        .parameters;
    assert_eq!(
        shared[0].header.reference.as_deref(),
        Some("#/components/parameters/petId")
    );

    let components = doc
        .components
        .as_ref()
        .ok_or_else(|| anyhow!("petstore has components"))?;
    let pet = &components.schemas["Pet"];
    assert_eq!(
        pet.additional_properties,
        Some(AdditionalProperties::Allowed(false))
    );
    assert_eq!(
        pet.discriminator.as_ref().map(|d| d.property_name.as_str()),
        Some("petType")
    );
    assert_eq!(pet.properties["weight"].multiple_of, Some(json!(0.5)));
    assert!(pet.properties["weight"].exclusive_minimum);
    assert!(pet.properties["petType"]
        .xml
        .as_ref()
        .is_some_and(|xml| xml.attribute));
    assert_eq!(pet.extensions.get("x-entity"), Some(&json!(true)));
    assert_eq!(
        components.schemas["Error"].additional_properties,
        Some(AdditionalProperties::Schema(Box::new(Schema::of_type(
            "string"
        ))))
    );
    assert_eq!(components.schemas["Cat"].all_of.len(), 2);
    assert_eq!(
        components.security_schemes["petstore_auth"]
            .flows
            .as_ref()
            .and_then(|f| f.implicit.as_ref())
            .map(|flow| flow.scopes.len()),
        Some(2)
    );
    assert_eq!(doc.security[0].scopes("api_key"), Some(&[][..]));
    Ok(())
}

#[test]
fn test_extension_isolation() -> Result<()> {
    let doc = petstore()?;

    assert_eq!(doc.extensions.get("x-custom"), Some(&json!({"a": 1})));
    assert_eq!(doc.extensions.len(), 1);
    assert_eq!(
        doc.paths.extensions.get("x-paths-owner"),
        Some(&json!("pets-team"))
    );
    assert!(doc.paths.get("x-paths-owner").is_none());

    let generic = doc.to_generic()?;
    assert_eq!(generic.get("not-an-extension"), None);

    let info = Info::from_json_str(
        r#"{"title": "T", "version": "1", "X-Upper": 1, "x-lower": 2, "xenial": 3, "x": 4}"#,
    )?;
    let keys: Vec<&str> = info.extensions.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["X-Upper", "x-lower"]);
    Ok(())
}

#[test]
fn test_extension_values_from_yaml_are_normalized() -> Result<()> {
    let tag = Tag::from_yaml_str(
        r#"
name: pets
x-map:
  1: one
  true: yes-ish
  nested:
    - {2: two}
x-nan: .nan
"#,
    )?;
    assert_eq!(
        tag.extensions.get("x-map"),
        Some(&json!({"1": "one", "true": "yes-ish", "nested": [{"2": "two"}]}))
    );
    assert_eq!(tag.extensions.get("x-nan"), Some(&json!(".nan")));
    Ok(())
}

#[test]
fn test_omission_law() -> Result<()> {
    let cases: Vec<(&str, Value, Value)> = vec![
        ("Info", Info::default().to_generic()?, json!({"title": "", "version": ""})),
        ("Contact", Contact::default().to_generic()?, json!({})),
        ("License", License::default().to_generic()?, json!({"name": ""})),
        ("Server", Server::default().to_generic()?, json!({"url": ""})),
        (
            "ServerVariable",
            ServerVariable::default().to_generic()?,
            json!({"default": ""}),
        ),
        ("Tag", Tag::default().to_generic()?, json!({"name": ""})),
        (
            "Discriminator",
            Discriminator::default().to_generic()?,
            json!({"propertyName": ""}),
        ),
        ("Schema", Schema::default().to_generic()?, json!({})),
        ("Header", Header::default().to_generic()?, json!({})),
        ("MediaType", MediaType::default().to_generic()?, json!({})),
        (
            "RequestBody",
            RequestBody::default().to_generic()?,
            json!({"content": {}}),
        ),
        (
            "Response",
            Response::default().to_generic()?,
            json!({"description": ""}),
        ),
        ("Link", Link::default().to_generic()?, json!({})),
        (
            "Operation",
            Operation::default().to_generic()?,
            json!({"responses": {}}),
        ),
        ("Paths", Paths::default().to_generic()?, json!({})),
        (
            "SecurityScheme",
            SecurityScheme::default().to_generic()?,
            json!({"type": ""}),
        ),
        (
            "OAuthFlow",
            OAuthFlow::default().to_generic()?,
            json!({"authorizationUrl": "", "tokenUrl": "", "scopes": {}}),
        ),
        (
            "SecurityRequirement",
            SecurityRequirement::default().to_generic()?,
            json!({}),
        ),
        (
            "OpenApi",
            OpenApi::default().to_generic()?,
            json!({"openapi": "", "info": {"title": "", "version": ""}, "paths": {}}),
        ),
    ];

    for (entity, actual, expected) in cases {
        assert_eq!(actual, expected, "{entity}");
    }

    let mut extensions = Extensions::new();
    extensions.insert("x-kept", json!(false));
    let license = License {
        extensions,
        ..Default::default()
    };
    assert_eq!(license.to_generic()?, json!({"name": "", "x-kept": false}));
    Ok(())
}

#[test]
fn test_nested_schema_depth() -> Result<()> {
    let mut schema = Schema::of_type("string");
    for _ in 0..5 {
        schema = Schema {
            schema_type: Some("array".to_string()),
            items: Some(Box::new(schema)),
            ..Default::default()
        };
    }

    let yaml = schema.to_yaml()?;
    let decoded = Schema::from_yaml_str(&yaml)?;
    assert_eq!(decoded, schema);

    let mut depth = 0;
    let mut current = &decoded;
    while let Some(items) = &current.items {
        depth += 1;
        current = items;
    }
    assert_eq!(depth, 5);
    assert_eq!(current.schema_type.as_deref(), Some("string"));
    Ok(())
}

#[test]
fn test_strict_decoding_reports_location() -> Result<()> {
    let lenient = petstore()?;
    let strict = OpenApi::decode_with(Format::Yaml, PETSTORE_YAML.as_bytes(), &DecodeOptions::strict())?;
    assert_eq!(strict, lenient);

    let input = br#"{
        "openapi": "3.0.0",
        "info": {"title": "T", "version": "1"},
        "paths": {"/pets": {"get": {"deprecated": "sometimes", "responses": {}}}}
    }"#;

    let doc = OpenApi::decode(Format::Json, input)?;
    assert!(!operation(&doc, "/pets", Method::Get)?.deprecated);

    let err = OpenApi::decode_with(Format::Json, input, &DecodeOptions::strict())
        .err()
        .ok_or_else(|| anyhow!("strict decoding accepted a mistyped flag"))?;
    assert_eq!(err.location(), "/paths/~1pets/get/deprecated");
    assert!(matches!(
        err.root_cause(),
        OasError::TypeMismatch {
            expected: "boolean",
            found: "string"
        }
    ));
    Ok(())
}

#[test]
fn test_malformed_input_is_an_error() {
    assert!(matches!(
        OpenApi::from_json_str("{\"openapi\": "),
        Err(OasError::Json(_))
    ));
    assert!(matches!(
        OpenApi::from_yaml_str("openapi: [unclosed"),
        Err(OasError::Yaml(_))
    ));
    assert!(matches!(
        OpenApi::from_json_str("[]"),
        Err(OasError::UnexpectedShape { .. })
    ));
}

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Catalog {
    name: String,
    documents: Vec<OpenApi>,
}

#[test]
fn test_entities_embed_in_serde_types() -> Result<()> {
    let catalog = Catalog {
        name: "pets".to_string(),
        documents: vec![petstore()?],
    };

    let json = serde_json::to_string(&catalog)?;
    let from_json: Catalog = serde_json::from_str(&json)?;
    assert_eq!(from_json, catalog);

    let yaml = serde_yaml::to_string(&catalog)?;
    let from_yaml: Catalog = serde_yaml::from_str(&yaml)?;
    assert_eq!(from_yaml, catalog);
    Ok(())
}
