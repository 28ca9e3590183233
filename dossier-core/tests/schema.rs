use dossier_core::dto;
use dossier_core::meta::TypeRef;
use dossier_core::schema::{schema_value, SchemaProvider};
use garde::Validate;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{json, Value};

// ── Fixtures ────────────────────────────────────────────────────────────────

dto! {
    #[derive(Debug, Deserialize, Validate, JsonSchema)]
    pub struct CreateUser {
        #[garde(length(min = 1, max = 100))]
        pub name: String,
        #[garde(range(min = 0, max = 130))]
        pub age: u8,
    }
}

dto! {
    #[derive(Debug, Deserialize, JsonSchema)]
    pub enum Species {
        Cat,
        Dog,
    }
}

#[allow(dead_code)]
#[derive(JsonSchema)]
struct Inner {
    pub label: String,
}

#[allow(dead_code)]
#[derive(JsonSchema)]
struct Outer {
    pub inner: Inner,
}

// ── Phase 1: dto! macro ─────────────────────────────────────────────────────

// `JsonSchema` has associated functions with the same names, so calls on
// types deriving it go through `<T as SchemaProvider>`.

#[test]
fn dto_struct_provider_name() {
    assert_eq!(<CreateUser as SchemaProvider>::schema_name(), "CreateUser");
}

#[test]
fn dto_struct_provider_schema() {
    let schema = <CreateUser as SchemaProvider>::json_schema();
    assert_eq!(schema["type"], "object");
    assert_eq!(schema["properties"]["name"]["type"], "string");
    assert!(schema["required"].as_array().unwrap().contains(&json!("name")));
}

#[test]
fn dto_enum_provider() {
    assert_eq!(<Species as SchemaProvider>::schema_name(), "Species");
    assert!(<Species as SchemaProvider>::json_schema().is_object());

    // Derives on the emitted item keep working as written.
    let species: Species = serde_json::from_value(json!("Cat")).unwrap();
    assert!(matches!(species, Species::Cat | Species::Dog));
}

#[test]
fn dto_type_still_usable_as_plain_struct() {
    let user = CreateUser {
        name: "Ada".to_string(),
        age: 36,
    };
    assert_eq!(user.name, "Ada");
}

#[test]
fn dto_type_ref_is_provided() {
    let ty = CreateUser::type_ref();
    assert!(matches!(ty, TypeRef::Provided { .. }));
    assert_eq!(ty.name(), Some("CreateUser"));
}

// ── Phase 2: schema_value ───────────────────────────────────────────────────

#[test]
fn schema_value_derives_object_schema() {
    let schema = schema_value::<CreateUser>();
    assert_eq!(schema["type"], "object");
    assert!(schema["properties"].is_object());
}

#[test]
fn schema_value_nested_types_use_defs() {
    let schema = schema_value::<Outer>();
    assert_eq!(schema["properties"]["inner"]["$ref"], "#/$defs/Inner");
    assert_eq!(schema["$defs"]["Inner"]["type"], "object");
}

// ── Phase 3: hand-written providers ─────────────────────────────────────────

struct Health;

impl SchemaProvider for Health {
    fn schema_name() -> &'static str {
        "Health"
    }

    fn json_schema() -> Value {
        json!({
            "type": "object",
            "properties": { "ok": { "type": "boolean" } }
        })
    }
}

#[test]
fn manual_provider_impl() {
    assert_eq!(Health::schema_name(), "Health");
    assert_eq!(Health::json_schema()["properties"]["ok"]["type"], "boolean");
}
