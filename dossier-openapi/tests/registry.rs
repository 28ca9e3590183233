use dossier_core::schema::SchemaProvider;
use dossier_openapi::SchemaRegistry;
use serde_json::{json, Value};

// ── Phase 1: SchemaRegistry ─────────────────────────────────────────────────

#[test]
fn registry_new_empty() {
    let registry = SchemaRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.into_schemas().is_empty());
}

#[test]
fn register_single_schema() {
    let mut registry = SchemaRegistry::new();
    registry.register("User", json!({"type": "object"}));

    assert!(registry.contains("User"));
    assert_eq!(registry.len(), 1);
    let schemas = registry.into_schemas();
    assert_eq!(schemas["User"], json!({"type": "object"}));
}

#[test]
fn register_duplicate_overwrites() {
    let mut registry = SchemaRegistry::new();
    registry.register("User", json!({"type": "object", "description": "v1"}));
    registry.register("User", json!({"type": "object", "description": "v2"}));

    let schemas = registry.into_schemas();
    assert_eq!(schemas.len(), 1);
    assert_eq!(schemas["User"]["description"], "v2");
}

#[test]
fn register_duplicate_keeps_position() {
    let mut registry = SchemaRegistry::new();
    registry.register("First", json!({"type": "object"}));
    registry.register("Second", json!({"type": "object"}));
    registry.register("First", json!({"type": "string"}));

    let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["First", "Second"]);
    assert_eq!(registry.get("First"), Some(&json!({"type": "string"})));
}

#[test]
fn contains_registered() {
    let mut registry = SchemaRegistry::new();
    registry.register("User", json!({"type": "object"}));
    assert!(registry.contains("User"));
}

#[test]
fn contains_unregistered() {
    let registry = SchemaRegistry::new();
    assert!(!registry.contains("Unknown"));
}

#[test]
fn get_unregistered_is_none() {
    let registry = SchemaRegistry::new();
    assert!(registry.get("Unknown").is_none());
}

#[test]
fn iteration_follows_registration_order() {
    let mut registry = SchemaRegistry::new();
    registry.register("Zebra", json!({"type": "object"}));
    registry.register("Apple", json!({"type": "object"}));
    registry.register("Mango", json!({"type": "object"}));

    let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["Zebra", "Apple", "Mango"]);
}

#[test]
fn default_creates_empty_registry() {
    let registry = SchemaRegistry::default();
    assert!(!registry.contains("anything"));
    assert!(registry.into_schemas().is_empty());
}

// ── Phase 2: provider registration ──────────────────────────────────────────

struct TestUser;

impl SchemaProvider for TestUser {
    fn schema_name() -> &'static str {
        "TestUser"
    }

    fn json_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "id": { "type": "integer" },
                "name": { "type": "string" },
                "email": { "type": "string" }
            },
            "required": ["id", "name", "email"]
        })
    }
}

#[test]
fn register_provider_populates_registry() {
    let mut registry = SchemaRegistry::new();
    registry.register_provider::<TestUser>();

    assert!(registry.contains("TestUser"));
    let schemas = registry.into_schemas();
    assert_eq!(schemas["TestUser"]["type"], "object");
    assert_eq!(schemas["TestUser"]["properties"]["id"]["type"], "integer");
}

#[test]
fn registry_stores_definition_verbatim() {
    // The registry holds the library-native definition untouched; cleanup
    // only happens when components are generated.
    let mut registry = SchemaRegistry::new();
    registry.register(
        "Raw",
        json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "type": "object",
            "$defs": { "Inner": { "type": "string" } }
        }),
    );

    let raw = registry.get("Raw").unwrap();
    assert!(raw.get("$schema").is_some());
    assert!(raw.get("$defs").is_some());
}
