//! Conversion of raw schema definitions into OpenAPI component entries,
//! and the merge of registry-generated entries into a scanned document.

use serde_json::{json, Map, Value};

use crate::registry::SchemaRegistry;

/// Recursively rewrite `$ref` paths from schemars format to OpenAPI
/// components format.
///
/// schemars 1.x generates JSON Schema Draft 2020-12 using `$defs` and
/// `$ref: "#/$defs/X"`. OpenAPI 3.1.0 expects schemas under
/// `#/components/schemas/X`.
fn sanitize_schema(value: &mut Value) {
    match value {
        Value::Object(obj) => {
            if let Some(Value::String(ref_str)) = obj.get_mut("$ref") {
                if ref_str.starts_with("#/$defs/") {
                    *ref_str = ref_str.replace("#/$defs/", "#/components/schemas/");
                }
            }

            for nested in obj.values_mut() {
                sanitize_schema(nested);
            }
        }
        Value::Array(arr) => {
            for nested in arr.iter_mut() {
                sanitize_schema(nested);
            }
        }
        _ => {}
    }
}

/// Strip the schemars envelope from `schema`, promote its `$defs` into
/// `schemas` (first writer wins), and rewrite refs to component paths.
pub(crate) fn hoist_definitions(schema: &mut Value, schemas: &mut Map<String, Value>) {
    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$schema");
        // schemars 1.x uses "$defs" (Draft 2020-12)
        if let Some(Value::Object(defs)) = obj.remove("$defs") {
            for (def_name, mut def_schema) in defs {
                sanitize_schema(&mut def_schema);
                schemas.entry(def_name).or_insert(def_schema);
            }
        }
    }
    sanitize_schema(schema);
}

/// Insert a named schema into the shared map, falling back to a generic
/// object when no definition is attached.
pub(crate) fn insert_named(schemas: &mut Map<String, Value>, name: &str, schema: Option<Value>) {
    let value = match schema {
        Some(mut schema) => {
            hoist_definitions(&mut schema, schemas);
            // Recursive roots collapse to a pointer at their own entry once
            // the definition is promoted; keep the promoted definition.
            if is_self_ref(&schema, name) && schemas.contains_key(name) {
                return;
            }
            schema
        }
        None => json!({ "type": "object" }),
    };
    schemas.insert(name.to_string(), value);
}

// schemars renders a recursive root type as a `$ref` shell (possibly with a
// `title` riding along) with the real definition in `$defs`.
fn is_self_ref(schema: &Value, name: &str) -> bool {
    let obj = match schema.as_object() {
        Some(obj) => obj,
        None => return false,
    };
    if !obj.keys().all(|key| key == "$ref" || key == "title") {
        return false;
    }
    obj.get("$ref").and_then(Value::as_str)
        == Some(format!("#/components/schemas/{name}").as_str())
}

/// Generate OpenAPI component entries from everything in the registry.
///
/// Pure transform: the registry is never mutated, and running it twice over
/// an unchanged registry yields the same map. Nested `$defs` are promoted
/// beside their owner; a registry entry always wins over a promoted
/// definition with the same name.
pub fn registry_components(registry: &SchemaRegistry) -> Map<String, Value> {
    let mut schemas: Map<String, Value> = Map::new();

    for (name, definition) in registry.iter() {
        let mut schema = definition.clone();
        hoist_definitions(&mut schema, &mut schemas);
        if is_self_ref(&schema, name) && schemas.contains_key(name) {
            continue;
        }
        schemas.insert(name.to_string(), schema);
    }

    schemas
}

/// Overlay registry-generated component entries onto a scanned document.
///
/// Generated entries win on name collision, keeping the key's original
/// position; new names are appended after the scanned ones. Missing
/// `components` or `components/schemas` objects are created on demand.
pub fn merge_schemas(doc: &mut Value, generated: Map<String, Value>) {
    if generated.is_empty() {
        return;
    }

    if let Some(schemas) = schemas_slot(doc) {
        for (name, schema) in generated {
            if schemas.contains_key(&name) {
                tracing::debug!(schema = name.as_str(), "component schema replaced by registry entry");
            }
            schemas.insert(name, schema);
        }
    }
}

/// The document's `components/schemas` object, created if absent.
fn schemas_slot(doc: &mut Value) -> Option<&mut Map<String, Value>> {
    let components = doc
        .as_object_mut()?
        .entry("components")
        .or_insert_with(|| json!({}));
    let schemas = components
        .as_object_mut()?
        .entry("schemas")
        .or_insert_with(|| json!({}));
    schemas.as_object_mut()
}
