use indexmap::IndexMap;
use serde_json::Value;

use dossier_core::schema::SchemaProvider;

/// Registry that collects provider schema definitions for OpenAPI components.
///
/// A registry lives for exactly one document build: the scan registers every
/// provider-backed type it encounters, and the build turns the contents into
/// `components/schemas` entries afterwards. Entries iterate in registration
/// order, so document output is deterministic.
pub struct SchemaRegistry {
    schemas: IndexMap<String, Value>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self {
            schemas: IndexMap::new(),
        }
    }

    /// Register a schema definition under the given name. Registering the
    /// same name again replaces the definition but keeps its position.
    pub fn register(&mut self, name: &str, schema: Value) {
        tracing::debug!(schema = name, "registering component schema");
        self.schemas.insert(name.to_string(), schema);
    }

    /// Register a provider-backed type directly.
    pub fn register_provider<P: SchemaProvider>(&mut self) {
        self.register(P::schema_name(), P::json_schema());
    }

    /// Check if a schema is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Look up a registered schema definition.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Iterate over `(name, schema)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.schemas.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    /// Consume the registry and return the raw name → definition map.
    pub fn into_schemas(self) -> IndexMap<String, Value> {
        self.schemas
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
