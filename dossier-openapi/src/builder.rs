use serde::Deserialize;
use serde_json::{json, Map, Value};

use dossier_core::meta::{AppModel, ParamLocation, RouteInfo};

use crate::components::{merge_schemas, registry_components};
use crate::explore::{ExploreContext, ProviderExplorer, SchemaExplorer, TypeExplorer};
use crate::registry::SchemaRegistry;
use crate::sort::{sort_schemas, SortPolicy};

// ── Configuration ───────────────────────────────────────────────────────

/// Configuration for the generated OpenAPI document.
///
/// Deserializable, so hosts can embed it in their own configuration files:
///
/// ```yaml
/// title: Shelter API
/// version: 1.0.0
/// sort: localeCompare
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct OpenApiConfig {
    pub title: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Key ordering for `components/schemas`.
    #[serde(default)]
    pub sort: SortPolicy,
}

impl OpenApiConfig {
    pub fn new(title: &str, version: &str) -> Self {
        Self {
            title: title.to_string(),
            version: version.to_string(),
            description: None,
            sort: SortPolicy::Default,
        }
    }

    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    pub fn with_sort(mut self, sort: SortPolicy) -> Self {
        self.sort = sort;
        self
    }
}

// ── Document scanning ───────────────────────────────────────────────────

/// Walks the application model and produces the base OpenAPI document.
///
/// Implementations hand every request and response type to `explorer` and
/// embed the result; they never decide themselves whether a type becomes a
/// component or stays inline.
pub trait DocumentScanner {
    fn scan(
        &self,
        app: &AppModel,
        config: &OpenApiConfig,
        explorer: &dyn SchemaExplorer,
        registry: &mut SchemaRegistry,
    ) -> Value;
}

/// The built-in scan: one path item per route, every body and response type
/// passed through the explorer.
#[derive(Debug, Clone, Default)]
pub struct RouteScanner;

impl DocumentScanner for RouteScanner {
    fn scan(
        &self,
        app: &AppModel,
        config: &OpenApiConfig,
        explorer: &dyn SchemaExplorer,
        registry: &mut SchemaRegistry,
    ) -> Value {
        let mut schemas: Map<String, Value> = Map::new();
        let mut ref_stack: Vec<String> = Vec::new();
        let mut paths: Map<String, Value> = Map::new();

        for route in &app.routes {
            let method_lower = route.method.to_lowercase();

            let mut operation: Map<String, Value> = Map::new();
            operation.insert("operationId".into(), json!(route.operation_id));

            if let Some(ref tag) = route.tag {
                operation.insert("tags".into(), json!([tag]));
            }

            if let Some(ref summary) = route.summary {
                operation.insert("summary".into(), json!(summary));
            }

            // Parameters
            let params: Vec<Value> = route
                .params
                .iter()
                .map(|p| {
                    let location = match p.location {
                        ParamLocation::Path => "path",
                        ParamLocation::Query => "query",
                        ParamLocation::Header => "header",
                    };
                    json!({
                        "name": p.name,
                        "in": location,
                        "required": p.required,
                        "schema": { "type": p.param_type }
                    })
                })
                .collect();

            if !params.is_empty() {
                operation.insert("parameters".into(), json!(params));
            }

            // Description
            if let Some(ref description) = route.description {
                operation.insert("description".into(), json!(description));
            }

            // Deprecated
            if route.deprecated {
                operation.insert("deprecated".into(), json!(true));
            }

            // Request body
            if let Some(ref body) = route.request_body {
                let mut ctx = ExploreContext {
                    schemas: &mut schemas,
                    ref_stack: &mut ref_stack,
                    registry: &mut *registry,
                };
                let explored = explorer.explore(body, &mut ctx);
                operation.insert(
                    "requestBody".into(),
                    json!({
                        "required": route.request_body_required,
                        "content": {
                            "application/json": { "schema": explored.content_schema() }
                        }
                    }),
                );
            }

            // Responses
            let status_key = route.response_status.to_string();
            let status_desc = match route.response_status {
                201 => "Created",
                204 => "No content",
                _ => "Successful response",
            };
            let mut responses: Map<String, Value> = Map::new();

            if route.response_status == 204 {
                // 204 No Content — no response body
                responses.insert(status_key, json!({ "description": status_desc }));
            } else if let Some(ref response) = route.response {
                let mut ctx = ExploreContext {
                    schemas: &mut schemas,
                    ref_stack: &mut ref_stack,
                    registry: &mut *registry,
                };
                let explored = explorer.explore(response, &mut ctx);
                responses.insert(
                    status_key,
                    json!({
                        "description": status_desc,
                        "content": {
                            "application/json": { "schema": explored.content_schema() }
                        }
                    }),
                );
            } else {
                responses.insert(status_key, json!({ "description": status_desc }));
            }

            operation.insert("responses".into(), Value::Object(responses));

            let path_entry = paths.entry(route.path.clone()).or_insert_with(|| json!({}));
            if let Some(obj) = path_entry.as_object_mut() {
                obj.insert(method_lower, Value::Object(operation));
            }
        }

        let mut info: Map<String, Value> = Map::new();
        info.insert("title".into(), json!(config.title));
        info.insert("version".into(), json!(config.version));
        if let Some(ref desc) = config.description {
            info.insert("description".into(), json!(desc));
        }

        json!({
            "openapi": "3.1.0",
            "info": info,
            "paths": paths,
            "components": { "schemas": schemas }
        })
    }
}

// ── Document assembly ───────────────────────────────────────────────────

/// Assembles OpenAPI documents with provider-backed component schemas.
///
/// Every build scans with a fresh [`SchemaRegistry`] and a
/// [`ProviderExplorer`] wrapped around the configured explorer, then
/// overlays the registry-generated entries onto the scanned document and
/// applies the configured key ordering. Builds are independent: nothing
/// carries over from one call to the next.
///
/// # Example
/// ```ignore
/// let config = OpenApiConfig::new("Shelter API", "1.0.0").with_sort(SortPolicy::Alpha);
/// let doc = DocumentBuilder::new(config).build(&app);
/// ```
pub struct DocumentBuilder<S = RouteScanner, E = TypeExplorer> {
    config: OpenApiConfig,
    scanner: S,
    explorer: E,
}

impl DocumentBuilder {
    /// A builder with the default scan and exploration behavior.
    pub fn new(config: OpenApiConfig) -> Self {
        Self {
            config,
            scanner: RouteScanner,
            explorer: TypeExplorer,
        }
    }
}

impl<S, E> DocumentBuilder<S, E>
where
    S: DocumentScanner,
    E: SchemaExplorer,
{
    /// Replace the scan behavior.
    pub fn with_scanner<S2: DocumentScanner>(self, scanner: S2) -> DocumentBuilder<S2, E> {
        DocumentBuilder {
            config: self.config,
            scanner,
            explorer: self.explorer,
        }
    }

    /// Replace the exploration behavior the provider interception wraps.
    pub fn with_explorer<E2: SchemaExplorer>(self, explorer: E2) -> DocumentBuilder<S, E2> {
        DocumentBuilder {
            config: self.config,
            scanner: self.scanner,
            explorer,
        }
    }

    /// Build the document for `app`.
    pub fn build(&self, app: &AppModel) -> Value {
        let mut registry = SchemaRegistry::new();
        let explorer = ProviderExplorer::new(&self.explorer);

        let mut doc = self.scanner.scan(app, &self.config, &explorer, &mut registry);

        tracing::debug!(
            routes = app.routes.len(),
            provided = registry.len(),
            "assembling OpenAPI document"
        );

        merge_schemas(&mut doc, registry_components(&registry));
        sort_schemas(&mut doc, self.config.sort);
        doc
    }
}

/// Build an OpenAPI 3.1.0 document from config and route metadata.
pub fn build_spec(config: &OpenApiConfig, routes: &[RouteInfo]) -> Value {
    DocumentBuilder::new(config.clone()).build(&AppModel::from_routes(routes.to_vec()))
}

/// Serialize a generated document as pretty-printed JSON.
pub fn to_json_string(doc: &Value) -> serde_json::Result<String> {
    serde_json::to_string_pretty(doc)
}
