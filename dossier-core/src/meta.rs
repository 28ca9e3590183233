//! Route and type metadata shared across the Dossier crates.
//!
//! The host framework describes its surface as an [`AppModel`]: a list of
//! [`RouteInfo`] entries whose request and response types are [`TypeRef`]s.
//! A `TypeRef` either names a type outright, carries a provider-backed
//! schema, or defers resolution behind a closure so mutually recursive
//! types can reference each other before both are defined.

use crate::schema::SchemaProvider;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

// ── Type references ─────────────────────────────────────────────────────

/// A reference to a request or response type discovered during a scan.
#[derive(Debug, Clone)]
pub enum TypeRef {
    /// A type backed by a [`SchemaProvider`] implementation. Carries the
    /// provider's name and its library-native schema definition.
    Provided { name: String, schema: Value },
    /// Ordinary type metadata: a name plus an optional schema document.
    /// An empty name marks an anonymous type whose schema is embedded
    /// inline rather than referenced.
    Named { name: String, schema: Option<Value> },
    /// A lazily resolved reference, for forward and circular references.
    Deferred(Deferred),
}

impl TypeRef {
    /// Reference a provider-backed type.
    pub fn provided<P: SchemaProvider>() -> Self {
        TypeRef::Provided {
            name: P::schema_name().to_string(),
            schema: P::json_schema(),
        }
    }

    /// Reference a type by name only. The scan falls back to a generic
    /// object schema when no definition is attached.
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named {
            name: name.into(),
            schema: None,
        }
    }

    /// Reference a type by name with an explicit schema document.
    pub fn with_schema(name: impl Into<String>, schema: Value) -> Self {
        TypeRef::Named {
            name: name.into(),
            schema: Some(schema),
        }
    }

    /// An anonymous schema, embedded inline wherever it is used.
    pub fn inline(schema: Value) -> Self {
        TypeRef::Named {
            name: String::new(),
            schema: Some(schema),
        }
    }

    /// Defer resolution until the reference is actually explored.
    ///
    /// # Example
    /// ```ignore
    /// // `Post` is defined further down the module.
    /// let response = TypeRef::deferred(|| TypeRef::provided::<Post>());
    /// ```
    pub fn deferred<F>(resolve: F) -> Self
    where
        F: Fn() -> TypeRef + Send + Sync + 'static,
    {
        TypeRef::Deferred(Deferred::new(resolve))
    }

    /// Collapse deferred indirection into a concrete reference.
    ///
    /// This is the single place deferred closures are invoked; a chain of
    /// deferred references resolves iteratively until a `Provided` or
    /// `Named` reference is reached.
    pub fn resolve(&self) -> TypeRef {
        let mut current = self.clone();
        while let TypeRef::Deferred(deferred) = current {
            current = deferred.resolve();
        }
        current
    }

    /// The schema name of this reference, when it has one and is not
    /// deferred. Anonymous references report `None`.
    pub fn name(&self) -> Option<&str> {
        match self {
            TypeRef::Provided { name, .. } | TypeRef::Named { name, .. } if !name.is_empty() => {
                Some(name.as_str())
            }
            _ => None,
        }
    }
}

/// A type reference behind a closure, resolved on demand.
#[derive(Clone)]
pub struct Deferred(Arc<dyn Fn() -> TypeRef + Send + Sync>);

impl Deferred {
    pub fn new<F>(resolve: F) -> Self
    where
        F: Fn() -> TypeRef + Send + Sync + 'static,
    {
        Deferred(Arc::new(resolve))
    }

    /// Invoke the closure once. Prefer [`TypeRef::resolve`], which also
    /// collapses chains of deferred references.
    pub fn resolve(&self) -> TypeRef {
        (self.0)()
    }
}

impl fmt::Debug for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Deferred(..)")
    }
}

// ── Route metadata ──────────────────────────────────────────────────────

/// Where a request parameter lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    Path,
    Query,
    Header,
}

/// Metadata about a single request parameter.
#[derive(Debug, Clone, Serialize)]
pub struct ParamInfo {
    pub name: String,
    pub location: ParamLocation,
    pub required: bool,
    /// OpenAPI primitive type name ("string", "integer", ...).
    pub param_type: String,
}

/// Metadata about a single route, supplied by the host application.
#[derive(Debug, Clone)]
pub struct RouteInfo {
    pub path: String,
    pub method: String,
    pub operation_id: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub tag: Option<String>,
    pub deprecated: bool,
    pub params: Vec<ParamInfo>,
    pub request_body: Option<TypeRef>,
    pub request_body_required: bool,
    pub response: Option<TypeRef>,
    pub response_status: u16,
}

// ── Application model ───────────────────────────────────────────────────

/// The surface handed to a document scan: every route the host exposes,
/// in declaration order.
#[derive(Debug, Clone, Default)]
pub struct AppModel {
    pub routes: Vec<RouteInfo>,
}

impl AppModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_routes(routes: Vec<RouteInfo>) -> Self {
        Self { routes }
    }

    pub fn push(&mut self, route: RouteInfo) {
        self.routes.push(route);
    }
}
