//! Type exploration: turning a [`TypeRef`] into either a reference to a
//! reusable component schema or an inline schema document.
//!
//! [`TypeExplorer`] is the built-in behavior for ordinary type metadata.
//! [`ProviderExplorer`] decorates any explorer and intercepts
//! provider-backed references before delegating everything else unchanged,
//! so providers surface as named components instead of inlined copies.

use serde_json::{json, Map, Value};

use dossier_core::meta::TypeRef;

use crate::components::{hoist_definitions, insert_named};
use crate::registry::SchemaRegistry;

// ── Exploration results ─────────────────────────────────────────────────

/// Result of exploring one type reference: either the name of a reusable
/// component schema, or a schema document to embed inline.
#[derive(Debug, Clone, PartialEq)]
pub enum Explored {
    Reference(String),
    Inline(Value),
}

impl Explored {
    /// Render this result as the schema placed in an operation's content.
    pub fn content_schema(&self) -> Value {
        match self {
            Explored::Reference(name) => json!({ "$ref": format!("#/components/schemas/{name}") }),
            Explored::Inline(schema) => schema.clone(),
        }
    }
}

/// Mutable scan state threaded through one exploration pass.
pub struct ExploreContext<'a> {
    /// Component entries collected directly by the scan.
    pub schemas: &'a mut Map<String, Value>,
    /// Names currently being explored, for cycle detection.
    pub ref_stack: &'a mut Vec<String>,
    /// The build's schema registry.
    pub registry: &'a mut SchemaRegistry,
}

/// Derives a schema for a single type reference.
pub trait SchemaExplorer {
    fn explore(&self, ty: &TypeRef, ctx: &mut ExploreContext<'_>) -> Explored;
}

// ── Built-in exploration ────────────────────────────────────────────────

/// Exploration behavior for ordinary type metadata.
///
/// Named types are inserted into the scan's schema map once and answered by
/// name; anonymous types are answered inline. Provider-native definitions
/// are opaque here: without [`ProviderExplorer`] in front, a provider-backed
/// reference degrades to a generic object schema under its name.
#[derive(Debug, Clone, Default)]
pub struct TypeExplorer;

impl SchemaExplorer for TypeExplorer {
    fn explore(&self, ty: &TypeRef, ctx: &mut ExploreContext<'_>) -> Explored {
        let (name, schema) = match ty.resolve() {
            TypeRef::Provided { name, .. } => (name, None),
            TypeRef::Named { name, schema } => (name, schema),
            TypeRef::Deferred(_) => unreachable!(),
        };

        if name.is_empty() {
            return match schema {
                Some(mut schema) => {
                    hoist_definitions(&mut schema, ctx.schemas);
                    Explored::Inline(schema)
                }
                None => Explored::Inline(json!({ "type": "object" })),
            };
        }

        if ctx.ref_stack.iter().any(|seen| seen == &name) {
            // Already being explored further up the stack: answer by name
            // to break the cycle.
            return Explored::Reference(name);
        }

        // First encounter wins; later references reuse the entry.
        if !ctx.schemas.contains_key(&name) {
            ctx.ref_stack.push(name.clone());
            insert_named(ctx.schemas, &name, schema);
            ctx.ref_stack.pop();
        }

        Explored::Reference(name)
    }
}

// ── Provider interception ───────────────────────────────────────────────

/// Explorer decorator that recognizes provider-backed type references.
///
/// A provider reference is recorded in the build's registry and answered
/// with its name — the definition itself is never inlined, so nested and
/// self-referential providers stay reference-based. Every other reference
/// is delegated to the inner explorer with the same arguments.
pub struct ProviderExplorer<'a> {
    inner: &'a dyn SchemaExplorer,
}

impl<'a> ProviderExplorer<'a> {
    pub fn new(inner: &'a dyn SchemaExplorer) -> Self {
        Self { inner }
    }
}

impl SchemaExplorer for ProviderExplorer<'_> {
    fn explore(&self, ty: &TypeRef, ctx: &mut ExploreContext<'_>) -> Explored {
        match ty.resolve() {
            TypeRef::Provided { name, schema } => {
                ctx.registry.register(&name, schema);
                Explored::Reference(name)
            }
            // Resolution is idempotent, so delegating the resolved
            // reference is the same as delegating the original.
            other => self.inner.explore(&other, ctx),
        }
    }
}
