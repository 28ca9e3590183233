//! Schema providers: DTO types that carry their own JSON Schema.

use serde_json::{json, Value};

use crate::meta::TypeRef;

/// Trait for DTO types that expose a reusable schema definition.
///
/// Implementors surface as named entries under `components/schemas` in the
/// generated OpenAPI document; plain types get their schemas embedded or
/// derived by the scan instead. Usually implemented through the
/// [`dto!`](crate::dto) macro rather than by hand.
///
/// schemars' `JsonSchema` defines associated functions with the same names,
/// so direct calls on a type deriving both need the qualified form
/// `<T as SchemaProvider>::schema_name()`.
///
/// # Example
/// ```ignore
/// struct Health;
///
/// impl SchemaProvider for Health {
///     fn schema_name() -> &'static str {
///         "Health"
///     }
///
///     fn json_schema() -> Value {
///         json!({ "type": "object", "properties": { "ok": { "type": "boolean" } } })
///     }
/// }
/// ```
pub trait SchemaProvider {
    /// Component name for this type. Must be unique across the application.
    fn schema_name() -> &'static str;

    /// The schema definition in its library-native form. `$defs` and
    /// `$schema` keys are cleaned up during document generation, so the
    /// raw output of a schema library is fine here.
    fn json_schema() -> Value;

    /// A [`TypeRef`] pointing at this provider.
    fn type_ref() -> TypeRef
    where
        Self: Sized,
    {
        TypeRef::provided::<Self>()
    }
}

/// Derive the JSON Schema for `T` as a plain `serde_json::Value`.
///
/// Falls back to a generic object schema if the derived schema cannot be
/// represented as JSON, which does not happen for schemars-derived types.
pub fn schema_value<T: schemars::JsonSchema>() -> Value {
    serde_json::to_value(schemars::schema_for!(T)).unwrap_or_else(|_| json!({ "type": "object" }))
}

/// Define a DTO and wire it up as a [`SchemaProvider`].
///
/// The item is emitted unchanged, so derives and field attributes are
/// written exactly as on any other type. The provider's schema name is the
/// type's identifier and its definition comes from the `JsonSchema` derive.
///
/// # Example
/// ```ignore
/// use dossier_core::dto;
/// use garde::Validate;
/// use schemars::JsonSchema;
/// use serde::Deserialize;
///
/// dto! {
///     #[derive(Debug, Deserialize, Validate, JsonSchema)]
///     pub struct CreateUser {
///         #[garde(length(min = 1, max = 100))]
///         pub name: String,
///         #[garde(range(min = 0, max = 130))]
///         pub age: u8,
///     }
/// }
/// ```
#[macro_export]
macro_rules! dto {
    ($(#[$meta:meta])* $vis:vis struct $name:ident $($rest:tt)*) => {
        $(#[$meta])*
        $vis struct $name $($rest)*

        impl $crate::schema::SchemaProvider for $name {
            fn schema_name() -> &'static str {
                stringify!($name)
            }

            fn json_schema() -> $crate::serde_json::Value {
                $crate::schema::schema_value::<$name>()
            }
        }
    };
    ($(#[$meta:meta])* $vis:vis enum $name:ident $($rest:tt)*) => {
        $(#[$meta])*
        $vis enum $name $($rest)*

        impl $crate::schema::SchemaProvider for $name {
            fn schema_name() -> &'static str {
                stringify!($name)
            }

            fn json_schema() -> $crate::serde_json::Value {
                $crate::schema::schema_value::<$name>()
            }
        }
    };
}
