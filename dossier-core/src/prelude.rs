//! Dossier prelude — import everything you need with a single `use`.
//!
//! ```ignore
//! use dossier_core::prelude::*;
//!
//! dto! {
//!     #[derive(Debug, Deserialize, Validate, JsonSchema)]
//!     pub struct CreateUser {
//!         #[garde(length(min = 1, max = 100))]
//!         pub name: String,
//!     }
//! }
//!
//! let user: CreateUser = ValidationPipe::parse(payload)?;
//! ```

// ── DTO definition ──────────────────────────────────────────────────────

pub use crate::dto;
pub use crate::schema::{schema_value, SchemaProvider};

// Derives a DTO commonly carries.
pub use garde::Validate;
pub use schemars::JsonSchema;
pub use serde::{Deserialize, Serialize};

// ── Metadata ────────────────────────────────────────────────────────────

pub use crate::meta::{AppModel, ParamInfo, ParamLocation, RouteInfo, TypeRef};

// ── Validation ──────────────────────────────────────────────────────────

pub use crate::validation::{validate, FieldError, ValidationErrorResponse, ValidationPipe};
