//! Dossier — reusable OpenAPI component schemas for validation-backed DTOs.
//!
//! This facade crate re-exports the Dossier sub-crates through a single
//! dependency with feature flags. Import everything you need with:
//!
//! ```ignore
//! use dossier::prelude::*;
//! ```
//!
//! # Feature flags
//!
//! | Feature   | Default | Crate             |
//! |-----------|---------|-------------------|
//! | `openapi` | **yes** | `dossier-openapi` |

pub extern crate dossier_core;

// Re-export everything from dossier-core at the top level for convenience.
pub use dossier_core::*;

#[cfg(feature = "openapi")]
pub use dossier_openapi;

// The validation pipe and the DTO macro are the package's front door;
// keep them importable straight off the facade.
pub use dossier_core::{dto, ValidationPipe};

/// Unified prelude — import everything with `use dossier::prelude::*`.
pub mod prelude {
    pub use dossier_core::prelude::*;
}
