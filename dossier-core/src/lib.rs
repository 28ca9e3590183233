pub mod meta;
pub mod prelude;
pub mod schema;
pub mod validation;

pub use meta::{AppModel, Deferred, ParamInfo, ParamLocation, RouteInfo, TypeRef};
pub use schema::{schema_value, SchemaProvider};
pub use validation::{validate, FieldError, ValidationErrorResponse, ValidationPipe};

pub use garde;
pub use schemars;
pub use serde_json;
