//! Payload validation: parse untrusted JSON into DTOs and run their
//! garde rules, reporting failures per field.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

// ── Error types ────────────────────────────────────────────

/// A field-level validation error.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub code: String,
}

/// Container for validation errors, returned when a payload is rejected.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

impl fmt::Display for ValidationErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation Error: {} errors", self.errors.len())
    }
}

impl std::error::Error for ValidationErrorResponse {}

// ── Validation pipe ────────────────────────────────────────

/// Parse-and-validate pipe for inbound DTO payloads.
///
/// Deserializes a JSON value into the target type, then runs the type's
/// garde rules. Malformed payloads are reported with code `"parse"`, rule
/// violations with code `"validation"` and the offending field path.
///
/// # Example
/// ```ignore
/// let user: CreateUser = ValidationPipe::parse(json!({ "name": "Ada", "age": 36 }))?;
/// ```
pub struct ValidationPipe;

impl ValidationPipe {
    pub fn parse<T>(value: Value) -> Result<T, ValidationErrorResponse>
    where
        T: DeserializeOwned + garde::Validate,
        T::Context: Default,
    {
        let parsed: T = serde_json::from_value(value).map_err(|err| ValidationErrorResponse {
            errors: vec![FieldError {
                field: "value".to_string(),
                message: err.to_string(),
                code: "parse".to_string(),
            }],
        })?;
        validate(&parsed)?;
        Ok(parsed)
    }
}

/// Validate an already-constructed value against its garde rules.
pub fn validate<T>(value: &T) -> Result<(), ValidationErrorResponse>
where
    T: garde::Validate,
    T::Context: Default,
{
    value
        .validate()
        .map_err(|report| convert_garde_report(&report))
}

fn convert_garde_report(report: &garde::Report) -> ValidationErrorResponse {
    let mut field_errors = Vec::new();

    for (path, error) in report.iter() {
        let field = {
            let s = path.to_string();
            if s.is_empty() { "value".to_string() } else { s }
        };
        field_errors.push(FieldError {
            field,
            message: error.message().to_string(),
            code: "validation".to_string(),
        });
    }

    ValidationErrorResponse {
        errors: field_errors,
    }
}

// Re-export garde::Validate for convenience.
pub use garde::Validate;
