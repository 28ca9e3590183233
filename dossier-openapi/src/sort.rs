//! Key ordering for the generated `components/schemas` map.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordering applied to `components/schemas` once scanning and merging are
/// done.
///
/// Parsed from the configuration strings `"default"`, `"alpha"` and
/// `"localeCompare"`; anything unrecognized selects [`SortPolicy::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortPolicy {
    /// Keep merge order: scanned entries first, registry entries after.
    #[default]
    Default,
    /// Code-point ascending key order.
    Alpha,
    /// Case-insensitive ascending key order with a code-point tie break,
    /// standing in for locale-collated ordering.
    LocaleCompare,
}

impl SortPolicy {
    /// Parse a configuration string; unrecognized values select `Default`.
    pub fn parse(value: &str) -> Self {
        match value {
            "alpha" => SortPolicy::Alpha,
            "localeCompare" => SortPolicy::LocaleCompare,
            other => {
                if other != "default" {
                    tracing::warn!(value = other, "unknown schema sort policy, using default");
                }
                SortPolicy::Default
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortPolicy::Default => "default",
            SortPolicy::Alpha => "alpha",
            SortPolicy::LocaleCompare => "localeCompare",
        }
    }
}

impl From<String> for SortPolicy {
    fn from(value: String) -> Self {
        SortPolicy::parse(&value)
    }
}

impl From<SortPolicy> for String {
    fn from(policy: SortPolicy) -> Self {
        policy.as_str().to_string()
    }
}

/// Reorder the document's `components/schemas` keys per `policy`.
///
/// Entries are only reordered — never added, removed or mutated. With
/// [`SortPolicy::Default`], or when the document has no
/// `components/schemas` object, the document is left untouched.
pub fn sort_schemas(doc: &mut Value, policy: SortPolicy) {
    if policy == SortPolicy::Default {
        return;
    }

    if let Some(schemas) = schemas_of(doc) {
        let mut entries: Vec<(String, Value)> = std::mem::take(schemas).into_iter().collect();
        match policy {
            SortPolicy::Default => {}
            SortPolicy::Alpha => entries.sort_by(|(a, _), (b, _)| a.cmp(b)),
            SortPolicy::LocaleCompare => entries.sort_by(|(a, _), (b, _)| locale_cmp(a, b)),
        }
        schemas.extend(entries);
    }
}

// Collation without a locale table: fold case for the primary comparison,
// break ties code-point-wise so the order stays total.
fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn schemas_of(doc: &mut Value) -> Option<&mut Map<String, Value>> {
    doc.as_object_mut()?
        .get_mut("components")?
        .get_mut("schemas")?
        .as_object_mut()
}
