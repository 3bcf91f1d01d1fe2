//! Wire DTOs returned by the Ratio REST backend.
//!
//! DESIGN
//! ======
//! The backend is loosely typed: identifiers arrive as strings or numbers and
//! mission rows carry whatever columns the report service emits. Operators are
//! decoded into a fixed struct; missions stay an open JSON object so the
//! history table can read the keys it knows about and ignore the rest.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder rendered for absent or null fields.
pub const EMPTY_FIELD: &str = "—";

/// A personnel record as returned by `GET /staff/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    /// Backend identifier, normalized to a string.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub surname: String,
    /// Photo URL, when one has been uploaded.
    #[serde(default)]
    pub icon: Option<String>,
    /// Expanded `staff_type` child (present when requested with `children=`).
    #[serde(default)]
    pub staff_type: Option<NamedRef>,
    /// Expanded `shift_type` child.
    #[serde(default)]
    pub shift_type: Option<NamedRef>,
}

impl Operator {
    /// `"{name} {surname}"`, the form shown in every operator table.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    #[must_use]
    pub fn staff_type_name(&self) -> &str {
        self.staff_type.as_ref().map_or(EMPTY_FIELD, |t| t.name.as_str())
    }

    #[must_use]
    pub fn shift_type_name(&self) -> &str {
        self.shift_type.as_ref().map_or(EMPTY_FIELD, |t| t.name.as_str())
    }
}

/// Expanded lookup row (`staff_type`, `shift_type`) carrying a display name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

/// One row of an operator's mission history.
///
/// Ordering is decided by the server (`sort=-createdAt`) and preserved as-is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mission(pub serde_json::Map<String, serde_json::Value>);

impl Mission {
    /// Render a top-level field for display.
    ///
    /// Strings and numbers render directly, booleans as `Evet`/`Hayır`, and
    /// nested objects by their `name` key. Anything else is `None`.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<String> {
        display_value(self.0.get(key)?)
    }

    /// Identifier of the mission, if the row carries one.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.field("id")
    }
}

fn display_value(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(if *b { "Evet" } else { "Hayır" }.to_owned()),
        serde_json::Value::Object(map) => map.get("name").and_then(display_value),
        _ => None,
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}
