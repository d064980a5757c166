use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Label shown for an entry whose display field is empty or missing.
pub const UNTITLED: &str = "Untitled";

/// One document from a collection.
///
/// Only the identity fields are typed. Everything else the API returns is
/// kept in `fields` as loose JSON, since its shape is defined per collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Internal numeric identity, held as a string.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Stable external identity used for linking and selection.
    pub document_id: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Entry {
    /// Parses one raw entry object.
    pub fn from_value(value: Value) -> Result<Self> {
        let entry: Entry = serde_json::from_value(value)?;
        if entry.document_id.is_empty() {
            return Err(Error::MissingField("documentId"));
        }
        Ok(entry)
    }

    /// Raw value of a named field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Text shown for the entry in the picker list.
    pub fn display_label(&self, display_field: Option<&str>) -> String {
        display_field
            .and_then(|name| self.field(name))
            .and_then(|value| match value {
                Value::String(s) if !s.is_empty() => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    /// URL of the nested image object named by `image_field`.
    pub fn image_url(&self, image_field: Option<&str>) -> Option<&str> {
        let name = image_field.filter(|name| !name.is_empty())?;
        self.field(name)?
            .get("url")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
    }

    /// Human-readable publish timestamp, e.g. `Mar 4, 2025, 09:30 AM`.
    pub fn published_label(&self) -> Option<String> {
        self.published_at
            .map(|at| at.format("%b %-d, %Y, %I:%M %p").to_string())
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
