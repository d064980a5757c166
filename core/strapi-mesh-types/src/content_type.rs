//! Content types: the remote catalog, the local allow-list, and the
//! reconciled collections the picker may show.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// UID prefix reserved for the CMS's own internal types.
pub const SYSTEM_UID_PREFIX: &str = "admin::";

/// Placeholder used when the catalog omits a display or plural name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// A content type as reported by the remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeDescriptor {
    pub uid: String,
    pub display_name: String,
    pub plural_name: String,
}

impl ContentTypeDescriptor {
    /// Builds a descriptor from one raw catalog item
    /// (`{ uid, schema: { displayName, pluralName } }`).
    ///
    /// Missing or empty names fall back to [`UNKNOWN_NAME`]; a missing uid
    /// becomes the empty string so the caller can filter it out.
    pub fn from_catalog_item(item: &Value) -> Self {
        let uid = item.get("uid").and_then(Value::as_str).unwrap_or_default();
        let schema_str = |key: &str| {
            item.get("schema")
                .and_then(|schema| schema.get(key))
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .unwrap_or(UNKNOWN_NAME)
                .to_string()
        };

        Self {
            uid: uid.to_string(),
            display_name: schema_str("displayName"),
            plural_name: schema_str("pluralName"),
        }
    }

    /// True for the CMS's own internal types.
    pub fn is_system(&self) -> bool {
        self.uid.starts_with(SYSTEM_UID_PREFIX)
    }

    /// True when the descriptor may be offered to the operator at all.
    pub fn is_selectable(&self) -> bool {
        !self.uid.is_empty() && !self.is_system()
    }

    /// Legacy key match: `api::hero.hero` ends with `.hero`.
    pub fn uid_has_suffix(&self, key: &str) -> bool {
        !key.is_empty()
            && self
                .uid
                .strip_suffix(key)
                .is_some_and(|head| head.ends_with('.'))
    }
}

/// Per-collection settings produced by the richer data-type editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default)]
    pub friendly_type_name: String,
    #[serde(default)]
    pub single_type_name: String,
    #[serde(default)]
    pub plural_type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_field: Option<String>,
}

impl ContentTypeConfig {
    pub fn new(
        friendly_type_name: impl Into<String>,
        single_type_name: impl Into<String>,
        plural_type_name: impl Into<String>,
    ) -> Self {
        Self {
            friendly_type_name: friendly_type_name.into(),
            single_type_name: single_type_name.into(),
            plural_type_name: plural_type_name.into(),
            ..Default::default()
        }
    }
}

/// The locally configured allow-list.
///
/// Two shapes exist. They are never read side by side; older persisted
/// values are converted through an explicit migration step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum AllowList {
    /// Collection keys plus one display/image field pair shared by all of them.
    Flat {
        #[serde(default)]
        allowed_content_types: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        display_field: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image_field: Option<String>,
    },
    /// Ordered per-collection records with their own field overrides.
    PerCollection {
        #[serde(default)]
        content_types: Vec<ContentTypeConfig>,
    },
}

impl Default for AllowList {
    fn default() -> Self {
        AllowList::Flat {
            allowed_content_types: Vec::new(),
            display_field: None,
            image_field: None,
        }
    }
}

impl AllowList {
    /// An empty allow-list means "allow everything the catalog exposes".
    pub fn is_empty(&self) -> bool {
        match self {
            AllowList::Flat {
                allowed_content_types,
                ..
            } => allowed_content_types.is_empty(),
            AllowList::PerCollection { content_types } => content_types.is_empty(),
        }
    }

    /// Number of configured collections.
    pub fn len(&self) -> usize {
        match self {
            AllowList::Flat {
                allowed_content_types,
                ..
            } => allowed_content_types.len(),
            AllowList::PerCollection { content_types } => content_types.len(),
        }
    }

    /// Shared display field (flat shape only).
    pub fn shared_display_field(&self) -> Option<&str> {
        match self {
            AllowList::Flat { display_field, .. } => display_field.as_deref(),
            AllowList::PerCollection { .. } => None,
        }
    }

    /// Shared image field (flat shape only).
    pub fn shared_image_field(&self) -> Option<&str> {
        match self {
            AllowList::Flat { image_field, .. } => image_field.as_deref(),
            AllowList::PerCollection { .. } => None,
        }
    }
}

/// A collection the picker may show, after reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCollection {
    pub uid: String,
    pub display_name: String,
    pub plural_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub singular_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_field: Option<String>,
}

impl From<ContentTypeDescriptor> for ResolvedCollection {
    fn from(descriptor: ContentTypeDescriptor) -> Self {
        Self {
            uid: descriptor.uid,
            display_name: descriptor.display_name,
            plural_name: descriptor.plural_name,
            singular_name: None,
            display_field: None,
            image_field: None,
        }
    }
}
