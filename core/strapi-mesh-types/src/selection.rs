use serde::{Deserialize, Serialize};

/// The value written back to host state when the operator picks an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResult {
    /// The chosen entry's `documentId`.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type_plural_name: Option<String>,
}

impl SelectionResult {
    pub fn new(id: impl Into<String>, content_type_plural_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content_type_plural_name: Some(content_type_plural_name.into()),
        }
    }
}
