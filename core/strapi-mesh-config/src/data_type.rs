//! Data-type editor: which collections a picker may offer, and how entries
//! are labelled.

use crate::allow_list;
use crate::error::ConfigResult;
use crate::host::HostStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use strapi_mesh_types::{AllowList, ContentTypeConfig};
use tracing::{debug, info};

/// Request path template resolved by the host for a selected document.
pub const PATH_TEMPLATE: &str = "/${contentTypePluralName}/${id}?populate=*";

/// Name of the query variable carrying the selected document id.
pub const ID_VARIABLE: &str = "id";

/// A host-resolved request variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDefinition {
    pub display_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub help_text: String,
    pub default: String,
    pub order: u32,
    pub source: String,
}

impl VariableDefinition {
    pub fn document_id() -> Self {
        Self {
            display_name: "Document ID".to_string(),
            kind: "string".to_string(),
            help_text: "The ID of the document to display".to_string(),
            default: "unspecified".to_string(),
            order: 1,
            source: "query".to_string(),
        }
    }
}

/// The persisted data-type value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTypeValue {
    #[serde(default)]
    pub custom: AllowList,
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default = "default_variables")]
    pub variables: BTreeMap<String, VariableDefinition>,
}

fn default_path() -> String {
    PATH_TEMPLATE.to_string()
}

fn default_variables() -> BTreeMap<String, VariableDefinition> {
    BTreeMap::from([(ID_VARIABLE.to_string(), VariableDefinition::document_id())])
}

impl Default for DataTypeValue {
    fn default() -> Self {
        Self::with_custom(AllowList::default())
    }
}

impl DataTypeValue {
    /// A value with the given allow-list and the standard path and variables.
    pub fn with_custom(custom: AllowList) -> Self {
        Self {
            custom,
            path: default_path(),
            variables: default_variables(),
        }
    }

    /// Reads a raw host value of any generation. Only `custom` is taken over;
    /// path and variables are always the standard ones.
    pub fn from_raw(raw: &Value) -> ConfigResult<Self> {
        let custom = allow_list::migrate_custom(raw.get("custom").unwrap_or(&Value::Null))?;
        Ok(Self::with_custom(custom))
    }
}

/// Edits the data-type value held in host state.
///
/// Every edit is computed on the current allow-list first; a failing edit
/// leaves the stored value untouched. A successful one is a single host
/// write.
pub struct DataTypeEditor<S> {
    store: S,
}

impl<S: HostStore<DataTypeValue>> DataTypeEditor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn allow_list(&self) -> AllowList {
        self.store.get().custom
    }

    pub fn value(&self) -> DataTypeValue {
        self.store.get()
    }

    /// Comma-separated collection keys.
    pub fn set_allowed_content_types(&self, input: &str) -> ConfigResult<()> {
        self.apply(|list| allow_list::set_flat_keys(list, input))
    }

    pub fn set_display_field(&self, value: &str) -> ConfigResult<()> {
        self.apply(|list| allow_list::set_display_field(list, value))
    }

    pub fn set_image_field(&self, value: &str) -> ConfigResult<()> {
        self.apply(|list| allow_list::set_image_field(list, value))
    }

    pub fn add_content_type(&self, config: ContentTypeConfig) -> ConfigResult<()> {
        self.apply(|list| allow_list::add_collection(list, config))
    }

    pub fn update_content_type(&self, index: usize, config: ContentTypeConfig) -> ConfigResult<()> {
        self.apply(|list| allow_list::update_collection(list, index, config))
    }

    pub fn remove_content_type(&self, index: usize) -> ConfigResult<()> {
        self.apply(|list| allow_list::remove_collection(list, index))
    }

    /// Replaces the allow-list with the decoded JSON-string list.
    pub fn import_encoded(&self, encoded: &str) -> ConfigResult<()> {
        let content_types = allow_list::decode_encoded(encoded)?;
        info!("Imported {} content type(s) from encoded list", content_types.len());
        self.apply(|_| Ok(AllowList::PerCollection { content_types }))
    }

    fn apply<F>(&self, edit: F) -> ConfigResult<()>
    where
        F: FnOnce(&AllowList) -> ConfigResult<AllowList>,
    {
        let next = edit(&self.store.get().custom)?;
        debug!("Allow-list now lists {} collection(s)", next.len());
        self.store.set_with(|_| DataTypeValue::with_custom(next));
        Ok(())
    }
}
