//! The data source value persisted by the connection editor.

use crate::ConnectionConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name of the request variant used for draft content.
pub const UNPUBLISHED_VARIANT: &str = "unpublished";

/// A `key=value` query parameter added to every request of a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParameter {
    pub key: String,
    pub value: String,
}

impl QueryParameter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A secondary way of issuing requests against the same API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestVariant {
    pub base_url: String,
    #[serde(default)]
    pub parameters: Vec<QueryParameter>,
}

/// Connection-level host state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceValue {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub custom: ConnectionConfig,
    #[serde(default)]
    pub custom_public: ConnectionConfig,
    #[serde(default)]
    pub enable_unpublished_mode: bool,
    #[serde(default)]
    pub variants: BTreeMap<String, RequestVariant>,
}

impl DataSourceValue {
    /// The connection settings the rest of the system reads.
    pub fn connection(&self) -> &ConnectionConfig {
        &self.custom_public
    }

    pub fn variant(&self, name: &str) -> Option<&RequestVariant> {
        self.variants.get(name)
    }
}
