//! Connection editor: API URL and token captured into the data source value.

use crate::host::HostStore;
use std::collections::BTreeMap;
use strapi_mesh_types::{
    ConnectionConfig, DataSourceValue, QueryParameter, RequestVariant, UNPUBLISHED_VARIANT,
};
use tracing::{debug, info};

/// A partial connection edit. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionPatch {
    pub api_url: Option<String>,
    pub api_token: Option<String>,
}

impl ConnectionPatch {
    pub fn api_url(value: impl Into<String>) -> Self {
        Self {
            api_url: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn api_token(value: impl Into<String>) -> Self {
        Self {
            api_token: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.api_url.is_none() && self.api_token.is_none()
    }
}

/// Merges `patch` over `current`.
pub fn update_config(current: &ConnectionConfig, patch: &ConnectionPatch) -> ConnectionConfig {
    ConnectionConfig {
        api_url: patch
            .api_url
            .clone()
            .unwrap_or_else(|| current.api_url.clone()),
        api_token: patch
            .api_token
            .clone()
            .unwrap_or_else(|| current.api_token.clone()),
    }
}

/// The full data source value for a connection: request base URL, the
/// connection itself (private and public copies) and the `unpublished`
/// variant that adds `status=draft` to every request.
pub fn data_source_value(config: &ConnectionConfig) -> DataSourceValue {
    let base_url = config.request_base_url();

    let mut variants = BTreeMap::new();
    variants.insert(
        UNPUBLISHED_VARIANT.to_string(),
        RequestVariant {
            base_url: base_url.clone(),
            parameters: vec![QueryParameter::new("status", "draft")],
        },
    );

    DataSourceValue {
        base_url,
        custom: config.clone(),
        custom_public: config.clone(),
        enable_unpublished_mode: true,
        variants,
    }
}

/// Edits the connection held in host state.
pub struct ConnectionEditor<S> {
    store: S,
}

impl<S: HostStore<DataSourceValue>> ConnectionEditor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Initializes the stored value when it has no base URL yet.
    ///
    /// Returns `true` if defaults were written.
    pub fn mount(&self) -> bool {
        if !self.store.get().base_url.is_empty() {
            return false;
        }
        debug!("Data source has no base URL, writing defaults");
        self.update(ConnectionPatch::default());
        true
    }

    /// Applies `patch` and writes the derived value in one host write.
    pub fn update(&self, patch: ConnectionPatch) {
        self.store.set_with(|current| {
            let config = update_config(&current.custom, &patch);
            data_source_value(&config)
        });

        if !patch.is_empty() {
            info!(
                "Updated connection settings (base URL {})",
                self.store.get().base_url
            );
        }
    }

    /// The connection the editor works on.
    pub fn config(&self) -> ConnectionConfig {
        self.store.get().custom
    }

    pub fn value(&self) -> DataSourceValue {
        self.store.get()
    }
}
