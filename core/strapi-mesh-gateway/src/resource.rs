//! The authenticated request seam.
//!
//! The host platform owns the "make an authenticated request" capability and
//! injects it. [`DataResource`] is that capability; [`HttpDataResource`] is
//! the reqwest-backed implementation used outside the host.

use crate::error::{GatewayError, GatewayResult};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use strapi_mesh_types::{DataSourceValue, QueryParameter, UNPUBLISHED_VARIANT};
use tracing::debug;

/// A GET request relative to the data source's base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRequest {
    /// Path plus optional query string, always starting with `/`.
    pub path: String,
    pub headers: Vec<(String, String)>,
}

impl DataRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            headers: Vec::new(),
        }
    }

    /// Adds an `Authorization: Bearer {token}` header.
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.headers
            .push(("Authorization".to_string(), format!("Bearer {token}")));
        self
    }
}

/// Issues authenticated GET requests against the remote content API and
/// returns the decoded JSON body.
#[async_trait]
pub trait DataResource: Send + Sync {
    async fn get_data_resource(&self, request: DataRequest) -> GatewayResult<Value>;
}

#[async_trait]
impl<T: DataResource + ?Sized> DataResource for Arc<T> {
    async fn get_data_resource(&self, request: DataRequest) -> GatewayResult<Value> {
        (**self).get_data_resource(request).await
    }
}

/// Configuration for [`HttpDataResource`].
#[derive(Debug, Clone, Default)]
pub struct HttpResourceConfig {
    /// Request base URL, e.g. `https://cms.example.com/api`.
    pub base_url: String,
    /// Query parameters appended to every request.
    pub parameters: Vec<QueryParameter>,
    /// Optional per-request timeout. `None` leaves the transport default.
    pub timeout: Option<Duration>,
}

impl HttpResourceConfig {
    /// Builds the config for a persisted data source, choosing the
    /// unpublished variant when requested and configured.
    pub fn from_data_source(value: &DataSourceValue, unpublished: bool) -> Self {
        let variant = value
            .variant(UNPUBLISHED_VARIANT)
            .filter(|_| unpublished && value.enable_unpublished_mode);

        match variant {
            Some(variant) => Self {
                base_url: variant.base_url.clone(),
                parameters: variant.parameters.clone(),
                timeout: None,
            },
            None => Self {
                base_url: value.base_url.clone(),
                parameters: Vec::new(),
                timeout: None,
            },
        }
    }
}

/// reqwest-backed [`DataResource`].
pub struct HttpDataResource {
    config: HttpResourceConfig,
    client: Client,
}

impl HttpDataResource {
    /// Creates a new resource for the given configuration.
    pub fn new(config: HttpResourceConfig) -> GatewayResult<Self> {
        if config.base_url.trim().is_empty() {
            return Err(GatewayError::ConfigurationMissing);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::InvalidRequest(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url_for(&self, path: &str) -> GatewayResult<String> {
        if !path.starts_with('/') {
            return Err(GatewayError::InvalidRequest(format!(
                "path must start with '/': {path}"
            )));
        }
        Ok(format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            path
        ))
    }
}

#[async_trait]
impl DataResource for HttpDataResource {
    async fn get_data_resource(&self, request: DataRequest) -> GatewayResult<Value> {
        let url = self.url_for(&request.path)?;
        debug!("GET {}", request.path);

        let mut builder = self.client.get(&url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        for param in &self.config.parameters {
            builder = builder.query(&[(param.key.as_str(), param.value.as_str())]);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| GatewayError::Network(format!("request to {} failed: {e}", request.path)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Http {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<Value>().await.map_err(|e| {
            GatewayError::RemoteShapeInvalid(format!("response body is not JSON: {e}"))
        })
    }
}
