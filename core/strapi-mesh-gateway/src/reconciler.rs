//! Content-type reconciliation: the remote catalog intersected with the
//! local allow-list.

use crate::error::{GatewayError, GatewayResult};
use crate::resource::{DataRequest, DataResource};
use serde_json::Value;
use std::collections::HashSet;
use strapi_mesh_types::{
    AllowList, ConnectionConfig, ContentTypeConfig, ContentTypeDescriptor, ResolvedCollection,
};
use tracing::{debug, info};

/// Catalog endpoint, relative to the request base URL.
pub const CONTENT_TYPES_PATH: &str = "/content-type-builder/content-types";

/// Decodes the catalog response and drops system and uid-less types.
pub fn parse_catalog(response: &Value) -> GatewayResult<Vec<ContentTypeDescriptor>> {
    let Some(items) = response.get("data").and_then(Value::as_array) else {
        return Err(GatewayError::RemoteShapeInvalid(
            "\"data\" is not an array".to_string(),
        ));
    };

    Ok(items
        .iter()
        .map(ContentTypeDescriptor::from_catalog_item)
        .filter(ContentTypeDescriptor::is_selectable)
        .collect())
}

/// Matches the catalog against the allow-list.
///
/// An empty allow-list exposes the whole catalog. Otherwise the result
/// follows allow-list order; allow-list items with no catalog match are
/// dropped, and a catalog type is emitted at most once.
pub fn reconcile(
    catalog: &[ContentTypeDescriptor],
    allow_list: &AllowList,
) -> Vec<ResolvedCollection> {
    match allow_list {
        AllowList::Flat {
            allowed_content_types,
            ..
        } => {
            let with_shared_fields = |descriptor: &ContentTypeDescriptor| ResolvedCollection {
                display_field: non_empty(allow_list.shared_display_field()),
                image_field: non_empty(allow_list.shared_image_field()),
                ..ResolvedCollection::from(descriptor.clone())
            };

            let keys: Vec<&str> = allowed_content_types
                .iter()
                .map(|key| key.trim())
                .filter(|key| !key.is_empty())
                .collect();

            if keys.is_empty() {
                return catalog.iter().map(with_shared_fields).collect();
            }

            let mut seen = HashSet::new();
            let mut resolved = Vec::new();
            for key in keys {
                match find_by_key(catalog, key) {
                    Some(idx) if seen.insert(idx) => resolved.push(with_shared_fields(&catalog[idx])),
                    Some(_) => debug!("Allowed content type {} listed twice", key),
                    None => debug!("Allowed content type {} not found in catalog", key),
                }
            }
            resolved
        }
        AllowList::PerCollection { content_types } => {
            if content_types.is_empty() {
                return catalog.iter().cloned().map(ResolvedCollection::from).collect();
            }

            let mut seen = HashSet::new();
            let mut resolved = Vec::new();
            for config in content_types {
                match find_by_config(catalog, config) {
                    Some(idx) if seen.insert(idx) => {
                        resolved.push(resolve_configured(&catalog[idx], config));
                    }
                    Some(_) => debug!(
                        "Content type {} configured twice",
                        config.plural_type_name
                    ),
                    None => debug!(
                        "Configured content type {} not found in catalog",
                        config.plural_type_name
                    ),
                }
            }
            resolved
        }
    }
}

/// Plural-name equality first; uid suffix only as a legacy fallback.
fn find_by_key(catalog: &[ContentTypeDescriptor], key: &str) -> Option<usize> {
    catalog
        .iter()
        .position(|d| d.plural_name == key)
        .or_else(|| catalog.iter().position(|d| d.uid_has_suffix(key)))
}

fn find_by_config(catalog: &[ContentTypeDescriptor], config: &ContentTypeConfig) -> Option<usize> {
    let plural = config.plural_type_name.trim();
    let by_plural = (!plural.is_empty())
        .then(|| catalog.iter().position(|d| d.plural_name == plural))
        .flatten();

    by_plural.or_else(|| {
        let uid = non_empty(config.uid.as_deref())?;
        catalog.iter().position(|d| d.uid == uid)
    })
}

fn resolve_configured(
    descriptor: &ContentTypeDescriptor,
    config: &ContentTypeConfig,
) -> ResolvedCollection {
    ResolvedCollection {
        uid: descriptor.uid.clone(),
        display_name: non_empty(Some(config.friendly_type_name.as_str()))
            .unwrap_or_else(|| descriptor.display_name.clone()),
        plural_name: descriptor.plural_name.clone(),
        singular_name: non_empty(Some(config.single_type_name.as_str())),
        display_field: non_empty(config.display_field.as_deref()),
        image_field: non_empty(config.image_field.as_deref()),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Resolves which collections the picker may show.
pub struct ContentTypeReconciler<R> {
    resource: R,
}

impl<R: DataResource> ContentTypeReconciler<R> {
    pub fn new(resource: R) -> Self {
        Self { resource }
    }

    /// Fetches the filtered remote catalog.
    ///
    /// Fails with [`GatewayError::ConfigurationMissing`] before any request
    /// when the connection is incomplete.
    pub async fn fetch_catalog(
        &self,
        connection: &ConnectionConfig,
    ) -> GatewayResult<Vec<ContentTypeDescriptor>> {
        if !connection.is_complete() {
            return Err(GatewayError::ConfigurationMissing);
        }

        let response = self
            .resource
            .get_data_resource(
                DataRequest::get(CONTENT_TYPES_PATH).with_bearer(&connection.api_token),
            )
            .await?;

        parse_catalog(&response)
    }

    /// Fetches the catalog and reconciles it with `allow_list`.
    pub async fn resolve(
        &self,
        connection: &ConnectionConfig,
        allow_list: &AllowList,
    ) -> GatewayResult<Vec<ResolvedCollection>> {
        let catalog = self.fetch_catalog(connection).await?;
        let resolved = reconcile(&catalog, allow_list);

        info!(
            "Resolved {} of {} content types ({} allowed)",
            resolved.len(),
            catalog.len(),
            if allow_list.is_empty() {
                "all".to_string()
            } else {
                allow_list.len().to_string()
            }
        );
        Ok(resolved)
    }
}
