//! Paginated entry fetching for one collection.

use crate::error::{GatewayError, GatewayResult};
use crate::resource::{DataRequest, DataResource};
use serde_json::Value;
use strapi_mesh_types::{Entry, Pagination, PaginationCursor};
use tracing::debug;

/// One decoded page of a collection listing.
#[derive(Debug, Clone, PartialEq)]
pub struct EntriesPage {
    pub entries: Vec<Entry>,
    pub pagination: Option<Pagination>,
}

/// Decodes `{ data: [Entry], meta?: { pagination } }`.
///
/// A missing or non-array `data` field is a shape error.
pub fn parse_entries_page(response: Value) -> GatewayResult<EntriesPage> {
    let Value::Object(mut body) = response else {
        return Err(GatewayError::RemoteShapeInvalid(
            "entries response is not an object".to_string(),
        ));
    };

    let items = match body.remove("data") {
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(GatewayError::RemoteShapeInvalid(
                "\"data\" is not an array".to_string(),
            ));
        }
        None => {
            return Err(GatewayError::RemoteShapeInvalid(
                "failed to fetch entries: response has no \"data\" field".to_string(),
            ));
        }
    };

    let entries = items
        .into_iter()
        .map(Entry::from_value)
        .collect::<Result<Vec<_>, _>>()?;

    let pagination = body
        .get("meta")
        .and_then(|meta| meta.get("pagination"))
        .filter(|pagination| !pagination.is_null())
        .map(|pagination| serde_json::from_value::<Pagination>(pagination.clone()))
        .transpose()?;

    Ok(EntriesPage {
        entries,
        pagination,
    })
}

/// Retrieves entries of a collection through an injected [`DataResource`].
pub struct EntryFetcher<R> {
    resource: R,
    token: String,
}

impl<R: DataResource> EntryFetcher<R> {
    pub fn new(resource: R, token: impl Into<String>) -> Self {
        Self {
            resource,
            token: token.into(),
        }
    }

    /// Fetches every page of `plural_name`, in page order.
    ///
    /// Pages are requested one after another. Any failing page fails the
    /// whole operation and the entries gathered so far are dropped.
    pub async fn fetch_all(&self, plural_name: &str) -> GatewayResult<Vec<Entry>> {
        let plural_name = non_empty_segment(plural_name, "collection plural name")?;

        let mut entries = Vec::new();
        let mut cursor = PaginationCursor::new();

        loop {
            let path = format!(
                "/{}?{}",
                urlencoding::encode(plural_name),
                cursor.query()
            );
            let response = self
                .resource
                .get_data_resource(DataRequest::get(path).with_bearer(&self.token))
                .await?;
            let page = parse_entries_page(response)?;

            debug!(
                collection = %plural_name,
                page = cursor.page,
                rows = page.entries.len(),
                "Fetched entries page"
            );
            entries.extend(page.entries);

            if !cursor.advance(page.pagination) {
                break;
            }
        }

        debug!(
            "Fetched {} entries for {} across {} page(s)",
            entries.len(),
            plural_name,
            cursor.page
        );
        Ok(entries)
    }

    /// Fetches a single document (`GET /{plural}/{documentId}?populate=*`).
    pub async fn fetch_entry(&self, plural_name: &str, document_id: &str) -> GatewayResult<Entry> {
        let plural_name = non_empty_segment(plural_name, "collection plural name")?;
        let document_id = non_empty_segment(document_id, "document id")?;

        let path = format!(
            "/{}/{}?populate=*",
            urlencoding::encode(plural_name),
            urlencoding::encode(document_id)
        );
        let response = self
            .resource
            .get_data_resource(DataRequest::get(path).with_bearer(&self.token))
            .await?;

        match response.get("data") {
            Some(data @ Value::Object(_)) => Ok(Entry::from_value(data.clone())?),
            _ => Err(GatewayError::RemoteShapeInvalid(
                "\"data\" is not an entry object".to_string(),
            )),
        }
    }
}

fn non_empty_segment<'a>(value: &'a str, what: &str) -> GatewayResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(GatewayError::InvalidRequest(format!("{what} is empty")));
    }
    Ok(trimmed)
}
