//! Core type definitions for the Strapi mesh integration.
//!
//! This crate defines the plain data types shared by the gateway, the
//! configuration editors and the document picker:
//! - [`ConnectionConfig`]: API base URL and bearer token
//! - [`ContentTypeDescriptor`] and [`ResolvedCollection`]: remote catalog
//!   entries and the reconciled, selectable collections
//! - [`AllowList`]: the locally configured collection allow-list
//! - [`Entry`]: one loosely typed document from a collection
//! - [`SelectionResult`]: the value written back to host state
//! - [`PaginationCursor`]: transient page bookkeeping for one fetch
//!
//! Nothing here performs I/O.

mod connection;
mod content_type;
mod data_source;
mod entry;
mod pagination;
mod selection;

pub use connection::{API_PATH_SUFFIX, ConnectionConfig};
pub use content_type::{
    AllowList, ContentTypeConfig, ContentTypeDescriptor, ResolvedCollection, SYSTEM_UID_PREFIX,
    UNKNOWN_NAME,
};
pub use data_source::{DataSourceValue, QueryParameter, RequestVariant, UNPUBLISHED_VARIANT};
pub use entry::{Entry, UNTITLED};
pub use pagination::{PAGE_SIZE, Pagination, PaginationCursor};
pub use selection::SelectionResult;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when interpreting raw values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("missing field: {0}")]
    MissingField(&'static str),
}
