//! Client side of the remote content gateway.
//!
//! The gateway exposes two JSON endpoints: the content-type catalog and a
//! paginated entry listing per collection. This crate drives both through
//! an injected [`DataResource`]:
//!
//! - [`EntryFetcher`] walks every page of one collection, in order
//! - [`ContentTypeReconciler`] fetches the catalog and matches it against
//!   the local allow-list
//! - [`HttpDataResource`] is the reqwest-backed request capability
//!
//! # Example
//!
//! ```no_run
//! use strapi_mesh_gateway::{
//!     ContentTypeReconciler, EntryFetcher, HttpDataResource, HttpResourceConfig,
//! };
//! use strapi_mesh_types::{AllowList, ConnectionConfig};
//! use std::sync::Arc;
//!
//! # async fn run() -> strapi_mesh_gateway::GatewayResult<()> {
//! let connection = ConnectionConfig::new("https://cms.example.com", "token");
//! let resource = Arc::new(HttpDataResource::new(HttpResourceConfig {
//!     base_url: connection.request_base_url(),
//!     ..Default::default()
//! })?);
//!
//! let collections = ContentTypeReconciler::new(Arc::clone(&resource))
//!     .resolve(&connection, &AllowList::default())
//!     .await?;
//! let fetcher = EntryFetcher::new(resource, connection.api_token.clone());
//! for collection in &collections {
//!     let entries = fetcher.fetch_all(&collection.plural_name).await?;
//!     println!("{}: {} entries", collection.display_name, entries.len());
//! }
//! # Ok(())
//! # }
//! ```

mod error;
pub mod fetcher;
pub mod links;
pub mod reconciler;
pub mod resource;

pub use error::{FailureKind, GENERIC_ERROR_MESSAGE, GatewayError, GatewayResult};
pub use fetcher::{EntriesPage, EntryFetcher, parse_entries_page};
pub use links::{admin_url, edit_link};
pub use reconciler::{CONTENT_TYPES_PATH, ContentTypeReconciler, parse_catalog, reconcile};
pub use resource::{DataRequest, DataResource, HttpDataResource, HttpResourceConfig};
