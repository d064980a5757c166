//! Async picker session: drives the state machine against the remote API and
//! writes the selection back into host state.

use crate::error::PickerResult;
use crate::state::{DocumentPicker, FetchTicket, PickerPhase};
use crate::view::PickerView;
use std::sync::Arc;
use strapi_mesh_config::HostStore;
use strapi_mesh_gateway::{ContentTypeReconciler, DataResource, EntryFetcher};
use strapi_mesh_types::{AllowList, ConnectionConfig, SelectionResult};
use tokio::sync::Mutex;
use tracing::{debug, info};

/// One mounted document picker.
///
/// The state lock is never held across a request, so a newer collection
/// selection can start while an older fetch is still in flight.
pub struct PickerSession<S> {
    resource: Arc<dyn DataResource>,
    connection: ConnectionConfig,
    allow_list: AllowList,
    state: Mutex<DocumentPicker>,
    selection: S,
}

impl<S: HostStore<Option<SelectionResult>>> PickerSession<S> {
    pub fn new(
        resource: Arc<dyn DataResource>,
        connection: ConnectionConfig,
        allow_list: AllowList,
        selection: S,
    ) -> Self {
        let state = Mutex::new(DocumentPicker::mount(&connection));
        Self {
            resource,
            connection,
            allow_list,
            state,
            selection,
        }
    }

    /// Restarts the picker and loads content types (and, for a single
    /// collection, its entries).
    ///
    /// Remote failures end in an error phase, not an `Err`.
    pub async fn mount(&self) -> PickerResult<()> {
        let mount_generation = {
            let mut state = self.state.lock().await;
            state.remount(&self.connection);
            if *state.phase() == PickerPhase::NoConnection {
                debug!("Picker mounted without a complete connection");
                return Ok(());
            }
            state.generation()
        };

        let reconciler = ContentTypeReconciler::new(Arc::clone(&self.resource));
        let result = reconciler.resolve(&self.connection, &self.allow_list).await;

        let ticket = {
            let mut state = self.state.lock().await;
            if state.generation() != mount_generation {
                debug!("Discarding content types of a superseded mount");
                return Ok(());
            }
            state.content_types_loaded(result)?
        };
        if let Some(ticket) = ticket {
            self.load_entries(ticket).await;
        }
        Ok(())
    }

    /// Selects the collection at `index` and fetches its entries.
    ///
    /// Returns whether this fetch's result was applied; `false` means a newer
    /// selection superseded it.
    pub async fn choose_collection(&self, index: usize) -> PickerResult<bool> {
        let ticket = self.state.lock().await.select_collection(index)?;
        Ok(self.load_entries(ticket).await)
    }

    /// Like [`choose_collection`](Self::choose_collection), by plural name.
    pub async fn choose_collection_named(&self, plural_name: &str) -> PickerResult<bool> {
        let ticket = self
            .state
            .lock()
            .await
            .select_collection_named(plural_name)?;
        Ok(self.load_entries(ticket).await)
    }

    /// Opens the collection named `plural_name` unless its entries are
    /// already showing, as after an auto-select on mount.
    pub async fn open_collection_named(&self, plural_name: &str) -> PickerResult<bool> {
        let ticket = {
            let mut state = self.state.lock().await;
            let showing = *state.phase() == PickerPhase::EntriesReady
                && state
                    .selected_collection()
                    .is_some_and(|c| c.plural_name == plural_name);
            if showing {
                debug!("Entries of {} already loaded", plural_name);
                return Ok(true);
            }
            state.select_collection_named(plural_name)?
        };
        Ok(self.load_entries(ticket).await)
    }

    /// Writes the selection for `document_id` to host state.
    pub async fn choose_entry(&self, document_id: &str) -> PickerResult<SelectionResult> {
        let selection = self.state.lock().await.select_entry(document_id)?;

        let value = selection.clone();
        self.selection.set_with(move |_| Some(value));
        info!(
            "Selected document {} from {}",
            selection.id,
            selection.content_type_plural_name.as_deref().unwrap_or_default()
        );
        Ok(selection)
    }

    /// Current view model.
    pub async fn snapshot(&self) -> PickerView {
        let current = self.selection.get();
        let state = self.state.lock().await;
        PickerView::build(&state, &self.connection.api_url, current.as_ref())
    }

    pub async fn phase(&self) -> PickerPhase {
        self.state.lock().await.phase().clone()
    }

    async fn load_entries(&self, ticket: FetchTicket) -> bool {
        let fetcher = EntryFetcher::new(Arc::clone(&self.resource), &self.connection.api_token);
        let result = fetcher.fetch_all(&ticket.plural_name).await;
        self.state.lock().await.entries_loaded(&ticket, result)
    }
}
