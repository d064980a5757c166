//! Picker state machine.
//!
//! [`DocumentPicker`] holds no I/O. Each transition that needs data hands out
//! a [`FetchTicket`]; the caller performs the fetch and feeds the result back.
//! Tickets carry a generation number so that only the most recent collection
//! selection can populate the entry list.

use crate::error::{PickerError, PickerResult};
use serde::Serialize;
use std::fmt;
use strapi_mesh_gateway::GatewayError;
use strapi_mesh_types::{ConnectionConfig, Entry, ResolvedCollection, SelectionResult};
use tracing::{debug, error};

/// Where the picker is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum PickerPhase {
    NoConnection,
    LoadingContentTypes,
    ContentTypesError { message: String },
    AwaitingSelection,
    LoadingEntries,
    EntriesError { message: String },
    EntriesReady,
}

impl PickerPhase {
    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            PickerPhase::LoadingContentTypes | PickerPhase::LoadingEntries
        )
    }

    /// Message for the inline error callout, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            PickerPhase::ContentTypesError { message } | PickerPhase::EntriesError { message } => {
                Some(message)
            }
            _ => None,
        }
    }

    fn can_select_collection(&self) -> bool {
        matches!(
            self,
            PickerPhase::AwaitingSelection
                | PickerPhase::LoadingEntries
                | PickerPhase::EntriesReady
                | PickerPhase::EntriesError { .. }
        )
    }
}

impl fmt::Display for PickerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PickerPhase::NoConnection => "not connected",
            PickerPhase::LoadingContentTypes => "loading content types",
            PickerPhase::ContentTypesError { .. } => "showing a content type error",
            PickerPhase::AwaitingSelection => "awaiting a collection",
            PickerPhase::LoadingEntries => "loading entries",
            PickerPhase::EntriesError { .. } => "showing an entries error",
            PickerPhase::EntriesReady => "showing entries",
        };
        f.write_str(label)
    }
}

/// An entries fetch the caller must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub plural_name: String,
    pub uid: String,
}

/// The document picker state.
#[derive(Debug, Clone)]
pub struct DocumentPicker {
    phase: PickerPhase,
    collections: Vec<ResolvedCollection>,
    selected: Option<usize>,
    entries: Vec<Entry>,
    generation: u64,
}

impl DocumentPicker {
    /// Fresh state for a mount: loading when the connection is complete.
    pub fn mount(connection: &ConnectionConfig) -> Self {
        let phase = if connection.is_complete() {
            PickerPhase::LoadingContentTypes
        } else {
            PickerPhase::NoConnection
        };

        Self {
            phase,
            collections: Vec::new(),
            selected: None,
            entries: Vec::new(),
            generation: 0,
        }
    }

    /// Starts over for a new mount.
    ///
    /// The generation counter keeps counting, so tickets handed out before
    /// the remount can never match one handed out after it.
    pub fn remount(&mut self, connection: &ConnectionConfig) {
        let generation = self.generation + 1;
        *self = Self {
            generation,
            ..Self::mount(connection)
        };
    }

    pub fn phase(&self) -> &PickerPhase {
        &self.phase
    }

    pub fn collections(&self) -> &[ResolvedCollection] {
        &self.collections
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_collection(&self) -> Option<&ResolvedCollection> {
        self.selected.and_then(|idx| self.collections.get(idx))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The collection dropdown is only offered when there is a choice.
    pub fn shows_selector(&self) -> bool {
        self.collections.len() > 1
    }

    /// Applies the reconciler outcome.
    ///
    /// With exactly one collection it is selected automatically and the
    /// returned ticket must be fetched.
    pub fn content_types_loaded(
        &mut self,
        result: Result<Vec<ResolvedCollection>, GatewayError>,
    ) -> PickerResult<Option<FetchTicket>> {
        if self.phase != PickerPhase::LoadingContentTypes {
            return Err(self.invalid("load content types"));
        }

        match result {
            Ok(collections) => {
                debug!("Picker has {} collection(s)", collections.len());
                self.collections = collections;
                self.phase = PickerPhase::AwaitingSelection;

                if self.collections.len() == 1 {
                    return self.select_collection(0).map(Some);
                }
                Ok(None)
            }
            Err(e) => {
                error!("Failed to load content types: {}", e);
                self.phase = PickerPhase::ContentTypesError {
                    message: e.user_message(),
                };
                Ok(None)
            }
        }
    }

    /// Selects the collection at `index`, dropping any entries shown so far.
    pub fn select_collection(&mut self, index: usize) -> PickerResult<FetchTicket> {
        if !self.phase.can_select_collection() {
            return Err(self.invalid("select a collection"));
        }
        let collection = self
            .collections
            .get(index)
            .ok_or(PickerError::CollectionOutOfRange {
                index,
                len: self.collections.len(),
            })?;

        self.generation += 1;
        let ticket = FetchTicket {
            generation: self.generation,
            plural_name: collection.plural_name.clone(),
            uid: collection.uid.clone(),
        };

        self.selected = Some(index);
        self.entries.clear();
        self.phase = PickerPhase::LoadingEntries;
        Ok(ticket)
    }

    /// Selects a collection by plural name.
    pub fn select_collection_named(&mut self, plural_name: &str) -> PickerResult<FetchTicket> {
        let index = self
            .collections
            .iter()
            .position(|c| c.plural_name == plural_name)
            .ok_or_else(|| PickerError::UnknownCollection(plural_name.to_string()))?;
        self.select_collection(index)
    }

    /// Applies an entries fetch result.
    ///
    /// Returns `false`, leaving state untouched, when the ticket is stale.
    pub fn entries_loaded(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<Entry>, GatewayError>,
    ) -> bool {
        if ticket.generation != self.generation || self.phase != PickerPhase::LoadingEntries {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "Discarding stale entries for {}",
                ticket.plural_name
            );
            return false;
        }

        match result {
            Ok(entries) => {
                debug!("Showing {} entries of {}", entries.len(), ticket.plural_name);
                self.entries = entries;
                self.phase = PickerPhase::EntriesReady;
            }
            Err(e) => {
                error!("Failed to fetch entries for {}: {}", ticket.plural_name, e);
                self.phase = PickerPhase::EntriesError {
                    message: e.user_message(),
                };
            }
        }
        true
    }

    /// The selection for a clicked entry. State is not changed.
    pub fn select_entry(&self, document_id: &str) -> PickerResult<SelectionResult> {
        if self.phase != PickerPhase::EntriesReady {
            return Err(self.invalid("select an entry"));
        }
        let collection = self
            .selected_collection()
            .ok_or_else(|| self.invalid("select an entry"))?;

        if !self.entries.iter().any(|e| e.document_id == document_id) {
            return Err(PickerError::UnknownEntry(document_id.to_string()));
        }

        Ok(SelectionResult::new(document_id, &collection.plural_name))
    }

    fn invalid(&self, action: &'static str) -> PickerError {
        PickerError::InvalidTransition {
            action,
            phase: self.phase.to_string(),
        }
    }
}
