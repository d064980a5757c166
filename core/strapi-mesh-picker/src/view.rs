//! View-model rows for the render layer.

use crate::state::{DocumentPicker, PickerPhase};
use serde::Serialize;
use strapi_mesh_gateway::{admin_url, edit_link};
use strapi_mesh_types::{Entry, ResolvedCollection, SelectionResult};

/// One rendered entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRow {
    pub document_id: String,
    pub label: String,
    pub image_url: Option<String>,
    pub published: Option<String>,
    /// The host's current value points at this entry.
    pub selected: bool,
    pub edit_link: Option<String>,
}

impl EntryRow {
    pub fn new(
        entry: &Entry,
        collection: &ResolvedCollection,
        api_url: &str,
        current: Option<&SelectionResult>,
    ) -> Self {
        Self {
            document_id: entry.document_id.clone(),
            label: entry.display_label(collection.display_field.as_deref()),
            image_url: entry
                .image_url(collection.image_field.as_deref())
                .map(str::to_string),
            published: entry.published_label(),
            selected: current.is_some_and(|sel| sel.id == entry.document_id),
            edit_link: edit_link(api_url, &collection.uid, &entry.document_id),
        }
    }
}

/// Everything the render layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerView {
    pub phase: PickerPhase,
    /// Display names of the resolved collections, in order.
    pub collections: Vec<String>,
    pub selected_collection: Option<usize>,
    pub shows_selector: bool,
    pub rows: Vec<EntryRow>,
    pub admin_url: Option<String>,
}

impl PickerView {
    pub fn build(picker: &DocumentPicker, api_url: &str, current: Option<&SelectionResult>) -> Self {
        let rows = match picker.selected_collection() {
            Some(collection) if *picker.phase() == PickerPhase::EntriesReady => picker
                .entries()
                .iter()
                .map(|entry| EntryRow::new(entry, collection, api_url, current))
                .collect(),
            _ => Vec::new(),
        };

        Self {
            phase: picker.phase().clone(),
            collections: picker
                .collections()
                .iter()
                .map(|c| c.display_name.clone())
                .collect(),
            selected_collection: picker.selected_index(),
            shows_selector: picker.shows_selector(),
            rows,
            admin_url: admin_url(api_url),
        }
    }
}
