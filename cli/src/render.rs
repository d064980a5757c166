//! Plain-text rendering of picker views and settings.

use std::fmt::Write;
use strapi_mesh_config::Settings;
use strapi_mesh_picker::{PickerPhase, PickerView};
use strapi_mesh_types::{AllowList, Entry};

pub fn collections(view: &PickerView) -> String {
    let mut out = String::new();
    if view.collections.is_empty() {
        out.push_str("No collections available.\n");
    }
    for (idx, name) in view.collections.iter().enumerate() {
        let _ = writeln!(out, "  [{idx}] {name}");
    }
    out
}

pub fn rows(view: &PickerView) -> String {
    let mut out = String::new();
    if view.phase.is_loading() {
        out.push_str("Loading...\n");
    } else if view.phase == PickerPhase::EntriesReady && view.rows.is_empty() {
        out.push_str("No entries.\n");
    }
    for row in &view.rows {
        let marker = if row.selected { "*" } else { " " };
        let _ = write!(out, "{marker} {}  {}", row.document_id, row.label);
        if let Some(published) = &row.published {
            let _ = write!(out, "  (published {published})");
        }
        out.push('\n');
        if let Some(image) = &row.image_url {
            let _ = writeln!(out, "      image: {image}");
        }
        if let Some(link) = &row.edit_link {
            let _ = writeln!(out, "      edit:  {link}");
        }
    }
    out
}

pub fn allow_list(list: &AllowList) -> String {
    let mut out = String::new();
    match list {
        AllowList::Flat {
            allowed_content_types,
            ..
        } => {
            if allowed_content_types.is_empty() {
                out.push_str("All content types allowed.\n");
            } else {
                let _ = writeln!(out, "Allowed: {}", allowed_content_types.join(", "));
            }
            if let Some(field) = list.shared_display_field() {
                let _ = writeln!(out, "Display field: {field}");
            }
            if let Some(field) = list.shared_image_field() {
                let _ = writeln!(out, "Image field: {field}");
            }
        }
        AllowList::PerCollection { content_types } => {
            if content_types.is_empty() {
                out.push_str("All content types allowed.\n");
            }
            for (idx, config) in content_types.iter().enumerate() {
                let name = if config.friendly_type_name.is_empty() {
                    &config.plural_type_name
                } else {
                    &config.friendly_type_name
                };
                let _ = write!(out, "  [{idx}] {name} ({})", config.plural_type_name);
                if let Some(field) = &config.display_field {
                    let _ = write!(out, " display={field}");
                }
                if let Some(field) = &config.image_field {
                    let _ = write!(out, " image={field}");
                }
                out.push('\n');
            }
        }
    }
    out
}

pub fn settings(settings: &Settings) -> String {
    let connection = settings.connection();
    let mut out = String::new();
    let url = if connection.api_url.is_empty() {
        "(not set)"
    } else {
        connection.api_url.as_str()
    };
    let token = if connection.api_token.is_empty() {
        "(not set)"
    } else {
        "(set)"
    };
    let _ = writeln!(out, "API URL:   {url}");
    let _ = writeln!(out, "API token: {token}");
    let _ = writeln!(out, "Base URL:  {}", settings.data_source.base_url);
    let _ = writeln!(
        out,
        "Drafts:    {}",
        if settings.unpublished { "on" } else { "off" }
    );
    match &settings.selection {
        Some(selection) => {
            let _ = writeln!(
                out,
                "Selection: {} in {}",
                selection.id,
                selection.content_type_plural_name.as_deref().unwrap_or("?")
            );
        }
        None => out.push_str("Selection: none\n"),
    }
    out
}

pub fn entry(entry: &Entry) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entry)
}
