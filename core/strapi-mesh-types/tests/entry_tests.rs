use pretty_assertions::assert_eq;
use serde_json::json;
use strapi_mesh_types::{Entry, Error, UNTITLED};

fn hero() -> Entry {
    Entry::from_value(json!({
        "id": 7,
        "documentId": "abc123",
        "publishedAt": "2025-03-04T09:30:00.000Z",
        "title": "Hero of the day",
        "rank": 3,
        "image": { "url": "https://cdn.example.com/hero.png", "alt": "hero" },
        "blank": ""
    }))
    .unwrap()
}

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn numeric_id_is_held_as_string() {
    let entry = hero();
    assert_eq!(entry.id, "7");
    assert_eq!(entry.document_id, "abc123");
}

#[test]
fn string_id_is_kept() {
    let entry = Entry::from_value(json!({ "id": "42", "documentId": "d-42" })).unwrap();
    assert_eq!(entry.id, "42");
    assert!(entry.published_at.is_none());
    assert!(entry.fields.is_empty());
}

#[test]
fn unknown_fields_land_in_fields_map() {
    let entry = hero();
    assert!(entry.fields.contains_key("title"));
    assert!(entry.fields.contains_key("image"));
    assert!(!entry.fields.contains_key("documentId"));
    assert!(!entry.fields.contains_key("id"));
}

#[test]
fn null_published_at_is_draft() {
    let entry =
        Entry::from_value(json!({ "id": 1, "documentId": "d1", "publishedAt": null })).unwrap();
    assert!(entry.published_at.is_none());
    assert!(entry.published_label().is_none());
}

#[test]
fn missing_document_id_is_rejected() {
    let result = Entry::from_value(json!({ "id": 1, "title": "no identity" }));
    assert!(matches!(result, Err(Error::Serialization(_))));
}

#[test]
fn empty_document_id_is_rejected() {
    let result = Entry::from_value(json!({ "id": 1, "documentId": "" }));
    assert!(matches!(result, Err(Error::MissingField("documentId"))));
}

// ── Display helpers ──────────────────────────────────────────────

#[test]
fn display_label_reads_named_field() {
    assert_eq!(hero().display_label(Some("title")), "Hero of the day");
}

#[test]
fn display_label_renders_numbers() {
    assert_eq!(hero().display_label(Some("rank")), "3");
}

#[test]
fn display_label_falls_back_to_untitled() {
    let entry = hero();
    assert_eq!(entry.display_label(None), UNTITLED);
    assert_eq!(entry.display_label(Some("missing")), UNTITLED);
    assert_eq!(entry.display_label(Some("blank")), UNTITLED);
    assert_eq!(entry.display_label(Some("image")), UNTITLED);
}

#[test]
fn image_url_reads_nested_url() {
    let entry = hero();
    assert_eq!(
        entry.image_url(Some("image")),
        Some("https://cdn.example.com/hero.png")
    );
    assert_eq!(entry.image_url(Some("title")), None);
    assert_eq!(entry.image_url(Some("")), None);
    assert_eq!(entry.image_url(None), None);
}

#[test]
fn published_label_formats_timestamp() {
    assert_eq!(
        hero().published_label().as_deref(),
        Some("Mar 4, 2025, 09:30 AM")
    );
}
