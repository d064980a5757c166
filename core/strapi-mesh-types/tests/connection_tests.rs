use pretty_assertions::assert_eq;
use strapi_mesh_types::{ConnectionConfig, PaginationCursor, Pagination, SelectionResult, PAGE_SIZE};

// ── ConnectionConfig ─────────────────────────────────────────────

#[test]
fn incomplete_without_url_or_token() {
    assert!(!ConnectionConfig::default().is_complete());
    assert!(!ConnectionConfig::new("https://cms.example.com", "").is_complete());
    assert!(!ConnectionConfig::new("", "token").is_complete());
    assert!(!ConnectionConfig::new("   ", "token").is_complete());
    assert!(ConnectionConfig::new("https://cms.example.com", "token").is_complete());
}

#[test]
fn request_base_url_strips_trailing_slash() {
    let config = ConnectionConfig::new("https://cms.example.com/", "t");
    assert_eq!(config.sanitized_url(), "https://cms.example.com");
    assert_eq!(config.request_base_url(), "https://cms.example.com/api");

    let plain = ConnectionConfig::new("https://cms.example.com", "t");
    assert_eq!(plain.request_base_url(), "https://cms.example.com/api");
}

#[test]
fn debug_redacts_token() {
    let config = ConnectionConfig::new("https://cms.example.com", "super-secret");
    let debug = format!("{config:?}");
    assert!(debug.contains("https://cms.example.com"));
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("<redacted>"));
}

#[test]
fn connection_serializes_camel_case() {
    let config = ConnectionConfig::new("https://cms.example.com", "t");
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["apiUrl"], "https://cms.example.com");
    assert_eq!(json["apiToken"], "t");
}

// ── PaginationCursor ─────────────────────────────────────────────

#[test]
fn cursor_starts_at_first_page() {
    let cursor = PaginationCursor::new();
    assert_eq!(cursor.page, 1);
    assert_eq!(cursor.page_size, PAGE_SIZE);
    assert_eq!(
        cursor.query(),
        "populate=*&pagination[page]=1&pagination[pageSize]=100"
    );
}

#[test]
fn cursor_advances_until_page_count() {
    let mut cursor = PaginationCursor::new();
    let meta = |page| Pagination {
        page,
        page_size: 100,
        page_count: 3,
        total: 250,
    };

    assert!(cursor.advance(Some(meta(1))));
    assert_eq!(cursor.page, 2);
    assert!(cursor.advance(Some(meta(2))));
    assert_eq!(cursor.page, 3);
    assert!(!cursor.advance(Some(meta(3))));
    assert_eq!(cursor.page, 3);
    assert_eq!(cursor.total, 250);
}

#[test]
fn cursor_without_meta_is_single_page() {
    let mut cursor = PaginationCursor::new();
    assert!(!cursor.advance(None));
    assert_eq!(cursor.page, 1);
    assert_eq!(cursor.page_count, 1);
}

#[test]
fn cursor_stops_on_zero_page_count() {
    let mut cursor = PaginationCursor::new();
    assert!(!cursor.advance(Some(Pagination::default())));
}

#[test]
fn null_pagination_counters_read_as_zero() {
    let meta: Pagination = serde_json::from_value(serde_json::json!({
        "page": 1,
        "pageSize": null,
        "pageCount": null,
        "total": null
    }))
    .unwrap();
    assert_eq!(
        meta,
        Pagination {
            page: 1,
            ..Pagination::default()
        }
    );

    let mut cursor = PaginationCursor::new();
    assert!(!cursor.advance(Some(meta)));
    assert_eq!(cursor.page, 1);
}

// ── SelectionResult ──────────────────────────────────────────────

#[test]
fn selection_serializes_host_shape() {
    let selection = SelectionResult::new("abc123", "heroes");
    let json = serde_json::to_value(&selection).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "id": "abc123", "contentTypePluralName": "heroes" })
    );
}
