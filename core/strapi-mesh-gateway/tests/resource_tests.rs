use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::BTreeMap;
use strapi_mesh_gateway::{
    DataRequest, DataResource, FailureKind, GENERIC_ERROR_MESSAGE, GatewayError, HttpDataResource,
    HttpResourceConfig, admin_url, edit_link,
};
use strapi_mesh_types::{
    ConnectionConfig, DataSourceValue, QueryParameter, RequestVariant, UNPUBLISHED_VARIANT,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn data_source(base_url: &str, enable_unpublished_mode: bool) -> DataSourceValue {
    let mut variants = BTreeMap::new();
    variants.insert(
        UNPUBLISHED_VARIANT.to_string(),
        RequestVariant {
            base_url: base_url.to_string(),
            parameters: vec![QueryParameter::new("status", "draft")],
        },
    );
    DataSourceValue {
        base_url: base_url.to_string(),
        custom: ConnectionConfig::new(base_url, "tok"),
        custom_public: ConnectionConfig::new(base_url, "tok"),
        enable_unpublished_mode,
        variants,
    }
}

// ── Config selection ─────────────────────────────────────────────

#[test]
fn published_mode_has_no_extra_parameters() {
    let config = HttpResourceConfig::from_data_source(&data_source("https://cms/api", true), false);
    assert_eq!(config.base_url, "https://cms/api");
    assert!(config.parameters.is_empty());
}

#[test]
fn unpublished_mode_uses_draft_variant() {
    let config = HttpResourceConfig::from_data_source(&data_source("https://cms/api", true), true);
    assert_eq!(config.parameters, vec![QueryParameter::new("status", "draft")]);
}

#[test]
fn unpublished_request_ignored_when_mode_disabled() {
    let config = HttpResourceConfig::from_data_source(&data_source("https://cms/api", false), true);
    assert!(config.parameters.is_empty());
}

#[test]
fn empty_base_url_is_configuration_missing() {
    let result = HttpDataResource::new(HttpResourceConfig::default());
    assert!(matches!(result, Err(GatewayError::ConfigurationMissing)));
}

// ── HTTP behavior ────────────────────────────────────────────────

#[tokio::test]
async fn draft_variant_adds_status_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/heroes"))
        .and(query_param("status", "draft"))
        .and(query_param("populate", "*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let base = format!("{}/api", server.uri());
    let resource =
        HttpDataResource::new(HttpResourceConfig::from_data_source(&data_source(&base, true), true))
            .unwrap();

    let body = resource
        .get_data_resource(DataRequest::get("/heroes?populate=*"))
        .await
        .unwrap();
    assert_eq!(body, json!({ "data": [] }));
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let resource = HttpDataResource::new(HttpResourceConfig {
        base_url: format!("{}/api/", server.uri()),
        ..Default::default()
    })
    .unwrap();

    let body = resource.get_data_resource(DataRequest::get("/ping")).await.unwrap();
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn non_json_body_is_shape_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let resource = HttpDataResource::new(HttpResourceConfig {
        base_url: server.uri(),
        ..Default::default()
    })
    .unwrap();

    let err = resource
        .get_data_resource(DataRequest::get("/heroes"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::RemoteShapeInvalid);
}

#[tokio::test]
async fn relative_path_is_rejected() {
    let resource = HttpDataResource::new(HttpResourceConfig {
        base_url: "http://127.0.0.1:9".into(),
        ..Default::default()
    })
    .unwrap();

    let err = resource
        .get_data_resource(DataRequest::get("heroes"))
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::InvalidRequest(_)));
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    let resource = HttpDataResource::new(HttpResourceConfig {
        base_url: "http://127.0.0.1:9".into(),
        ..Default::default()
    })
    .unwrap();

    let err = resource
        .get_data_resource(DataRequest::get("/heroes"))
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Network(_)));
    assert_eq!(err.kind(), FailureKind::NetworkOrHttpFailure);
}

// ── Error messages ───────────────────────────────────────────────

#[test]
fn configuration_missing_message() {
    assert_eq!(
        GatewayError::ConfigurationMissing.user_message(),
        "Strapi API configuration is missing"
    );
}

#[test]
fn empty_message_falls_back_to_generic_text() {
    assert_eq!(
        GatewayError::Network(String::new()).user_message(),
        GENERIC_ERROR_MESSAGE
    );
    assert_eq!(
        GatewayError::RemoteShapeInvalid(" ".into()).user_message(),
        GENERIC_ERROR_MESSAGE
    );
}

#[test]
fn http_message_carries_status() {
    let err = GatewayError::Http {
        status: 404,
        body: "Not Found".into(),
    };
    assert_eq!(err.user_message(), "HTTP 404: Not Found");
}

// ── Links ────────────────────────────────────────────────────────

#[test]
fn admin_url_keeps_scheme_host_and_port() {
    assert_eq!(
        admin_url("http://localhost:1337/api").as_deref(),
        Some("http://localhost:1337/admin")
    );
    assert_eq!(
        admin_url("https://cms.example.com").as_deref(),
        Some("https://cms.example.com/admin")
    );
}

#[test]
fn admin_url_of_garbage_is_none() {
    assert_eq!(admin_url("not a url"), None);
    assert_eq!(admin_url(""), None);
}

#[test]
fn edit_link_replaces_api_suffix() {
    assert_eq!(
        edit_link("https://cms.example.com/api", "api::hero.hero", "abc").as_deref(),
        Some("https://cms.example.com/admin/content-manager/collection-types/api::hero.hero/abc")
    );
    assert_eq!(
        edit_link("https://cms.example.com/api/", "api::hero.hero", "abc").as_deref(),
        Some("https://cms.example.com/admin/content-manager/collection-types/api::hero.hero/abc")
    );
}

#[test]
fn edit_link_without_api_suffix() {
    assert_eq!(
        edit_link("http://localhost:1337", "api::a.a", "d1").as_deref(),
        Some("http://localhost:1337/admin/content-manager/collection-types/api::a.a/d1")
    );
}

#[test]
fn edit_link_needs_all_parts() {
    assert_eq!(edit_link("https://cms", "", "abc"), None);
    assert_eq!(edit_link("https://cms", "api::a.a", ""), None);
    assert_eq!(edit_link(" ", "api::a.a", "abc"), None);
}
