//! Links back into the CMS admin UI.

use reqwest::Url;

/// Admin panel root for an API URL: `{scheme}://{host}[:{port}]/admin`.
///
/// `None` when the URL is empty or does not parse.
pub fn admin_url(api_url: &str) -> Option<String> {
    let url = Url::parse(api_url.trim()).ok()?;
    let host = url.host_str()?;
    let port = url.port().map(|p| format!(":{p}")).unwrap_or_default();
    Some(format!("{}://{host}{port}/admin", url.scheme()))
}

/// "Open in CMS editor" link for one document of a collection.
///
/// The `/api` suffix of the configured URL is replaced by the content
/// manager path. `None` without a uid or document id.
pub fn edit_link(api_url: &str, uid: &str, document_id: &str) -> Option<String> {
    if uid.is_empty() || document_id.is_empty() || api_url.trim().is_empty() {
        return None;
    }

    let base = api_url.trim().trim_end_matches('/');
    let base = base.strip_suffix("/api").unwrap_or(base);
    Some(format!(
        "{base}/admin/content-manager/collection-types/{uid}/{document_id}"
    ))
}
