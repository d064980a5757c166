//! Connection settings for the remote content API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Path appended to the configured API URL to form the request base URL.
pub const API_PATH_SUFFIX: &str = "/api";

/// Connection settings captured by the connection editor.
///
/// `api_token` is a bearer credential; the `Debug` impl redacts it.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionConfig {
    #[serde(default)]
    pub api_url: String,
    #[serde(default)]
    pub api_token: String,
}

impl ConnectionConfig {
    pub fn new(api_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_token: api_token.into(),
        }
    }

    /// Returns true when both the URL and the token are present.
    pub fn is_complete(&self) -> bool {
        !self.api_url.trim().is_empty() && !self.api_token.trim().is_empty()
    }

    /// The configured URL with a single trailing slash removed.
    pub fn sanitized_url(&self) -> &str {
        self.api_url.strip_suffix('/').unwrap_or(&self.api_url)
    }

    /// Base URL for API requests: sanitized URL plus [`API_PATH_SUFFIX`].
    pub fn request_base_url(&self) -> String {
        format!("{}{}", self.sanitized_url(), API_PATH_SUFFIX)
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.api_token.is_empty() {
            ""
        } else {
            "<redacted>"
        };
        f.debug_struct("ConnectionConfig")
            .field("api_url", &self.api_url)
            .field("api_token", &token)
            .finish()
    }
}
