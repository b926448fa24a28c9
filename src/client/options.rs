//! Client options
//!
//! Connection settings shared by every API group: the node's base URL, an
//! optional API key, and the underlying HTTP client (reusable across groups
//! so they share one connection pool).

use url::Url;

/// Settings for talking to one node.
#[derive(Debug, Clone)]
pub struct Options {
    /// Base URL of the node's REST API, e.g. `https://nodes.example.net`.
    pub base_url: Url,
    /// API key for protected endpoints, sent as `X-API-Key` when present.
    pub api_key: Option<String>,
    /// The HTTP client used for all requests.
    pub client: reqwest::Client,
}

impl Options {
    /// Creates options for a node with no API key and a default HTTP client.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            api_key: None,
            client: reqwest::Client::new(),
        }
    }

    /// Sets the API key sent with every request.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Resolves an API path against the base URL.
    ///
    /// `Url::join` drops the final path segment of a base that lacks a
    /// trailing slash, so the base is normalized first; a node URL given as
    /// `http://host/node` and `http://host/node/` resolve the same way.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        let path = path.trim_start_matches('/');
        if self.base_url.path().ends_with('/') {
            self.base_url.join(path)
        } else {
            Url::parse(&format!("{}/", self.base_url))?.join(path)
        }
    }
}
