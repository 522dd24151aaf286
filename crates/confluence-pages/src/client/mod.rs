//! Confluence REST API client.
//!
//! Provides sync HTTP client for the Confluence Server content API
//! with HTTP Basic authentication.

mod pages;
mod request;

use std::time::Duration;

use confluence_pages_config::ConfluenceConfig;
use ureq::http::Uri;

use crate::auth::BasicAuth;
use crate::error::ConfluenceError;
use crate::transport::{Transport, UreqTransport};
use crate::types::Page;

/// HTTP timeout in seconds (connect plus response).
const DEFAULT_TIMEOUT: u64 = 5;

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = "confluence server API Client";

/// REST API path suffix stripped from the base URL to get the site root.
const REST_API_SUFFIX: &str = "/rest/api";

/// Confluence REST API client.
///
/// Holds only static configuration, so a shared reference can serve
/// concurrent callers.
pub struct ConfluenceClient<T = UreqTransport> {
    transport: T,
    base_url: String,
    auth: BasicAuth,
}

impl ConfluenceClient {
    /// Create client for the REST API at `base_url` (e.g. `https://host/confluence/rest/api`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfluenceError::Configuration`] if any argument is empty or
    /// `base_url` is not an absolute URI.
    pub fn new(base_url: &str, username: &str, password: &str) -> Result<Self, ConfluenceError> {
        let transport = UreqTransport::new(Duration::from_secs(DEFAULT_TIMEOUT));
        Self::with_transport(base_url, username, password, transport)
    }

    /// Create client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Same as [`ConfluenceClient::new`].
    pub fn from_config(config: &ConfluenceConfig) -> Result<Self, ConfluenceError> {
        Self::new(&config.base_url, &config.username, &config.password)
    }
}

impl<T: Transport> ConfluenceClient<T> {
    /// Create client that sends requests through `transport`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfluenceError::Configuration`] if any argument is empty or
    /// `base_url` is not an absolute URI.
    pub fn with_transport(
        base_url: &str,
        username: &str,
        password: &str,
        transport: T,
    ) -> Result<Self, ConfluenceError> {
        if base_url.is_empty() || username.is_empty() || password.is_empty() {
            return Err(ConfluenceError::Configuration(
                "url, username or password empty".to_owned(),
            ));
        }

        let uri: Uri = base_url.parse().map_err(|e| {
            ConfluenceError::Configuration(format!("invalid base URL '{base_url}': {e}"))
        })?;
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(ConfluenceError::Configuration(format!(
                "base URL '{base_url}' must be absolute"
            )));
        }

        Ok(Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_owned(),
            auth: BasicAuth::new(username, password),
        })
    }

    /// Get the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the transport requests are sent through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Web UI URL for `page`.
    ///
    /// Falls back to the `viewpage.action` URL when the page carries an ID
    /// but no web UI link.
    pub fn page_url(&self, page: &Page) -> Option<String> {
        let site = self.site_root();
        page.web_url(site).or_else(|| {
            page.id
                .as_ref()
                .map(|id| format!("{site}/pages/viewpage.action?pageId={id}"))
        })
    }

    /// Base URL without the REST API suffix.
    fn site_root(&self) -> &str {
        self.base_url
            .strip_suffix(REST_API_SUFFIX)
            .unwrap_or(&self.base_url)
    }
}
