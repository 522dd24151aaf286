//! Page operations for Confluence API.

use tracing::info;
use ureq::http::Method;

use super::ConfluenceClient;
use super::request::NO_BODY;
use crate::error::ConfluenceError;
use crate::transport::Transport;
use crate::types::{Ancestor, Body, PAGE_TYPE, Page, Space, Version};

/// Expansions requested when fetching a page.
const GET_PAGE_EXPAND: &str = "body.storage,version";

impl<T: Transport> ConfluenceClient<T> {
    /// Create a page in `space` below the page `parent_id`.
    ///
    /// The payload always carries exactly one ancestor; an empty `parent_id`
    /// is sent as an ancestor without ID (`"ancestors":[{}]`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or sent, the server
    /// rejects it, or the response is not a page.
    pub fn create_page(
        &self,
        space: &str,
        parent_id: &str,
        title: &str,
        body: &str,
    ) -> Result<Page, ConfluenceError> {
        let page = Page {
            title: Some(title.to_owned()),
            content_type: Some(PAGE_TYPE.to_owned()),
            space: Some(Space::with_key(space)),
            body: Some(Body::storage(body)),
            version: Some(Version::with_number(1)),
            ancestors: vec![Ancestor {
                id: Some(parent_id.to_owned()),
            }],
            ..Page::default()
        };

        info!("Creating page '{}' in space {}", title, space);

        let request = self.new_request(Method::POST, "/content/", Some(&page))?;
        let created: Page = self.execute(request)?;

        info!(
            "Created page {}",
            created.id.as_deref().unwrap_or("(no id)")
        );
        Ok(created)
    }

    /// Replace title and body of page `id`.
    ///
    /// `version` is sent as is and must be the page's current version plus
    /// one (see [`Page::next_version`]). The server rejects stale versions
    /// with 409, surfaced as [`ConfluenceError::Api`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or sent, the server
    /// rejects it, or the response is not a page.
    pub fn update_page(
        &self,
        space: &str,
        id: &str,
        title: &str,
        body: &str,
        version: u32,
    ) -> Result<Page, ConfluenceError> {
        let page = Page {
            id: Some(id.to_owned()),
            title: Some(title.to_owned()),
            content_type: Some(PAGE_TYPE.to_owned()),
            space: Some(Space::with_key(space)),
            body: Some(Body::storage(body)),
            version: Some(Version::with_number(version)),
            ..Page::default()
        };

        info!("Updating page {} to version {}", id, version);

        let request = self.new_request(Method::PUT, &format!("/content/{id}"), Some(&page))?;
        self.execute(request)
    }

    /// Get page by ID with body storage and version expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or sent, the server
    /// rejects it, or the response is not a page.
    pub fn get_page(&self, id: &str) -> Result<Page, ConfluenceError> {
        info!("Getting page {}", id);

        let path = format!("/content/{id}?expand={GET_PAGE_EXPAND}");
        let request = self.new_request(Method::GET, &path, NO_BODY)?;
        self.execute(request)
    }
}
