//! Confluence Server page API client.
//!
//! - [`ConfluenceClient`]: REST API client with HTTP Basic authentication
//! - [`types`]: typed mirror of the content JSON ([`Page`] and friends)
//! - [`Transport`]: seam between the client and the HTTP stack
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use confluence_pages::ConfluenceClient;
//!
//! let client = ConfluenceClient::new(
//!     "https://confluence.example.com/rest/api",
//!     "user",
//!     "pass",
//! )?;
//!
//! let page = client.get_page("64819209")?;
//! let mut body = page.storage_value().unwrap_or_default().to_owned();
//! body.push_str("<p>2. Test</p>");
//!
//! let title = page.title.as_deref().unwrap_or_default();
//! client.update_page("ISMS", "64819209", title, &body, page.next_version())?;
//! # Ok(())
//! # }
//! ```

mod auth;

// API client
mod client;
pub use client::{ConfluenceClient, USER_AGENT};

// Transport
pub mod transport;
pub use transport::{Transport, UreqTransport};

#[cfg(test)]
mod mock;

// Types
pub mod types;
pub use types::Page;

// Errors
pub mod error;
pub use error::ConfluenceError;
