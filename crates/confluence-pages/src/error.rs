//! Error types for the Confluence pages client.

/// Error from Confluence API operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfluenceError {
    /// Client construction rejected the base URL or credentials.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Request body could not be encoded as JSON.
    #[error("failed to serialize request body")]
    Serialization(#[source] serde_json::Error),

    /// Method, URL and headers do not form a valid HTTP request.
    #[error("failed to build request")]
    RequestConstruction(#[from] ureq::http::Error),

    /// HTTP exchange failed (DNS, connection refused, timeout, TLS).
    #[error("HTTP request failed")]
    Transport(#[from] ureq::Error),

    /// Response body is not the expected JSON.
    #[error("failed to decode response body")]
    Decode(#[source] serde_json::Error),

    /// Server answered with a non-success status.
    #[error("HTTP error: {status} - {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },
}
