//! HTTP transport seam.
//!
//! [`ConfluenceClient`](crate::ConfluenceClient) hands fully built requests to a
//! [`Transport`] and gets the whole response back. [`UreqTransport`] is the
//! production implementation; tests substitute their own.

use std::time::Duration;

use ureq::Agent;
use ureq::http::{Request, Response};

/// Request as produced by the request builder. `None` means no body.
pub type HttpRequest = Request<Option<Vec<u8>>>;

/// Response with the body fully read into memory.
pub type HttpResponse = Response<Vec<u8>>;

/// Performs a single HTTP exchange.
///
/// Implementations must return responses of every status code as `Ok`;
/// `Err` is reserved for failures of the exchange itself.
pub trait Transport: Send + Sync {
    /// Send `request` and read the complete response.
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ureq::Error>;
}

/// Blocking transport backed by a [`ureq::Agent`].
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    /// Create transport whose requests time out after `timeout` (connect plus response).
    pub fn new(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ureq::Error> {
        let (parts, body) = request.into_parts();

        let response = match body {
            Some(bytes) => self.agent.run(Request::from_parts(parts, bytes))?,
            None => self.agent.run(Request::from_parts(parts, ()))?,
        };

        let (parts, mut body) = response.into_parts();
        let bytes = body.read_to_vec()?;
        Ok(Response::from_parts(parts, bytes))
    }
}
