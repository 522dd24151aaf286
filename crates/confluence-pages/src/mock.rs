//! Mock transport for testing.
//!
//! Provides [`MockTransport`] for unit testing without network access.

use std::io;
use std::sync::Mutex;

use ureq::http::Response;

use crate::transport::{HttpRequest, HttpResponse, Transport};

/// Canned outcome of every exchange.
#[derive(Debug, Clone, Copy)]
enum Reply {
    Status(u16, &'static str),
    ConnectionRefused,
}

/// Mock transport for testing.
///
/// Answers every request with the same canned reply and records the
/// requests it was given.
#[derive(Debug)]
pub(crate) struct MockTransport {
    reply: Reply,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Reply with `status` and `body` to every request.
    pub(crate) fn responding(status: u16, body: &'static str) -> Self {
        Self::with_reply(Reply::Status(status, body))
    }

    /// Fail every request as if nothing listened on the server port.
    pub(crate) fn refusing() -> Self {
        Self::with_reply(Reply::ConnectionRefused)
    }

    /// Requests sent since the last call, oldest first.
    pub(crate) fn take_requests(&self) -> Vec<HttpRequest> {
        std::mem::take(&mut *self.requests.lock().unwrap())
    }
}

impl Transport for MockTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ureq::Error> {
        self.requests.lock().unwrap().push(request);
        match self.reply {
            Reply::Status(status, body) => Ok(Response::builder()
                .status(status)
                .body(body.as_bytes().to_vec())
                .unwrap()),
            Reply::ConnectionRefused => Err(ureq::Error::Io(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))),
        }
    }
}
