//! Request construction and execution.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use ureq::http::{HeaderValue, Method, Request, header};

use super::{ConfluenceClient, USER_AGENT};
use crate::error::ConfluenceError;
use crate::transport::{HttpRequest, Transport};

/// Body argument for requests without a payload.
pub(crate) const NO_BODY: Option<&()> = None;

const APPLICATION_JSON: &str = "application/json";

impl<T: Transport> ConfluenceClient<T> {
    /// Build request for `path` relative to the API base URL.
    ///
    /// `path` is appended verbatim; callers are responsible for separators
    /// and query escaping.
    pub(crate) fn new_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpRequest, ConfluenceError> {
        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(ConfluenceError::Serialization)?;

        let mut builder = Request::builder()
            .method(method)
            .uri(format!("{}{}", self.base_url, path));
        if payload.is_some() {
            builder = builder.header(header::CONTENT_TYPE, APPLICATION_JSON);
        }

        Ok(builder
            .header(header::ACCEPT, APPLICATION_JSON)
            .header(header::USER_AGENT, USER_AGENT)
            .body(payload)?)
    }

    /// Authenticate and send `request`, decoding the JSON response.
    ///
    /// Non-2xx responses become [`ConfluenceError::Api`] carrying the raw body.
    pub(crate) fn execute<R: DeserializeOwned>(
        &self,
        mut request: HttpRequest,
    ) -> Result<R, ConfluenceError> {
        let auth_header = HeaderValue::try_from(self.auth.header_value())
            .map_err(|e| ConfluenceError::RequestConstruction(e.into()))?;
        request
            .headers_mut()
            .insert(header::AUTHORIZATION, auth_header);

        debug!("{} {}", request.method(), request.uri());

        let response = self.transport.send(request)?;
        let status = response.status();
        let body = response.into_body();

        if !status.is_success() {
            return Err(ConfluenceError::Api {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        serde_json::from_slice(&body).map_err(ConfluenceError::Decode)
    }
}
