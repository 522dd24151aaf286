//! HTTP Basic authentication.

use std::fmt;

use base64::Engine;
use base64::prelude::BASE64_STANDARD;

/// Basic auth credentials.
pub(crate) struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    pub(crate) fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_owned(),
            password: password.to_owned(),
        }
    }

    /// `Authorization` header value, encoded fresh on every call.
    pub(crate) fn header_value(&self) -> String {
        let credentials = format!("{}:{}", self.username, self.password);
        format!("Basic {}", BASE64_STANDARD.encode(credentials))
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
