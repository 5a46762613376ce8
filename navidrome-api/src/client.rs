//! HTTP client for the Subsonic REST API.
//!
//! Every request is a `GET` to `{server}/rest/{endpoint}` with the query
//! string built from fresh [auth params](crate::auth) plus the caller's
//! params (caller wins on key collisions).
//!
//! # Response format
//!
//! All API responses share this envelope:
//!
//! ```json
//! {
//!   "subsonic-response": {
//!     "status": "ok",
//!     "version": "1.16.1",
//!     ...endpoint-specific fields...
//!   }
//! }
//! ```
//!
//! A non-2xx HTTP status maps to
//! [`NavidromeError::Transport`](crate::NavidromeError::Transport), and
//! `"status": "failed"` maps to [`NavidromeError::Api`](crate::NavidromeError::Api):
//!
//! ```json
//! {
//!   "subsonic-response": {
//!     "status": "failed",
//!     "error": { "code": 40, "message": "Wrong username or password" }
//!   }
//! }
//! ```

use crate::auth::{Params, auth_params};
use crate::config::ServerConfig;
use crate::error::{NavidromeError, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

const USER_AGENT: &str = concat!("navidrome-cli/", env!("CARGO_PKG_VERSION"));
const UNKNOWN_API_ERROR: &str = "Unknown API error";

/// Blocking HTTP client for a Subsonic/Navidrome server.
///
/// Holds a [`reqwest::blocking::Client`] and an immutable [`ServerConfig`].
/// Query methods are implemented in separate modules (`search`,
/// `album_list`, `system`, `urls`) as `impl NavidromeClient` blocks.
///
/// The client holds no mutable state, so a shared reference can be used
/// from several threads at once.
pub struct NavidromeClient {
    http: Client,
    config: ServerConfig,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "subsonic-response")]
    response: Value,
}

impl NavidromeClient {
    /// Create a client for `config`.
    ///
    /// # Errors
    ///
    /// [`NavidromeError::NotConfigured`] if the URL, username or password
    /// is empty.
    pub fn new(config: ServerConfig) -> Result<Self> {
        if !config.is_complete() {
            return Err(NavidromeError::NotConfigured);
        }
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, config })
    }

    /// Create a client from the environment or `~/.config/navidrome/config.json`.
    pub fn from_saved() -> Result<Self> {
        Self::new(ServerConfig::resolve()?)
    }

    /// Return a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Server URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Build `{base}/rest/{endpoint}?{auth + extra}` with a fresh salt.
    pub fn request_url(&self, endpoint: &str, extra: &[(&str, String)]) -> String {
        let mut params: Params = auth_params(&self.config);
        params.extend(extra.iter().map(|(k, v)| (*k, v.as_str())));
        format!(
            "{}/rest/{endpoint}?{}",
            self.base_url(),
            params.to_query_string()
        )
    }

    /// Send a `GET` to `endpoint` and return the unwrapped envelope as `T`.
    ///
    /// `endpoint` is the path after `/rest/`, e.g. `search3`.
    /// `extra` params override auth params sharing a key.
    ///
    /// This is the only place the crate touches the network.
    pub fn call<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        extra: &[(&str, String)],
    ) -> Result<T> {
        let url = self.request_url(endpoint, extra);
        debug!(endpoint, "subsonic request");

        let resp = self.http.get(&url).send()?;
        let status = resp.status();
        if !status.is_success() {
            debug!(endpoint, status = status.as_u16(), "subsonic HTTP failure");
            return Err(NavidromeError::Transport {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_owned(),
            });
        }

        let body = resp.text()?;
        unwrap_envelope(&body)
    }
}

/// Parse a response body, check its status, and deserialize the payload.
fn unwrap_envelope<T: DeserializeOwned>(body: &str) -> Result<T> {
    let Envelope { response } = serde_json::from_str(body)?;

    if response.get("status").and_then(Value::as_str) == Some("failed") {
        let error = response.get("error");
        let code = error.and_then(|e| e.get("code")).and_then(Value::as_i64);
        let message = error
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(UNKNOWN_API_ERROR)
            .to_owned();
        return Err(NavidromeError::Api { code, message });
    }

    Ok(serde_json::from_value(response)?)
}
