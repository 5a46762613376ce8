//! System API.
//!
//! Endpoint: `GET /rest/ping`
//!
//! Response:
//! ```json
//! { "subsonic-response": { "status": "ok", "version": "1.16.1" } }
//! ```
//!
//! Used to test connectivity and credentials.

use crate::client::NavidromeClient;
use serde_json::Value;
use tracing::debug;

impl NavidromeClient {
    /// Liveness check.
    ///
    /// Returns `true` if the server answered `"status": "ok"`, `false` on any
    /// network, HTTP, parse or API failure. Never returns an error.
    pub fn ping(&self) -> bool {
        match self.call::<Value>("ping", &[]) {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "ping failed");
                false
            }
        }
    }
}
