//! Shared helpers for tests against a local mock server.

use crate::client::NavidromeClient;
use crate::config::ServerConfig;
use serde_json::{Value, json};

pub(crate) fn client_for(server: &mockito::ServerGuard) -> NavidromeClient {
    NavidromeClient::new(ServerConfig::new(server.url(), "alice", "secret")).unwrap()
}

/// Wrap a JSON object's fields in an `"ok"` envelope.
pub(crate) fn ok_body(payload: &str) -> String {
    let mut inner: Value = serde_json::from_str(payload).unwrap();
    inner["status"] = json!("ok");
    inner["version"] = json!("1.16.1");
    json!({ "subsonic-response": inner }).to_string()
}

pub(crate) const AUTH_FAILED_BODY: &str = r#"{"subsonic-response":{"status":"failed","version":"1.16.1","error":{"code":40,"message":"Wrong username or password"}}}"#;
