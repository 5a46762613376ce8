//! Subsonic token authentication.
//!
//! Every request carries `u`, `t`, `s`, `v`, `c` and `f` query parameters:
//!
//! - `s` — a fresh random salt (12 chars, `[a-z0-9]`)
//! - `t` — `hex(md5(password + salt))`
//!
//! A new salt is drawn for every call, so two requests never share a token.

use crate::config::ServerConfig;
use md5::{Digest, Md5};
use rand::Rng;

/// Subsonic protocol version sent as `v`.
pub const API_VERSION: &str = "1.16.1";
/// Client identifier sent as `c`.
pub const CLIENT_NAME: &str = "navidrome-cli";
/// Default salt length.
pub const SALT_LEN: usize = 12;

const SALT_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Insertion-ordered query parameters.
///
/// [`set`](Self::set) replaces an existing key in place, so caller-supplied
/// params override auth params without reordering the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Percent-encoded `k=v&k=v` form.
    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Params {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

/// Generate a random `[a-z0-9]` salt of `len` chars from `rng`.
pub fn generate_salt<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(SALT_CHARSET[rng.random_range(0..SALT_CHARSET.len())]))
        .collect()
}

/// Lowercase hex MD5 of `password + salt`.
pub fn token(password: &str, salt: &str) -> String {
    let digest = Md5::digest(format!("{password}{salt}").as_bytes());
    format!("{digest:x}")
}

/// Fresh auth params using the thread-local RNG.
pub fn auth_params(config: &ServerConfig) -> Params {
    auth_params_with(config, &mut rand::rng())
}

/// Auth params drawing the salt from `rng`.
pub fn auth_params_with<R: Rng + ?Sized>(config: &ServerConfig, rng: &mut R) -> Params {
    let salt = generate_salt(rng, SALT_LEN);
    let mut params = Params::new();
    params.set("u", config.username.as_str());
    params.set("t", token(&config.password, &salt));
    params.set("s", salt);
    params.set("v", API_VERSION);
    params.set("c", CLIENT_NAME);
    params.set("f", "json");
    params
}
