//! Subsonic/Navidrome REST API client library.
//!
//! Provides token-authenticated access to a Subsonic-compatible server:
//! search, album lists, liveness checks, cover-art and web-UI links, plus
//! local recent-search history.
//!
//! # Authentication
//!
//! Every request carries the username and a one-time `md5(password + salt)`
//! token. Credentials live in an immutable [`ServerConfig`], persisted to
//! `~/.config/navidrome/config.json` or read from `NAVIDROME_*` variables.
//!
//! ```no_run
//! use navidrome_api::{NavidromeClient, ServerConfig};
//!
//! let config = ServerConfig::new("https://music.example.com", "alice", "hunter2");
//! config.save().unwrap();
//!
//! let client = NavidromeClient::new(config).unwrap();
//! let result = client.search("kind of blue").unwrap();
//! ```
//!
//! # API endpoint mapping
//!
//! | Method                                | REST endpoint   | Description            |
//! |---------------------------------------|-----------------|------------------------|
//! | [`NavidromeClient::search`]           | `search3`       | Artists, albums, songs |
//! | [`NavidromeClient::album_list`]       | `getAlbumList2` | Album listings         |
//! | [`NavidromeClient::recently_added`]   | `getAlbumList2` | `type=newest`          |
//! | [`NavidromeClient::most_played`]      | `getAlbumList2` | `type=frequent`        |
//! | [`NavidromeClient::ping`]             | `ping`          | Liveness check         |
//! | [`NavidromeClient::cover_art_url`]    | `getCoverArt`   | URL only, no request   |

pub mod album_list;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod history;
pub mod search;
mod system;
#[cfg(test)]
mod testutil;
pub mod types;
pub mod urls;

pub use client::NavidromeClient;
pub use config::ServerConfig;
pub use error::{NavidromeError, Result};
pub use history::RecentSearches;
pub use urls::format_duration;
