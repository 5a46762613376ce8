//! Search API.
//!
//! Endpoint: `GET /rest/search3`
//!
//! Request parameters:
//! - `query` — search text
//! - `artistCount` — max artists (fixed at 5)
//! - `albumCount` — max albums (fixed at 10)
//! - `songCount` — max songs (fixed at 10)
//!
//! Response JSON:
//! ```json
//! {
//!   "subsonic-response": {
//!     "status": "ok",
//!     "searchResult3": {
//!       "artist": [ { "id": "ar1", "name": "...", "albumCount": 3 } ],
//!       "album":  [ { "id": "al1", "name": "...", "artist": "...", "year": 1959 } ],
//!       "song":   { "id": "s1", "title": "...", "duration": 562 }
//!     }
//!   }
//! }
//! ```
//!
//! Any of the three groups may be missing, or sent as a bare object when it
//! holds a single result.

use crate::client::NavidromeClient;
use crate::error::Result;
use crate::types::{Album, Artist, OneOrMany, SearchResult, Song, to_sequence};
use serde::Deserialize;

pub const SEARCH_ARTIST_COUNT: u32 = 5;
pub const SEARCH_ALBUM_COUNT: u32 = 10;
pub const SEARCH_SONG_COUNT: u32 = 10;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Search3Payload {
    #[serde(default)]
    search_result3: Option<RawSearchResult>,
}

#[derive(Deserialize, Default)]
struct RawSearchResult {
    #[serde(default)]
    artist: Option<OneOrMany<Artist>>,
    #[serde(default)]
    album: Option<OneOrMany<Album>>,
    #[serde(default)]
    song: Option<OneOrMany<Song>>,
}

impl NavidromeClient {
    /// Search artists, albums, and songs.
    ///
    /// A blank or whitespace-only `query` returns an empty [`SearchResult`]
    /// without contacting the server. Otherwise exactly one request is sent.
    ///
    /// # Errors
    ///
    /// - [`NavidromeError::Http`](crate::NavidromeError::Http) — network failure
    /// - [`NavidromeError::Transport`](crate::NavidromeError::Transport) — non-2xx status
    /// - [`NavidromeError::Api`](crate::NavidromeError::Api) — `"status": "failed"`
    pub fn search(&self, query: &str) -> Result<SearchResult> {
        if query.trim().is_empty() {
            return Ok(SearchResult::default());
        }

        let payload: Search3Payload = self.call(
            "search3",
            &[
                ("query", query.to_owned()),
                ("artistCount", SEARCH_ARTIST_COUNT.to_string()),
                ("albumCount", SEARCH_ALBUM_COUNT.to_string()),
                ("songCount", SEARCH_SONG_COUNT.to_string()),
            ],
        )?;
        let raw = payload.search_result3.unwrap_or_default();

        Ok(SearchResult {
            artists: to_sequence(raw.artist),
            albums: to_sequence(raw.album),
            songs: to_sequence(raw.song),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::NavidromeError;
    use crate::testutil::{AUTH_FAILED_BODY, client_for, ok_body};
    use mockito::Matcher;

    #[test]
    fn blank_query_skips_network() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/rest/search3")
            .match_query(Matcher::Any)
            .expect(0)
            .create();

        let client = client_for(&server);
        assert!(client.search("").unwrap().is_empty());
        assert!(client.search("   ").unwrap().is_empty());
        mock.assert();
    }

    #[test]
    fn search_sends_fixed_caps_once() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/rest/search3")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("query".into(), "miles davis".into()),
                Matcher::UrlEncoded("artistCount".into(), "5".into()),
                Matcher::UrlEncoded("albumCount".into(), "10".into()),
                Matcher::UrlEncoded("songCount".into(), "10".into()),
            ]))
            .with_body(ok_body(
                r#"{"searchResult3":{
                    "artist":{"id":"ar1","name":"Miles Davis","albumCount":51},
                    "album":[{"id":"al2","name":"Bitches Brew"},{"id":"al1","name":"Kind of Blue"}]
                }}"#,
            ))
            .expect(1)
            .create();

        let result = client_for(&server).search("miles davis").unwrap();
        mock.assert();

        assert_eq!(result.artists.len(), 1);
        assert_eq!(result.artists[0].album_count, Some(51));
        let ids: Vec<&str> = result.albums.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["al2", "al1"]);
        assert!(result.songs.is_empty());
    }

    #[test]
    fn missing_result_group_is_empty() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/rest/search3")
            .match_query(Matcher::Any)
            .with_body(ok_body("{}"))
            .create();

        let result = client_for(&server).search("nothing").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn api_failure_propagates() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/rest/search3")
            .match_query(Matcher::Any)
            .with_body(AUTH_FAILED_BODY)
            .create();

        let err = client_for(&server).search("jazz").unwrap_err();
        assert!(matches!(err, NavidromeError::Api { .. }));
        assert_eq!(err.api_message(), Some("Wrong username or password"));
    }
}
