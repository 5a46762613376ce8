//! Resource URL builders and display helpers.
//!
//! These never touch the network. Cover-art URLs embed a fresh salt and
//! token, so two calls for the same id return different strings.

use crate::client::NavidromeClient;
use crate::types::{Song, WebLinkKind};

/// Cover size (pixels) used when the caller has no preference.
pub const DEFAULT_COVER_SIZE: u32 = 100;

impl NavidromeClient {
    /// Authenticated `getCoverArt` URL for a cover-art id (not an entity id).
    pub fn cover_art_url(&self, cover_art_id: &str, size: u32) -> String {
        self.request_url(
            "getCoverArt",
            &[("id", cover_art_id.to_owned()), ("size", size.to_string())],
        )
    }

    /// Deep link into the server's web UI.
    ///
    /// `Song` links open the album view with the given id.
    pub fn web_url(&self, kind: WebLinkKind, id: &str) -> String {
        let section = match kind {
            WebLinkKind::Artist => "artist",
            WebLinkKind::Album | WebLinkKind::Song => "album",
        };
        format!("{}/app/#/{section}/{id}/show", self.base_url())
    }

    /// Link for a song: its album when `album_id` is known.
    pub fn song_web_url(&self, song: &Song) -> String {
        match &song.album_id {
            Some(album_id) => self.web_url(WebLinkKind::Album, album_id),
            None => self.web_url(WebLinkKind::Song, &song.id),
        }
    }
}

/// Format seconds as `M:SS`. `None` and zero yield an empty string.
pub fn format_duration(seconds: Option<u64>) -> String {
    match seconds {
        None | Some(0) => String::new(),
        Some(s) => format!("{}:{:02}", s / 60, s % 60),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ServerConfig;
    use crate::auth::token;

    fn client() -> NavidromeClient {
        let config = ServerConfig::new("https://music.example.com/", "alice", "secret");
        NavidromeClient::new(config).unwrap()
    }

    fn query_value<'a>(url: &'a str, key: &str) -> Option<&'a str> {
        let (_, query) = url.split_once('?')?;
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    #[test]
    fn cover_art_url_has_id_size_and_valid_token() {
        let url = client().cover_art_url("al-42", 300);
        assert!(url.starts_with("https://music.example.com/rest/getCoverArt?"));
        assert_eq!(query_value(&url, "id"), Some("al-42"));
        assert_eq!(query_value(&url, "size"), Some("300"));

        let salt = query_value(&url, "s").unwrap();
        assert_eq!(query_value(&url, "t"), Some(token("secret", salt).as_str()));
    }

    #[test]
    fn cover_art_url_default_size() {
        let url = client().cover_art_url("ar-1", DEFAULT_COVER_SIZE);
        assert_eq!(query_value(&url, "size"), Some("100"));
    }

    #[test]
    fn web_urls() {
        let c = client();
        assert_eq!(
            c.web_url(WebLinkKind::Artist, "ar1"),
            "https://music.example.com/app/#/artist/ar1/show"
        );
        assert_eq!(
            c.web_url(WebLinkKind::Album, "al1"),
            "https://music.example.com/app/#/album/al1/show"
        );
        assert_eq!(
            c.web_url(WebLinkKind::Song, "s1"),
            "https://music.example.com/app/#/album/s1/show"
        );
    }

    #[test]
    fn song_link_prefers_album() {
        let c = client();
        let json = r#"{"id":"s1","title":"So What","albumId":"al1"}"#;
        let mut song: Song = serde_json::from_str(json).unwrap();
        assert_eq!(
            c.song_web_url(&song),
            "https://music.example.com/app/#/album/al1/show"
        );
        song.album_id = None;
        assert_eq!(
            c.song_web_url(&song),
            "https://music.example.com/app/#/album/s1/show"
        );
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(None), "");
        assert_eq!(format_duration(Some(0)), "");
        assert_eq!(format_duration(Some(5)), "0:05");
        assert_eq!(format_duration(Some(65)), "1:05");
        assert_eq!(format_duration(Some(3600)), "60:00");
    }
}
