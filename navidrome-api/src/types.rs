//! Data types for Subsonic API responses.
//!
//! Field names follow Rust conventions (`snake_case`); the wire format is
//! camelCase. Every id, including `cover_art`, is an opaque server string.
//! A cover-art id is never assumed to equal the entity id; resolve it with
//! [`NavidromeClient::cover_art_url`](crate::NavidromeClient::cover_art_url).

use serde::{Deserialize, Serialize};

/// An artist.
///
/// `starred` is the timestamp the user favorited it; presence means starred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_art: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starred: Option<String>,
}

/// An album (`AlbumID3` in Subsonic terms).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_art: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song_count: Option<u32>,
    /// Total length in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starred: Option<String>,
}

/// A song (`Child` in Subsonic terms).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_art: Option<String>,
    /// Length in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starred: Option<String>,
}

impl Artist {
    pub fn is_starred(&self) -> bool {
        self.starred.is_some()
    }
}

impl Album {
    pub fn is_starred(&self) -> bool {
        self.starred.is_some()
    }
}

impl Song {
    pub fn is_starred(&self) -> bool {
        self.starred.is_some()
    }
}

/// Result of [`NavidromeClient::search`](crate::NavidromeClient::search).
///
/// Each list keeps the server's relevance order and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub artists: Vec<Artist>,
    pub albums: Vec<Album>,
    pub songs: Vec<Song>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.artists.is_empty() && self.albums.is_empty() && self.songs.is_empty()
    }
}

/// Listing type for `getAlbumList2`, mapped to the API `type` parameter.
///
/// | Variant                | API value              |
/// |------------------------|------------------------|
/// | `Newest`               | `newest`               |
/// | `Frequent`             | `frequent`             |
/// | `Recent`               | `recent`               |
/// | `Random`               | `random`               |
/// | `Highest`              | `highest`              |
/// | `Starred`              | `starred`              |
/// | `AlphabeticalByName`   | `alphabeticalByName`   |
/// | `AlphabeticalByArtist` | `alphabeticalByArtist` |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumListType {
    /// Recently added.
    Newest,
    /// Most played.
    Frequent,
    /// Recently played.
    Recent,
    Random,
    /// Highest rated.
    Highest,
    Starred,
    AlphabeticalByName,
    AlphabeticalByArtist,
}

impl AlbumListType {
    /// Return the value sent to the API `type` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Frequent => "frequent",
            Self::Recent => "recent",
            Self::Random => "random",
            Self::Highest => "highest",
            Self::Starred => "starred",
            Self::AlphabeticalByName => "alphabeticalByName",
            Self::AlphabeticalByArtist => "alphabeticalByArtist",
        }
    }
}

/// Target of a web-UI deep link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebLinkKind {
    Artist,
    Album,
    /// Routed to the album view; the web UI has no standalone song page.
    Song,
}

/// A field the server sends either as a bare object or as an array.
///
/// Subsonic JSON collapses single-element arrays into the element itself.
/// This type only appears in raw payload structs; callers always see `Vec`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

/// Normalize an absent, single, or array field into an ordered `Vec`.
pub(crate) fn to_sequence<T>(value: Option<OneOrMany<T>>) -> Vec<T> {
    value.map(OneOrMany::into_vec).unwrap_or_default()
}
