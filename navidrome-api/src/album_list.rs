//! Album list API.
//!
//! Endpoint: `GET /rest/getAlbumList2`
//!
//! Request: `type` (see [`AlbumListType`]), `size`, `offset`.
//!
//! Response:
//! ```json
//! {
//!   "subsonic-response": {
//!     "status": "ok",
//!     "albumList2": {
//!       "album": [ { "id": "al1", "name": "...", "artist": "...", "coverArt": "al-al1" } ]
//!     }
//!   }
//! }
//! ```
//!
//! `album` is a bare object when the page holds one album, and absent when
//! the library is empty.

use crate::client::NavidromeClient;
use crate::error::Result;
use crate::types::{Album, AlbumListType, OneOrMany, to_sequence};
use serde::Deserialize;

/// Page size used when the caller has no preference.
pub const DEFAULT_LIST_SIZE: u32 = 25;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AlbumList2Payload {
    #[serde(default)]
    album_list2: Option<RawAlbumList>,
}

#[derive(Deserialize)]
struct RawAlbumList {
    #[serde(default)]
    album: Option<OneOrMany<Album>>,
}

impl NavidromeClient {
    /// Fetch one page of albums in the server's order for `kind`.
    pub fn album_list(&self, kind: AlbumListType, size: u32, offset: u32) -> Result<Vec<Album>> {
        let payload: AlbumList2Payload = self.call(
            "getAlbumList2",
            &[
                ("type", kind.as_str().to_owned()),
                ("size", size.to_string()),
                ("offset", offset.to_string()),
            ],
        )?;
        Ok(to_sequence(payload.album_list2.and_then(|list| list.album)))
    }

    /// Most recently added albums.
    pub fn recently_added(&self, size: u32) -> Result<Vec<Album>> {
        self.album_list(AlbumListType::Newest, size, 0)
    }

    /// Most frequently played albums.
    pub fn most_played(&self, size: u32) -> Result<Vec<Album>> {
        self.album_list(AlbumListType::Frequent, size, 0)
    }
}
