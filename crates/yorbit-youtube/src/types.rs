//! Typed envelopes for YouTube Data API v3 responses.
//!
//! List items stay opaque (`serde_json::Value`) — the sync pipeline treats
//! them as raw API payloads and only the envelope fields (paging cursor,
//! channel `contentDetails`) need a schema.

use serde::Deserialize;
use serde_json::Value;

/// One page of a list endpoint (`/playlistItems`, `/commentThreads`).
///
/// `next_page_token` absent means the listing is exhausted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Envelope for the `/channels` lookup.
///
/// The API omits `items` entirely when no channel matches, so it defaults
/// to an empty vec rather than failing deserialization.
#[derive(Debug, Deserialize)]
pub struct ChannelListResponse {
    #[serde(default)]
    pub items: Vec<ChannelItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelItem {
    pub content_details: ChannelContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelContentDetails {
    pub related_playlists: RelatedPlaylists,
}

/// The implicit playlists a channel exposes; `uploads` enumerates every
/// video the channel has published.
#[derive(Debug, Deserialize)]
pub struct RelatedPlaylists {
    pub uploads: String,
}
