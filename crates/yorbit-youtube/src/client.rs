//! HTTP client for the YouTube Data API v3.

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use crate::comments::{flatten_comment_threads, is_comments_unavailable};
use crate::error::YoutubeError;
use crate::pagination::{collect_all_pages, Page};
use crate::types::{ChannelListResponse, ListResponse};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Page size cap for list endpoints — the maximum YouTube allows.
const MAX_RESULTS: &str = "50";

/// Client for the YouTube Data API v3.
///
/// Manages the HTTP client, API key, and base URL. Use [`YoutubeClient::new`]
/// for production or [`YoutubeClient::with_base_url`] to point at a mock
/// server in tests. Every request is a single shot — no retries.
pub struct YoutubeClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl YoutubeClient {
    /// Creates a new client pointed at the production YouTube API.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::MissingArgument`] if `api_key` is empty, or
    /// [`YoutubeError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, YoutubeError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::MissingArgument`] if `api_key` is empty,
    /// [`YoutubeError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed, or [`YoutubeError::InvalidBaseUrl`] if `base_url` does
    /// not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, YoutubeError> {
        if api_key.is_empty() {
            return Err(YoutubeError::MissingArgument("a YouTube API key"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("yorbit/0.1 (community-activity-sync)")
            .build()?;

        // Normalise: strip the trailing slash so path concatenation in
        // `build_url` yields exactly one slash between base and endpoint.
        let trimmed = base_url.trim_end_matches('/');
        let base_url = Url::parse(trimmed).map_err(|e| YoutubeError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Resolves the implicit "uploads" playlist that enumerates every video
    /// the channel has published.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::MissingArgument`] if `channel_id` is empty.
    /// - [`YoutubeError::ChannelNotFound`] if the API reports no matching
    ///   channel.
    /// - [`YoutubeError::Status`] / [`YoutubeError::Http`] on HTTP failure.
    /// - [`YoutubeError::Deserialize`] if the response shape is unexpected.
    pub async fn get_channel_upload_playlist_id(
        &self,
        channel_id: &str,
    ) -> Result<String, YoutubeError> {
        if channel_id.is_empty() {
            return Err(YoutubeError::MissingArgument("a channelId"));
        }

        let body = self
            .request_json("/channels", &[("part", "contentDetails"), ("id", channel_id)])
            .await?;
        let channels: ChannelListResponse =
            serde_json::from_value(body).map_err(|e| YoutubeError::Deserialize {
                context: format!("channels(id={channel_id})"),
                source: e,
            })?;

        let channel = channels
            .items
            .into_iter()
            .next()
            .ok_or_else(|| YoutubeError::ChannelNotFound(channel_id.to_owned()))?;

        Ok(channel.content_details.related_playlists.uploads)
    }

    /// Fetches a single page of videos from a playlist.
    ///
    /// `page_token` is included only when a cursor is already known; pass
    /// `None` for the first page.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::MissingArgument`] if `playlist_id` is empty.
    /// - [`YoutubeError::Status`] / [`YoutubeError::Http`] on HTTP failure.
    /// - [`YoutubeError::Deserialize`] if the response shape is unexpected.
    pub async fn get_video_page(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<Page<Value>, YoutubeError> {
        if playlist_id.is_empty() {
            return Err(YoutubeError::MissingArgument("a playlistId"));
        }

        let mut params = vec![
            ("part", "snippet,contentDetails"),
            ("maxResults", MAX_RESULTS),
            ("playlistId", playlist_id),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let body = self.request_json("/playlistItems", &params).await?;
        let page: ListResponse =
            serde_json::from_value(body).map_err(|e| YoutubeError::Deserialize {
                context: format!("playlistItems(playlistId={playlist_id})"),
                source: e,
            })?;

        tracing::debug!(
            playlist_id,
            items = page.items.len(),
            has_next = page.next_page_token.is_some(),
            "fetched video page"
        );

        Ok(Page {
            items: page.items,
            next_page_token: page.next_page_token,
        })
    }

    /// Fetches every video in a playlist by walking all pages sequentially.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::MissingArgument`] if `playlist_id` is empty.
    /// - Any error from [`Self::get_video_page`]; a page failure aborts the
    ///   run and discards earlier pages.
    pub async fn get_videos(&self, playlist_id: &str) -> Result<Vec<Value>, YoutubeError> {
        if playlist_id.is_empty() {
            return Err(YoutubeError::MissingArgument("a playlistId"));
        }
        collect_all_pages(move |token| async move {
            self.get_video_page(playlist_id, token.as_deref()).await
        })
        .await
    }

    /// Fetches a single page of comment threads for a video, flattened so
    /// each thread is immediately followed by its embedded replies.
    ///
    /// If the API rejects the request because comments are disabled or the
    /// thread collection does not exist, the rejection is absorbed and an
    /// empty, exhausted page is returned instead.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::MissingArgument`] if `video_id` is empty.
    /// - [`YoutubeError::Status`] / [`YoutubeError::Http`] on any other
    ///   HTTP failure.
    /// - [`YoutubeError::Deserialize`] if the response shape is unexpected.
    pub async fn get_comment_page(
        &self,
        video_id: &str,
        page_token: Option<&str>,
    ) -> Result<Page<Value>, YoutubeError> {
        if video_id.is_empty() {
            return Err(YoutubeError::MissingArgument("a videoId"));
        }

        let mut params = vec![
            ("part", "snippet,replies"),
            ("maxResults", MAX_RESULTS),
            ("videoId", video_id),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let body = match self.request_json("/commentThreads", &params).await {
            Ok(body) => body,
            Err(err) if is_comments_unavailable(&err) => {
                tracing::warn!(video_id, error = %err, "comments unavailable, treating as empty");
                return Ok(Page::empty());
            }
            Err(err) => return Err(err),
        };

        let page: ListResponse =
            serde_json::from_value(body).map_err(|e| YoutubeError::Deserialize {
                context: format!("commentThreads(videoId={video_id})"),
                source: e,
            })?;

        tracing::debug!(
            video_id,
            threads = page.items.len(),
            has_next = page.next_page_token.is_some(),
            "fetched comment page"
        );

        Ok(Page {
            items: flatten_comment_threads(page.items),
            next_page_token: page.next_page_token,
        })
    }

    /// Fetches every comment and reply for a video by walking all pages
    /// sequentially. Videos with disabled comments yield an empty sequence.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::MissingArgument`] if `video_id` is empty.
    /// - Any error from [`Self::get_comment_page`]; a page failure aborts
    ///   the run and discards earlier pages.
    pub async fn get_comments(&self, video_id: &str) -> Result<Vec<Value>, YoutubeError> {
        if video_id.is_empty() {
            return Err(YoutubeError::MissingArgument("a videoId"));
        }
        collect_all_pages(move |token| async move {
            self.get_comment_page(video_id, token.as_deref()).await
        })
        .await
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters. The API key is always the first pair.
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(&format!(
            "{}{path}",
            self.base_url.path().trim_end_matches('/')
        ));
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a single GET request and parses the response body as JSON.
    /// No schema validation beyond being valid JSON, and no retries.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::MissingArgument`] if `path` is empty.
    /// - [`YoutubeError::Status`] on a non-2xx response, carrying the
    ///   status code and raw body.
    /// - [`YoutubeError::Http`] on network-level failure.
    /// - [`YoutubeError::Deserialize`] if the body is not valid JSON.
    async fn request_json(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Value, YoutubeError> {
        if path.is_empty() {
            return Err(YoutubeError::MissingArgument("a path"));
        }

        let url = self.build_url(path, params);
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(YoutubeError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| YoutubeError::Deserialize {
            context: format!("{path}?{}", url.query().unwrap_or_default()),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
