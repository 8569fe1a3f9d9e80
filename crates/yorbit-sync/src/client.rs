//! The combined YouTube → Orbit client surface.

use serde_json::Value;

use yorbit_core::{resolve_credentials, CredentialArgs, Credentials};
use yorbit_orbit::{IngestOutcome, NewActivity, OrbitClient};
use yorbit_youtube::YoutubeClient;

use crate::activities::{prepare_comment_activities, prepare_video_activities, video_id};
use crate::error::SyncError;

/// Request timeout applied to both clients by [`OrbitYoutube::new`].
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// One channel-sync surface over both APIs.
///
/// Credentials are resolved once at construction and shared read-only by
/// every request. All operations are strictly sequential — each network
/// call completes before the next begins, so submission order is
/// deterministic and the ingestion tally is race-free.
pub struct OrbitYoutube {
    youtube: YoutubeClient,
    orbit: OrbitClient,
    channel_id: Option<String>,
}

/// What a full channel sync touched, plus the ingestion tally.
#[derive(Debug)]
pub struct SyncReport {
    /// Videos found in the uploads playlist.
    pub videos: usize,
    /// Comments and replies collected across all videos.
    pub comments: usize,
    pub outcome: IngestOutcome,
}

impl OrbitYoutube {
    /// Builds the combined client, resolving credentials from explicit
    /// arguments and environment variables.
    ///
    /// # Errors
    ///
    /// Fails fast — before any network call — with [`SyncError::Config`]
    /// if a required credential is missing from both sources, or
    /// [`SyncError::Youtube`] / [`SyncError::Orbit`] if a client cannot be
    /// constructed.
    pub fn new(args: &CredentialArgs) -> Result<Self, SyncError> {
        let credentials = resolve_credentials(args)?;
        Self::from_credentials(&credentials, DEFAULT_TIMEOUT_SECS)
    }

    /// Builds the combined client from already-resolved credentials.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Youtube`] / [`SyncError::Orbit`] if a client
    /// cannot be constructed.
    pub fn from_credentials(
        credentials: &Credentials,
        timeout_secs: u64,
    ) -> Result<Self, SyncError> {
        let youtube = YoutubeClient::new(&credentials.youtube_api_key, timeout_secs)?;
        let orbit = OrbitClient::new(
            &credentials.orbit_workspace_id,
            &credentials.orbit_api_key,
            timeout_secs,
        )?;
        Ok(Self {
            youtube,
            orbit,
            channel_id: credentials.youtube_channel_id.clone(),
        })
    }

    /// Wraps pre-built clients. Intended for tests pointing at mock servers.
    #[must_use]
    pub fn with_clients(
        youtube: YoutubeClient,
        orbit: OrbitClient,
        channel_id: Option<String>,
    ) -> Self {
        Self {
            youtube,
            orbit,
            channel_id,
        }
    }

    /// The underlying YouTube client, for page-level access.
    #[must_use]
    pub fn youtube(&self) -> &YoutubeClient {
        &self.youtube
    }

    /// The underlying Orbit client.
    #[must_use]
    pub fn orbit(&self) -> &OrbitClient {
        &self.orbit
    }

    /// See [`YoutubeClient::get_channel_upload_playlist_id`].
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Youtube`] on any client failure.
    pub async fn get_channel_upload_playlist_id(
        &self,
        channel_id: &str,
    ) -> Result<String, SyncError> {
        Ok(self
            .youtube
            .get_channel_upload_playlist_id(channel_id)
            .await?)
    }

    /// See [`YoutubeClient::get_videos`].
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Youtube`] on any client failure.
    pub async fn get_videos(&self, playlist_id: &str) -> Result<Vec<Value>, SyncError> {
        Ok(self.youtube.get_videos(playlist_id).await?)
    }

    /// See [`YoutubeClient::get_comments`].
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Youtube`] on any client failure.
    pub async fn get_comments(&self, video_id: &str) -> Result<Vec<Value>, SyncError> {
        Ok(self.youtube.get_comments(video_id).await?)
    }

    /// See [`OrbitClient::add_activities`]. Per-item failures land in the
    /// returned tally, never as an error.
    pub async fn add_activities(&self, activities: &[NewActivity]) -> IngestOutcome {
        self.orbit.add_activities(activities).await
    }

    /// Syncs a channel's full engagement history: every upload and every
    /// comment/reply becomes one activity submission.
    ///
    /// `channel_id` falls back to the credential default when `None`.
    /// Videos with disabled comments contribute zero comments and no error.
    ///
    /// # Errors
    ///
    /// - [`SyncError::MissingChannelId`] if no channel ID is available.
    /// - [`SyncError::Youtube`] if resolution or any page fetch fails; the
    ///   run aborts and nothing is submitted.
    ///
    /// Per-item ingestion failures do not fail the call — they are tallied
    /// in the report's outcome.
    pub async fn sync_channel(&self, channel_id: Option<&str>) -> Result<SyncReport, SyncError> {
        let channel_id = channel_id
            .or(self.channel_id.as_deref())
            .ok_or(SyncError::MissingChannelId)?;

        let playlist_id = self
            .youtube
            .get_channel_upload_playlist_id(channel_id)
            .await?;
        let videos = self.youtube.get_videos(&playlist_id).await?;

        let mut activities = prepare_video_activities(&videos);
        let mut comment_count = 0usize;

        for video in &videos {
            let Some(id) = video_id(video) else {
                tracing::warn!("skipping comments for video payload with no video id");
                continue;
            };
            let comments = self.youtube.get_comments(id).await?;
            comment_count += comments.len();
            activities.extend(prepare_comment_activities(&comments));
        }

        tracing::info!(
            channel_id,
            videos = videos.len(),
            comments = comment_count,
            activities = activities.len(),
            "collected channel engagement"
        );

        let outcome = self.orbit.add_activities(&activities).await;

        Ok(SyncReport {
            videos: videos.len(),
            comments: comment_count,
            outcome,
        })
    }
}
