use thiserror::Error;

use yorbit_core::ConfigError;
use yorbit_orbit::OrbitError;
use yorbit_youtube::YoutubeError;

/// Uniform wrapper for everything a top-level sync call can fail with.
///
/// Per-item ingestion failures are NOT here — they are collected in the
/// returned [`yorbit_orbit::IngestOutcome`] instead of propagated.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("youtube error: {0}")]
    Youtube(#[from] YoutubeError),

    #[error("orbit error: {0}")]
    Orbit(#[from] OrbitError),

    /// No channel ID was passed and the credentials carry no default.
    #[error("you must provide a channelId or set the YOUTUBE_CHANNEL_ID environment variable")]
    MissingChannelId,
}
