//! Channel engagement sync: YouTube uploads and comment threads recorded as
//! Orbit activities.
//!
//! [`OrbitYoutube`] composes the two API clients behind one surface. The
//! pipeline is strictly sequential: resolve the channel's uploads playlist,
//! walk every video page, walk every video's comment pages (flattened,
//! replies inline), shape the raw payloads into activities, and submit them
//! one at a time while tallying added/duplicate/error outcomes.

pub mod activities;
pub mod client;
pub mod error;

pub use activities::{prepare_comment_activities, prepare_video_activities};
pub use client::{OrbitYoutube, SyncReport, DEFAULT_TIMEOUT_SECS};
pub use error::SyncError;
