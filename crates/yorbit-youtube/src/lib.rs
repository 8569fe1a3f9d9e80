//! HTTP client for the YouTube Data API v3.
//!
//! Wraps `reqwest` with YouTube-specific error handling and cursor-based
//! pagination over the list endpoints used for channel engagement sync:
//! `/channels` (uploads-playlist resolution), `/playlistItems` (videos) and
//! `/commentThreads` (comments). Comment pages are flattened so that every
//! top-level thread is immediately followed by its embedded replies, and the
//! "comments disabled" rejection is absorbed into an empty result rather than
//! surfaced as an error.

pub mod client;
pub mod comments;
pub mod error;
pub mod pagination;
pub mod types;

pub use client::YoutubeClient;
pub use comments::flatten_comment_threads;
pub use error::YoutubeError;
pub use pagination::{collect_all_pages, Page};
