//! Shared configuration for the yorbit workspace.
//!
//! Holds the credential set used by every API client (Orbit workspace ID and
//! API key, YouTube API key, optional channel ID) and its resolution logic:
//! explicit arguments win, environment variables fill the gaps, and anything
//! still missing fails fast before a single network call is made.

pub mod credentials;
pub mod error;

pub use credentials::{
    resolve_credentials, resolve_credentials_from_env, CredentialArgs, Credentials,
};
pub use error::ConfigError;
