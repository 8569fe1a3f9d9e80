//! HTTP client for the Orbit workspace API.

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use crate::activity::NewActivity;
use crate::error::OrbitError;

const DEFAULT_BASE_URL: &str = "https://app.orbit.love/api/v1";

/// Client for one Orbit workspace.
///
/// Manages the HTTP client, workspace ID, API key, and base URL. Use
/// [`OrbitClient::new`] for production or [`OrbitClient::with_base_url`] to
/// point at a mock server in tests.
pub struct OrbitClient {
    client: Client,
    workspace_id: String,
    api_key: String,
    base_url: Url,
}

impl OrbitClient {
    /// Creates a new client pointed at the production Orbit API.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::MissingArgument`] if `workspace_id` or
    /// `api_key` is empty, or [`OrbitError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(workspace_id: &str, api_key: &str, timeout_secs: u64) -> Result<Self, OrbitError> {
        Self::with_base_url(workspace_id, api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::MissingArgument`] if `workspace_id` or
    /// `api_key` is empty, [`OrbitError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed, or
    /// [`OrbitError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        workspace_id: &str,
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, OrbitError> {
        if workspace_id.is_empty() {
            return Err(OrbitError::MissingArgument("an Orbit workspace ID"));
        }
        if api_key.is_empty() {
            return Err(OrbitError::MissingArgument("an Orbit API key"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("yorbit/0.1 (community-activity-sync)")
            .build()?;

        let trimmed = base_url.trim_end_matches('/');
        let base_url = Url::parse(trimmed).map_err(|e| OrbitError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            workspace_id: workspace_id.to_owned(),
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Submits a single activity to the workspace.
    ///
    /// A key collision (the workspace already holds this activity) is
    /// reported as [`OrbitError::Duplicate`] so callers can count it
    /// instead of treating it as a failure.
    ///
    /// # Errors
    ///
    /// - [`OrbitError::Duplicate`] if the workspace rejects the `key` as
    ///   already taken.
    /// - [`OrbitError::Status`] on any other non-2xx response.
    /// - [`OrbitError::Http`] on network-level failure.
    pub async fn create_activity(&self, activity: &NewActivity) -> Result<(), OrbitError> {
        let url = self.activities_url();
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({ "activity": activity }))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        if is_duplicate_key_rejection(&body) {
            return Err(OrbitError::Duplicate {
                key: activity.key.clone(),
            });
        }
        Err(OrbitError::Status {
            status: status.as_u16(),
            body,
        })
    }

    /// URL of the workspace's activity collection.
    fn activities_url(&self) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(&format!(
            "{}/{}/activities",
            self.base_url.path().trim_end_matches('/'),
            self.workspace_id
        ));
        url
    }
}

/// Returns `true` when an error body carries the `key`-conflict indicator —
/// the workspace's sole duplicate-detection signal
/// (`{"errors": {"key": ["has already been taken"]}}`).
fn is_duplicate_key_rejection(body: &str) -> bool {
    serde_json::from_str::<Value>(body)
        .ok()
        .is_some_and(|v| v.pointer("/errors/key").is_some())
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
