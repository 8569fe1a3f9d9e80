//! Request types for the Orbit `POST /:workspace/activities` endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single trackable engagement record to submit to the workspace.
///
/// The `key` is the workspace-wide identity of the activity; submitting the
/// same key twice yields a duplicate rejection, which batch ingestion treats
/// as a non-error outcome.
#[derive(Debug, Clone, Serialize)]
pub struct NewActivity {
    /// Namespaced type, e.g. `"youtube:video"` or `"youtube:comment"`.
    pub activity_type: String,
    /// Idempotency key, unique per engagement.
    pub key: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
    /// When the engagement happened; the workspace stamps "now" if absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<DateTime<Utc>>,
    pub member: MemberIdentity,
}

/// The community member the activity is attributed to.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MemberIdentity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// YouTube identity (channel ID or username) for member matching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}
