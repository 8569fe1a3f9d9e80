//! Sequential batch ingestion with per-item outcome tallying.

use thiserror::Error;

use crate::activity::NewActivity;
use crate::client::OrbitClient;
use crate::error::OrbitError;

/// Tally of one ingestion run. Every input item lands in exactly one
/// bucket: `added + duplicates + errors.len()` equals the input length.
#[derive(Debug, Default)]
pub struct IngestOutcome {
    /// Activities the workspace accepted as new records.
    pub added: usize,
    /// Key collisions — the workspace already held these activities.
    pub duplicates: usize,
    /// Non-duplicate failures, in submission order.
    pub errors: Vec<IngestItemError>,
}

/// A non-duplicate failure while submitting one activity. Collected in the
/// outcome, never propagated as a run-level error.
#[derive(Debug, Error)]
#[error("activity {key}: {source}")]
pub struct IngestItemError {
    pub key: String,
    #[source]
    pub source: OrbitError,
}

impl OrbitClient {
    /// Submits each activity sequentially, fully awaiting one before
    /// starting the next, and tallies the outcomes.
    ///
    /// The run never aborts on a per-item failure: every item is attempted
    /// and the returned tally reflects all of them, in submission order.
    /// Duplicate-key rejections count as `duplicates`; anything else lands
    /// in `errors`.
    pub async fn add_activities(&self, activities: &[NewActivity]) -> IngestOutcome {
        let mut outcome = IngestOutcome::default();

        for activity in activities {
            match self.create_activity(activity).await {
                Ok(()) => outcome.added += 1,
                Err(OrbitError::Duplicate { .. }) => outcome.duplicates += 1,
                Err(err) => {
                    tracing::warn!(key = %activity.key, error = %err, "failed to record activity");
                    outcome.errors.push(IngestItemError {
                        key: activity.key.clone(),
                        source: err,
                    });
                }
            }
        }

        tracing::debug!(
            added = outcome.added,
            duplicates = outcome.duplicates,
            errors = outcome.errors.len(),
            "ingestion run complete"
        );

        outcome
    }
}
