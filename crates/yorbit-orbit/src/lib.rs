//! HTTP client for the Orbit workspace API.
//!
//! Submits engagement records ("activities") to an Orbit workspace one at a
//! time. The workspace deduplicates on the activity `key`; a key collision
//! comes back as a structured error which this crate classifies as a
//! non-fatal duplicate. Batch ingestion tallies added/duplicate/error
//! outcomes per item without ever aborting the run.

pub mod activity;
pub mod client;
pub mod error;
pub mod ingest;

pub use activity::{MemberIdentity, NewActivity};
pub use client::OrbitClient;
pub use error::OrbitError;
pub use ingest::{IngestItemError, IngestOutcome};
