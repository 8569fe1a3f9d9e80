use thiserror::Error;

/// Errors returned by the Orbit API client.
#[derive(Debug, Error)]
pub enum OrbitError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The workspace already holds an activity with this key. Not a real
    /// failure — batch ingestion counts it instead of recording an error.
    #[error("duplicate activity key: {key}")]
    Duplicate { key: String },

    /// Any other non-2xx response; renders as `"<status>: <body>"`.
    #[error("{status}: {body}")]
    Status { status: u16, body: String },

    /// A required argument was empty; raised before any network call.
    #[error("you must provide {0}")]
    MissingArgument(&'static str),

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
