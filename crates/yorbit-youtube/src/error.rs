use thiserror::Error;

/// Errors returned by the YouTube Data API client.
#[derive(Debug, Error)]
pub enum YoutubeError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// A non-2xx HTTP response; renders as `"<status>: <body>"`.
    #[error("{status}: {body}")]
    Status { status: u16, body: String },

    /// A required argument was empty; raised before any network call.
    #[error("you must provide {0}")]
    MissingArgument(&'static str),

    /// The `/channels` lookup returned no matching channel.
    #[error("no channel found with id {0}")]
    ChannelNotFound(String),

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
