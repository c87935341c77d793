use thiserror::Error;

/// Failures that end a search. Each one is shown to the user through its
/// `Display` text; none of them is fatal.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("search API returned HTTP {status}")]
    Status { status: u16 },

    #[error("could not read search response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The transport succeeded but the API reported a problem in the body.
    #[error("{info}")]
    Api { code: String, info: String },
}
