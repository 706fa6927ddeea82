use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// A network, connect, or read failure during either HTTP round trip.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response declared gzip content-encoding but the stream was malformed.
    #[error("gzip decoding error: {0}")]
    Decode(#[from] std::io::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// An extraction pattern supplied to the builder failed to compile.
    #[error("Invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The builder was given an unusable configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The request body could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No canary token was found in the bootstrap page, its cookies, or its script config.
    #[error("cannot extract canary token (bootstrap status {status})")]
    TokenMissing {
        /// HTTP status of the bootstrap response.
        status: u16,
    },

    /// An extracted token cannot be sent as an HTTP header value (e.g. a decoded control character).
    #[error("extracted {0} token is not a valid header value")]
    InvalidToken(&'static str),

    /// The availability API answered with an error object.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// The availability API answered with a body of no recognized shape.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl ProbeError {
    /// Human-readable failure reason, as surfaced in a `Failed` result.
    ///
    /// Upstream errors yield the bare error code (or raw body) so callers can
    /// match on it; every other variant yields its display form.
    pub fn reason(&self) -> String {
        match self {
            ProbeError::Upstream(code) => code.clone(),
            other => other.to_string(),
        }
    }

    /// True for failures that happened on the wire rather than in the payload.
    pub fn is_transport(&self) -> bool {
        matches!(self, ProbeError::Http(_) | ProbeError::Decode(_))
    }
}
