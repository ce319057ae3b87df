use reqwest::StatusCode;
use thiserror::Error;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum ApiClientError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Configuration Error: Failed to build HTTP client: {0}")]
    HttpClientBuildFailed(#[source] reqwest::Error),

    #[error("Request Error: Invalid request URL: {0}")]
    InvalidUrl(#[from] UrlParseError),

    // Connection failures, timeouts and body read failures, as reported by reqwest.
    #[error(transparent)]
    RequestFailed(reqwest::Error),

    /// The server answered with a status of 400 or above.
    #[error("{status}: {body}")]
    Http {
        status: StatusCode,
        body: String, // raw, unparsed
    },

    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

impl ApiClientError {
    /// Status code of an HTTP application error, if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
