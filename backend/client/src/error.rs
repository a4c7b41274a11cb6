use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("API request failed: {0}")]
    UpstreamUnavailable(String),

    #[error("API responded {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },

    #[error("Unreadable API response: {0}")]
    Decode(String),

    #[error("Invalid API url {0}")]
    InvalidBaseUrl(String),

    #[error("HTTP client setup failed: {0}")]
    Setup(String),
}

impl ClientError {
    /// HTTP status a front end should answer with when relaying this error.
    pub fn status(&self) -> u16 {
        match self {
            ClientError::NotFound(_) => 404,
            ClientError::InvalidRequest(_) => 400,
            ClientError::UpstreamUnavailable(_) => 503,
            _ => 500,
        }
    }
}
