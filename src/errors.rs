use http::{StatusCode, header::InvalidHeaderValue};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The API answered with a non-2xx status.
    #[error("{status}: {status_text}")]
    Http { status: u16, status_text: String },

    /// The request could not be sent or its body could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx body did not match the declared response shape.
    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Query parameter '{key}' is not a scalar value")]
    Query { key: String },

    #[error("Invalid secret: {0}")]
    InvalidSecret(#[from] InvalidHeaderValue),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Invalid amount: {0}")]
    Amount(String),
}

impl Error {
    pub(crate) fn from_status(status: StatusCode) -> Self {
        Error::Http {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    pub fn is_http(&self) -> bool {
        matches!(self, Error::Http { .. })
    }

    /// The HTTP status of a non-2xx response, if this error is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
