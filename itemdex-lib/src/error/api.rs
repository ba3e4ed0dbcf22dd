//! API error types

/// Errors that can occur while fetching published data.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP error response from the data host.
    #[error("HTTP {status} fetching {url}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// The URL that was requested.
        url: String,
    },

    /// Network error during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Invalid URL provided.
    #[error("Invalid URL `{url}`: {message}")]
    InvalidUrl {
        /// The offending URL.
        url: String,
        /// Why it was rejected.
        message: String,
    },
}

impl ApiError {
    /// Creates a new HTTP error.
    pub fn http(status: u16, url: impl Into<String>) -> Self {
        Self::Http {
            status,
            url: url.into(),
        }
    }

    /// Creates a new invalid-URL error.
    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if this error is potentially retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http { status, .. } => matches!(status, 429 | 500 | 502 | 503 | 504),
            Self::Network(_) => true,
            Self::InvalidUrl { .. } => false,
        }
    }
}
