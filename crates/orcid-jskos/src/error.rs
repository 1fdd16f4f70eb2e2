//! Error types for the ORCID JSKOS service.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! Clean absence (no credentials, unknown profile) is modelled with `Option`, never
//! with these types.

/// Errors from the upstream HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// The token endpoint refused the client credentials.
    #[error("Token exchange rejected with status {status}")]
    TokenRejected {
        /// HTTP status code
        status: u16,
    },

    /// Unexpected HTTP status from the profile API
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Form encoding error for the token request
    #[error("Failed to encode form: {0}")]
    Form(#[from] serde_urlencoded::ser::Error),

    /// A header value could not be built (e.g. a token with control characters)
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl ClientError {
    /// Create an unexpected status error.
    #[must_use]
    pub fn unexpected_status(status: u16, message: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            message: message.into(),
        }
    }

    /// HTTP status of the failed exchange, if the upstream answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::TokenRejected { status } | Self::UnexpectedStatus { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

/// Errors from query dispatch.
#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    /// The upstream API could not be reached or answered with a fault.
    #[error("Upstream unavailable: {0}")]
    Upstream(#[from] ClientError),
}

impl ServiceError {
    /// Convert to a message suitable for API clients.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Upstream(ClientError::TokenRejected { .. }) => {
                "ORCID rejected the configured client credentials.".to_string()
            }
            Self::Upstream(err) => format!("ORCID API unavailable: {err}"),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for dispatch operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
