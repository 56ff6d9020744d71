//! Failures of a single Desk API call, from socket to status code.
//!
//! A non-2xx reply is classified by status first; 422 and any other reply
//! carrying a Desk error envelope become [`ErrorKind::Api`] with the
//! envelope's message flattened into one line.

use std::time::Duration;

pub type Result<T> = std::result::Result<T, Error>;

/// A failed Desk API call. `source` keeps the `reqwest`, `serde_json` or
/// `url` error it came from.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Desk throttled the site (HTTP 429).
    pub fn is_rate_limited(&self) -> bool {
        matches!(self.kind, ErrorKind::RateLimited { .. })
    }

    /// The site rejected the credentials (HTTP 401).
    pub fn is_auth_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication(_))
    }

    /// Desk has no record with the requested id (HTTP 404).
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound(_))
    }

    /// The `Retry-After` Desk sent with a 429, if any. Nothing is retried
    /// automatically.
    pub fn retry_after(&self) -> Option<Duration> {
        match &self.kind {
            ErrorKind::RateLimited { retry_after } => *retry_after,
            _ => None,
        }
    }

    /// Desk refused the submitted fields (HTTP 422), e.g. a blank topic name
    /// or an over-long customer name. The message lists every field error.
    pub fn is_validation_failure(&self) -> bool {
        matches!(self.kind, ErrorKind::Api { status: 422, .. })
    }

    /// HTTP status carried by this error, when the site answered at all.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Http { status, .. } | ErrorKind::Api { status, .. } => Some(*status),
            ErrorKind::RateLimited { .. } => Some(429),
            ErrorKind::Authentication(_) => Some(401),
            ErrorKind::Authorization(_) => Some(403),
            ErrorKind::NotFound(_) => Some(404),
            _ => None,
        }
    }
}

/// What went wrong with a Desk API call.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// A non-2xx status without a Desk error envelope.
    #[error("HTTP error: {status} {message}")]
    Http { status: u16, message: String },

    /// HTTP 429.
    #[error("Rate limited{}", retry_after.map(|d| format!(", retry after {:?}", d)).unwrap_or_default())]
    RateLimited { retry_after: Option<Duration> },

    /// HTTP 401: wrong password or revoked OAuth token.
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// HTTP 403: the agent lacks the role for this resource.
    #[error("Authorization error: {0}")]
    Authorization(String),

    /// HTTP 404: the id does not exist on this site.
    #[error("Not found: {0}")]
    NotFound(String),

    /// [`ClientConfig::timeout`](crate::ClientConfig::timeout) elapsed.
    #[error("Request timeout")]
    Timeout,

    /// The site could not be reached.
    #[error("Connection error: {0}")]
    Connection(String),

    /// A reply body that is not JSON, such as a maintenance page.
    #[error("JSON error: {0}")]
    Json(String),

    /// The site URL or a request path did not parse.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be built from the given settings.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A Desk error envelope, e.g. a 422 validation failure.
    #[error("Desk API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Anything `reqwest` reports that fits none of the above.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else if let Some(status) = err.status() {
            ErrorKind::Http {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            ErrorKind::Other(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::InvalidUrl(err.to_string()), err)
    }
}
