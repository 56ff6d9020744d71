//! Error types for desk-resources.

/// Result type alias for resource client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error returned by every resource client operation.
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

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    pub(crate) fn decoding(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decoding(message.into()))
    }

    pub(crate) fn decoding_with(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind: ErrorKind::Decoding(message.into()),
            source: Some(Box::new(source)),
        }
    }

    /// The caller passed an argument that failed validation. No request was
    /// sent.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidArgument(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport(_))
    }

    pub fn is_decoding(&self) -> bool {
        matches!(self.kind, ErrorKind::Decoding(_))
    }

    /// The client could not be set up: bad site URL, missing credentials or
    /// an HTTP client that failed to build.
    pub fn is_config(&self) -> bool {
        matches!(self.kind, ErrorKind::Config(_))
    }

    /// The transport-layer error this error wraps, untouched. Present for
    /// every error that came out of `desk-api-client`, whatever its kind.
    pub fn transport_error(&self) -> Option<&desk_api_client::Error> {
        self.source.as_ref()?.downcast_ref::<desk_api_client::Error>()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    Decoding(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<desk_api_client::Error> for Error {
    fn from(err: desk_api_client::Error) -> Self {
        use desk_api_client::ErrorKind as ClientKind;

        let message = err.to_string();
        let kind = match err.kind {
            // A 2xx reply whose body is not JSON.
            ClientKind::Json(_) => ErrorKind::Decoding(message),
            ClientKind::Config(_) | ClientKind::InvalidUrl(_) => ErrorKind::Config(message),
            _ => ErrorKind::Transport(message),
        };
        Error {
            kind,
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            kind: ErrorKind::Decoding(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}
