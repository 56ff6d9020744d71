//! Credentials attached to every request made by [`DeskHttpClient`](crate::DeskHttpClient).

use crate::error::{Error, ErrorKind, Result};

/// How requests authenticate against a Desk site.
///
/// Secrets are redacted in Debug output.
#[derive(Clone)]
pub enum Credentials {
    /// HTTP basic authentication with an agent's email and password.
    Basic { email: String, password: String },
    /// A bearer access token obtained out of band.
    Bearer(String),
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Basic { email, .. } => f
                .debug_struct("Basic")
                .field("email", email)
                .field("password", &"[REDACTED]")
                .finish(),
            Credentials::Bearer(_) => f.debug_tuple("Bearer").field(&"[REDACTED]").finish(),
        }
    }
}

impl Credentials {
    pub fn basic(email: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials::Basic {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Credentials::Bearer(token.into())
    }

    /// Read credentials from `DESK_TOKEN`, or from `DESK_EMAIL` and
    /// `DESK_PASSWORD` when no token is set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let present = |name: &str| lookup(name).filter(|value| !value.is_empty());

        if let Some(token) = present("DESK_TOKEN") {
            return Ok(Credentials::Bearer(token));
        }

        match (present("DESK_EMAIL"), present("DESK_PASSWORD")) {
            (Some(email), Some(password)) => Ok(Credentials::Basic { email, password }),
            _ => Err(Error::new(ErrorKind::Config(
                "set DESK_TOKEN, or both DESK_EMAIL and DESK_PASSWORD".to_string(),
            ))),
        }
    }

    pub(crate) fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Credentials::Basic { email, password } => request.basic_auth(email, Some(password)),
            Credentials::Bearer(token) => request.bearer_auth(token),
        }
    }
}
