//! Transport responses and Desk error envelopes.

use std::time::Duration;

use serde_json::Value;

use crate::error::{Error, ErrorKind, Result};

/// A reply from the Desk API with its body already parsed as JSON.
///
/// Bodies are kept as generic JSON; typed decoding is left to the layer that
/// knows which envelope an endpoint returns.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    status: u16,
    body: Value,
}

impl Response {
    /// A `200 OK` response carrying `body`.
    pub fn new(body: Value) -> Self {
        Self::with_status(200, body)
    }

    /// A response with an explicit status code.
    pub fn with_status(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Parse a raw JSON document into a `200 OK` response.
    pub fn from_json(text: &str) -> Result<Self> {
        Self::from_parts(200, text)
    }

    /// Parse a raw body received with `status`.
    ///
    /// An empty (or whitespace-only) body parses to JSON `null`.
    pub fn from_parts(status: u16, text: &str) -> Result<Self> {
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(text)?
        };
        Ok(Self { status, body })
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The parsed JSON body.
    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_body(self) -> Value {
        self.body
    }

    /// The envelope's `success` flag, when the body carries one.
    pub fn success(&self) -> Option<bool> {
        self.body.get("success").and_then(Value::as_bool)
    }

    /// The envelope's `results` member (an object for single entities, an
    /// array for paginated lists).
    pub fn results(&self) -> Option<&Value> {
        self.body.get("results")
    }

    /// Human readable message of an error envelope (`message`, `error` or
    /// `errors`), if the body carries one.
    pub fn error_message(&self) -> Option<String> {
        envelope_message(&self.body)
    }

    /// Look up a nested member by a dotted path such as `results.topic.id`.
    ///
    /// Numeric segments index into arrays (`results.0.topic`).
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .filter(|segment| !segment.is_empty())
            .try_fold(&self.body, |value, segment| match value {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            })
    }
}

/// Turn a non-2xx reply into the matching error kind.
pub(crate) fn parse_error_response(
    status: u16,
    body: &str,
    retry_after: Option<Duration>,
) -> Error {
    if status == 429 {
        return Error::new(ErrorKind::RateLimited { retry_after });
    }

    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| envelope_message(&value))
        .unwrap_or_else(|| body.to_string());
    let sanitized = sanitize_error_message(&message);

    let kind = match status {
        401 => ErrorKind::Authentication(sanitized),
        403 => ErrorKind::Authorization(sanitized),
        404 => ErrorKind::NotFound(sanitized),
        400 | 409 | 422 => ErrorKind::Api {
            status,
            message: sanitized,
        },
        _ => ErrorKind::Http {
            status,
            message: sanitized,
        },
    };

    Error::new(kind)
}

/// Pull a human readable message out of a Desk error envelope.
///
/// Handles `{"message": ".."}`, `{"error": ".."}` and the validation form
/// `{"success": false, "errors": {"name": ["can't be blank"]}}`.
fn envelope_message(body: &Value) -> Option<String> {
    if let Some(message) = body.get("message").and_then(Value::as_str) {
        return Some(message.to_string());
    }
    if let Some(error) = body.get("error").and_then(Value::as_str) {
        return Some(error.to_string());
    }

    match body.get("errors")? {
        Value::Object(fields) => {
            let parts: Vec<String> = fields
                .iter()
                .map(|(field, detail)| match detail {
                    Value::Array(items) => {
                        let joined: Vec<String> = items.iter().map(render_scalar).collect();
                        format!("{field} {}", joined.join(", "))
                    }
                    other => format!("{field} {}", render_scalar(other)),
                })
                .collect();
            Some(parts.join("; "))
        }
        Value::Array(items) => Some(items.iter().map(render_scalar).collect::<Vec<_>>().join("; ")),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Sanitize an error message to prevent exposing sensitive data.
///
/// Redacts OAuth tokens/signatures and basic-auth headers echoed back by a
/// proxy, then truncates anything longer than 500 characters.
pub(crate) fn sanitize_error_message(message: &str) -> String {
    const MAX_LENGTH: usize = 500;

    let mut sanitized = message.to_string();

    let oauth_pattern =
        regex_lite::Regex::new(r"(oauth_(?:token|signature|consumer_key)=)[^&\s,]+")
            .expect("static regex");
    sanitized = oauth_pattern
        .replace_all(&sanitized, "${1}[REDACTED]")
        .to_string();

    let auth_header = regex_lite::Regex::new(r"(?i)(basic|bearer)\s+[A-Za-z0-9+/=._-]{8,}")
        .expect("static regex");
    sanitized = auth_header
        .replace_all(&sanitized, "${1} [REDACTED]")
        .to_string();

    if sanitized.len() > MAX_LENGTH {
        let mut cut = MAX_LENGTH;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized.truncate(cut);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}
