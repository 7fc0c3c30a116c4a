//! Normalized result of one request.

use crate::core::FcsError;
use serde_json::Value;

/// Message used when the body could not be decoded as JSON.
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON response";
/// Fallback error message when a failed response carries no `msg`.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";
/// Prefix of messages describing transport failures.
pub(crate) const TRANSPORT_ERROR_PREFIX: &str = "Transport error: ";

/// The outcome of a single request, combining transport status and the server's
/// own success indicator.
///
/// `Default` is the "no call yet" state: not succeeded, status code 0, no body.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOutcome {
    /// `true` iff the call completed, the body was JSON, and its `status` was affirmative.
    pub succeeded: bool,
    /// The observed HTTP status, or 0 when no response was received.
    pub status_code: u16,
    /// Server `msg`, or a description of the local failure.
    pub message: Option<String>,
    /// The decoded JSON body, verbatim. `None` when the call failed before decoding.
    pub body: Option<Value>,
}

impl RequestOutcome {
    /// Outcome for a request rejected before anything was sent.
    pub(crate) fn local_failure(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            status_code: 0,
            message: Some(message.into()),
            body: None,
        }
    }

    /// Outcome for a request that never produced an HTTP status.
    pub(crate) fn transport_failure(detail: impl std::fmt::Display) -> Self {
        Self::local_failure(format!("{TRANSPORT_ERROR_PREFIX}{detail}"))
    }

    /// Classifies a completed HTTP exchange.
    ///
    /// A body that is not JSON (including the literal `null`) is a decoding failure.
    /// Otherwise the body is adopted as-is and success is read from its `status` field,
    /// regardless of the HTTP status code.
    pub(crate) fn from_response(status_code: u16, text: &str) -> Self {
        let body = match serde_json::from_str::<Value>(text) {
            Ok(Value::Null) | Err(_) => {
                return Self {
                    succeeded: false,
                    status_code,
                    message: Some(INVALID_JSON_MESSAGE.to_string()),
                    body: None,
                };
            }
            Ok(v) => v,
        };

        let succeeded = body.get("status").is_some_and(is_affirmative);
        let message = body
            .get("msg")
            .and_then(Value::as_str)
            .map(ToString::to_string);

        Self {
            succeeded,
            status_code,
            message,
            body: Some(body),
        }
    }

    /// Whether the request succeeded (same as [`succeeded`](Self::succeeded)).
    pub const fn is_success(&self) -> bool {
        self.succeeded
    }

    /// The actual market data: the body's `response` field, or the whole body when
    /// it has none. `None` if the request failed.
    pub fn payload(&self) -> Option<&Value> {
        if !self.succeeded {
            return None;
        }
        let body = self.body.as_ref()?;
        Some(body.get("response").unwrap_or(body))
    }

    /// `None` on success; otherwise the failure message, or `"Unknown error"`.
    pub fn error_message(&self) -> Option<&str> {
        if self.succeeded {
            return None;
        }
        Some(self.message.as_deref().unwrap_or(UNKNOWN_ERROR_MESSAGE))
    }

    /// Converts the outcome into a `Result` carrying the payload.
    ///
    /// # Errors
    ///
    /// - [`FcsError::Transport`] when no HTTP status was obtained.
    /// - [`FcsError::InvalidJson`] when the body was not JSON.
    /// - [`FcsError::Api`] when the server reported a failure.
    pub fn into_result(self) -> Result<Value, FcsError> {
        if self.succeeded {
            let mut body = self.body.unwrap_or(Value::Null);
            return Ok(match body.get_mut("response") {
                Some(response) => response.take(),
                None => body,
            });
        }

        let message = self
            .message
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());
        if self.status_code == 0 {
            Err(FcsError::Transport(message))
        } else if self.body.is_none() {
            Err(FcsError::InvalidJson {
                status: self.status_code,
            })
        } else {
            Err(FcsError::Api {
                status: self.status_code,
                message,
            })
        }
    }
}

/// Only the JSON literal `true` counts; `1` and `"true"` do not.
const fn is_affirmative(v: &Value) -> bool {
    matches!(v, Value::Bool(true))
}
