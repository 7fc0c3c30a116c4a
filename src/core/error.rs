use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Request execution itself never fails with this type: network, decoding and
/// server-reported failures are carried by [`RequestOutcome`](crate::RequestOutcome).
/// `FcsError` is produced when building a client, parsing configuration values, or
/// when a caller opts into the `Result`-based mode via
/// [`RequestOutcome::into_result`](crate::RequestOutcome::into_result).
#[derive(Debug, Error)]
pub enum FcsError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The request never produced an HTTP status (DNS, connect, TLS or timeout failure).
    #[error("{0}")]
    Transport(String),

    /// The server answered but the body was not a JSON document.
    #[error("Invalid JSON response (HTTP {status})")]
    InvalidJson {
        /// The HTTP status code observed.
        status: u16,
    },

    /// The server answered with well-formed JSON whose `status` indicator was not affirmative.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// The HTTP status code observed.
        status: u16,
        /// The `msg` supplied by the server, or a generic fallback.
        message: String,
    },

    /// An authentication method name outside `access_key`, `ip_whitelist` and `token`.
    #[error("unknown auth method: {0}")]
    InvalidAuthMethod(String),

    /// A period string that is not one of the supported candle periods.
    #[error("unknown period: {0}")]
    InvalidPeriod(String),

    /// Configuration rejected by [`FcsConfig::validate`](crate::FcsConfig::validate).
    #[error("invalid configuration: {0}")]
    Config(String),
}
