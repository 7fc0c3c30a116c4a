//! Centralized constants for the default endpoint, UA and configuration defaults.

/// Identifies this client to the service.
pub(crate) const USER_AGENT: &str = concat!("fcsapi-rs/", env!("CARGO_PKG_VERSION"));

/// FCS API v4 base (domain prefix and operation are appended).
pub(crate) const DEFAULT_BASE_URL: &str = "https://api-v4.fcsapi.com/";

/// Default validity window of generated tokens (1 hour).
pub(crate) const DEFAULT_TOKEN_EXPIRY_SECS: u64 = 3600;

/// Default overall request timeout.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout.
pub(crate) const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

pub(crate) const PLACEHOLDER_ACCESS_KEY: &str = "YOUR_ACCESS_KEY_HERE";
pub(crate) const PLACEHOLDER_PUBLIC_KEY: &str = "YOUR_PUBLIC_KEY_HERE";
