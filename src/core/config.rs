//! Client configuration: authentication method, keys and timeouts.

use crate::core::FcsError;
use crate::core::client::constants::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_EXPIRY_SECS,
    PLACEHOLDER_ACCESS_KEY, PLACEHOLDER_PUBLIC_KEY,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How requests prove authorization to the remote service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    /// Send the private key as the `access_key` parameter.
    #[default]
    AccessKey,
    /// Send no credentials; the calling IP must be whitelisted on the account.
    IpWhitelist,
    /// Send a short-lived HMAC token (`_token`, `_expiry`, `_public_key`).
    Token,
}

impl AuthMethod {
    /// The wire name of the method (`access_key`, `ip_whitelist` or `token`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AccessKey => "access_key",
            Self::IpWhitelist => "ip_whitelist",
            Self::Token => "token",
        }
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthMethod {
    type Err = FcsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "access_key" => Ok(Self::AccessKey),
            "ip_whitelist" => Ok(Self::IpWhitelist),
            "token" => Ok(Self::Token),
            other => Err(FcsError::InvalidAuthMethod(other.to_string())),
        }
    }
}

/// Configuration read by [`FcsClient`](crate::FcsClient) on every request.
///
/// The fields are public so a configuration can be adjusted in place between calls,
/// either before handing it to the client builder or through
/// [`FcsClient::update_config`](crate::FcsClient::update_config).
#[derive(Clone, PartialEq, Eq)]
pub struct FcsConfig {
    /// Active authentication method.
    pub auth_method: AuthMethod,
    /// Private API key. Used by [`AuthMethod::AccessKey`] and as the HMAC key for [`AuthMethod::Token`].
    pub access_key: String,
    /// Public key, sent alongside generated tokens.
    pub public_key: String,
    /// Validity window of generated tokens, in seconds.
    pub token_expiry: u64,
    /// Overall request timeout, in seconds.
    pub timeout: u64,
    /// Connection establishment timeout, in seconds.
    pub connect_timeout: u64,
}

impl Default for FcsConfig {
    fn default() -> Self {
        Self {
            auth_method: AuthMethod::AccessKey,
            access_key: PLACEHOLDER_ACCESS_KEY.to_string(),
            public_key: PLACEHOLDER_PUBLIC_KEY.to_string(),
            token_expiry: DEFAULT_TOKEN_EXPIRY_SECS,
            timeout: DEFAULT_TIMEOUT_SECS,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for FcsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FcsConfig")
            .field("auth_method", &self.auth_method)
            .field("access_key", &"<redacted>")
            .field("public_key", &self.public_key)
            .field("token_expiry", &self.token_expiry)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl FcsConfig {
    /// Access-key authentication with the given private key.
    pub fn with_access_key(access_key: impl Into<String>) -> Self {
        Self {
            auth_method: AuthMethod::AccessKey,
            access_key: access_key.into(),
            ..Self::default()
        }
    }

    /// IP-whitelist authentication. No key is sent.
    pub fn with_ip_whitelist() -> Self {
        Self {
            auth_method: AuthMethod::IpWhitelist,
            ..Self::default()
        }
    }

    /// Token authentication. The private key stays on this side and only signs tokens.
    pub fn with_token(
        access_key: impl Into<String>,
        public_key: impl Into<String>,
        token_expiry: u64,
    ) -> Self {
        Self {
            auth_method: AuthMethod::Token,
            access_key: access_key.into(),
            public_key: public_key.into(),
            token_expiry,
            ..Self::default()
        }
    }

    /// Sets the overall request timeout in seconds.
    #[must_use]
    pub const fn timeout(mut self, secs: u64) -> Self {
        self.timeout = secs;
        self
    }

    /// Sets the connect timeout in seconds.
    #[must_use]
    pub const fn connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout = secs;
        self
    }

    /// Checks that the keys required by the active method are present and that
    /// all durations are positive.
    ///
    /// Requests never call this: a misconfigured client still sends the request and
    /// the server's rejection surfaces as a failed outcome. Call it when a local
    /// error is preferable.
    ///
    /// # Errors
    ///
    /// Returns [`FcsError::Config`] describing the first problem found.
    pub fn validate(&self) -> Result<(), FcsError> {
        let needs_access_key = matches!(self.auth_method, AuthMethod::AccessKey | AuthMethod::Token);
        if needs_access_key && self.access_key.trim().is_empty() {
            return Err(FcsError::Config(format!(
                "access_key is required for the {} method",
                self.auth_method
            )));
        }
        if self.auth_method == AuthMethod::Token {
            if self.public_key.trim().is_empty() {
                return Err(FcsError::Config(
                    "public_key is required for the token method".into(),
                ));
            }
            if self.token_expiry == 0 {
                return Err(FcsError::Config("token_expiry must be positive".into()));
            }
        }
        if self.timeout == 0 {
            return Err(FcsError::Config("timeout must be positive".into()));
        }
        if self.connect_timeout == 0 {
            return Err(FcsError::Config("connect_timeout must be positive".into()));
        }
        Ok(())
    }
}
