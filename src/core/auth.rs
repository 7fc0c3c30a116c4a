//! Credential derivation for each [`AuthMethod`].
//!
//! Everything here is a pure function of the configuration and a Unix timestamp.
//! The wall-clock variants read `chrono::Utc::now()` and delegate to the `_at`
//! variants, which tests and servers can call with a fixed `now`.

use crate::core::params::Params;
use crate::core::{AuthMethod, FcsConfig};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Parameter name for the access key.
pub const ACCESS_KEY_PARAM: &str = "access_key";
/// Parameter name for the token signature.
pub const TOKEN_PARAM: &str = "_token";
/// Parameter name for the token expiry timestamp.
pub const EXPIRY_PARAM: &str = "_expiry";
/// Parameter name for the public key accompanying a token.
pub const PUBLIC_KEY_PARAM: &str = "_public_key";

/// A signed, time-boxed credential that can be handed to an untrusted frontend.
///
/// The frontend attaches the three fields to its own requests and never sees the
/// private key. Serializes to `{"_token": .., "_expiry": .., "_public_key": ..}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Lowercase hex HMAC-SHA256 of `public_key + expiry`, keyed by the access key.
    #[serde(rename = "_token")]
    pub token: String,
    /// Unix timestamp (seconds) after which the server rejects the token.
    #[serde(rename = "_expiry")]
    pub expiry: i64,
    /// The account's public key.
    #[serde(rename = "_public_key")]
    pub public_key: String,
}

impl Token {
    /// Recomputes the signature with `access_key` and compares it to [`token`](Self::token).
    ///
    /// This is the check the remote service performs; it ignores expiry.
    pub fn verify(&self, access_key: &str) -> bool {
        let Ok(expected) = hex::decode(&self.token) else {
            return false;
        };
        let mut mac = new_mac(access_key);
        mac.update(signing_message(&self.public_key, self.expiry).as_bytes());
        mac.verify_slice(&expected).is_ok()
    }

    /// Like [`verify`](Self::verify), and additionally requires `expiry > now`.
    pub fn verify_at(&self, access_key: &str, now: i64) -> bool {
        self.expiry > now && self.verify(access_key)
    }

    /// `true` once `now` has reached the expiry timestamp.
    pub const fn is_expired_at(&self, now: i64) -> bool {
        now >= self.expiry
    }

    /// The three token fields as request parameters.
    pub fn to_params(&self) -> Params {
        Params::new()
            .with(TOKEN_PARAM, self.token.as_str())
            .with(EXPIRY_PARAM, self.expiry)
            .with(PUBLIC_KEY_PARAM, self.public_key.as_str())
    }
}

fn new_mac(key: &str) -> HmacSha256 {
    match HmacSha256::new_from_slice(key.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => unreachable!("HMAC-SHA256 accepts keys of any length"),
    }
}

fn signing_message(public_key: &str, expiry: i64) -> String {
    format!("{public_key}{expiry}")
}

/// Hex HMAC-SHA256 of `public_key + expiry` keyed by `access_key`.
pub fn sign(access_key: &str, public_key: &str, expiry: i64) -> String {
    let mut mac = new_mac(access_key);
    mac.update(signing_message(public_key, expiry).as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Current Unix time in seconds.
pub(crate) fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Mints a token valid for `config.token_expiry` seconds from `now`.
pub fn generate_token_at(config: &FcsConfig, now: i64) -> Token {
    let ttl = i64::try_from(config.token_expiry).unwrap_or(i64::MAX);
    let expiry = now.saturating_add(ttl);
    Token {
        token: sign(&config.access_key, &config.public_key, expiry),
        expiry,
        public_key: config.public_key.clone(),
    }
}

/// Mints a token valid for `config.token_expiry` seconds from the current time.
pub fn generate_token(config: &FcsConfig) -> Token {
    generate_token_at(config, unix_now())
}

/// Credential parameters for the active method, with tokens stamped at `now`.
pub fn auth_params_at(config: &FcsConfig, now: i64) -> Params {
    match config.auth_method {
        AuthMethod::AccessKey => {
            Params::new().with(ACCESS_KEY_PARAM, config.access_key.as_str())
        }
        AuthMethod::IpWhitelist => Params::new(),
        AuthMethod::Token => generate_token_at(config, now).to_params(),
    }
}

/// Credential parameters for the active method, with tokens stamped at the current time.
pub fn auth_params(config: &FcsConfig) -> Params {
    auth_params_at(config, unix_now())
}

/// Caller parameters overlaid with credential parameters; credentials win on collision.
pub(crate) fn merge_params(caller: Params, config: &FcsConfig, now: i64) -> Params {
    caller.merged_with(auth_params_at(config, now))
}
