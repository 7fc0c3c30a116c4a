//! Public client surface + builder.
//! Request execution lives in `request`, defaults in `constants`.

pub(crate) mod constants;
mod request;

use crate::core::auth::{self, Token};
use crate::core::{FcsConfig, FcsError, RequestOutcome};
use crate::{Crypto, Forex, Stock};
use constants::{DEFAULT_BASE_URL, USER_AGENT};
use reqwest::Client;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;
use url::Url;

/// The reqwest client together with the connect timeout it was built with.
#[derive(Debug)]
struct HttpSlot {
    client: Client,
    connect_timeout: u64,
}

/// Client for the FCS API.
///
/// Holds the configuration, the HTTP client and the outcome of the most recent
/// request. Cloning is cheap; clones share configuration and the last-outcome slot.
///
/// # Example
///
/// ```no_run
/// # use fcsapi_rs::{FcsClient, FcsConfig};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = FcsClient::new(FcsConfig::with_access_key("YOUR_KEY"))?;
///
/// let outcome = client.execute("forex/latest", [("symbol", "FX:EURUSD")]).await;
/// match outcome.payload() {
///     Some(data) => println!("{data}"),
///     None => eprintln!("request failed: {}", outcome.error_message().unwrap_or_default()),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FcsClient {
    base_url: Url,
    user_agent: String,
    config: Arc<RwLock<FcsConfig>>,
    http: Arc<RwLock<HttpSlot>>,
    last: Arc<RwLock<RequestOutcome>>,
}

// Every write is a single assignment, so a poisoned lock still holds consistent data.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

fn build_http(user_agent: &str, connect_timeout: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .connect_timeout(Duration::from_secs(connect_timeout))
        .redirect(reqwest::redirect::Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .build()
}

impl FcsClient {
    /// Create a new builder.
    pub fn builder() -> FcsClientBuilder {
        FcsClientBuilder::default()
    }

    /// Client for the default endpoint with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: FcsConfig) -> Result<Self, FcsError> {
        Self::builder().config(config).build()
    }

    /// Shortcut for access-key authentication.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_access_key(access_key: impl Into<String>) -> Result<Self, FcsError> {
        Self::new(FcsConfig::with_access_key(access_key))
    }

    /* ---------------- Domains ---------------- */

    /// Forex and commodity endpoints (`forex/...`).
    pub const fn forex(&self) -> Forex<'_> {
        Forex::new(self)
    }

    /// Cryptocurrency endpoints (`crypto/...`).
    pub const fn crypto(&self) -> Crypto<'_> {
        Crypto::new(self)
    }

    /// Stock, index and fundamentals endpoints (`stock/...`).
    pub const fn stock(&self) -> Stock<'_> {
        Stock::new(self)
    }

    /* ---------------- Configuration ---------------- */

    /// A snapshot of the current configuration.
    pub fn config(&self) -> FcsConfig {
        read(&self.config).clone()
    }

    /// Replaces the configuration used by subsequent requests.
    pub fn set_config(&self, config: FcsConfig) {
        *write(&self.config) = config;
    }

    /// Adjusts the configuration in place.
    ///
    /// ```
    /// # use fcsapi_rs::{AuthMethod, FcsClient, FcsConfig};
    /// let client = FcsClient::new(FcsConfig::with_access_key("k")).unwrap();
    /// client.update_config(|cfg| {
    ///     cfg.auth_method = AuthMethod::IpWhitelist;
    ///     cfg.connect_timeout = 10;
    /// });
    /// assert_eq!(client.config().auth_method, AuthMethod::IpWhitelist);
    /// ```
    pub fn update_config(&self, f: impl FnOnce(&mut FcsConfig)) {
        let mut guard = write(&self.config);
        f(&mut *guard);
    }

    /// Sets the overall request timeout in seconds.
    pub fn set_timeout(&self, secs: u64) -> &Self {
        self.update_config(|cfg| cfg.timeout = secs);
        self
    }

    /// The base URL endpoints are joined onto.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /* ---------------- Tokens ---------------- */

    /// Mints a token from the current configuration for distribution to a frontend.
    ///
    /// The frontend forwards `_token`, `_expiry` and `_public_key` as request
    /// parameters and never sees the access key. Works whatever the active method is,
    /// as long as the access and public keys are set.
    pub fn generate_token(&self) -> Token {
        auth::generate_token(&read(&self.config))
    }

    /* ---------------- Last outcome ---------------- */

    /// The most recent outcome, or the default "no call yet" outcome.
    ///
    /// With concurrent requests this is whichever completed last; prefer the value
    /// returned by [`execute`](Self::execute).
    pub fn last_outcome(&self) -> RequestOutcome {
        read(&self.last).clone()
    }

    /// Payload of the last request (its `response` field), if it succeeded.
    pub fn payload(&self) -> Option<serde_json::Value> {
        read(&self.last).payload().cloned()
    }

    /// Whether the last request succeeded.
    pub fn is_success(&self) -> bool {
        read(&self.last).is_success()
    }

    /// `None` if the last request succeeded; otherwise its error message.
    pub fn error_message(&self) -> Option<String> {
        read(&self.last).error_message().map(ToString::to_string)
    }

    /* -------- internal helpers used by `request` -------- */

    fn store_outcome(&self, outcome: &RequestOutcome) {
        *write(&self.last) = outcome.clone();
    }

    /// The HTTP client for `connect_timeout`, rebuilt if the setting changed.
    fn http_for(&self, connect_timeout: u64) -> Result<Client, reqwest::Error> {
        {
            let slot = read(&self.http);
            if slot.connect_timeout == connect_timeout {
                return Ok(slot.client.clone());
            }
        }
        let client = build_http(&self.user_agent, connect_timeout)?;
        *write(&self.http) = HttpSlot {
            client: client.clone(),
            connect_timeout,
        };
        Ok(client)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Debug, Default)]
pub struct FcsClientBuilder {
    config: Option<FcsConfig>,
    base_url: Option<Url>,
    user_agent: Option<String>,
}

impl FcsClientBuilder {
    /// Configuration to start from. Default: [`FcsConfig::default`].
    #[must_use]
    pub fn config(mut self, config: FcsConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the API base (e.g., `https://api-v4.fcsapi.com/`).
    /// A trailing slash is added if missing so endpoints nest under the base path.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL cannot be parsed or the HTTP client
    /// cannot be constructed.
    pub fn build(self) -> Result<FcsClient, FcsError> {
        let mut base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let config = self.config.unwrap_or_default();
        let user_agent = self.user_agent.unwrap_or_else(|| USER_AGENT.to_string());
        let client = build_http(&user_agent, config.connect_timeout)?;

        Ok(FcsClient {
            base_url,
            user_agent,
            http: Arc::new(RwLock::new(HttpSlot {
                client,
                connect_timeout: config.connect_timeout,
            })),
            config: Arc::new(RwLock::new(config)),
            last: Arc::new(RwLock::new(RequestOutcome::default())),
        })
    }
}
