//! fcsapi-rs: ergonomic client for the FCS market data API.
//!
//! Every request is a form-encoded POST to `<base>/<endpoint>`. The client merges the
//! credentials of the configured [`AuthMethod`] into the caller's parameters and
//! normalizes whatever comes back (success, API error, unparsable body or transport
//! failure) into a [`RequestOutcome`]. It never panics and never errors out of
//! [`FcsClient::execute`]; use [`FcsClient::request`] for a `Result`.
//!
//! ```no_run
//! use fcsapi_rs::{FcsClient, FcsConfig, HistoryQuery, Period};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), fcsapi_rs::FcsError> {
//! // Signed tokens keep the private key off the wire.
//! let client = FcsClient::new(FcsConfig::with_token("PRIVATE", "PUBLIC", 3600))?;
//!
//! let outcome = client.forex().latest_price("FX:EURUSD").await;
//! if outcome.is_success() {
//!     println!("{:?}", outcome.payload());
//! } else {
//!     eprintln!("{} ({})", outcome.error_message().unwrap_or_default(), outcome.status_code);
//! }
//!
//! let candles = client
//!     .crypto()
//!     .history(HistoryQuery::new("BINANCE:BTCUSDT").period(Period::H1))
//!     .await;
//! # let _ = candles;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod crypto;
pub mod forex;
pub mod stock;

pub use crate::core::auth::{auth_params, auth_params_at, generate_token, generate_token_at};
pub use crate::core::{
    AuthMethod, CrossRatesQuery, FcsClient, FcsClientBuilder, FcsConfig, FcsError,
    HistoryQuery, LatestQuery, MarketFilter, ParamValue, Params, Period, ReportDuration,
    RequestOutcome, SortDirection, StatementFormat, Token,
};
pub use crypto::Crypto;
pub use forex::Forex;
pub use stock::Stock;
