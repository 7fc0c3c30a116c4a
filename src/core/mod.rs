//! Core components of the `fcsapi-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`FcsClient`] and its builder.
//! - Configuration ([`FcsConfig`], [`AuthMethod`]) and credential derivation ([`auth`]).
//! - The normalized [`RequestOutcome`] and the [`FcsError`] type.
//! - Request parameters and the query types shared by all domains.

/// Credential derivation and signed tokens.
pub mod auth;
/// The main client (`FcsClient`), builder, and request execution.
pub mod client;
/// Authentication method and client configuration.
pub mod config;
/// The primary error type (`FcsError`) for the crate.
pub mod error;
/// Shared enums used across the domain modules (e.g., `Period`).
pub mod models;
/// The normalized result of a request.
pub mod outcome;
/// Ordered request parameters and form encoding.
pub mod params;
/// Query builders shared by the forex, crypto and stock handles.
pub mod queries;

// convenient re-exports so most code can just `use crate::core::FcsClient`
pub use auth::Token;
pub use client::{FcsClient, FcsClientBuilder};
pub use config::{AuthMethod, FcsConfig};
pub use error::FcsError;
pub use models::{Period, ReportDuration, SortDirection, StatementFormat};
pub use outcome::RequestOutcome;
pub use params::{ParamValue, Params};
pub use queries::{CrossRatesQuery, HistoryQuery, LatestQuery, MarketFilter};
