use crate::core::params::Params;
use crate::core::{Period, SortDirection};

/// Parameters for a `latest` request.
///
/// Converts from a symbol string, so `latest_price("FX:EURUSD")` works with defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LatestQuery {
    symbol: String,
    period: Period,
    kind: Option<String>,
    exchange: Option<String>,
    get_profile: bool,
}

impl LatestQuery {
    /// One or more comma-separated symbols, optionally exchange-prefixed (`FX:EURUSD,GBPUSD`).
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            period: Period::D1,
            kind: None,
            exchange: None,
            get_profile: false,
        }
    }

    #[must_use]
    pub const fn period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    /// The `type` filter (e.g. `forex`, `commodity`, `crypto`, `coin`).
    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    #[must_use]
    pub fn exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }

    /// Include profile information alongside prices.
    #[must_use]
    pub const fn with_profile(mut self, yes: bool) -> Self {
        self.get_profile = yes;
        self
    }

    pub(crate) fn to_params(&self) -> Params {
        let mut p = Params::new()
            .with("symbol", self.symbol.as_str())
            .with("period", self.period.as_str());
        p.insert_opt("type", self.kind.as_deref());
        p.insert_opt("exchange", self.exchange.as_deref());
        p.insert_flag("get_profile", self.get_profile);
        p
    }

    /// Stock variant: `get_profile` is always sent, as `0` or `1`.
    pub(crate) fn to_stock_params(&self) -> Params {
        let mut p = Params::new()
            .with("symbol", self.symbol.as_str())
            .with("period", self.period.as_str())
            .with("get_profile", self.get_profile);
        p.insert_opt("type", self.kind.as_deref());
        p.insert_opt("exchange", self.exchange.as_deref());
        p
    }
}

impl From<&str> for LatestQuery {
    fn from(symbol: &str) -> Self {
        Self::new(symbol)
    }
}

impl From<String> for LatestQuery {
    fn from(symbol: String) -> Self {
        Self::new(symbol)
    }
}

/// Parameters for a `history` request (OHLCV candles).
///
/// ```
/// use fcsapi_rs::{HistoryQuery, Period};
///
/// let q = HistoryQuery::new("FX:EURUSD")
///     .period(Period::H1)
///     .length(500)
///     .from("2024-01-01");
/// assert_eq!(q.symbol(), "FX:EURUSD");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryQuery {
    symbol: String,
    period: Period,
    length: u32,
    from: Option<String>,
    to: Option<String>,
    page: u32,
    is_chart: bool,
}

impl HistoryQuery {
    /// Default page length used by the service.
    pub const DEFAULT_LENGTH: u32 = 300;

    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            period: Period::D1,
            length: Self::DEFAULT_LENGTH,
            from: None,
            to: None,
            page: 1,
            is_chart: false,
        }
    }

    #[must_use]
    pub const fn period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    /// Number of candles per page (the service caps this at 10000).
    #[must_use]
    pub const fn length(mut self, length: u32) -> Self {
        self.length = length;
        self
    }

    /// Start date, `YYYY-MM-DD` or a Unix timestamp.
    #[must_use]
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// End date, `YYYY-MM-DD` or a Unix timestamp.
    #[must_use]
    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Ask for `[timestamp, o, h, l, c, v]` rows instead of objects.
    #[must_use]
    pub const fn chart_format(mut self, yes: bool) -> Self {
        self.is_chart = yes;
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub(crate) fn to_params(&self) -> Params {
        let mut p = Params::new()
            .with("symbol", self.symbol.as_str())
            .with("period", self.period.as_str())
            .with("length", self.length)
            .with("page", self.page);
        p.insert_opt("from", self.from.as_deref());
        p.insert_opt("to", self.to.as_deref());
        p.insert_flag("is_chart", self.is_chart);
        p
    }
}

impl From<&str> for HistoryQuery {
    fn from(symbol: &str) -> Self {
        Self::new(symbol)
    }
}

impl From<String> for HistoryQuery {
    fn from(symbol: String) -> Self {
        Self::new(symbol)
    }
}

/// Parameters for a `cross` request: every pair of a single base currency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrossRatesQuery {
    symbol: String,
    kind: Option<String>,
    period: Period,
    exchange: Option<String>,
    crossrates: bool,
    fallback: bool,
}

impl CrossRatesQuery {
    /// A single currency or token code (`USD`, `BTC`), not a pair.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            kind: None,
            period: Period::D1,
            exchange: None,
            crossrates: false,
            fallback: false,
        }
    }

    /// `forex` or `crypto`. Defaults to the domain the query is sent to.
    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    #[must_use]
    pub const fn period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    #[must_use]
    pub fn exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }

    /// Return pairwise cross rates between several symbols.
    #[must_use]
    pub const fn crossrates(mut self, yes: bool) -> Self {
        self.crossrates = yes;
        self
    }

    /// Fall back to other exchanges when a pair is missing.
    #[must_use]
    pub const fn fallback(mut self, yes: bool) -> Self {
        self.fallback = yes;
        self
    }

    pub(crate) fn to_params(&self, default_kind: &str) -> Params {
        let mut p = Params::new()
            .with("symbol", self.symbol.as_str())
            .with("type", self.kind.as_deref().unwrap_or(default_kind))
            .with("period", self.period.as_str());
        p.insert_opt("exchange", self.exchange.as_deref());
        p.insert_flag("crossrates", self.crossrates);
        p.insert_flag("fallback", self.fallback);
        p
    }
}

impl From<&str> for CrossRatesQuery {
    fn from(symbol: &str) -> Self {
        Self::new(symbol)
    }
}

/// Filters for sorted `advance` queries (top gainers, losers, most active, custom sorts).
///
/// Sent as `period`, `sort_by = <column>_<direction>`, `per_page`, `merge = latest`,
/// then the optional `type`, `exchange` and `country` filters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarketFilter {
    limit: u32,
    period: Period,
    kind: Option<String>,
    exchange: Option<String>,
    country: Option<String>,
}

impl Default for MarketFilter {
    fn default() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            period: Period::D1,
            kind: None,
            exchange: None,
            country: None,
        }
    }
}

impl MarketFilter {
    pub const DEFAULT_LIMIT: u32 = 20;

    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub const fn period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    /// The `type` filter (e.g. `forex`, `commodity`, `crypto`, `coin`).
    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    #[must_use]
    pub fn exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }

    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub(crate) fn with_default_kind(mut self, kind: &str) -> Self {
        if self.kind.is_none() {
            self.kind = Some(kind.to_string());
        }
        self
    }

    pub(crate) fn sorted_params(&self, column: &str, direction: SortDirection) -> Params {
        let mut p = Params::new()
            .with("period", self.period.as_str())
            .with("sort_by", format!("{column}_{direction}"))
            .with("per_page", self.limit)
            .with("merge", "latest");
        p.insert_opt("type", self.kind.as_deref());
        p.insert_opt("exchange", self.exchange.as_deref());
        p.insert_opt("country", self.country.as_deref());
        p
    }
}

/// `symbol`, `period` and an optional `exchange`: the technical-analysis shape.
pub(crate) fn symbol_period(symbol: &str, period: Period, exchange: Option<&str>) -> Params {
    let mut p = Params::new()
        .with("symbol", symbol)
        .with("period", period.as_str());
    p.insert_opt("exchange", exchange);
    p
}

/// `url[i]` entries plus an optional common `base`.
pub(crate) fn multi_url(urls: &[&str], base: Option<&str>) -> Params {
    let mut p = Params::new().with("url", urls);
    p.insert_opt("base", base);
    p
}
