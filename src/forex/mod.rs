//! Forex and commodity endpoints (`forex/...`).

use crate::core::queries::{multi_url, symbol_period};
use crate::core::{
    CrossRatesQuery, FcsClient, HistoryQuery, LatestQuery, MarketFilter, Params, Period,
    RequestOutcome, SortDirection,
};

const BASE: &str = "forex/";
const DEFAULT_KIND: &str = "forex";

/// Handle for the forex endpoints, obtained from [`FcsClient::forex`].
///
/// Every method performs one request and returns its [`RequestOutcome`], which is also
/// recorded as the client's last outcome.
///
/// ```no_run
/// # use fcsapi_rs::{FcsClient, HistoryQuery, Period};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = FcsClient::with_access_key("YOUR_KEY")?;
/// let forex = client.forex();
///
/// let latest = forex.latest_price("FX:EURUSD").await;
/// let candles = forex
///     .history(HistoryQuery::new("EURUSD").period(Period::H1).length(48))
///     .await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Forex<'a> {
    client: &'a FcsClient,
}

impl<'a> Forex<'a> {
    pub const fn new(client: &'a FcsClient) -> Self {
        Self { client }
    }

    async fn call(&self, operation: &str, params: Params) -> RequestOutcome {
        self.client
            .execute(&format!("{BASE}{operation}"), params)
            .await
    }

    /* ---------------- Symbols ---------------- */

    /// All forex symbols, filtered by `type` (`forex`, `commodity`), `sub_type`
    /// (`spot`, `synthetic`) and exchange (`FX`, `ONA`, `SFO`, `FCM`).
    pub async fn symbols_list(
        &self,
        kind: Option<&str>,
        sub_type: Option<&str>,
        exchange: Option<&str>,
    ) -> RequestOutcome {
        let mut p = Params::new();
        p.insert_opt("type", kind);
        p.insert_opt("sub_type", sub_type);
        p.insert_opt("exchange", exchange);
        self.call("list", p).await
    }

    /// Commodity symbols (gold, silver, oil, ...).
    pub async fn commodity_symbols(&self) -> RequestOutcome {
        self.symbols_list(Some("commodity"), None, None).await
    }

    /// Search symbols by name or code (`EUR`, `gold`).
    pub async fn search(
        &self,
        query: &str,
        kind: Option<&str>,
        exchange: Option<&str>,
    ) -> RequestOutcome {
        let mut p = Params::new().with("search", query);
        p.insert_opt("type", kind);
        p.insert_opt("exchange", exchange);
        self.call("search", p).await
    }

    /* ---------------- Prices ---------------- */

    /// Latest prices for one or more symbols.
    pub async fn latest_price(&self, query: impl Into<LatestQuery>) -> RequestOutcome {
        self.call("latest", query.into().to_params()).await
    }

    /// Latest prices for every symbol of an exchange.
    pub async fn all_prices(
        &self,
        exchange: &str,
        period: Period,
        kind: Option<&str>,
    ) -> RequestOutcome {
        let mut p = Params::new()
            .with("exchange", exchange)
            .with("period", period.as_str());
        p.insert_opt("type", kind);
        self.call("latest", p).await
    }

    /// Commodity prices; all commodities when `symbol` is `None`.
    pub async fn commodities(&self, symbol: Option<&str>, period: Period) -> RequestOutcome {
        let mut p = Params::new()
            .with("type", "commodity")
            .with("period", period.as_str());
        p.insert_opt("symbol", symbol);
        self.call("latest", p).await
    }

    /// Converts `amount` of `from` into `to` (`EUR` → `USD`).
    pub async fn convert(
        &self,
        from: &str,
        to: &str,
        amount: f64,
        kind: Option<&str>,
    ) -> RequestOutcome {
        let mut p = Params::new()
            .with("pair1", from)
            .with("pair2", to)
            .with("amount", amount);
        p.insert_opt("type", kind);
        self.call("converter", p).await
    }

    /// Prices of a single base currency against all others (`USD`, not `USDJPY`).
    /// `kind` defaults to `forex`.
    pub async fn base_prices(
        &self,
        symbol: &str,
        kind: Option<&str>,
        exchange: Option<&str>,
        fallback: bool,
    ) -> RequestOutcome {
        let mut p = Params::new()
            .with("symbol", symbol)
            .with("type", kind.unwrap_or(DEFAULT_KIND));
        p.insert_opt("exchange", exchange);
        p.insert_flag("fallback", fallback);
        self.call("base_latest", p).await
    }

    /// OHLC cross rates of a base currency.
    pub async fn cross_rates(&self, query: impl Into<CrossRatesQuery>) -> RequestOutcome {
        self.call("cross", query.into().to_params(DEFAULT_KIND)).await
    }

    /// Historical candles.
    pub async fn history(&self, query: impl Into<HistoryQuery>) -> RequestOutcome {
        self.call("history", query.into().to_params()).await
    }

    /* ---------------- Reference data ---------------- */

    /// Currency details (name, country, central bank). Takes currency codes, not pairs.
    pub async fn profile(&self, symbol: &str) -> RequestOutcome {
        self.call("profile", Params::new().with("symbol", symbol)).await
    }

    /// Available exchanges / data sources.
    pub async fn exchanges(&self, kind: Option<&str>, sub_type: Option<&str>) -> RequestOutcome {
        let mut p = Params::new();
        p.insert_opt("type", kind);
        p.insert_opt("sub_type", sub_type);
        self.call("exchanges", p).await
    }

    /// Free-form `advance` query (filters, sorting, pagination, merging).
    pub async fn advanced(&self, params: impl Into<Params>) -> RequestOutcome {
        self.call("advance", params.into()).await
    }

    /* ---------------- Technical analysis ---------------- */

    /// EMA and SMA values.
    pub async fn moving_averages(
        &self,
        symbol: &str,
        period: Period,
        exchange: Option<&str>,
    ) -> RequestOutcome {
        self.call("ma_avg", symbol_period(symbol, period, exchange))
            .await
    }

    /// RSI, MACD, stochastic, ADX, ATR and friends.
    pub async fn indicators(
        &self,
        symbol: &str,
        period: Period,
        exchange: Option<&str>,
    ) -> RequestOutcome {
        self.call("indicators", symbol_period(symbol, period, exchange))
            .await
    }

    /// Classic, Fibonacci, Camarilla, Woodie and Demark pivots.
    pub async fn pivot_points(
        &self,
        symbol: &str,
        period: Period,
        exchange: Option<&str>,
    ) -> RequestOutcome {
        self.call("pivot_points", symbol_period(symbol, period, exchange))
            .await
    }

    /// Historical highs/lows, percentage changes and volatility.
    pub async fn performance(&self, symbol: &str, exchange: Option<&str>) -> RequestOutcome {
        let mut p = Params::new().with("symbol", symbol);
        p.insert_opt("exchange", exchange);
        self.call("performance", p).await
    }

    /// Economic calendar events, filtered by currency, country and date range.
    pub async fn economy_calendar(
        &self,
        symbol: Option<&str>,
        country: Option<&str>,
        from: Option<&str>,
        to: Option<&str>,
    ) -> RequestOutcome {
        let mut p = Params::new();
        p.insert_opt("symbol", symbol);
        p.insert_opt("country", country);
        p.insert_opt("from", from);
        p.insert_opt("to", to);
        self.call("economy_cal", p).await
    }

    /* ---------------- Movers ---------------- */

    /// Largest percentage gains. `type` defaults to `forex`.
    pub async fn top_gainers(&self, filter: MarketFilter) -> RequestOutcome {
        self.sorted_data("active.chp", SortDirection::Desc, filter)
            .await
    }

    /// Largest percentage losses. `type` defaults to `forex`.
    pub async fn top_losers(&self, filter: MarketFilter) -> RequestOutcome {
        self.sorted_data("active.chp", SortDirection::Asc, filter)
            .await
    }

    /// Highest volume. `type` defaults to `forex`.
    pub async fn most_active(&self, filter: MarketFilter) -> RequestOutcome {
        self.sorted_data("active.v", SortDirection::Desc, filter)
            .await
    }

    /// Sorted `advance` query on any column (`active.c`, `active.chp`, `active.v`, ...).
    pub async fn sorted_data(
        &self,
        column: &str,
        direction: SortDirection,
        filter: MarketFilter,
    ) -> RequestOutcome {
        let p = filter
            .with_default_kind(DEFAULT_KIND)
            .sorted_params(column, direction);
        self.advanced(p).await
    }

    /// Several forex endpoints in one round trip, e.g. `["latest?symbol=EURUSD", "profile?symbol=EUR"]`.
    pub async fn multi_url(&self, urls: &[&str], base: Option<&str>) -> RequestOutcome {
        self.call("multi_url", multi_url(urls, base)).await
    }
}
