//! Cryptocurrency endpoints (`crypto/...`).

use crate::core::queries::{multi_url, symbol_period};
use crate::core::{
    CrossRatesQuery, FcsClient, HistoryQuery, LatestQuery, MarketFilter, Params, Period,
    RequestOutcome, SortDirection,
};

const BASE: &str = "crypto/";
const DEFAULT_KIND: &str = "crypto";
const DEFAULT_COIN_LIMIT: u32 = 100;

/// Handle for the crypto endpoints, obtained from [`FcsClient::crypto`].
#[derive(Debug, Clone, Copy)]
pub struct Crypto<'a> {
    client: &'a FcsClient,
}

impl<'a> Crypto<'a> {
    pub const fn new(client: &'a FcsClient) -> Self {
        Self { client }
    }

    async fn call(&self, operation: &str, params: Params) -> RequestOutcome {
        self.client
            .execute(&format!("{BASE}{operation}"), params)
            .await
    }

    /// All crypto symbols. `kind` (`crypto`, `coin`, `futures`, `dex`, `dominance`)
    /// defaults to `crypto`; `sub_type` is `spot`, `swap` or `index`.
    pub async fn symbols_list(
        &self,
        kind: Option<&str>,
        sub_type: Option<&str>,
        exchange: Option<&str>,
    ) -> RequestOutcome {
        let mut p = Params::new().with("type", kind.unwrap_or(DEFAULT_KIND));
        p.insert_opt("sub_type", sub_type);
        p.insert_opt("exchange", exchange);
        self.call("list", p).await
    }

    /// Coins with market cap, rank and supply data.
    pub async fn coins_list(&self) -> RequestOutcome {
        self.symbols_list(Some("coin"), None, None).await
    }

    /// Search coins and tokens (`BTC`, `ethereum`).
    pub async fn search(&self, query: &str, kind: Option<&str>) -> RequestOutcome {
        let mut p = Params::new().with("search", query);
        p.insert_opt("type", kind);
        self.call("list", p).await
    }

    /// Latest prices for one or more pairs (`BINANCE:BTCUSDT`).
    pub async fn latest_price(&self, query: impl Into<LatestQuery>) -> RequestOutcome {
        self.call("latest", query.into().to_params()).await
    }

    /// Latest prices for every pair of an exchange.
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

    /// Rank, market cap, supply and performance for coins (`type=coin`),
    /// sorted by `sort_by` (e.g. `perf.rank_asc`).
    pub async fn coin_data(
        &self,
        symbol: Option<&str>,
        limit: u32,
        sort_by: &str,
    ) -> RequestOutcome {
        let mut p = Params::new()
            .with("type", "coin")
            .with("sort_by", sort_by)
            .with("per_page", limit)
            .with("merge", "latest,perf");
        p.insert_opt("symbol", symbol);
        self.call("advance", p).await
    }

    /// Top coins by market capitalisation.
    pub async fn top_by_market_cap(&self, limit: Option<u32>) -> RequestOutcome {
        self.coin_data(
            None,
            limit.unwrap_or(DEFAULT_COIN_LIMIT),
            "perf.market_cap_desc",
        )
        .await
    }

    /// Top coins by rank.
    pub async fn top_by_rank(&self, limit: Option<u32>) -> RequestOutcome {
        self.coin_data(None, limit.unwrap_or(DEFAULT_COIN_LIMIT), "perf.rank_asc")
            .await
    }

    /// Converts `amount` of `from` into `to` (crypto to fiat or crypto to crypto).
    pub async fn convert(&self, from: &str, to: &str, amount: f64) -> RequestOutcome {
        let p = Params::new()
            .with("pair1", from)
            .with("pair2", to)
            .with("amount", amount);
        self.call("converter", p).await
    }

    /// Prices of a single token against all quotes (`BTC`, not `BTCUSDT`).
    pub async fn base_prices(
        &self,
        symbol: &str,
        exchange: Option<&str>,
        fallback: bool,
    ) -> RequestOutcome {
        let mut p = Params::new().with("symbol", symbol);
        p.insert_opt("exchange", exchange);
        p.insert_flag("fallback", fallback);
        self.call("base_latest", p).await
    }

    /// OHLC cross rates of a base token. `type` defaults to `crypto`.
    pub async fn cross_rates(&self, query: impl Into<CrossRatesQuery>) -> RequestOutcome {
        self.call("cross", query.into().to_params(DEFAULT_KIND)).await
    }

    pub async fn history(&self, query: impl Into<HistoryQuery>) -> RequestOutcome {
        self.call("history", query.into().to_params()).await
    }

    /// Coin details (website, social links). Takes coin codes (`BTC,ETH`), not pairs.
    pub async fn profile(&self, symbol: &str) -> RequestOutcome {
        self.call("profile", Params::new().with("symbol", symbol)).await
    }

    pub async fn exchanges(&self, kind: Option<&str>, sub_type: Option<&str>) -> RequestOutcome {
        let mut p = Params::new();
        p.insert_opt("type", kind);
        p.insert_opt("sub_type", sub_type);
        self.call("exchanges", p).await
    }

    /// Free-form `advance` query.
    pub async fn advanced(&self, params: impl Into<Params>) -> RequestOutcome {
        self.call("advance", params.into()).await
    }

    pub async fn moving_averages(
        &self,
        symbol: &str,
        period: Period,
        exchange: Option<&str>,
    ) -> RequestOutcome {
        self.call("ma_avg", symbol_period(symbol, period, exchange))
            .await
    }

    pub async fn indicators(
        &self,
        symbol: &str,
        period: Period,
        exchange: Option<&str>,
    ) -> RequestOutcome {
        self.call("indicators", symbol_period(symbol, period, exchange))
            .await
    }

    pub async fn pivot_points(
        &self,
        symbol: &str,
        period: Period,
        exchange: Option<&str>,
    ) -> RequestOutcome {
        self.call("pivot_points", symbol_period(symbol, period, exchange))
            .await
    }

    pub async fn performance(&self, symbol: &str, exchange: Option<&str>) -> RequestOutcome {
        let mut p = Params::new().with("symbol", symbol);
        p.insert_opt("exchange", exchange);
        self.call("performance", p).await
    }

    /// Largest percentage gains. `type` defaults to `crypto`.
    pub async fn top_gainers(&self, filter: MarketFilter) -> RequestOutcome {
        self.sorted_data("active.chp", SortDirection::Desc, filter)
            .await
    }

    /// Largest percentage losses. `type` defaults to `crypto`.
    pub async fn top_losers(&self, filter: MarketFilter) -> RequestOutcome {
        self.sorted_data("active.chp", SortDirection::Asc, filter)
            .await
    }

    /// Highest volume. `type` defaults to `crypto`.
    pub async fn highest_volume(&self, filter: MarketFilter) -> RequestOutcome {
        self.sorted_data("active.v", SortDirection::Desc, filter)
            .await
    }

    /// Sorted query on any column (`active.c`, `active.v`, `rank`, `market_cap`, ...).
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

    pub async fn multi_url(&self, urls: &[&str], base: Option<&str>) -> RequestOutcome {
        self.call("multi_url", multi_url(urls, base)).await
    }
}
