//! Stock, index and fundamentals endpoints (`stock/...`).

use crate::core::queries::multi_url;
use crate::core::{
    FcsClient, HistoryQuery, LatestQuery, MarketFilter, Params, Period, ReportDuration,
    RequestOutcome, SortDirection, StatementFormat,
};

const BASE: &str = "stock/";

/// Handle for the stock endpoints, obtained from [`FcsClient::stock`].
///
/// Symbols are usually exchange-prefixed (`NASDAQ:AAPL`). Unlike the forex and crypto
/// handles, sorted queries add no default `type` filter.
#[derive(Debug, Clone, Copy)]
pub struct Stock<'a> {
    client: &'a FcsClient,
}

impl<'a> Stock<'a> {
    pub const fn new(client: &'a FcsClient) -> Self {
        Self { client }
    }

    async fn call(&self, operation: &str, params: Params) -> RequestOutcome {
        self.client
            .execute(&format!("{BASE}{operation}"), params)
            .await
    }

    /* ---------------- Symbols ---------------- */

    /// All stock symbols, optionally filtered by exchange, country, sector and index.
    pub async fn symbols_list(
        &self,
        exchange: Option<&str>,
        country: Option<&str>,
        sector: Option<&str>,
        indices: Option<&str>,
    ) -> RequestOutcome {
        let mut p = Params::new();
        p.insert_opt("exchange", exchange);
        p.insert_opt("country", country);
        p.insert_opt("sector", sector);
        p.insert_opt("indices", indices);
        self.call("list", p).await
    }

    /// Search by ticker or company name.
    pub async fn search(
        &self,
        query: &str,
        exchange: Option<&str>,
        country: Option<&str>,
    ) -> RequestOutcome {
        let mut p = Params::new().with("search", query);
        p.insert_opt("exchange", exchange);
        p.insert_opt("country", country);
        self.call("list", p).await
    }

    /* ---------------- Indices ---------------- */

    pub async fn indices_list(
        &self,
        country: Option<&str>,
        exchange: Option<&str>,
    ) -> RequestOutcome {
        let mut p = Params::new();
        p.insert_opt("country", country);
        p.insert_opt("exchange", exchange);
        self.call("indices", p).await
    }

    /// Latest index values (`NASDAQ:NDX,SP:SPX`).
    pub async fn indices_latest(
        &self,
        symbol: Option<&str>,
        country: Option<&str>,
        exchange: Option<&str>,
    ) -> RequestOutcome {
        let mut p = Params::new();
        p.insert_opt("symbol", symbol);
        p.insert_opt("country", country);
        p.insert_opt("exchange", exchange);
        self.call("indices_latest", p).await
    }

    /* ---------------- Prices ---------------- */

    /// Latest prices. `get_profile` is always sent for stocks.
    pub async fn latest_price(&self, query: impl Into<LatestQuery>) -> RequestOutcome {
        self.call("latest", query.into().to_stock_params()).await
    }

    /// Latest prices for every stock of an exchange.
    pub async fn all_prices(&self, exchange: &str, period: Period) -> RequestOutcome {
        let p = Params::new()
            .with("exchange", exchange)
            .with("period", period.as_str());
        self.call("latest", p).await
    }

    pub async fn latest_by_country(
        &self,
        country: &str,
        sector: Option<&str>,
        period: Period,
    ) -> RequestOutcome {
        let mut p = Params::new()
            .with("country", country)
            .with("period", period.as_str());
        p.insert_opt("sector", sector);
        self.call("latest", p).await
    }

    /// Latest prices of an index's constituents (`NASDAQ:NDX`).
    pub async fn latest_by_indices(&self, indices: &str, period: Period) -> RequestOutcome {
        let p = Params::new()
            .with("indices", indices)
            .with("period", period.as_str());
        self.call("latest", p).await
    }

    pub async fn history(&self, query: impl Into<HistoryQuery>) -> RequestOutcome {
        self.call("history", query.into().to_params()).await
    }

    /* ---------------- Reference data ---------------- */

    /// Company profile (sector, industry, description).
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

    /* ---------------- Fundamentals ---------------- */

    /// EPS and revenue history. [`ReportDuration::Both`] returns annual and interim.
    pub async fn earnings(&self, symbol: &str, duration: ReportDuration) -> RequestOutcome {
        self.call("earnings", symbol_duration(symbol, duration))
            .await
    }

    /// Revenue broken down by segment and region.
    pub async fn revenue(&self, symbol: &str) -> RequestOutcome {
        self.call("revenue", Params::new().with("symbol", symbol))
            .await
    }

    pub async fn dividends(&self, symbol: &str, format: StatementFormat) -> RequestOutcome {
        let p = Params::new()
            .with("symbol", symbol)
            .with("format", format.as_str());
        self.call("dividend", p).await
    }

    pub async fn balance_sheet(
        &self,
        symbol: &str,
        duration: ReportDuration,
        format: StatementFormat,
    ) -> RequestOutcome {
        self.statement("balance_sheet", symbol, duration, format)
            .await
    }

    pub async fn income_statements(
        &self,
        symbol: &str,
        duration: ReportDuration,
        format: StatementFormat,
    ) -> RequestOutcome {
        self.statement("income_statements", symbol, duration, format)
            .await
    }

    pub async fn cash_flow(
        &self,
        symbol: &str,
        duration: ReportDuration,
        format: StatementFormat,
    ) -> RequestOutcome {
        self.statement("cash_flow", symbol, duration, format)
            .await
    }

    /// Valuation ratios and key statistics.
    pub async fn statistics(&self, symbol: &str, duration: ReportDuration) -> RequestOutcome {
        self.call("statistics", symbol_duration(symbol, duration))
            .await
    }

    /// Analyst price targets and recommendations.
    pub async fn forecast(&self, symbol: &str) -> RequestOutcome {
        self.call("forecast", Params::new().with("symbol", symbol))
            .await
    }

    /// Combined fundamentals; `data_column` selects sections
    /// (`earnings,revenue,profile,dividends,balance_sheet,income_statements,statistics,cash_flow`).
    pub async fn stock_data(
        &self,
        symbol: &str,
        data_column: &str,
        duration: ReportDuration,
        format: StatementFormat,
    ) -> RequestOutcome {
        let p = Params::new()
            .with("symbol", symbol)
            .with("data_column", data_column)
            .with("duration", duration.as_str())
            .with("format", format.as_str());
        self.call("stock_data", p).await
    }

    async fn statement(
        &self,
        operation: &str,
        symbol: &str,
        duration: ReportDuration,
        format: StatementFormat,
    ) -> RequestOutcome {
        let p = symbol_duration(symbol, duration).with("format", format.as_str());
        self.call(operation, p).await
    }

    /* ---------------- Technical analysis ---------------- */

    pub async fn moving_averages(&self, symbol: &str, period: Period) -> RequestOutcome {
        self.call("ma_avg", symbol_period(symbol, period)).await
    }

    pub async fn indicators(&self, symbol: &str, period: Period) -> RequestOutcome {
        self.call("indicators", symbol_period(symbol, period))
            .await
    }

    pub async fn pivot_points(&self, symbol: &str, period: Period) -> RequestOutcome {
        self.call("pivot_points", symbol_period(symbol, period))
            .await
    }

    pub async fn performance(&self, symbol: &str) -> RequestOutcome {
        self.call("performance", Params::new().with("symbol", symbol))
            .await
    }

    /* ---------------- Movers and screens ---------------- */

    pub async fn top_gainers(&self, filter: MarketFilter) -> RequestOutcome {
        self.sorted_data("active.chp", SortDirection::Desc, filter)
            .await
    }

    pub async fn top_losers(&self, filter: MarketFilter) -> RequestOutcome {
        self.sorted_data("active.chp", SortDirection::Asc, filter)
            .await
    }

    pub async fn most_active(&self, filter: MarketFilter) -> RequestOutcome {
        self.sorted_data("active.v", SortDirection::Desc, filter)
            .await
    }

    pub async fn sorted_data(
        &self,
        column: &str,
        direction: SortDirection,
        filter: MarketFilter,
    ) -> RequestOutcome {
        self.advanced(filter.sorted_params(column, direction)).await
    }

    /// Latest prices for stocks in a sector (`Technology`).
    pub async fn by_sector(
        &self,
        sector: &str,
        limit: u32,
        exchange: Option<&str>,
    ) -> RequestOutcome {
        self.screen("sector", sector, limit, exchange).await
    }

    /// Latest prices for stocks listed in a country (`united-states`).
    pub async fn by_country(
        &self,
        country: &str,
        limit: u32,
        exchange: Option<&str>,
    ) -> RequestOutcome {
        self.screen("country", country, limit, exchange).await
    }

    async fn screen(
        &self,
        key: &str,
        value: &str,
        limit: u32,
        exchange: Option<&str>,
    ) -> RequestOutcome {
        let mut p = Params::new()
            .with(key, value)
            .with("per_page", limit)
            .with("merge", "latest");
        p.insert_opt("exchange", exchange);
        self.advanced(p).await
    }

    pub async fn multi_url(&self, urls: &[&str], base: Option<&str>) -> RequestOutcome {
        self.call("multi_url", multi_url(urls, base)).await
    }
}

fn symbol_duration(symbol: &str, duration: ReportDuration) -> Params {
    Params::new()
        .with("symbol", symbol)
        .with("duration", duration.as_str())
}

fn symbol_period(symbol: &str, period: Period) -> Params {
    Params::new()
        .with("symbol", symbol)
        .with("period", period.as_str())
}
