use crate::common;
use fcsapi_rs::{FcsClient, FcsConfig, MarketFilter, Period, ReportDuration, StatementFormat};
use httpmock::MockServer;

fn client(server: &MockServer) -> FcsClient {
    common::client_for(server, FcsConfig::with_ip_whitelist())
}

#[tokio::test]
async fn latest_price_always_sends_profile_flag() {
    let server = common::setup_server();
    let mock = common::mock_post(
        &server,
        "/stock/latest",
        "symbol=NASDAQ%3AAAPL&period=1D&get_profile=0",
        "[]",
    );

    client(&server).stock().latest_price("NASDAQ:AAPL").await;

    mock.assert();
}

#[tokio::test]
async fn fundamentals_send_duration_and_format() {
    let server = common::setup_server();
    let balance = common::mock_post(
        &server,
        "/stock/balance_sheet",
        "symbol=AAPL&duration=interim&format=inherit",
        "[]",
    );
    let combined = common::mock_post(
        &server,
        "/stock/stock_data",
        "symbol=AAPL&data_column=earnings%2Crevenue&duration=annual&format=plain",
        "{}",
    );
    let dividends = common::mock_post(&server, "/stock/dividend", "symbol=AAPL&format=plain", "[]");
    let client = client(&server);
    let stock = client.stock();

    stock
        .balance_sheet("AAPL", ReportDuration::Interim, StatementFormat::Inherit)
        .await;
    stock
        .stock_data(
            "AAPL",
            "earnings,revenue",
            ReportDuration::default(),
            StatementFormat::default(),
        )
        .await;
    stock.dividends("AAPL", StatementFormat::Plain).await;

    balance.assert();
    combined.assert();
    dividends.assert();
}

#[tokio::test]
async fn screens_and_movers_add_no_default_type() {
    let server = common::setup_server();
    let losers = common::mock_post(
        &server,
        "/stock/advance",
        "period=1D&sort_by=active.chp_asc&per_page=20&merge=latest&country=united-states",
        "[]",
    );
    let sector = common::mock_post(
        &server,
        "/stock/advance",
        "sector=Technology&per_page=50&merge=latest&exchange=NASDAQ",
        "[]",
    );
    let by_country = common::mock_post(&server, "/stock/latest", "country=japan&period=1D", "[]");
    let client = client(&server);

    client
        .stock()
        .top_losers(MarketFilter::new().country("united-states"))
        .await;
    client.stock().by_sector("Technology", 50, Some("NASDAQ")).await;
    client
        .stock()
        .latest_by_country("japan", None, Period::D1)
        .await;

    losers.assert();
    sector.assert();
    by_country.assert();
}
