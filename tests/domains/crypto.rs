use crate::common;
use fcsapi_rs::{FcsClient, FcsConfig, MarketFilter};
use httpmock::MockServer;

fn client(server: &MockServer) -> FcsClient {
    common::client_for(server, FcsConfig::with_ip_whitelist())
}

#[tokio::test]
async fn coin_rankings_merge_performance_data() {
    let server = common::setup_server();
    let mock = common::mock_post(
        &server,
        "/crypto/advance",
        "type=coin&sort_by=perf.market_cap_desc&per_page=10&merge=latest%2Cperf",
        "[]",
    );

    let outcome = client(&server).crypto().top_by_market_cap(Some(10)).await;

    mock.assert();
    assert!(outcome.is_success());
}

#[tokio::test]
async fn cross_rates_default_to_crypto_type() {
    let server = common::setup_server();
    let mock = common::mock_post(&server, "/crypto/cross", "symbol=BTC&type=crypto&period=1D", "{}");

    client(&server).crypto().cross_rates("BTC").await;

    mock.assert();
}

#[tokio::test]
async fn search_uses_the_list_endpoint() {
    let server = common::setup_server();
    let mock = common::mock_post(&server, "/crypto/list", "search=ethereum", "[]");

    client(&server).crypto().search("ethereum", None).await;

    mock.assert();
}

#[tokio::test]
async fn highest_volume_keeps_exchange_filter() {
    let server = common::setup_server();
    let mock = common::mock_post(
        &server,
        "/crypto/advance",
        "period=1D&sort_by=active.v_desc&per_page=20&merge=latest&type=crypto&exchange=BINANCE",
        "[]",
    );

    client(&server)
        .crypto()
        .highest_volume(MarketFilter::new().exchange("BINANCE"))
        .await;

    mock.assert();
}
