use crate::common;
use fcsapi_rs::{FcsClient, FcsConfig, HistoryQuery, MarketFilter, Period};
use httpmock::MockServer;

fn client(server: &MockServer) -> FcsClient {
    common::client_for(server, FcsConfig::with_ip_whitelist())
}

#[tokio::test]
async fn history_sends_paging_and_range() {
    let server = common::setup_server();
    let mock = common::mock_post(
        &server,
        "/forex/history",
        "symbol=EURUSD&period=1h&length=48&page=1&from=2024-01-01",
        "[]",
    );

    let outcome = client(&server)
        .forex()
        .history(
            HistoryQuery::new("EURUSD")
                .period(Period::H1)
                .length(48)
                .from("2024-01-01"),
        )
        .await;

    mock.assert();
    assert!(outcome.is_success());
}

#[tokio::test]
async fn converter_and_base_prices() {
    let server = common::setup_server();
    let convert = common::mock_post(
        &server,
        "/forex/converter",
        "pair1=EUR&pair2=USD&amount=100",
        r#"{"total":"108.42"}"#,
    );
    let base = common::mock_post(&server, "/forex/base_latest", "symbol=USD&type=forex", "{}");
    let client = client(&server);

    let converted = client.forex().convert("EUR", "USD", 100.0, None).await;
    assert_eq!(converted.payload().unwrap()["total"], "108.42");
    assert!(client.forex().base_prices("USD", None, None, false).await.is_success());

    convert.assert();
    base.assert();
}

#[tokio::test]
async fn top_gainers_default_to_forex_type() {
    let server = common::setup_server();
    let mock = common::mock_post(
        &server,
        "/forex/advance",
        "period=1D&sort_by=active.chp_desc&per_page=5&merge=latest&type=forex",
        "[]",
    );

    client(&server)
        .forex()
        .top_gainers(MarketFilter::new().limit(5))
        .await;

    mock.assert();
}

#[tokio::test]
async fn search_and_multi_url() {
    let server = common::setup_server();
    let search = common::mock_post(&server, "/forex/search", "search=gold", "[]");
    let multi = common::mock_post(
        &server,
        "/forex/multi_url",
        "url%5B0%5D=latest%3Fsymbol%3DEURUSD&url%5B1%5D=profile%3Fsymbol%3DEUR",
        "{}",
    );
    let client = client(&server);

    client.forex().search("gold", None, Some("")).await;
    client
        .forex()
        .multi_url(&["latest?symbol=EURUSD", "profile?symbol=EUR"], None)
        .await;

    search.assert();
    multi.assert();
}
