use crate::common;
use fcsapi_rs::FcsConfig;

#[tokio::test]
async fn access_key_is_appended_to_the_body() {
    let server = common::setup_server();
    let mock = common::mock_post(
        &server,
        "/forex/latest",
        "symbol=FX%3AEURUSD&period=1D&access_key=K1",
        "[]",
    );
    let client = common::client_for(&server, FcsConfig::with_access_key("K1"));

    let outcome = client.forex().latest_price("FX:EURUSD").await;

    mock.assert();
    assert!(outcome.is_success());
}

#[tokio::test]
async fn caller_supplied_access_key_is_overridden_in_place() {
    let server = common::setup_server();
    let mock = common::mock_post(
        &server,
        "/forex/latest",
        "access_key=K1&symbol=EURUSD",
        "[]",
    );
    let client = common::client_for(&server, FcsConfig::with_access_key("K1"));

    let outcome = client
        .execute("forex/latest", [("access_key", "spoofed"), ("symbol", "EURUSD")])
        .await;

    mock.assert();
    assert!(outcome.is_success());
}
