use crate::common;
use fcsapi_rs::FcsConfig;

#[tokio::test]
async fn whitelisted_requests_carry_no_credentials() {
    let server = common::setup_server();
    let mock = common::mock_post(
        &server,
        "/crypto/list",
        "type=crypto&exchange=BINANCE",
        "[]",
    );
    // The key is configured but must not be sent.
    let mut config = FcsConfig::with_ip_whitelist();
    config.access_key = "PRIVATE".into();
    let client = common::client_for(&server, config);

    let outcome = client
        .crypto()
        .symbols_list(None, None, Some("BINANCE"))
        .await;

    mock.assert();
    assert!(outcome.is_success());
}
