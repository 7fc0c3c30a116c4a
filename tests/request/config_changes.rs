use crate::common;
use fcsapi_rs::{AuthMethod, FcsConfig};

#[tokio::test]
async fn auth_method_change_applies_to_the_next_call() {
    let server = common::setup_server();
    let keyed = common::mock_post(
        &server,
        "/forex/latest",
        "symbol=GBPUSD&period=1h&access_key=K1",
        "[]",
    );
    let whitelisted = common::mock_post(&server, "/forex/latest", "symbol=GBPUSD&period=1h", "[]");
    let client = common::client_for(&server, FcsConfig::with_access_key("K1"));
    let query = fcsapi_rs::LatestQuery::new("GBPUSD").period(fcsapi_rs::Period::H1);

    assert!(client.forex().latest_price(query.clone()).await.is_success());
    client.update_config(|cfg| cfg.auth_method = AuthMethod::IpWhitelist);
    assert!(client.forex().latest_price(query).await.is_success());

    keyed.assert();
    whitelisted.assert();
}

#[tokio::test]
async fn replaced_config_and_connect_timeout_take_effect() {
    let server = common::setup_server();
    let first = common::mock_post(&server, "/stock/forecast", "symbol=MSFT&access_key=A", "{}");
    let second = common::mock_post(&server, "/stock/forecast", "symbol=MSFT&access_key=B", "{}");
    let client = common::client_for(&server, FcsConfig::with_access_key("A"));

    assert!(client.stock().forecast("MSFT").await.is_success());

    client.set_config(FcsConfig::with_access_key("B").connect_timeout(9));
    client.set_timeout(15);
    assert_eq!(client.config().timeout, 15);
    assert_eq!(client.config().connect_timeout, 9);
    assert!(client.stock().forecast("MSFT").await.is_success());

    first.assert();
    second.assert();
}
