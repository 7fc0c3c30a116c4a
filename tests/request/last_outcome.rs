use crate::common;
use fcsapi_rs::{FcsConfig, RequestOutcome};
use httpmock::Method::POST;
use serde_json::json;

#[tokio::test]
async fn accessors_follow_the_most_recent_call() {
    let server = common::setup_server();
    let ok = common::mock_post(
        &server,
        "/crypto/profile",
        "symbol=BTC&access_key=K1",
        r#"{"name":"Bitcoin"}"#,
    );
    let fail = server.mock(|when, then| {
        when.method(POST).path("/crypto/performance");
        then.status(200).body(r#"{"status":false,"msg":"Symbol not found"}"#);
    });
    let client = common::client_for(&server, FcsConfig::with_access_key("K1"));

    assert_eq!(client.last_outcome(), RequestOutcome::default());
    assert_eq!(client.error_message().as_deref(), Some("Unknown error"));

    let returned = client.crypto().profile("BTC").await;
    assert_eq!(client.last_outcome(), returned);
    assert!(client.is_success());
    assert_eq!(client.payload(), Some(json!({"name": "Bitcoin"})));
    assert_eq!(client.error_message(), None);

    client.crypto().performance("NOPE", None).await;
    assert!(!client.is_success());
    assert_eq!(client.payload(), None);
    assert_eq!(client.error_message().as_deref(), Some("Symbol not found"));

    ok.assert();
    fail.assert();
}

#[tokio::test]
async fn clones_share_the_last_outcome() {
    let server = common::setup_server();
    let mock = common::mock_post(&server, "/forex/profile", "symbol=JPY", "{}");
    let client = common::client_for(&server, FcsConfig::with_ip_whitelist());
    let other = client.clone();

    other.forex().profile("JPY").await;

    mock.assert();
    assert!(client.is_success());
    assert_eq!(client.last_outcome(), other.last_outcome());
}
