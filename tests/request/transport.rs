use crate::common;
use fcsapi_rs::{FcsClient, FcsConfig, FcsError};
use httpmock::Method::POST;
use std::time::{Duration, Instant};
use url::Url;

#[tokio::test]
async fn refused_connection_is_a_transport_failure() {
    // Nothing listens on port 1.
    let client = FcsClient::builder()
        .base_url(Url::parse("http://127.0.0.1:1/").unwrap())
        .config(FcsConfig::with_access_key("K1").connect_timeout(2))
        .build()
        .unwrap();

    let outcome = client.forex().latest_price("FX:EURUSD").await;

    assert!(!outcome.succeeded);
    assert_eq!(outcome.status_code, 0);
    assert!(outcome.body.is_none());
    let message = outcome.error_message().unwrap();
    assert!(message.starts_with("Transport error: "), "{message}");

    let err = client
        .request("forex/latest", [("symbol", "EURUSD")])
        .await
        .unwrap_err();
    assert!(matches!(err, FcsError::Transport(_)));
}

#[tokio::test]
async fn slow_response_hits_request_timeout() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(POST).path("/forex/latest");
        then.status(200)
            .delay(Duration::from_secs(3))
            .body(common::ok_body("[]"));
    });
    let client = common::client_for(&server, FcsConfig::with_access_key("K1").timeout(1));

    let started = Instant::now();
    let outcome = client.forex().latest_price("FX:EURUSD").await;

    assert!(started.elapsed() < Duration::from_secs(3));
    assert_eq!(outcome.status_code, 0);
    assert!(!outcome.is_success());
    assert!(outcome.error_message().unwrap().starts_with("Transport error: "));
}

#[tokio::test]
async fn empty_endpoint_never_reaches_the_network() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST);
        then.status(200).body(common::ok_body("[]"));
    });
    let client = common::client_for(&server, FcsConfig::with_access_key("K1"));

    let outcome = client.execute("/", [("symbol", "EURUSD")]).await;

    assert_eq!(outcome.status_code, 0);
    assert!(!outcome.succeeded);
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn endpoints_nest_under_base_path() {
    let server = common::setup_server();
    let mock = common::mock_post(&server, "/v4/stock/revenue", "symbol=AAPL", "{}");
    let client = FcsClient::builder()
        .base_url(Url::parse(&format!("{}/v4", server.base_url())).unwrap())
        .config(FcsConfig::with_ip_whitelist())
        .build()
        .unwrap();

    let outcome = client.stock().revenue("AAPL").await;

    mock.assert();
    assert!(outcome.is_success());
}

#[tokio::test]
async fn absolute_url_endpoint_never_leaves_the_base_host() {
    let api = common::setup_server();
    let other = common::setup_server();
    let stolen = other.mock(|when, then| {
        when.method(POST);
        then.status(200).body(common::ok_body("[]"));
    });
    let client = common::client_for(&api, FcsConfig::with_access_key("SECRET"));

    let outcome = client
        .execute(&format!("{}/steal", other.base_url()), [("symbol", "X")])
        .await;

    assert!(!outcome.succeeded);
    assert_eq!(outcome.status_code, 0);
    assert!(outcome.error_message().unwrap().starts_with("Invalid endpoint"));
    assert_eq!(stolen.calls(), 0);
}

#[tokio::test]
async fn parent_segments_cannot_climb_out_of_the_base_path() {
    let server = common::setup_server();
    let outside = server.mock(|when, then| {
        when.method(POST).path("/outside");
        then.status(200).body(common::ok_body("[]"));
    });
    let client = FcsClient::builder()
        .base_url(Url::parse(&format!("{}/v4/", server.base_url())).unwrap())
        .config(FcsConfig::with_access_key("SECRET"))
        .build()
        .unwrap();

    let outcome = client.execute("../outside", [("symbol", "X")]).await;

    assert_eq!(outcome.status_code, 0);
    assert_eq!(outside.calls(), 0);
}

#[tokio::test]
async fn redirects_are_followed_with_the_form_body() {
    let server = common::setup_server();
    let moved = server.mock(|when, then| {
        when.method(POST).path("/forex/old_latest");
        then.status(307)
            .header("location", format!("{}/forex/latest", server.base_url()));
    });
    let target = common::mock_post(
        &server,
        "/forex/latest",
        "symbol=EURUSD&access_key=K1",
        r#"[{"c":"1.0842"}]"#,
    );
    let client = common::client_for(&server, FcsConfig::with_access_key("K1"));

    let outcome = client.execute("forex/old_latest", [("symbol", "EURUSD")]).await;

    moved.assert();
    target.assert();
    assert!(outcome.is_success());
    assert_eq!(outcome.status_code, 200);
}
