use crate::common;
use fcsapi_rs::{FcsConfig, Params, Token, auth_params_at};
use httpmock::Mock;

#[tokio::test]
async fn token_fields_replace_the_access_key() {
    let server = common::setup_server();
    let config = FcsConfig::with_token("secret", "pub123", 300);
    let now = chrono::Utc::now().timestamp();

    // The request may be stamped in the next second.
    let mocks: Vec<Mock<'_>> = (now..=now + 1)
        .map(|at| {
            let body = Params::from([("symbol", "BINANCE:BTCUSDT"), ("period", "1D")])
                .merged_with(auth_params_at(&config, at))
                .to_form_body();
            assert!(!body.contains("access_key"));
            common::mock_post(&server, "/crypto/latest", &body, "[]")
        })
        .collect();
    let client = common::client_for(&server, config);

    let outcome = client.crypto().latest_price("BINANCE:BTCUSDT").await;

    assert!(outcome.is_success());
    let hits: usize = mocks.iter().map(|m| m.calls()).sum();
    assert_eq!(hits, 1);
}

#[test]
fn minted_token_verifies_against_the_private_key_only() {
    let client = fcsapi_rs::FcsClient::new(FcsConfig::with_token("secret", "pub123", 60)).unwrap();

    let token = client.generate_token();
    let json = serde_json::to_value(&token).unwrap();
    let decoded: Token = serde_json::from_value(json.clone()).unwrap();

    assert_eq!(json["_public_key"], "pub123");
    assert_eq!(decoded, token);
    assert!(token.verify("secret"));
    assert!(!token.verify("other"));
    assert!(token.verify_at("secret", token.expiry - 1));
    assert!(!token.verify_at("secret", token.expiry));
}
