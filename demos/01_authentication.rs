use fcsapi_rs::{AuthMethod, FcsClient, FcsConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let access_key = std::env::var("FCSAPI_KEY").unwrap_or_else(|_| "YOUR_ACCESS_KEY".into());
    let public_key = std::env::var("FCSAPI_PUBLIC_KEY").unwrap_or_else(|_| "YOUR_PUBLIC_KEY".into());

    // 1. Access key: the private key travels with every request.
    let client = FcsClient::with_access_key(access_key.clone())?;
    let outcome = client.forex().latest_price("FX:EURUSD").await;
    println!("--- access_key ---");
    println!("status {} success {}", outcome.status_code, outcome.is_success());
    match outcome.payload() {
        Some(data) => println!("{data}"),
        None => println!("error: {}", outcome.error_message().unwrap_or_default()),
    }
    println!();

    // 2. Signed token: only `_token`, `_expiry` and `_public_key` leave this process.
    let config = FcsConfig::with_token(access_key, public_key, 3600);
    if let Err(e) = config.validate() {
        println!("token config rejected locally: {e}");
    }
    client.set_config(config);
    let outcome = client.crypto().latest_price("BINANCE:BTCUSDT").await;
    println!("--- token ---");
    println!("status {} success {}", outcome.status_code, client.is_success());
    println!();

    // A token for a browser frontend, as JSON.
    let token = client.generate_token();
    println!("--- token for frontend ---");
    println!("{}", serde_json::to_string_pretty(&token)?);
    println!();

    // 3. IP whitelist: nothing is sent, the server checks the caller's address.
    client.update_config(|cfg| cfg.auth_method = AuthMethod::IpWhitelist);
    let outcome = client.stock().latest_price("NASDAQ:AAPL").await;
    println!("--- ip_whitelist ---");
    println!(
        "status {} message {:?}",
        outcome.status_code,
        outcome.error_message()
    );

    Ok(())
}
