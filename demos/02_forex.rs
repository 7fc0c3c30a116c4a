use fcsapi_rs::{FcsClient, HistoryQuery, LatestQuery, MarketFilter, Period};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let access_key = std::env::var("FCSAPI_KEY").unwrap_or_else(|_| "YOUR_ACCESS_KEY".into());
    let client = FcsClient::with_access_key(access_key)?;
    let forex = client.forex();

    println!("--- Latest prices ---");
    let latest = forex
        .latest_price(LatestQuery::new("EURUSD,GBPUSD,USDJPY").period(Period::H1))
        .await;
    print_outcome(&latest);

    println!("--- EUR to USD ---");
    print_outcome(&forex.convert("EUR", "USD", 250.0, None).await);

    println!("--- Last 24 hourly candles ---");
    let candles = forex
        .history(HistoryQuery::new("FX:EURUSD").period(Period::H1).length(24))
        .await;
    print_outcome(&candles);

    println!("--- Top gainers ---");
    print_outcome(&forex.top_gainers(MarketFilter::new().limit(5)).await);

    println!("--- Gold ---");
    print_outcome(&forex.commodities(Some("XAUUSD"), Period::D1).await);

    // `request` turns the outcome into a Result.
    println!("--- Pivot points (Result mode) ---");
    match client
        .request("forex/pivot_points", [("symbol", "EURUSD"), ("period", "1D")])
        .await
    {
        Ok(data) => println!("{data}\n"),
        Err(e) => println!("error: {e}\n"),
    }

    Ok(())
}

fn print_outcome(outcome: &fcsapi_rs::RequestOutcome) {
    match outcome.payload() {
        Some(data) => println!("{data}"),
        None => println!(
            "failed ({}): {}",
            outcome.status_code,
            outcome.error_message().unwrap_or_default()
        ),
    }
    println!();
}
