use fcsapi_rs::{FcsClient, MarketFilter, Period, ReportDuration, StatementFormat};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let access_key = std::env::var("FCSAPI_KEY").unwrap_or_else(|_| "YOUR_ACCESS_KEY".into());
    let client = FcsClient::with_access_key(access_key)?;

    let crypto = client.crypto();
    let stock = client.stock();

    // Both requests run concurrently on the same client.
    let (btc, aapl) = tokio::join!(
        crypto.latest_price("BINANCE:BTCUSDT"),
        stock.latest_price("NASDAQ:AAPL"),
    );
    println!("--- BTC ---\n{:?}\n", btc.payload());
    println!("--- AAPL ---\n{:?}\n", aapl.payload());

    println!("--- Top 10 coins by market cap ---");
    let top = crypto.top_by_market_cap(Some(10)).await;
    println!("{:?}\n", top.payload());

    println!("--- Biggest crypto losers on Binance ---");
    let losers = crypto
        .top_losers(MarketFilter::new().exchange("BINANCE").period(Period::H4))
        .await;
    println!("{:?}\n", losers.payload());

    println!("--- AAPL quarterly income statement ---");
    let income = stock
        .income_statements("NASDAQ:AAPL", ReportDuration::Interim, StatementFormat::Plain)
        .await;
    println!("{:?}\n", income.payload());

    println!("--- Most active US stocks ---");
    let active = stock
        .most_active(MarketFilter::new().country("united-states").limit(10))
        .await;
    if active.is_success() {
        println!("{:?}", active.payload());
    } else {
        println!("error: {}", active.error_message().unwrap_or_default());
    }

    Ok(())
}
