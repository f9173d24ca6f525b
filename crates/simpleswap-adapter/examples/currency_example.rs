/*
[INPUT]:  SIMPLESWAP_API_KEY environment variable
[OUTPUT]: Currency listing and pair range printed to stdout
[POS]:    Examples - read-only currency and range queries
[UPDATE]: When adding new read endpoints
*/

use simpleswap_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: list currencies and query the amount range for a pair.
///
/// Set `RUST_LOG=simpleswap_adapter=debug` to see request dispatch logs.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== SimpleSwap Currency Example ===\n");

    let api_key = match std::env::var("SIMPLESWAP_API_KEY") {
        Ok(key) => key,
        Err(_) => {
            eprintln!("SIMPLESWAP_API_KEY is not set");
            return;
        }
    };

    let client = match SimpleSwapClient::new(api_key) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    println!("Querying currency btc...");
    match client.get_currency("btc").await {
        Ok(currency) => println!("✓ {} ({}) on {}", currency.name, currency.symbol, currency.network),
        Err(e) => println!("✗ Error: {} (code {}, trace {})", e, e.code, e.trace_id),
    }

    println!("\nListing all currencies...");
    match client.get_all_currencies().await {
        Ok(currencies) => println!("✓ {} currencies available", currencies.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    let req = RangesRequest {
        fixed: false,
        currency_from: "btc".to_string(),
        currency_to: "eth".to_string(),
    };
    println!("\nQuerying floating range btc -> eth...");
    match client.get_ranges(&req).await {
        Ok(ranges) => println!("✓ min {} / max {}", ranges.minimum, ranges.maximum),
        Err(e) => println!("✗ Error: {}", e),
    }
}
