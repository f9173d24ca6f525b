/*
[INPUT]:  SIMPLESWAP_API_KEY environment variable
[OUTPUT]: Recent exchanges and their status
[POS]:    Examples - exchange history queries
[UPDATE]: When exchange endpoints change
*/

use simpleswap_adapter::*;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let Ok(api_key) = std::env::var("SIMPLESWAP_API_KEY") else {
        eprintln!("SIMPLESWAP_API_KEY is not set");
        return;
    };

    let client = match SimpleSwapClient::new(api_key) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let req = ExchangesRequest {
        limit: 10,
        ..ExchangesRequest::default()
    };

    match client.get_exchanges(&req).await {
        Ok(exchanges) => {
            for exchange in exchanges {
                println!(
                    "{} {} -> {} {:?} (terminal: {})",
                    exchange.id,
                    exchange.currency_from,
                    exchange.currency_to,
                    exchange.status,
                    exchange.status.is_terminal()
                );
            }
        }
        Err(e) if e.is_api_error() => println!("✗ API error {}: {}", e.code, e),
        Err(e) => println!("✗ Error: {}", e),
    }
}
