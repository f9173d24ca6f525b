/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for simpleswap-adapter tests

use simpleswap_adapter::{ClientConfig, SimpleSwapClient};
use wiremock::MockServer;
use wiremock::Request;

pub const TEST_API_KEY: &str = "test-api-key";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> SimpleSwapClient {
    client_for_uri(&server.uri())
}

pub fn client_for_uri(uri: &str) -> SimpleSwapClient {
    let config = ClientConfig {
        base_url: uri.to_string(),
        ..ClientConfig::default()
    };
    SimpleSwapClient::with_config(TEST_API_KEY, config).expect("client init")
}

/// The single request the server received
pub async fn only_request(server: &MockServer) -> Request {
    let mut requests = server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}

/// Count occurrences of a query key
pub fn query_count(request: &Request, key: &str) -> usize {
    request.url.query_pairs().filter(|(name, _)| name == key).count()
}

/// Exchange fixture in the upstream format
#[allow(dead_code)]
pub fn exchange_json(id: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "type": "fixed",
        "timestamp": "2024-03-01T10:00:00.000Z",
        "updated_at": "2024-03-01T10:02:00.000Z",
        "valid_until": "2024-03-01T10:30:00.000Z",
        "currency_from": "btc",
        "currency_to": "eth",
        "amount_from": "0.5",
        "expected_amount": "8.1",
        "amount_to": null,
        "address_from": "bc1qdepositaddress",
        "address_to": "0x1234567890abcdef",
        "extra_id_from": null,
        "extra_id_to": "",
        "user_refund_address": "",
        "user_refund_extra_id": "",
        "tx_from": null,
        "tx_to": null,
        "status": status,
        "redirect_url": "https://simpleswap.io/exchange?id=abc",
        "currencies": {
            "currency_from_ticker": {"name": "Bitcoin", "symbol": "btc", "network": "btc"},
            "currency_to_ticker": {"name": "Ethereum", "symbol": "eth", "network": "eth"}
        }
    })
}
