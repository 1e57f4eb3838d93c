/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for moonpay-adapter tests

use moonpay_adapter::{ClientConfig, MoonpayClient};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "pk_test_123";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> MoonpayClient {
    let config = ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    };
    MoonpayClient::with_config(TEST_API_KEY, config).expect("client init")
}

/// Mock JWT token for testing
pub fn mock_jwt_token() -> String {
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.test.signature".to_string()
}

/// Customer object as returned by the API
#[allow(dead_code)]
pub fn customer_json(email: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "7138fb07-7c65-4c36-8d4c-5d5a1fb8b3b5",
        "createdAt": "2019-05-21T12:00:00.000Z",
        "updatedAt": "2019-05-21T12:00:00.000Z",
        "firstName": null,
        "lastName": null,
        "email": email,
        "liveMode": false,
        "externalCustomerId": "some-test-id"
    })
}
