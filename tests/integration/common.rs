use std::time::Duration;

use desk_api::{ClientConfig, Credentials, DeskClient};
use tracing_subscriber::EnvFilter;
use wiremock::MockServer;

pub const TOKEN: &str = "integration-token";

/// Route spans to the test harness' captured output. Safe to call from
/// every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A mock Desk site and a client pointed at it.
pub async fn desk() -> (MockServer, DeskClient) {
    init_tracing();

    let server = MockServer::start().await;
    let config = ClientConfig::builder()
        .with_timeout(Duration::from_secs(5))
        .with_connect_timeout(Duration::from_secs(2))
        .build();
    let desk = DeskClient::with_config(server.uri(), Credentials::bearer(TOKEN), config)
        .expect("client for mock server");

    (server, desk)
}

/// Number of requests the mock server has seen.
pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or_default()
}
