use std::sync::{Arc, Once};

use shoptrack_core::{ClientService, HardwareService, TicketService};
use shoptrack_domain::ApiConfig;
use shoptrack_infra::ApiGateway;
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-secret";

static TRACING: Once = Once::new();

/// Route `RUST_LOG`-filtered traces to test output. Safe to call from
/// every test; only the first call installs the subscriber.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A mock tracker deployment plus services wired against it.
pub struct TestApi {
    pub server: MockServer,
    pub tickets: TicketService,
    pub clients: ClientService,
    pub hardware: HardwareService,
}

/// Start a mock server and build the full service stack against it.
pub async fn test_api() -> TestApi {
    init_tracing();
    let server = MockServer::start().await;
    let config = ApiConfig::new(server.uri(), TEST_API_KEY);
    let gateway = Arc::new(ApiGateway::new(config).expect("gateway should build"));
    TestApi {
        tickets: TicketService::new(gateway.clone()),
        clients: ClientService::new(gateway.clone()),
        hardware: HardwareService::new(gateway),
        server,
    }
}

/// The request bodies of every captured request matching the method.
pub async fn request_bodies(server: &MockServer, method: &str) -> Vec<serde_json::Value> {
    server
        .received_requests()
        .await
        .expect("request recording enabled")
        .iter()
        .filter(|request| request.method.as_str() == method)
        .map(|request| serde_json::from_slice(&request.body).expect("captured body is JSON"))
        .collect()
}
