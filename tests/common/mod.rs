//! Shared helpers for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use command_router::config::RouterConfig;
use command_router::http::HttpServer;
use command_router::lifecycle::Shutdown;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

/// A router running on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub updates: mpsc::UnboundedSender<RouterConfig>,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Boot a server with `config` on 127.0.0.1:0.
pub async fn spawn_server(mut config: RouterConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let (updates, config_updates) = mpsc::unbounded_channel();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, config_updates, server_shutdown).await;
    });

    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    TestServer {
        addr,
        shutdown,
        updates,
        client,
    }
}

/// Config with the given prefix and rule set flag.
pub fn config_with(api_prefix: &str, service_action_rule: bool) -> RouterConfig {
    let mut config = RouterConfig::default();
    config.application.api_prefix = api_prefix.to_string();
    config.application.service_action_rule = service_action_rule;
    config
}
