use std::time::Duration;
use tyuo_speak::{config::Config, invoker::HttpSpeakClient};
use wiremock::MockServer;

/// Client aimed at a mock speak service with the given timeout
pub fn client_for(server: &MockServer, timeout: Duration) -> HttpSpeakClient {
    let config = Config {
        base_url: server.uri(),
        timeout,
        ..Config::default()
    };
    HttpSpeakClient::new(config).expect("Failed to build speak client")
}

/// A loopback port with nothing listening on it
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    listener.local_addr().expect("No local address").port()
}

pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
