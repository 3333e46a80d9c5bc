use super::types::*;
use crate::config::{
    BAN_SUBSTRINGS_PATH, Config, LEARN_PATH, SPEAK_PATH, UNBAN_SUBSTRINGS_PATH,
};
use crate::{Error, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, warn};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpeakService: Send + Sync {
    async fn speak(&self, request: &SpeakRequest) -> Result<SpeakResponse>;

    async fn learn(&self, request: &LearnRequest) -> Result<SpeakResponse>;

    async fn ban_substrings(&self, request: &BanRequest) -> Result<SpeakResponse>;

    async fn unban_substrings(&self, request: &BanRequest) -> Result<SpeakResponse>;
}

pub struct HttpSpeakClient {
    client: reqwest::Client,
    config: Config,
}

impl HttpSpeakClient {
    pub fn new(config: Config) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        debug!(
            "Created speak client for {} (timeout {:?})",
            config.base_url, config.timeout
        );

        Ok(Self { client, config })
    }

    /// POSTs `payload` as JSON and hands back status and body untouched.
    async fn post<T: Serialize + Sync>(&self, path: &str, payload: &T) -> Result<SpeakResponse> {
        let url = self.config.endpoint(path);
        let body = serde_json::to_vec(payload)?;
        let started = Instant::now();

        debug!("POST {} ({} bytes)", url, body.len());

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e, &url))?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e, &url))?;

        debug!(
            "Received status {} from {} in {:?}",
            status,
            url,
            started.elapsed()
        );

        Ok(SpeakResponse {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }

    fn transport_error(&self, err: reqwest::Error, url: &str) -> Error {
        let err = Error::from_transport(err, url, self.config.timeout);
        warn!("Request failed: {}", err);
        err
    }
}

#[async_trait]
impl SpeakService for HttpSpeakClient {
    async fn speak(&self, request: &SpeakRequest) -> Result<SpeakResponse> {
        debug!("Speaking in context '{}'", request.context_id);
        self.post(SPEAK_PATH, request).await
    }

    async fn learn(&self, request: &LearnRequest) -> Result<SpeakResponse> {
        debug!(
            "Teaching {} lines to context '{}'",
            request.input.len(),
            request.context_id
        );
        self.post(LEARN_PATH, request).await
    }

    async fn ban_substrings(&self, request: &BanRequest) -> Result<SpeakResponse> {
        self.post(BAN_SUBSTRINGS_PATH, request).await
    }

    async fn unban_substrings(&self, request: &BanRequest) -> Result<SpeakResponse> {
        self.post(UNBAN_SUBSTRINGS_PATH, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn test_client_creation_uses_config_timeout() {
        let config = Config {
            timeout: Duration::from_millis(250),
            ..Config::default()
        };

        let client = HttpSpeakClient::new(config).unwrap();
        assert_eq!(client.config.timeout, Duration::from_millis(250));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_a_connection_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let config = Config {
            base_url: format!("http://127.0.0.1:{port}"),
            timeout: Duration::from_secs(2),
            ..Config::default()
        };
        let client = HttpSpeakClient::new(config).unwrap();

        let err = client
            .speak(&SpeakRequest::new("ctx", "hi"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Connection { .. }), "got {err:?}");
    }
}
