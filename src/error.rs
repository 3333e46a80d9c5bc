use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing context id: usage is `speak <context-id> [word]...`")]
    MissingContextId,

    #[error("Connection error: unable to reach {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Timeout error: no response from {url} within {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Sorts a transport failure into connection, timeout or generic network error.
    pub fn from_transport(err: reqwest::Error, url: &str, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
                timeout,
            }
        } else if err.is_connect() {
            Self::Connection {
                url: url.to_string(),
                source: err,
            }
        } else {
            Self::Network(err)
        }
    }
}
