use std::time::Duration;

/// Address the speak service listens on.
pub const DEFAULT_BASE_URL: &str = "http://localhost:48100";

pub const SPEAK_PATH: &str = "/speak";
pub const LEARN_PATH: &str = "/learn";
pub const BAN_SUBSTRINGS_PATH: &str = "/banSubstrings";
pub const UNBAN_SUBSTRINGS_PATH: &str = "/unbanSubstrings";

/// Upper bound on a whole request/response round trip.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
    pub logs: LogsConfig,
}

#[derive(Debug, Clone)]
pub struct LogsConfig {
    pub level: String,
}

impl Config {
    /// Full URL for one of the service paths.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
