use std::time::Duration;

use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/models";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Endpoint probed with each credential.
    pub endpoint: Url,

    /// Upper bound on a single request, connection included.
    pub timeout: Duration,
}

impl Config {
    pub fn new(endpoint: Url, timeout: Duration) -> Self {
        Self { endpoint, timeout }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.parse().unwrap(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
