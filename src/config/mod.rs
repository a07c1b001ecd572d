use std::{env, time::Duration};

const BASE_URL_ENV: &str = "FINMAN_API_BASE_URL";
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/api";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Connection settings for the request wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Builds a config for an explicit base URL, keeping the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            ..Self::default()
        }
    }

    /// Resolves the base URL from `FINMAN_API_BASE_URL`, falling back to the
    /// local backend default.
    pub fn from_env() -> Self {
        match env::var(BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::new(value),
            _ => Self::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Trims trailing slashes so endpoint paths can always start with one.
fn normalize_base_url(raw: String) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_api() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8080/api");
        assert_eq!(config.timeout, Duration::from_secs(15));
    }

    #[test]
    fn new_trims_trailing_slashes() {
        let config = ClientConfig::new("https://finance.example.com/api///");
        assert_eq!(config.base_url, "https://finance.example.com/api");
    }

    #[test]
    fn timeout_override_sticks() {
        let config = ClientConfig::default().with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout, Duration::from_secs(3));
    }
}
