//! Client configuration

use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;
use tracing::warn;

/// Default service root
pub const DEFAULT_BASE_URL: &str = "https://outlook.office.com";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

const ENV_BASE_URL: &str = "OUTLOOK_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "OUTLOOK_TIMEOUT_SECS";

/// Where to reach the service and how long to wait for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlookConfig {
    /// Service root, e.g. `https://outlook.office.com`
    pub base_url: String,
    /// Timeout applied to every request; zero falls back to the default
    #[serde(deserialize_with = "deserialize_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OutlookConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl OutlookConfig {
    /// Defaults overridden by `OUTLOOK_BASE_URL` and `OUTLOOK_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => config.timeout_secs = nonzero_timeout(secs),
                Err(_) => warn!(
                    "Ignoring {}={:?}, using {}s",
                    ENV_TIMEOUT_SECS, raw, DEFAULT_TIMEOUT_SECS
                ),
            }
        }

        config
    }

    /// Set the service root
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout; zero keeps the default
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = nonzero_timeout(secs);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Absolute URL for an API path such as `api/v2.0/me/sendmail`
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// A zero timeout would fail every request, so it maps to the default
fn nonzero_timeout(secs: u64) -> u64 {
    if secs == 0 {
        warn!("Ignoring zero timeout, using {}s", DEFAULT_TIMEOUT_SECS);
        DEFAULT_TIMEOUT_SECS
    } else {
        secs
    }
}

fn deserialize_timeout_secs<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(nonzero_timeout)
}
