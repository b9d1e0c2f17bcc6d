//! Settings for the VIES REST client.

use std::time::Duration;

use crate::core::ViesError;

/// Official VIES REST endpoint.
pub const VIES_URL: &str = "https://ec.europa.eu/taxation_customs/vies/rest-api/check-vat-number";

/// Environment variable overriding [`ViesConfig::endpoint`].
pub const ENV_ENDPOINT: &str = "VIES_ENDPOINT";

/// Environment variable overriding [`ViesConfig::timeout`], in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "VIES_TIMEOUT_SECS";

/// Configuration of a [`ViesClient`](super::ViesClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViesConfig {
    /// URL the `checkVat` requests are posted to.
    pub endpoint: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for ViesConfig {
    fn default() -> Self {
        Self {
            endpoint: VIES_URL.into(),
            timeout: Duration::from_secs(30),
            user_agent: format!("vatid/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ViesConfig {
    /// Defaults overlaid with `VIES_ENDPOINT` and `VIES_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ViesError> {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Overlay values from `lookup` (an environment accessor).
    pub fn with_env_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ViesError> {
        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            self.endpoint = endpoint;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                ViesError::Config(format!("invalid {ENV_TIMEOUT_SECS} value: {secs}"))
            })?;
            self.timeout = Duration::from_secs(secs);
        }
        Ok(self)
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
