//! Client configuration.

/// Production API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://app.amberflo.io";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Client options for customization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Base URL requests are built from (default: [`DEFAULT_ENDPOINT`]).
    pub endpoint: String,
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ClientOptions {
    /// Load options from environment variables.
    ///
    /// - `METERING_ENDPOINT`: base URL
    /// - `METERING_TIMEOUT_SECONDS`: request timeout
    ///
    /// Absent or unparsable values, and a zero timeout, fall back to the
    /// defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            endpoint: lookup("METERING_ENDPOINT")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.endpoint),
            timeout_seconds: lookup("METERING_TIMEOUT_SECONDS")
                .and_then(|s| s.trim().parse().ok())
                .filter(|&seconds: &u64| seconds > 0)
                .unwrap_or(defaults.timeout_seconds),
        }
    }

    /// Set the endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }
}
