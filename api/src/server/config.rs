//! Environment-driven application configuration.
//!
//! Parsing is pure: the lookup function is injected so tests exercise every
//! path without mutating the process environment.

use std::net::SocketAddr;
use std::time::Duration;

use url::Url;

/// Bind address environment variable.
pub const BIND_ADDR_VAR: &str = "EMPLOYEE_API_BIND_ADDR";
/// Upstream base URL environment variable.
pub const BASE_URL_VAR: &str = "EMPLOYEE_SERVER_BASE_URL";
/// Upstream connect timeout environment variable, in milliseconds.
pub const CONNECT_TIMEOUT_VAR: &str = "EMPLOYEE_SERVER_CONNECT_TIMEOUT_MS";
/// Upstream read timeout environment variable, in milliseconds.
pub const READ_TIMEOUT_VAR: &str = "EMPLOYEE_SERVER_READ_TIMEOUT_MS";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_BASE_URL: &str = "http://localhost:8112/api/v1/";
const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 3_000;
const DEFAULT_READ_TIMEOUT_MS: u64 = 5_000;

/// Configuration errors naming the offending variable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddr { var: &'static str, value: String },
    #[error("{var} is not a valid URL: {value}")]
    InvalidBaseUrl { var: &'static str, value: String },
    #[error("{var} is not a valid millisecond count: {value}")]
    InvalidTimeout { var: &'static str, value: String },
}

/// Upstream connection settings.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL the employee endpoints are joined onto; keep the trailing
    /// slash so joins extend rather than replace the path.
    pub base_url: Url,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}

/// Full application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub upstream: UpstreamConfig,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error naming the variable that failed to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration from an arbitrary lookup function.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr {
                    var: BIND_ADDR_VAR,
                    value,
                })?,
            None => DEFAULT_BIND_ADDR
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr {
                    var: BIND_ADDR_VAR,
                    value: DEFAULT_BIND_ADDR.to_owned(),
                })?,
        };

        let base_url = match lookup(BASE_URL_VAR) {
            Some(value) => Url::parse(&value).map_err(|_| ConfigError::InvalidBaseUrl {
                var: BASE_URL_VAR,
                value,
            })?,
            None => Url::parse(DEFAULT_BASE_URL).map_err(|_| ConfigError::InvalidBaseUrl {
                var: BASE_URL_VAR,
                value: DEFAULT_BASE_URL.to_owned(),
            })?,
        };

        let connect_timeout =
            timeout_from(&lookup, CONNECT_TIMEOUT_VAR, DEFAULT_CONNECT_TIMEOUT_MS)?;
        let read_timeout = timeout_from(&lookup, READ_TIMEOUT_VAR, DEFAULT_READ_TIMEOUT_MS)?;

        Ok(Self {
            bind_addr,
            upstream: UpstreamConfig {
                base_url,
                connect_timeout,
                read_timeout,
            },
        })
    }
}

fn timeout_from(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default_ms: u64,
) -> Result<Duration, ConfigError> {
    let millis = match lookup(var) {
        Some(value) => value
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidTimeout { var, value })?,
        None => default_ms,
    };
    Ok(Duration::from_millis(millis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = AppConfig::from_lookup(|_| None).expect("defaults parse");
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(
            config.upstream.base_url.as_str(),
            "http://localhost:8112/api/v1/"
        );
        assert_eq!(config.upstream.connect_timeout, Duration::from_secs(3));
        assert_eq!(config.upstream.read_timeout, Duration::from_secs(5));
    }

    #[test]
    fn overrides_take_effect() {
        let config = AppConfig::from_lookup(|var| match var {
            BIND_ADDR_VAR => Some("127.0.0.1:9999".to_owned()),
            BASE_URL_VAR => Some("https://employees.internal/api/v2/".to_owned()),
            CONNECT_TIMEOUT_VAR => Some("250".to_owned()),
            READ_TIMEOUT_VAR => Some("750".to_owned()),
            _ => None,
        })
        .expect("overrides parse");
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:9999");
        assert_eq!(config.upstream.base_url.host_str(), Some("employees.internal"));
        assert_eq!(config.upstream.connect_timeout, Duration::from_millis(250));
        assert_eq!(config.upstream.read_timeout, Duration::from_millis(750));
    }

    #[rstest]
    #[case::bad_addr(BIND_ADDR_VAR, "not-an-addr")]
    #[case::bad_url(BASE_URL_VAR, "::://nope")]
    #[case::bad_connect_timeout(CONNECT_TIMEOUT_VAR, "fast")]
    #[case::negative_timeout(READ_TIMEOUT_VAR, "-5")]
    fn invalid_values_name_the_variable(#[case] var: &'static str, #[case] value: &str) {
        let value = value.to_owned();
        let error = AppConfig::from_lookup(|v| (v == var).then(|| value.clone()))
            .expect_err("invalid value rejected");
        assert!(error.to_string().contains(var), "error names {var}: {error}");
    }
}
