//! Configuration module for the console backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::AppError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Simulated latency of the fixture record source
    pub load_delay: Duration,
    /// Rows per page before the console picks another size
    pub default_page_size: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let bind_addr = parse_var("OSC_BIND_ADDR", "127.0.0.1:8080")?;
        let log_level = env::var("OSC_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let load_delay_ms: u64 = parse_var("OSC_LOAD_DELAY_MS", "1000")?;
        let default_page_size: usize = parse_var("OSC_PAGE_SIZE", "10")?;

        if default_page_size == 0 {
            return Err(AppError::Validation(
                "OSC_PAGE_SIZE must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            bind_addr,
            log_level,
            load_delay: Duration::from_millis(load_delay_ms),
            default_page_size,
        })
    }
}

/// Read `key` from the environment, falling back to `default`, and parse it.
fn parse_var<T: FromStr>(key: &str, default: &str) -> Result<T, AppError> {
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    parse_value(key, &raw)
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("Invalid {} value: {:?}", key, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("OSC_BIND_ADDR");
        env::remove_var("OSC_LOG_LEVEL");
        env::remove_var("OSC_LOAD_DELAY_MS");
        env::remove_var("OSC_PAGE_SIZE");

        let config = Config::from_env().unwrap();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.load_delay, Duration::from_millis(1000));
        assert_eq!(config.default_page_size, 10);
    }

    #[test]
    fn test_parse_value() {
        let size: usize = parse_value("OSC_PAGE_SIZE", " 25 ").unwrap();
        assert_eq!(size, 25);

        let err = parse_value::<u64>("OSC_LOAD_DELAY_MS", "soon").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = parse_value::<SocketAddr>("OSC_BIND_ADDR", "localhost").unwrap_err();
        assert!(err.message().contains("OSC_BIND_ADDR"));
    }
}
