//! Configuration management for PhoneDB.
//!
//! This module handles loading and validating configuration from environment variables.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the PhoneDB engine.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis connection URL
    pub redis_url: String,

    /// Store response timeout in seconds (default: 10)
    pub response_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `REDIS_URL`: Redis connection URL (default: "redis://127.0.0.1:6379/")
    /// - `REDIS_RESPONSE_TIMEOUT_SECS`: Store response timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let redis_url =
            env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379/".to_string());

        // Validate URL scheme before handing it to the client
        if !redis_url.starts_with("redis://")
            && !redis_url.starts_with("rediss://")
            && !redis_url.starts_with("redis+unix://")
        {
            return Err(ConfigError::InvalidValue {
                var: "REDIS_URL".to_string(),
                reason: "Must start with redis://, rediss:// or redis+unix://".to_string(),
            });
        }

        let response_timeout = Self::parse_env_u64("REDIS_RESPONSE_TIMEOUT_SECS", 10)?;

        if response_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REDIS_RESPONSE_TIMEOUT_SECS".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            redis_url,
            response_timeout,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            redis_url: "redis://127.0.0.1:6379/".to_string(),
            response_timeout: 10,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.redis_url, "redis://127.0.0.1:6379/");
        assert_eq!(config.response_timeout, 10);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        env::remove_var("REDIS_URL");
        env::remove_var("REDIS_RESPONSE_TIMEOUT_SECS");
        env::remove_var("LOG_LEVEL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.redis_url, "redis://127.0.0.1:6379/");
        assert_eq!(config.response_timeout, 10);
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("REDIS_URL", "redis://cache.internal:6380/2");
        guard.set("REDIS_RESPONSE_TIMEOUT_SECS", "30");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.redis_url, "redis://cache.internal:6380/2");
        assert_eq!(config.response_timeout, 30);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("REDIS_URL", "http://not-redis");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "REDIS_URL");
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_timeout() {
        let mut guard = EnvGuard::new();
        guard.set("REDIS_RESPONSE_TIMEOUT_SECS", "soon");

        let result = Config::from_env();
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_config_from_env_zero_timeout() {
        let mut guard = EnvGuard::new();
        guard.set("REDIS_RESPONSE_TIMEOUT_SECS", "0");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "REDIS_RESPONSE_TIMEOUT_SECS");
        }
    }
}
