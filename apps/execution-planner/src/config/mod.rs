//! Configuration module for the execution planner.
//!
//! Loads a YAML file with environment variable interpolation and validates it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use execution_planner::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! println!("HTTP port: {}", config.server.http_port);
//! ```

mod observability;
mod planner;
mod server;
mod snapshot;

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use observability::{LoggingConfig, ObservabilityConfig};
pub use planner::PlannerConfig;
pub use server::ServerConfig;
pub use snapshot::SnapshotConfig;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Snapshot source configuration.
    #[serde(default)]
    pub snapshot: SnapshotConfig,
    /// Planner configuration.
    #[serde(default)]
    pub planner: PlannerConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration, falling back to defaults when the file does not exist.
///
/// Returns the configuration and whether the file was found.
///
/// # Errors
///
/// Returns a `ConfigError` if an existing file cannot be read, parsed, or validated.
pub fn load_config_or_default(path: Option<&str>) -> Result<(Config, bool), ConfigError> {
    let resolved = path.unwrap_or(DEFAULT_CONFIG_PATH);
    if !Path::new(resolved).exists() {
        return Ok((Config::default(), false));
    }
    load_config(Some(resolved)).map(|config| (config, true))
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map(|m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        }
    })
    .into_owned()
}

/// Validate configuration values.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.http_port == 0 {
        return Err(ConfigError::ValidationError(
            "server.http_port must be non-zero".to_string(),
        ));
    }

    if config.snapshot.quote_balance < Decimal::ZERO {
        return Err(ConfigError::ValidationError(
            "snapshot.quote_balance must not be negative".to_string(),
        ));
    }

    if config.snapshot.base_balance < Decimal::ZERO {
        return Err(ConfigError::ValidationError(
            "snapshot.base_balance must not be negative".to_string(),
        ));
    }

    if config.planner.min_tradable_unit <= Decimal::ZERO {
        return Err(ConfigError::ValidationError(
            "planner.min_tradable_unit must be positive".to_string(),
        ));
    }

    let valid_formats = ["json", "pretty"];
    if !valid_formats.contains(&config.observability.logging.format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {valid_formats:?}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.http_port, 50051);
        assert_eq!(config.server.bind_address, "0.0.0.0");
        assert_eq!(config.snapshot.path, "order_books_data.json");
        assert_eq!(config.snapshot.name_prefix, "Exchange");
        assert_eq!(config.snapshot.quote_balance, dec!(100000));
        assert_eq!(config.snapshot.base_balance, dec!(100));
        assert_eq!(config.planner.min_tradable_unit, dec!(0.00000001));
        assert_eq!(config.observability.logging.format, "json");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_load_minimal_config() {
        let yaml = r"
server:
  http_port: 8080
";

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load minimal config: {e}"),
        };
        assert_eq!(config.server.http_port, 8080);
        assert_eq!(config.snapshot.quote_balance, dec!(100000)); // Default value
    }

    #[test]
    fn test_load_full_config() {
        let yaml = r"
server:
  http_port: 9000
  bind_address: 127.0.0.1
snapshot:
  path: data/books.txt
  name_prefix: Venue
  quote_balance: 5000
  base_balance: '2.5'
planner:
  min_tradable_unit: '0.0001'
observability:
  logging:
    level: debug
    format: pretty
";

        let config = load_config_from_string(yaml).unwrap();
        assert_eq!(config.server.bind_address, "127.0.0.1");
        assert_eq!(config.snapshot.path, "data/books.txt");
        assert_eq!(config.snapshot.name_prefix, "Venue");
        assert_eq!(config.snapshot.quote_balance, dec!(5000));
        assert_eq!(config.snapshot.base_balance, dec!(2.5));
        assert_eq!(config.planner.min_tradable_unit, dec!(0.0001));
        assert_eq!(config.observability.logging.level, "debug");
    }

    #[test]
    fn test_env_var_with_default_when_missing() {
        let input = "path: ${PLANNER_CONFIG_TEST_NONEXISTENT_VAR:-books.txt}";
        let result = interpolate_env_vars(input);

        assert_eq!(result, "path: books.txt");
    }

    #[test]
    #[expect(clippy::literal_string_with_formatting_args)] // ${...} is env var syntax, not format args
    fn test_env_var_with_default_uses_existing() {
        // PATH should always exist
        let input = "path: ${PATH:-default}";
        let result = interpolate_env_vars(input);

        assert_ne!(result, "path: default");
        assert!(result.starts_with("path: "));
    }

    #[test]
    fn test_env_var_without_default_becomes_empty() {
        let input = "name_prefix: ${PLANNER_CONFIG_TEST_UNLIKELY_TO_EXIST}";
        let result = interpolate_env_vars(input);

        assert_eq!(result, "name_prefix: ");
    }

    #[test]
    fn test_validation_zero_port() {
        let yaml = r"
server:
  http_port: 0
";

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for zero port");
        };
        assert!(err.to_string().contains("http_port"));
    }

    #[test]
    fn test_validation_negative_balance() {
        let yaml = r"
snapshot:
  quote_balance: -1
";

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for negative balance");
        };
        assert!(err.to_string().contains("quote_balance"));
    }

    #[test]
    fn test_validation_non_positive_unit() {
        let yaml = r"
planner:
  min_tradable_unit: 0
";

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for zero unit");
        };
        assert!(err.to_string().contains("min_tradable_unit"));
    }

    #[test]
    fn test_validation_invalid_log_format() {
        let yaml = r"
observability:
  logging:
    format: xml
";

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for invalid log format");
        };
        assert!(err.to_string().contains("format"));
    }

    #[test]
    fn test_shipped_config_is_valid() {
        let config = load_config_from_string(include_str!("../../config.yaml")).unwrap();

        assert_eq!(config.snapshot.name_prefix, "Exchange");
        assert_eq!(config.planner.min_tradable_unit, dec!(0.00000001));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let (config, found) =
            load_config_or_default(Some("/definitely/not/here/config.yaml")).unwrap();
        assert!(!found);
        assert_eq!(config.server.http_port, 50051);
    }

    #[test]
    fn test_load_config_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "server:\n  http_port: 7000\n").unwrap();

        let (config, found) = load_config_or_default(path.to_str()).unwrap();
        assert!(found);
        assert_eq!(config.server.http_port, 7000);
    }
}
