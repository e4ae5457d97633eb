//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `printbill.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use printbill_domain::error::PrintBillError;
use printbill_domain::id::ServiceId;
use printbill_domain::service::Service;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Services created at startup when missing from the catalog.
    pub services: Vec<ServiceSeed>,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// A `[[services]]` entry. `id` may be a string or an integer.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSeed {
    pub id: ServiceId,
    pub name: String,
    #[serde(default)]
    pub variable_pricing: bool,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ServiceSeed {
    /// Validate the entry into a domain [`Service`].
    ///
    /// # Errors
    ///
    /// Returns [`PrintBillError::Validation`] when the entry breaks a
    /// service invariant.
    pub fn to_service(&self) -> Result<Service, PrintBillError> {
        let mut builder = Service::builder()
            .id(self.id.clone())
            .name(self.name.clone())
            .variable_pricing(self.variable_pricing);
        if let Some(min) = self.min_price {
            builder = builder.min_price(min);
        }
        if let Some(max) = self.max_price {
            builder = builder.max_price(max);
        }
        builder.build()
    }
}

impl Config {
    /// Load configuration from `printbill.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// the resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("printbill.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("PRINTBILL_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("PRINTBILL_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("PRINTBILL_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("PRINTBILL_DATABASE_URL") {
            self.database.url = val;
        }
        if let Ok(val) = std::env::var("PRINTBILL_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        for seed in &self.services {
            seed.to_service().map_err(|err| {
                ConfigError::Validation(format!("service {:?}: {}", seed.id.as_str(), describe(&err)))
            })?;
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

fn describe(err: &PrintBillError) -> String {
    match err {
        PrintBillError::Validation(inner) => inner.to_string(),
        other => other.to_string(),
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:printbill.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "printbilld=info,printbill=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.url, "sqlite:printbill.db?mode=rwc");
        assert!(config.services.is_empty());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [database]
            url = 'sqlite:test.db'

            [logging]
            filter = 'debug'

            [[services]]
            id = '42'
            name = 'Poster print'
            variable_pricing = true
            min_price = 5
            max_price = 100.0

            [[services]]
            id = '3'
            name = 'Business cards'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.database.url, "sqlite:test.db");
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.services.len(), 2);
        assert!(!config.services[1].variable_pricing);

        let poster = config.services[0].to_service().unwrap();
        assert_eq!(poster.min_price, Some(5.0));
        assert_eq!(poster.max_price, Some(100.0));
    }

    #[test]
    fn should_accept_integer_service_id() {
        let toml = "
            [[services]]
            id = 42
            name = 'Poster print'
            variable_pricing = true
        ";
        let config: Config = toml::from_str(toml).unwrap();
        let poster = config.services[0].to_service().unwrap();
        assert_eq!(poster.id.as_str(), "42");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_reject_empty_service_id() {
        let toml = "
            [[services]]
            id = ''
            name = 'Nameless'
        ";
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_valid_port() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_reject_invalid_service_seed() {
        let mut config = Config::default();
        config.services.push(ServiceSeed {
            id: ServiceId::new("bad").unwrap(),
            name: "Bad".to_string(),
            variable_pricing: true,
            min_price: Some(10.0),
            max_price: Some(1.0),
        });

        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: service \"bad\": min_price 10 is greater than max_price 1"
        );
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn should_format_custom_bind_addr() {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9090;
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn should_return_database_url() {
        let config = Config::default();
        assert_eq!(config.database_url(), "sqlite:printbill.db?mode=rwc");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [server]
            port = 8080
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.url, "sqlite:printbill.db?mode=rwc");
    }
}
