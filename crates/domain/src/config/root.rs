use serde::{Deserialize, Serialize};
use std::path::Path;

use super::diagnostics::DiagnosticsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::lookup::LookupConfig;
use crate::name_server::NameServer;

const LOCAL_CONFIG_PATH: &str = "ferrous-nslookup.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-nslookup/config.toml";

/// Main configuration structure for ferrous-nslookup
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Default server, type expression, recursion flag and timeout
    #[serde(default)]
    pub lookup: LookupConfig,

    /// Start-up diagnostics
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-nslookup.toml in current directory
    /// 3. /etc/ferrous-nslookup/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(query_type) = overrides.query_type {
            self.lookup.query_type = query_type;
        }
        if overrides.recurse {
            self.lookup.recursion_desired = true;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.lookup.timeout_ms = timeout_ms;
        }
        if overrides.no_diagnostics {
            self.diagnostics.enabled = false;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lookup.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.lookup.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Query timeout cannot be 0".to_string(),
            ));
        }

        self.default_server()?;

        if !self.logging.is_valid_level() {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// The configured server, with the configured port unless it names its own.
    pub fn default_server(&self) -> Result<NameServer, ConfigError> {
        let server: NameServer = self
            .lookup
            .server
            .parse()
            .map_err(|e| ConfigError::Validation(format!("lookup.server: {}", e)))?;

        let has_explicit_port =
            self.lookup.server.starts_with('[') || self.lookup.server.matches(':').count() == 1;
        if has_explicit_port {
            Ok(server)
        } else {
            Ok(NameServer::new(server.host(), self.lookup.port))
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub query_type: Option<String>,
    pub recurse: bool,
    pub timeout_ms: Option<u64>,
    pub no_diagnostics: bool,
    pub log_level: Option<String>,
}
