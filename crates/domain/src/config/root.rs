use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

use super::controller::ControllerConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;

const LOCAL_CONFIG_PATH: &str = "rpp.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/rpp/config.toml";

/// Main configuration structure for rpp
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// TXT lookup settings
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Controller connection settings
    #[serde(default)]
    pub controller: ControllerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. rpp.toml in current directory
    /// 3. /etc/rpp/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if !overrides.nameservers.is_empty() {
            self.resolver.nameservers = overrides.nameservers;
        }
        if let Some(port) = overrides.controller_port {
            self.controller.port = port;
        }
        if let Some(ttl) = overrides.ttl {
            self.controller.ttl = ttl;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.controller.port == 0 {
            return Err(ConfigError::Validation(
                "Controller port cannot be 0".to_string(),
            ));
        }

        if self.resolver.attempts == Some(0) {
            return Err(ConfigError::Validation(
                "Resolver attempts must be at least 1".to_string(),
            ));
        }

        if self.resolver.timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "Resolver timeout cannot be 0".to_string(),
            ));
        }

        for server in &self.resolver.nameservers {
            if parse_nameserver(server).is_none() {
                return Err(ConfigError::Validation(format!(
                    "Invalid nameserver '{}'",
                    server
                )));
            }
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Parses `IP`, `IP:PORT` or `[IPv6]:PORT`, defaulting the port to 53.
pub fn parse_nameserver(value: &str) -> Option<SocketAddr> {
    if let Ok(addr) = value.parse::<SocketAddr>() {
        return Some(addr);
    }
    value
        .parse::<IpAddr>()
        .ok()
        .map(|ip| SocketAddr::new(ip, 53))
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub nameservers: Vec<String>,
    pub controller_port: Option<u16>,
    pub ttl: Option<u32>,
    pub log_level: Option<String>,
}
