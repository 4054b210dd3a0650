use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use super::captive::CaptiveConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::redirect::{RedirectConfig, REDIRECT_ENV_VAR};
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "captive-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/captive-dns/config.toml";

/// Main configuration structure for Captive DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (port, bind address, workers)
    #[serde(default)]
    pub server: ServerConfig,

    /// Answer address override
    #[serde(default)]
    pub redirect: RedirectConfig,

    /// Connectivity-check hostnames used for log classification
    #[serde(default)]
    pub captive: CaptiveConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. captive-dns.toml in current directory
    /// 3. /etc/captive-dns/config.toml
    /// 4. Default configuration
    ///
    /// `CAPTIVE_IP` then overrides the file, and command-line flags
    /// override both.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::get_config_path() {
                Some(found) => Self::from_file(&found)?,
                None => Self::default(),
            },
        };

        let env_redirect = std::env::var(REDIRECT_ENV_VAR).ok();
        config.apply_overrides(env_redirect, cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply the environment override, then command-line overrides on top.
    pub fn apply_overrides(&mut self, env_redirect: Option<String>, overrides: CliOverrides) {
        if let Some(ip) = env_redirect.filter(|ip| !ip.trim().is_empty()) {
            self.redirect.address = Some(ip);
        }
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(ip) = overrides.redirect_ip {
            self.redirect.address = Some(ip);
        }
        if let Some(workers) = overrides.workers {
            self.server.workers = workers;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.server.workers == 0 {
            return Err(ConfigError::Validation(
                "At least one worker is required".to_string(),
            ));
        }

        if self.server.bind_address.parse::<IpAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "Invalid bind address '{}'",
                self.server.bind_address
            )));
        }

        self.redirect.override_address()?;

        Ok(())
    }

    /// `bind_address:dns_port`, as accepted by `SocketAddr::from_str`
    pub fn dns_listen_addr(&self) -> String {
        match self.server.bind_address.parse::<IpAddr>() {
            Ok(IpAddr::V6(v6)) => format!("[{}]:{}", v6, self.server.dns_port),
            _ => format!("{}:{}", self.server.bind_address, self.server.dns_port),
        }
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub redirect_ip: Option<String>,
    pub workers: Option<usize>,
    pub log_level: Option<String>,
}
