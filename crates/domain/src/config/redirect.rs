use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use crate::RedirectAddress;

/// Environment variable holding an override for the answer address.
pub const REDIRECT_ENV_VAR: &str = "CAPTIVE_IP";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RedirectConfig {
    /// Dotted-quad IPv4 address returned for every query. When unset the
    /// first non-loopback interface address is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl RedirectConfig {
    pub fn override_address(&self) -> Result<Option<RedirectAddress>, ConfigError> {
        match self.address.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse::<RedirectAddress>().map(Some).map_err(|_| {
                ConfigError::Validation(format!("Invalid redirect address '{}'", raw))
            }),
        }
    }
}
