use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Synthetic answers for every name no container knows about.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SafeBoxConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_ipv4")]
    pub ipv4: String,

    #[serde(default = "default_ipv6")]
    pub ipv6: String,

    /// Domain suffixes that are never synthesized.
    #[serde(default)]
    pub bypass: Vec<String>,
}

impl Default for SafeBoxConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            ipv4: default_ipv4(),
            ipv6: default_ipv6(),
            bypass: vec![],
        }
    }
}

impl SafeBoxConfig {
    pub fn ipv4_addr(&self) -> Result<Ipv4Addr, ConfigError> {
        self.ipv4.parse().map_err(|_| {
            ConfigError::Validation(format!("Invalid safe box IPv4 address: {}", self.ipv4))
        })
    }

    pub fn ipv6_addr(&self) -> Result<Ipv6Addr, ConfigError> {
        self.ipv6.parse().map_err(|_| {
            ConfigError::Validation(format!("Invalid safe box IPv6 address: {}", self.ipv6))
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ipv4_addr()?;
        self.ipv6_addr()?;
        Ok(())
    }
}

fn default_ipv4() -> String {
    "127.0.0.1".to_string()
}

fn default_ipv6() -> String {
    "::1".to_string()
}
