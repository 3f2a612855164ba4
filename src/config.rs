//! Server Configuration
//!
//! Read from the environment (a `.env` file is loaded first by `main`).

use anyhow::{Context, Result};
use std::env;

pub const HOST_VAR: &str = "SOLID_HOST";
pub const PORT_VAR: &str = "SOLID_PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseConfig {
    /// Interface to bind
    pub host: String,
    /// TCP port to listen on
    pub port: u16,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ShowcaseConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR).filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup(PORT_VAR) {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("{} must be a port number, got '{}'", PORT_VAR, port))?;
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ShowcaseConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ShowcaseConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_overrides() {
        let config =
            ShowcaseConfig::from_lookup(lookup_from(&[(HOST_VAR, "127.0.0.1"), (PORT_VAR, " 3005 ")])).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:3005");
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = ShowcaseConfig::from_lookup(lookup_from(&[(PORT_VAR, "eighty")])).unwrap_err();
        assert!(err.to_string().contains("SOLID_PORT must be a port number"));
    }
}
