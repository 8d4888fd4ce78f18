//! Environment overrides

use super::models::*;
use crate::utils::error::{AccessError, Result};
use std::env;
use tracing::debug;

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(AccessError::config(format!(
            "Invalid boolean for {}: {}",
            name, other
        ))),
    }
}

impl AccessConfig {
    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Override settings from `ACCESS_*` environment variables
    pub fn apply_env(&mut self) -> Result<()> {
        debug!("Applying environment overrides");

        if let Ok(host) = env::var("ACCESS_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("ACCESS_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| AccessError::config(format!("Invalid port: {}", e)))?;
        }
        if let Ok(base_url) = env::var("ACCESS_BASE_URL") {
            self.server.base_url = base_url;
        }
        if let Ok(path) = env::var("ACCESS_REDIRECT_PATH") {
            self.redirect.path = Some(path).filter(|p| !p.is_empty());
        }
        if let Ok(flag) = env::var("ACCESS_SAMLAUTH") {
            self.federated_auth.samlauth = parse_flag("ACCESS_SAMLAUTH", &flag)?;
        }
        if let Ok(flag) = env::var("ACCESS_SIMPLESAMLPHP_AUTH") {
            self.federated_auth.simplesamlphp_auth =
                parse_flag("ACCESS_SIMPLESAMLPHP_AUTH", &flag)?;
        }
        Ok(())
    }
}
