//! Validators for the access configuration

use super::trait_def::Validate;
use crate::admin::validate_redirect_path;
use crate::auth::roles::is_reserved_role;
use crate::config::models::*;
use crate::redirect::is_external;
use std::collections::HashSet;
use tracing::{debug, warn};

impl Validate for AccessConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating access configuration");

        self.server.validate()?;
        self.redirect.validate()?;
        self.media.validate()?;
        self.cache.validate()?;

        let mut role_ids = HashSet::new();
        for role in &self.roles {
            role.validate()?;
            if !role_ids.insert(role.id.as_str()) {
                return Err(format!("Duplicate role: {}", role.id));
            }
        }
        let known_role = |id: &str| is_reserved_role(id) || role_ids.contains(id);

        let mut bundles = HashSet::new();
        for bundle in &self.bundles {
            bundle.validate()?;
            if !bundles.insert((bundle.kind, bundle.bundle.as_str())) {
                return Err(format!("Duplicate bundle: {} {}", bundle.kind, bundle.bundle));
            }
            if let Some(role) = bundle.default_roles.iter().find(|r| !known_role(r.as_str())) {
                return Err(format!(
                    "Bundle {} references unknown role: {}",
                    bundle.bundle, role
                ));
            }
        }

        let mut user_ids = HashSet::new();
        for user in &self.users {
            if !user_ids.insert(user.id) {
                return Err(format!("Duplicate user id: {}", user.id));
            }
            if let Some(role) = user.roles.iter().find(|r| !known_role(r.as_str())) {
                warn!(user = user.id, role = %role, "User references unknown role");
            }
        }

        let mut items = HashSet::new();
        for entry in &self.content {
            entry.validate()?;
            if !items.insert((entry.kind, entry.id)) {
                return Err(format!("Duplicate content item: {} {}", entry.kind, entry.id));
            }
        }

        let mut menus = HashSet::new();
        for menu in &self.menus {
            if menu.name.is_empty() {
                return Err("Menu name cannot be empty".to_string());
            }
            if !menus.insert(menu.name.as_str()) {
                return Err(format!("Duplicate menu: {}", menu.name));
            }
        }

        debug!("Access configuration validation completed");
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }
        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if let Some(0) = self.workers {
            return Err("Worker count must be greater than 0".to_string());
        }
        let base_url = self
            .base_url()
            .map_err(|e| format!("Invalid base URL '{}': {}", self.base_url, e))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(format!("Base URL must use http or https: {}", self.base_url));
        }
        Ok(())
    }
}

impl Validate for RedirectConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.path {
            validate_redirect_path(path).map_err(|e| e.to_string())?;
        }
        if !self.default_login_path.starts_with('/') && !is_external(&self.default_login_path) {
            return Err(format!(
                "Default login path must start with a / or be an absolute URL: {}",
                self.default_login_path
            ));
        }
        Ok(())
    }
}

impl Validate for MediaConfig {
    fn validate(&self) -> Result<(), String> {
        if self.restricted_bundles.iter().any(|b| b.trim().is_empty()) {
            return Err("Restricted media bundle names cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Validate for CacheConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.max_entries == 0 {
            return Err("Cache max_entries must be greater than 0 when enabled".to_string());
        }
        Ok(())
    }
}

impl Validate for RoleEntry {
    fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Role id cannot be empty".to_string());
        }
        if self.label.trim().is_empty() {
            return Err(format!("Role {} needs a label", self.id));
        }
        Ok(())
    }
}

impl Validate for BundleEntry {
    fn validate(&self) -> Result<(), String> {
        if self.bundle.trim().is_empty() {
            return Err("Bundle name cannot be empty".to_string());
        }
        if let Some(role) = self.default_roles.iter().find(|r| is_reserved_role(r.as_str())) {
            return Err(format!(
                "Reserved role '{}' cannot be a default role of bundle {}",
                role, self.bundle
            ));
        }
        Ok(())
    }
}

impl Validate for ContentEntry {
    fn validate(&self) -> Result<(), String> {
        if self.bundle.trim().is_empty() {
            return Err(format!("Content {} {} needs a bundle", self.kind, self.id));
        }
        if let Some(restriction) = &self.restriction {
            if restriction.enabled && restriction.allowed_roles.is_empty() {
                return Err(format!(
                    "Content {} {} is restricted without any allowed role",
                    self.kind, self.id
                ));
            }
        }
        Ok(())
    }
}
