//! Application state shared across HTTP handlers

use crate::access::{AccessManager, DecisionCache};
use crate::admin::{BundleSettingsForm, ItemRestrictionForm, SettingsForm};
use crate::auth::rbac::RbacSystem;
use crate::auth::roles::Principal;
use crate::config::Config;
use crate::menu::{Menu, MenuVisibilityFilter};
use crate::redirect::{RedirectListener, RedirectResolver, SiteRedirectConfig};
use crate::storage::StorageLayer;
use crate::utils::error::{AccessError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// HTTP server state shared across handlers
///
/// Every field is cheap to clone; the stores and caches behind them are
/// shared between workers.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    pub storage: StorageLayer,
    pub rbac: Arc<RbacSystem>,
    pub access: AccessManager,
    pub redirects: Arc<RedirectResolver>,
    pub menu_filter: MenuVisibilityFilter,
    pub menus: Arc<HashMap<String, Menu>>,
    pub base_url: Url,
}

impl AppState {
    /// Build state with in-memory storage seeded from configuration
    pub fn new(config: Config) -> Result<Self> {
        let storage = StorageLayer::in_memory(&config.access)?;
        Self::with_storage(config, storage)
    }

    /// Build state on top of existing storage collaborators
    pub fn with_storage(config: Config, storage: StorageLayer) -> Result<Self> {
        let base_url = config
            .server()
            .base_url()
            .map_err(|e| AccessError::config(format!("Invalid base URL: {}", e)))?;

        let rbac = Arc::new(RbacSystem::new(storage.roles.clone()));
        let mut access = AccessManager::new(
            rbac.clone(),
            config.access.media.restricted_bundles.iter().cloned(),
        );
        if config.access.cache.enabled {
            access = access.with_cache(Arc::new(DecisionCache::new(
                config.access.cache.max_entries,
            )));
        }

        let menus = config
            .access
            .menus
            .iter()
            .map(|menu| (menu.name.clone(), menu.clone()))
            .collect();

        Ok(Self {
            menu_filter: MenuVisibilityFilter::new(storage.content.clone()),
            menus: Arc::new(menus),
            redirects: Arc::new(RedirectResolver::new()),
            config: Arc::new(config),
            storage,
            rbac,
            access,
            base_url,
        })
    }

    /// Register a redirect listener; listeners run in registration order
    pub fn with_redirect_listener(mut self, listener: Arc<dyn RedirectListener>) -> Self {
        let resolver = (*self.redirects).clone().with_listener(listener);
        self.redirects = Arc::new(resolver);
        self
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Redirect settings as currently stored
    pub fn redirect_config(&self) -> Result<SiteRedirectConfig> {
        Ok(SiteRedirectConfig::new(self.base_url.clone())
            .with_custom_path(self.storage.settings.redirect_path()?)
            .with_default_login_path(self.config.access.redirect.default_login_path.clone()))
    }

    /// Resolve the principal for a raw user id; unknown ids are anonymous
    pub fn resolve_principal(&self, user_id: Option<u64>) -> Principal {
        let Some(uid) = user_id else {
            return Principal::anonymous();
        };
        match self.storage.accounts.load_account(uid) {
            Ok(Some(principal)) => {
                debug!(uid, "Resolved principal");
                principal
            }
            Ok(None) => {
                warn!(uid, "Unknown user id, treating request as anonymous");
                Principal::anonymous()
            }
            Err(e) => {
                warn!(uid, error = %e, "Account lookup failed, treating request as anonymous");
                Principal::anonymous()
            }
        }
    }

    pub fn item_form(&self) -> ItemRestrictionForm {
        ItemRestrictionForm::new(
            self.rbac.clone(),
            self.storage.content.clone(),
            self.storage.bundles.clone(),
            self.access.clone(),
        )
    }

    pub fn bundle_form(&self) -> BundleSettingsForm {
        BundleSettingsForm::new(self.rbac.clone(), self.storage.bundles.clone())
    }

    pub fn settings_form(&self) -> SettingsForm {
        SettingsForm::new(
            self.rbac.clone(),
            self.storage.settings.clone(),
            self.access.clone(),
        )
    }
}
