//! Redirect resolution for denied anonymous requests

use super::listener::{RedirectEvent, RedirectListener, RedirectListeners, RedirectOptions};
use super::types::{
    CacheMetadata, DESTINATION_PARAM, FederatedAuth, REDIRECT_STATUS, RESPONSE_CACHE_TAG,
    RedirectDecision, RedirectRequest, SiteRedirectConfig,
};
use crate::access::{ItemKind, ProtectedItem};
use crate::auth::roles::Principal;
use std::sync::Arc;
use tracing::{debug, info};
use url::{Url, form_urlencoded};

/// Encode query pairs, keeping `/` readable
pub fn encode_query(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
        .replace("%2F", "/")
}

/// Whether a path is an absolute URL pointing off-site
pub fn is_external(path: &str) -> bool {
    let path = path.trim();
    if path.starts_with("//") {
        return true;
    }
    Url::parse(path).is_ok_and(|url| url.has_host())
}

/// Login target before destination handling; first match wins
pub fn login_path(config: &SiteRedirectConfig, auth: FederatedAuth) -> String {
    if let Some(path) = auth.login_path() {
        return path.to_string();
    }
    match config.custom_redirect_path.as_deref() {
        Some(path) if !path.trim().is_empty() => path.trim().to_string(),
        _ => config.default_login_path.clone(),
    }
}

/// Resolves login redirects and runs the listener chain
#[derive(Debug, Clone, Default)]
pub struct RedirectResolver {
    listeners: RedirectListeners,
}

impl RedirectResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listener(mut self, listener: Arc<dyn RedirectListener>) -> Self {
        self.listeners.register(listener);
        self
    }

    pub fn listeners(&self) -> &RedirectListeners {
        &self.listeners
    }

    /// Resolve the redirect for a denied request
    ///
    /// Returns `None` when the denial is not ours to handle: the principal is
    /// authenticated, or the request has no node context with restriction
    /// switched on.
    pub fn resolve(
        &self,
        request: &RedirectRequest,
        principal: &Principal,
        item: Option<&ProtectedItem>,
        config: &SiteRedirectConfig,
        auth: FederatedAuth,
    ) -> Option<RedirectDecision> {
        if !principal.is_anonymous {
            return None;
        }
        let item = item.filter(|item| item.kind == ItemKind::Node)?;
        if !item.restriction_enabled() {
            debug!(node = item.id, "Denied node is not role-restricted, leaving 403");
            return None;
        }

        let path = login_path(config, auth);
        let request = request.without_destination();
        let destination = if is_external(&path) {
            config.absolute(&request.path_with_query())
        } else {
            request.path_with_query()
        };

        let mut options = RedirectOptions::default();
        options.set_query(DESTINATION_PARAM, destination);

        let mut event = RedirectEvent::new(path, options);
        self.listeners.dispatch(&mut event);

        let external = is_external(&event.url);
        let target = render_target(&event.url, &event.options.query);

        info!(node = item.id, target = %target, external, "Redirecting anonymous visitor to login");

        Some(RedirectDecision {
            target,
            external,
            status: REDIRECT_STATUS,
            cache: CacheMetadata {
                cacheable: true,
                tags: vec![RESPONSE_CACHE_TAG.to_string(), item.cache_tag()],
            },
        })
    }
}

fn render_target(url: &str, query: &[(String, String)]) -> String {
    if query.is_empty() {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", url, separator, encode_query(query))
}
