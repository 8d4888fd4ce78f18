//! Configuration data models

pub mod access;
pub mod server;

pub use access::*;
pub use server::*;

/// Default bind host
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default public base URL
pub fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

/// Default login path
pub fn default_login_path() -> String {
    crate::redirect::DEFAULT_LOGIN_PATH.to_string()
}

/// Default restricted media bundles
pub fn default_restricted_bundles() -> Vec<String> {
    crate::access::DEFAULT_RESTRICTED_MEDIA_BUNDLES
        .iter()
        .map(|bundle| bundle.to_string())
        .collect()
}

/// Default decision cache capacity
pub fn default_cache_max_entries() -> usize {
    10_000
}

pub fn default_true() -> bool {
    true
}
