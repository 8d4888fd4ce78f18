//! Login redirects for anonymous visitors denied access to restricted content

pub mod listener;
pub mod resolver;
pub mod types;

pub use listener::{RedirectEvent, RedirectListener, RedirectListeners, RedirectOptions};
pub use resolver::{RedirectResolver, encode_query, is_external, login_path};
pub use types::{
    CacheMetadata, DEFAULT_LOGIN_PATH, DESTINATION_PARAM, FederatedAuth, REDIRECT_STATUS,
    RESPONSE_CACHE_TAG, RedirectDecision, RedirectRequest, SiteRedirectConfig,
};
