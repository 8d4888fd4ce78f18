use serde::{Deserialize, Serialize};
use url::{Url, form_urlencoded};

/// Login path used when nothing else is configured
pub const DEFAULT_LOGIN_PATH: &str = "/user/login";

/// Query parameter carrying the post-login destination
pub const DESTINATION_PARAM: &str = "destination";

/// Status code of login redirects
pub const REDIRECT_STATUS: u16 = 301;

/// Cache tag shared by all 4xx-derived responses
pub const RESPONSE_CACHE_TAG: &str = "4xx-response";

/// The denied request, as seen by the resolver
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectRequest {
    /// Site-relative path, e.g. `/about`
    pub path: String,
    /// Decoded query pairs in request order
    pub query: Vec<(String, String)>,
}

impl RedirectRequest {
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Parse a raw query string such as `a=1&b=2`
    pub fn with_query_string(mut self, query: &str) -> Self {
        self.query = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        self
    }

    pub fn with_param<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Copy of the request without any caller-supplied destination
    pub fn without_destination(&self) -> Self {
        Self {
            path: self.path.clone(),
            query: self
                .query
                .iter()
                .filter(|(k, _)| k != DESTINATION_PARAM)
                .cloned()
                .collect(),
        }
    }

    /// Path plus `?query` when a query is present
    pub fn path_with_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, super::resolver::encode_query(&self.query))
        }
    }
}

/// Active federated authentication modules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederatedAuth {
    #[serde(default)]
    pub samlauth: bool,
    #[serde(default)]
    pub simplesamlphp_auth: bool,
}

impl FederatedAuth {
    /// Fixed login path of the active module; `samlauth` wins over `simplesamlphp_auth`
    pub fn login_path(&self) -> Option<&'static str> {
        if self.samlauth {
            Some("/saml/login")
        } else if self.simplesamlphp_auth {
            Some("/saml_login")
        } else {
            None
        }
    }
}

/// Site-level redirect settings resolved for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRedirectConfig {
    pub custom_redirect_path: Option<String>,
    pub default_login_path: String,
    /// Absolute base URL of the site, used for external destinations
    pub base_url: Url,
}

impl SiteRedirectConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            custom_redirect_path: None,
            default_login_path: DEFAULT_LOGIN_PATH.to_string(),
            base_url,
        }
    }

    pub fn with_custom_path<S: Into<String>>(mut self, path: Option<S>) -> Self {
        self.custom_redirect_path = path.map(Into::into);
        self
    }

    pub fn with_default_login_path<S: Into<String>>(mut self, path: S) -> Self {
        self.default_login_path = path.into();
        self
    }

    /// Absolute URL of a site-relative path
    pub fn absolute(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

/// Cacheability of a redirect response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheMetadata {
    pub cacheable: bool,
    pub tags: Vec<String>,
}

impl CacheMetadata {
    /// Tags joined for a `Cache-Tag` header
    pub fn header_value(&self) -> String {
        self.tags.join(" ")
    }
}

/// A resolved login redirect
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectDecision {
    /// Site-relative for internal targets, absolute for external ones
    pub target: String,
    pub external: bool,
    pub status: u16,
    pub cache: CacheMetadata,
}

impl RedirectDecision {
    /// Target suitable for a `Location` header
    pub fn absolute_target(&self, base_url: &Url) -> String {
        if self.external {
            self.target.clone()
        } else {
            format!("{}{}", base_url.as_str().trim_end_matches('/'), self.target)
        }
    }
}
