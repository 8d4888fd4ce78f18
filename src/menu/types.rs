use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Route name of the canonical node view
pub const CANONICAL_NODE_ROUTE: &str = "entity.node.canonical";

/// Where a menu link points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LinkUrl {
    Routed {
        route: String,
        #[serde(default)]
        parameters: BTreeMap<String, String>,
    },
    External {
        url: String,
    },
    Unrouted {
        path: String,
    },
}

impl LinkUrl {
    /// Canonical view of a node
    pub fn node(id: u64) -> Self {
        Self::Routed {
            route: CANONICAL_NODE_ROUTE.to_string(),
            parameters: BTreeMap::from([("node".to_string(), id.to_string())]),
        }
    }

    pub fn is_routed(&self) -> bool {
        matches!(self, Self::Routed { .. })
    }

    /// Node id when this is the canonical view of a node
    pub fn node_id(&self) -> Option<u64> {
        match self {
            Self::Routed { route, parameters } if route == CANONICAL_NODE_ROUTE => {
                parameters.get("node")?.parse().ok()
            }
            _ => None,
        }
    }
}

/// A link in a menu tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLink {
    pub id: String,
    pub title: String,
    pub url: LinkUrl,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuLink>,
}

impl MenuLink {
    pub fn new<I: Into<String>, T: Into<String>>(id: I, title: T, url: LinkUrl) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: MenuLink) -> Self {
        self.children.push(child);
        self
    }
}

/// A named menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub name: String,
    #[serde(default)]
    pub links: Vec<MenuLink>,
}

/// Access result for a single link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuAccess {
    Allowed,
    Neutral,
    Forbidden,
}

impl MenuAccess {
    pub fn is_allowed(self) -> bool {
        self == Self::Allowed
    }
}

/// A link access result with its cacheability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkAccess {
    pub access: MenuAccess,
    /// Result varies by the permissions of the viewer
    pub cache_per_permissions: bool,
}

impl LinkAccess {
    pub fn per_permissions(access: MenuAccess) -> Self {
        Self {
            access,
            cache_per_permissions: true,
        }
    }
}
