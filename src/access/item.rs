//! Protected content items and per-bundle defaults

use crate::auth::rbac::RestrictionCategory;
use crate::auth::roles::RoleSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Entity type of a protected item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Content node (page)
    Node,
    /// Media asset
    Media,
}

impl ItemKind {
    /// Restriction category whose bypass grants apply to this kind
    pub fn category(self) -> RestrictionCategory {
        match self {
            ItemKind::Node => RestrictionCategory::NodeAccess,
            ItemKind::Media => RestrictionCategory::MediaAccess,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Node => "node",
            ItemKind::Media => "media",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "node" => Ok(ItemKind::Node),
            "media" => Ok(ItemKind::Media),
            other => Err(format!("Unknown item kind: {}", other)),
        }
    }
}

/// The two restriction attributes stored on an item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restriction {
    /// Whether role restriction is switched on for the item
    #[serde(default)]
    pub enabled: bool,
    /// Roles allowed to view the item; empty means none selected yet
    #[serde(default)]
    pub allowed_roles: RoleSet,
}

impl Restriction {
    /// Restriction switched on for the given roles
    pub fn enabled_for<I, R>(roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self {
            enabled: true,
            allowed_roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Restriction switched off
    pub fn disabled() -> Self {
        Self::default()
    }
}

/// A content entity carrying restriction attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectedItem {
    pub id: u64,
    pub kind: ItemKind,
    /// Content type (bundle) identifier
    pub bundle: String,
    #[serde(default)]
    pub title: String,
    pub published: bool,
    /// Revision counter, bumped on every restriction or publish change
    #[serde(default)]
    pub revision: u64,
    /// `None` when the item's entity type does not carry the fields
    #[serde(default)]
    pub restriction: Option<Restriction>,
}

impl ProtectedItem {
    /// New item with restriction attributes created switched off
    pub fn new<S: Into<String>>(kind: ItemKind, id: u64, bundle: S) -> Self {
        Self {
            id,
            kind,
            bundle: bundle.into(),
            title: String::new(),
            published: true,
            revision: 0,
            restriction: Some(Restriction::disabled()),
        }
    }

    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    pub fn with_restriction(mut self, restriction: Restriction) -> Self {
        self.restriction = Some(restriction);
        self
    }

    /// Drop the restriction attributes altogether
    pub fn without_restriction_fields(mut self) -> Self {
        self.restriction = None;
        self
    }

    /// Whether the restriction flag exists and is switched on
    pub fn restriction_enabled(&self) -> bool {
        self.restriction.as_ref().is_some_and(|r| r.enabled)
    }

    pub fn has_restriction_fields(&self) -> bool {
        self.restriction.is_some()
    }

    /// Allowed roles, empty when the fields are missing
    pub fn allowed_roles(&self) -> RoleSet {
        self.restriction
            .as_ref()
            .map(|r| r.allowed_roles.clone())
            .unwrap_or_default()
    }

    /// Canonical view path of the item
    pub fn canonical_path(&self) -> String {
        format!("/{}/{}", self.kind, self.id)
    }

    /// Cache tag invalidated whenever this item changes
    pub fn cache_tag(&self) -> String {
        format!("{}:{}", self.kind, self.id)
    }
}

/// Per content-type restriction configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleDefault {
    /// Whether role restriction may be used on this content type
    #[serde(default)]
    pub enabled: bool,
    /// Roles preselected on new items of this type
    #[serde(default)]
    pub default_allowed_roles: RoleSet,
}
