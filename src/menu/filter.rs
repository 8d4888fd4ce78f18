use super::types::{LinkAccess, LinkUrl, MenuAccess, MenuLink};
use crate::access::{ItemKind, ProtectedItem};
use crate::storage::ContentStore;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::warn;

/// A node that is both published and restricted by role
pub fn is_published_restricted(item: &ProtectedItem) -> bool {
    item.kind == ItemKind::Node && item.published && item.restriction_enabled()
}

/// Overrides the host's menu link access for restricted nodes
#[derive(Clone)]
pub struct MenuVisibilityFilter {
    content: Arc<dyn ContentStore>,
}

impl MenuVisibilityFilter {
    pub fn new(content: Arc<dyn ContentStore>) -> Self {
        Self { content }
    }

    /// Whether the URL is the canonical view of a published, restricted node
    pub fn is_role_restricted_node(&self, url: &LinkUrl) -> Result<bool> {
        let Some(id) = url.node_id() else {
            return Ok(false);
        };
        Ok(self
            .content
            .load_item(ItemKind::Node, id)?
            .is_some_and(|item| is_published_restricted(&item)))
    }

    /// Access for one link, given the host's own result
    pub fn should_show_link(&self, link: &MenuLink, default_access: MenuAccess) -> LinkAccess {
        let access = match self.is_role_restricted_node(&link.url) {
            Ok(true) => MenuAccess::Allowed,
            Ok(false) => default_access,
            Err(e) => {
                warn!(link = %link.id, error = %e, "Menu link lookup failed");
                default_access
            }
        };
        LinkAccess::per_permissions(access)
    }

    /// Keep only allowed links; a hidden parent hides its children
    pub fn filter<F>(&self, links: &[MenuLink], default_access: &F) -> Vec<MenuLink>
    where
        F: Fn(&MenuLink) -> MenuAccess,
    {
        links
            .iter()
            .filter(|link| {
                self.should_show_link(link, default_access(link))
                    .access
                    .is_allowed()
            })
            .map(|link| MenuLink {
                children: self.filter(&link.children, default_access),
                ..link.clone()
            })
            .collect()
    }
}
