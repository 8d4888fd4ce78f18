//! Menu visibility over the fixture site

#[cfg(test)]
mod tests {
    use crate::common::{PrincipalFactory, SiteFactory};
    use access_by_role::access::ItemKind;
    use access_by_role::auth::Principal;
    use access_by_role::menu::{MenuAccess, MenuLink};
    use access_by_role::server::AppState;
    use access_by_role::storage::ContentStore;

    fn visible(state: &AppState, principal: &Principal) -> Vec<MenuLink> {
        let menu = state.menus.get("main").expect("fixture menu");
        let default_access = |link: &MenuLink| match link.url.node_id() {
            Some(id) => match state.storage.content.load_item(ItemKind::Node, id) {
                Ok(Some(item)) if state.access.check_or_deny(&item, principal).is_allow() => {
                    MenuAccess::Allowed
                }
                _ => MenuAccess::Forbidden,
            },
            None => MenuAccess::Allowed,
        };
        state.menu_filter.filter(&menu.links, &default_access)
    }

    fn ids(links: &[MenuLink]) -> Vec<&str> {
        links.iter().map(|link| link.id.as_str()).collect()
    }

    #[test]
    fn test_anonymous_sees_published_restricted_link() {
        let state = SiteFactory::state();
        let links = visible(&state, &PrincipalFactory::anonymous());

        assert_eq!(ids(&links), vec!["home", "members", "docs"]);
        // The unpublished child keeps the regular decision
        assert!(links[1].children.is_empty());
    }

    #[test]
    fn test_member_sees_restricted_draft() {
        let state = SiteFactory::state();
        let links = visible(&state, &PrincipalFactory::member());

        assert_eq!(ids(&links), vec!["home", "members", "docs"]);
        assert_eq!(ids(&links[1].children), vec!["draft"]);
    }

    #[test]
    fn test_unpublishing_hides_link_again() {
        let state = SiteFactory::state();
        state
            .storage
            .content
            .set_published(ItemKind::Node, 2, false)
            .unwrap();

        let links = visible(&state, &PrincipalFactory::viewer());
        assert_eq!(ids(&links), vec!["home", "docs"]);
    }

    #[test]
    fn test_disabling_restriction_restores_default_access() {
        let state = SiteFactory::state();
        let member = PrincipalFactory::member();
        let restricted = state
            .menu_filter
            .is_role_restricted_node(&state.menus["main"].links[1].url)
            .unwrap();
        assert!(restricted);

        state
            .item_form()
            .submit(
                ItemKind::Node,
                2,
                Default::default(),
                &PrincipalFactory::editor(),
            )
            .unwrap();

        let restricted = state
            .menu_filter
            .is_role_restricted_node(&state.menus["main"].links[1].url)
            .unwrap();
        assert!(!restricted);
        assert_eq!(ids(&visible(&state, &member)), vec!["home", "members", "docs"]);
    }
}
