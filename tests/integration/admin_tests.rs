//! Administrative submissions against seeded storage

#[cfg(test)]
mod tests {
    use crate::common::{PrincipalFactory, SiteFactory};
    use access_by_role::AccessError;
    use access_by_role::access::ItemKind;
    use access_by_role::admin::{
        BundleSettingsSubmission, INTERNAL_PATH_MESSAGE, ItemRestrictionSubmission,
        NO_ROLES_SELECTED, SettingsSubmission,
    };
    use access_by_role::storage::ContentStore;

    fn roles(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_new_item_gets_bundle_default_roles() {
        let state = SiteFactory::state();
        let item = state
            .item_form()
            .create_item(ItemKind::Node, 100, "page")
            .unwrap();

        assert!(!item.restriction_enabled());
        assert!(item.allowed_roles().contains("member"));

        let stored = state
            .storage
            .content
            .load_item(ItemKind::Node, 100)
            .unwrap()
            .unwrap();
        assert_eq!(stored.allowed_roles(), item.allowed_roles());
    }

    #[test]
    fn test_widget_state_for_editor() {
        let state = SiteFactory::state();
        let item = state
            .storage
            .content
            .load_item(ItemKind::Node, 2)
            .unwrap()
            .unwrap();

        let view = state
            .item_form()
            .build(&item, &PrincipalFactory::editor())
            .unwrap();
        assert!(view.enabled);
        assert!(!view.disabled);
        assert_eq!(view.selected_roles, roles(&["member"]));
        assert_eq!(
            view.current_notice.as_deref(),
            Some("This page is currently only visible to the following roles: Member.")
        );

        // Bypass roles and reserved roles are never offered
        let offered: Vec<&str> = view.options.iter().map(|o| o.id.as_str()).collect();
        assert!(!offered.contains(&"moderator"));
        assert!(!offered.contains(&"anonymous"));
        assert!(offered.contains(&"viewer"));

        let view = state
            .item_form()
            .build(&item, &PrincipalFactory::viewer())
            .unwrap();
        assert!(view.disabled);
    }

    #[test]
    fn test_enabling_without_roles_is_rejected() {
        let state = SiteFactory::state();
        let err = state
            .item_form()
            .submit(
                ItemKind::Node,
                1,
                ItemRestrictionSubmission {
                    enabled: true,
                    roles: Vec::new(),
                },
                &PrincipalFactory::editor(),
            )
            .unwrap_err();

        assert_eq!(err.field(), Some("roles"));
        assert!(err.to_string().contains(NO_ROLES_SELECTED));
    }

    #[test]
    fn test_disabled_bundle_rejects_submission() {
        let state = SiteFactory::state();
        let err = state
            .item_form()
            .submit(
                ItemKind::Node,
                4,
                ItemRestrictionSubmission {
                    enabled: true,
                    roles: roles(&["member"]),
                },
                &PrincipalFactory::editor(),
            )
            .unwrap_err();
        assert!(matches!(err, AccessError::Forbidden(_)));
    }

    #[test]
    fn test_bundle_settings_require_manage_permission() {
        let state = SiteFactory::state();
        let submission = BundleSettingsSubmission {
            enabled: true,
            default_roles: roles(&["viewer"]),
        };

        let err = state
            .bundle_form()
            .submit(ItemKind::Node, "article", submission.clone(), &PrincipalFactory::editor())
            .unwrap_err();
        assert!(matches!(err, AccessError::Forbidden(_)));

        let saved = state
            .bundle_form()
            .submit(ItemKind::Node, "article", submission, &PrincipalFactory::site_manager())
            .unwrap();
        assert!(saved.enabled);
        assert_eq!(
            state.bundle_form().load(ItemKind::Node, "article").unwrap(),
            saved
        );
    }

    #[test]
    fn test_redirect_path_validation() {
        let state = SiteFactory::state();
        let manager = PrincipalFactory::site_manager();

        let err = state
            .settings_form()
            .submit(
                SettingsSubmission {
                    redirect_path: "members/login".to_string(),
                },
                &manager,
            )
            .unwrap_err();
        assert_eq!(err.field(), Some("redirect_path"));
        assert!(err.to_string().contains(INTERNAL_PATH_MESSAGE));

        for path in ["/members/login", "https://sso.example.com/login", ""] {
            state
                .settings_form()
                .submit(
                    SettingsSubmission {
                        redirect_path: path.to_string(),
                    },
                    &manager,
                )
                .unwrap();
            assert_eq!(state.settings_form().build().unwrap().redirect_path, path);
        }
    }

    #[test]
    fn test_settings_flush_cached_decisions() {
        let state = SiteFactory::state();
        let item = state
            .storage
            .content
            .load_item(ItemKind::Node, 2)
            .unwrap()
            .unwrap();
        state
            .access
            .check(&item, &PrincipalFactory::member())
            .unwrap();
        assert_eq!(state.access.cache().unwrap().len(), 1);

        state
            .settings_form()
            .submit(SettingsSubmission::default(), &PrincipalFactory::site_manager())
            .unwrap();
        assert!(state.access.cache().unwrap().is_empty());
    }
}
