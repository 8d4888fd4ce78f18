//! Access decisions across read paths

#[cfg(test)]
mod tests {
    use crate::common::assertions::DecisionAssertions;
    use crate::common::{PrincipalFactory, SiteFactory};
    use access_by_role::access::{DecisionReason, ItemKind, ProtectedItem};
    use access_by_role::admin::ItemRestrictionSubmission;
    use access_by_role::server::AppState;
    use access_by_role::storage::ContentStore;

    fn load(state: &AppState, kind: ItemKind, id: u64) -> ProtectedItem {
        state
            .storage
            .content
            .load_item(kind, id)
            .unwrap()
            .expect("fixture item exists")
    }

    #[test]
    fn test_unrestricted_node_is_visible_to_everyone() {
        let state = SiteFactory::state();
        let home = load(&state, ItemKind::Node, 1);

        for principal in [
            PrincipalFactory::anonymous(),
            PrincipalFactory::viewer(),
            PrincipalFactory::member(),
        ] {
            state
                .access
                .check(&home, &principal)
                .unwrap()
                .assert_allowed();
        }
    }

    #[test]
    fn test_restricted_node_requires_listed_role() {
        let state = SiteFactory::state();
        let members = load(&state, ItemKind::Node, 2);

        state
            .access
            .check(&members, &PrincipalFactory::member())
            .unwrap()
            .assert_allowed();
        state
            .access
            .check(&members, &PrincipalFactory::viewer())
            .unwrap()
            .assert_denied_because(DecisionReason::NoMatchingRole);
        state
            .access
            .check(&members, &PrincipalFactory::anonymous())
            .unwrap()
            .assert_denied_because(DecisionReason::NoMatchingRole);
    }

    #[test]
    fn test_node_bypass_does_not_extend_to_media() {
        let state = SiteFactory::state();
        let members = load(&state, ItemKind::Node, 2);
        let handbook = load(&state, ItemKind::Media, 20);

        let decision = state
            .access
            .check(&members, &PrincipalFactory::moderator())
            .unwrap();
        decision.assert_allowed();
        assert_eq!(decision.reason, DecisionReason::Bypass);

        state
            .access
            .check(&handbook, &PrincipalFactory::moderator())
            .unwrap()
            .assert_denied_because(DecisionReason::NoMatchingRole);
    }

    #[test]
    fn test_media_restriction_follows_bundle() {
        let state = SiteFactory::state();
        let handbook = load(&state, ItemKind::Media, 20);
        let logo = load(&state, ItemKind::Media, 21);
        let orphan = load(&state, ItemKind::Media, 22);

        // Restricted bundle: enforced even though the item flag is off
        state
            .access
            .check(&handbook, &PrincipalFactory::viewer())
            .unwrap()
            .assert_allowed();
        state
            .access
            .check(&handbook, &PrincipalFactory::anonymous())
            .unwrap()
            .assert_denied_because(DecisionReason::NoMatchingRole);

        state
            .access
            .check(&logo, &PrincipalFactory::anonymous())
            .unwrap()
            .assert_allowed();

        // No restriction data at all fails closed
        state
            .access
            .check(&orphan, &PrincipalFactory::viewer())
            .unwrap()
            .assert_denied_because(DecisionReason::NoRestrictionData);
    }

    #[test]
    fn test_restriction_change_is_seen_immediately() {
        let state = SiteFactory::state();
        let viewer = PrincipalFactory::viewer();

        let before = load(&state, ItemKind::Node, 2);
        assert!(state.access.check(&before, &viewer).unwrap().is_deny());

        state
            .item_form()
            .submit(
                ItemKind::Node,
                2,
                ItemRestrictionSubmission {
                    enabled: true,
                    roles: vec!["member".to_string(), "viewer".to_string()],
                },
                &PrincipalFactory::editor(),
            )
            .unwrap();

        let after = load(&state, ItemKind::Node, 2);
        assert!(after.revision > before.revision);
        state.access.check(&after, &viewer).unwrap().assert_allowed();
    }

    #[test]
    fn test_repeated_checks_hit_the_cache() {
        let state = SiteFactory::state();
        let members = load(&state, ItemKind::Node, 2);
        let member = PrincipalFactory::member();

        let first = state.access.check(&members, &member).unwrap();
        let second = state.access.check(&members, &member).unwrap();
        assert_eq!(first, second);

        let stats = state.access.cache().expect("cache enabled by default").stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }
}
