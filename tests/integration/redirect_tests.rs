//! Login redirects for denied anonymous visitors

#[cfg(test)]
mod tests {
    use crate::common::assertions::RedirectAssertions;
    use crate::common::{PrincipalFactory, SiteFactory};
    use access_by_role::access::{ItemKind, ProtectedItem};
    use access_by_role::admin::SettingsSubmission;
    use access_by_role::redirect::{
        DESTINATION_PARAM, FederatedAuth, RedirectEvent, RedirectRequest,
    };
    use access_by_role::server::AppState;
    use access_by_role::storage::ContentStore;
    use std::sync::Arc;

    fn item(state: &AppState, kind: ItemKind, id: u64) -> ProtectedItem {
        state.storage.content.load_item(kind, id).unwrap().unwrap()
    }

    fn set_redirect_path(state: &AppState, path: &str) {
        state
            .settings_form()
            .submit(
                SettingsSubmission {
                    redirect_path: path.to_string(),
                },
                &PrincipalFactory::site_manager(),
            )
            .unwrap();
    }

    #[test]
    fn test_default_login_redirect() {
        let state = SiteFactory::state();
        let members = item(&state, ItemKind::Node, 2);
        let request = RedirectRequest::new("/node/2").with_query_string("page=2&sort=title");

        let decision = state.redirects.resolve(
            &request,
            &PrincipalFactory::anonymous(),
            Some(&members),
            &state.redirect_config().unwrap(),
            FederatedAuth::default(),
        );

        decision.assert_target("/user/login?destination=/node/2%3Fpage%3D2%26sort%3Dtitle");
        decision.assert_tagged("4xx-response");
        decision.assert_tagged("node:2");
        assert_eq!(
            decision.unwrap().absolute_target(&state.base_url),
            "https://www.example.com/user/login?destination=/node/2%3Fpage%3D2%26sort%3Dtitle"
        );
    }

    #[test]
    fn test_caller_supplied_destination_is_dropped() {
        let state = SiteFactory::state();
        let members = item(&state, ItemKind::Node, 2);
        let request = RedirectRequest::new("/node/2")
            .with_param(DESTINATION_PARAM, "https://evil.example.net");

        state
            .redirects
            .resolve(
                &request,
                &PrincipalFactory::anonymous(),
                Some(&members),
                &state.redirect_config().unwrap(),
                FederatedAuth::default(),
            )
            .assert_target("/user/login?destination=/node/2");
    }

    #[test]
    fn test_custom_paths() {
        let state = SiteFactory::state();
        let members = item(&state, ItemKind::Node, 2);
        let request = RedirectRequest::new("/node/2");
        let anonymous = PrincipalFactory::anonymous();

        set_redirect_path(&state, "/members/login");
        state
            .redirects
            .resolve(
                &request,
                &anonymous,
                Some(&members),
                &state.redirect_config().unwrap(),
                FederatedAuth::default(),
            )
            .assert_target("/members/login?destination=/node/2");

        // External targets need an absolute destination
        set_redirect_path(&state, "https://sso.example.com/login");
        let decision = state.redirects.resolve(
            &request,
            &anonymous,
            Some(&members),
            &state.redirect_config().unwrap(),
            FederatedAuth::default(),
        );
        decision.assert_target(
            "https://sso.example.com/login?destination=https%3A//www.example.com/node/2",
        );
        assert!(decision.unwrap().external);
    }

    #[test]
    fn test_federated_module_overrides_custom_path() {
        let state = SiteFactory::state();
        let members = item(&state, ItemKind::Node, 2);
        set_redirect_path(&state, "/members/login");

        state
            .redirects
            .resolve(
                &RedirectRequest::new("/node/2"),
                &PrincipalFactory::anonymous(),
                Some(&members),
                &state.redirect_config().unwrap(),
                FederatedAuth {
                    samlauth: false,
                    simplesamlphp_auth: true,
                },
            )
            .assert_target("/saml_login?destination=/node/2");
    }

    #[test]
    fn test_no_redirect_outside_anonymous_node_denials() {
        let state = SiteFactory::state();
        let config = state.redirect_config().unwrap();
        let request = RedirectRequest::new("/node/2");
        let members = item(&state, ItemKind::Node, 2);
        let home = item(&state, ItemKind::Node, 1);
        let handbook = item(&state, ItemKind::Media, 20);
        let anonymous = PrincipalFactory::anonymous();
        let auth = FederatedAuth::default();

        assert!(
            state
                .redirects
                .resolve(&request, &PrincipalFactory::viewer(), Some(&members), &config, auth)
                .is_none()
        );
        assert!(
            state
                .redirects
                .resolve(&request, &anonymous, Some(&home), &config, auth)
                .is_none()
        );
        assert!(
            state
                .redirects
                .resolve(&request, &anonymous, Some(&handbook), &config, auth)
                .is_none()
        );
        assert!(
            state
                .redirects
                .resolve(&request, &anonymous, None, &config, auth)
                .is_none()
        );
    }

    #[test]
    fn test_listener_can_rewrite_redirect() {
        let state = SiteFactory::state().with_redirect_listener(Arc::new(
            |event: &mut RedirectEvent| {
                event.url = "https://idp.example.org/start".to_string();
                event.options.set_query("source", "gateway");
            },
        ));
        let members = item(&state, ItemKind::Node, 2);

        let decision = state.redirects.resolve(
            &RedirectRequest::new("/node/2"),
            &PrincipalFactory::anonymous(),
            Some(&members),
            &state.redirect_config().unwrap(),
            FederatedAuth::default(),
        );

        // The destination was computed for an internal target before the rewrite
        decision.assert_target(
            "https://idp.example.org/start?destination=/node/2&source=gateway",
        );
        assert!(decision.unwrap().external);
    }
}
