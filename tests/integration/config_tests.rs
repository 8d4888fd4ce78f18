//! Configuration loading and validation integration tests

#[cfg(test)]
mod tests {
    use crate::common::fixtures::SITE_CONFIG;
    use access_by_role::config::Config;
    use access_by_role::server::AppState;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const EXAMPLE: &str = include_str!("../../config/access.yaml.example");

    fn site_with(replace: &str, with: &str) -> String {
        assert!(SITE_CONFIG.contains(replace), "fixture lacks {:?}", replace);
        SITE_CONFIG.replacen(replace, with, 1)
    }

    /// The shipped example must stay loadable
    #[test]
    fn test_example_config_is_valid() {
        let config = Config::from_yaml(EXAMPLE).unwrap();
        assert_eq!(config.server().port, 8080);
        assert_eq!(config.access.menus.len(), 1);
        assert!(AppState::new(config).is_ok());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SITE_CONFIG.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.access.users.len(), 7);
        assert_eq!(
            config.access.media.restricted_bundles,
            vec!["restricted_document".to_string()]
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_a_config_error() {
        let result = Config::from_file("/nonexistent/access.yaml").await;
        assert!(matches!(result, Err(access_by_role::AccessError::Config(_))));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = tokio_test::block_on(Config::load(None::<&str>)).unwrap();
        assert!(config.access.roles.is_empty());
        assert_eq!(
            config.access.redirect.default_login_path,
            "/user/login".to_string()
        );
        assert!(config.access.cache.enabled);
    }

    #[test]
    fn test_relative_redirect_path_rejected() {
        let yaml = site_with(
            "  default_login_path: /user/login",
            "  default_login_path: /user/login\n  path: members/login",
        );
        let err = Config::from_yaml(&yaml).unwrap_err();
        assert!(err.to_string().contains("Internal URLs must start with a /"));
    }

    #[test]
    fn test_duplicate_role_rejected() {
        let yaml = site_with(
            "  - { id: viewer, label: Viewer }",
            "  - { id: viewer, label: Viewer }\n  - { id: viewer, label: Other }",
        );
        let err = Config::from_yaml(&yaml).unwrap_err();
        assert!(err.to_string().contains("Duplicate role: viewer"));
    }

    #[test]
    fn test_enabled_restriction_without_roles_rejected() {
        let yaml = site_with(
            "restriction: { enabled: true, allowed_roles: [member] } }",
            "restriction: { enabled: true, allowed_roles: [] } }",
        );
        assert!(Config::from_yaml(&yaml).is_err());
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let yaml = site_with(
            "base_url: \"https://www.example.com\"",
            "base_url: \"ftp://www.example.com\"",
        );
        let err = Config::from_yaml(&yaml).unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[test]
    fn test_yaml_round_trip_preserves_config() {
        let config = Config::from_yaml(SITE_CONFIG).unwrap();
        let reparsed = Config::from_yaml(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(config, reparsed);
    }
}
