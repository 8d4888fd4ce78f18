//! Test fixtures and data factories
//!
//! All factories build real objects from the same YAML configuration the
//! gateway binary loads.

use access_by_role::auth::Principal;
use access_by_role::config::Config;
use access_by_role::server::AppState;

/// A small site: two content types, a restricted media bundle and a menu
pub const SITE_CONFIG: &str = r#"
server:
  base_url: "https://www.example.com"
redirect:
  default_login_path: /user/login
media:
  restricted_bundles: [restricted_document]
roles:
  - { id: editor, label: Editor, permissions: ["set node access by role", "set media access by role"] }
  - { id: member, label: Member }
  - { id: viewer, label: Viewer }
  - { id: moderator, label: Moderator, permissions: ["bypass node access by role"] }
  - { id: site_manager, label: Site Manager, permissions: ["manage node access by role", "manage media access by role"] }
bundles:
  - { kind: node, bundle: page, enabled: true, default_roles: [member] }
  - { kind: node, bundle: article, enabled: false }
  - { kind: media, bundle: restricted_document, enabled: true }
users:
  - { id: 1, name: admin }
  - { id: 2, name: ed, roles: [editor] }
  - { id: 3, name: mem, roles: [member] }
  - { id: 4, name: vi, roles: [viewer] }
  - { id: 5, name: mod, roles: [moderator] }
  - { id: 6, name: boss, roles: [site_manager] }
  - { id: 7, name: nobody }
content:
  - { kind: node, id: 1, bundle: page, title: Home }
  - { kind: node, id: 2, bundle: page, title: Members area, restriction: { enabled: true, allowed_roles: [member] } }
  - { kind: node, id: 3, bundle: page, title: Draft, published: false, restriction: { enabled: true, allowed_roles: [member] } }
  - { kind: node, id: 4, bundle: article, title: News }
  - { kind: media, id: 20, bundle: restricted_document, title: Handbook, restriction: { enabled: false, allowed_roles: [viewer] } }
  - { kind: media, id: 21, bundle: image, title: Logo }
  - { kind: media, id: 22, bundle: restricted_document, title: Orphan, restriction: null }
menus:
  - name: main
    links:
      - { id: home, title: Home, url: { type: routed, route: entity.node.canonical, parameters: { node: "1" } } }
      - id: members
        title: Members area
        url: { type: routed, route: entity.node.canonical, parameters: { node: "2" } }
        children:
          - { id: draft, title: Draft, url: { type: routed, route: entity.node.canonical, parameters: { node: "3" } } }
      - { id: docs, title: Docs, url: { type: external, url: "https://docs.example.com" } }
"#;

/// Factory for site configuration and state
pub struct SiteFactory;

impl SiteFactory {
    pub fn config() -> Config {
        Config::from_yaml(SITE_CONFIG).expect("fixture configuration is valid")
    }

    pub fn state() -> AppState {
        AppState::new(Self::config()).expect("fixture state builds")
    }
}

/// Factory for principals matching the fixture users
pub struct PrincipalFactory;

impl PrincipalFactory {
    pub fn anonymous() -> Principal {
        Principal::anonymous()
    }

    pub fn superuser() -> Principal {
        Principal::authenticated(1, "admin", Vec::<String>::new())
    }

    pub fn editor() -> Principal {
        Principal::authenticated(2, "ed", ["editor"])
    }

    pub fn member() -> Principal {
        Principal::authenticated(3, "mem", ["member"])
    }

    pub fn viewer() -> Principal {
        Principal::authenticated(4, "vi", ["viewer"])
    }

    pub fn moderator() -> Principal {
        Principal::authenticated(5, "mod", ["moderator"])
    }

    pub fn site_manager() -> Principal {
        Principal::authenticated(6, "boss", ["site_manager"])
    }
}
