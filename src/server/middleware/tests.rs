//! Middleware tests

use super::helpers::{USER_ID_HEADER, extract_user_id, is_public_route, principal_for};
use crate::config::Config;
use crate::server::AppState;
use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
use actix_web::test as actix_test;
use actix_web::web;

#[test]
fn test_extract_user_id() {
    let mut headers = HeaderMap::new();
    assert_eq!(extract_user_id(&headers), None);

    headers.insert(
        HeaderName::from_static(USER_ID_HEADER),
        HeaderValue::from_static(" 42 "),
    );
    assert_eq!(extract_user_id(&headers), Some(42));

    headers.insert(
        HeaderName::from_static(USER_ID_HEADER),
        HeaderValue::from_static("alice"),
    );
    assert_eq!(extract_user_id(&headers), None);
}

#[test]
fn test_is_public_route() {
    assert!(is_public_route("/health"));
    assert!(!is_public_route("/node/1"));
    assert!(!is_public_route("/admin/settings"));
}

#[actix_web::test]
async fn test_principal_resolution() {
    let config = Config::from_yaml(
        r#"
roles:
  - { id: editor, label: Editor }
users:
  - { id: 7, name: ed, roles: [editor] }
"#,
    )
    .unwrap();
    let state = web::Data::new(AppState::new(config).unwrap());

    let req = actix_test::TestRequest::get()
        .app_data(state.clone())
        .insert_header((USER_ID_HEADER, "7"))
        .to_http_request();
    let principal = principal_for(&req);
    assert_eq!(principal.id, 7);
    assert!(principal.has_role("editor"));
    // Cached in the request extensions
    assert_eq!(principal_for(&req), principal);

    let req = actix_test::TestRequest::get()
        .app_data(state.clone())
        .insert_header((USER_ID_HEADER, "99"))
        .to_http_request();
    assert!(principal_for(&req).is_anonymous);

    let req = actix_test::TestRequest::get().app_data(state).to_http_request();
    assert!(principal_for(&req).is_anonymous);
}
