//! HTTP surface tests through the public server API

#[cfg(test)]
mod tests {
    use crate::common::SiteFactory;
    use access_by_role::redirect::RedirectEvent;
    use access_by_role::server::middleware::USER_ID_HEADER;
    use access_by_role::server::{HttpServer, ServerBuilder};
    use access_by_role::storage::AccountStore;
    use actix_web::http::{StatusCode, header};
    use actix_web::{test, web};
    use serde_json::Value;
    use std::sync::Arc;

    fn get(uri: &str, user: Option<u64>) -> test::TestRequest {
        let req = test::TestRequest::get().uri(uri);
        match user {
            Some(uid) => req.insert_header((USER_ID_HEADER, uid.to_string())),
            None => req,
        }
    }

    #[actix_web::test]
    async fn test_builder_registers_redirect_listener() {
        let server = ServerBuilder::new()
            .with_config(SiteFactory::config())
            .with_redirect_listener(Arc::new(|event: &mut RedirectEvent| {
                event.options.set_query("reason", "restricted");
            }))
            .build()
            .unwrap();
        let app = test::init_service(HttpServer::create_app(web::Data::new(
            server.state().clone(),
        )))
        .await;

        let resp = test::call_service(&app, get("/node/2", None).to_request()).await;
        assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "https://www.example.com/user/login?destination=/node/2&reason=restricted"
        );
    }

    #[actix_web::test]
    async fn test_builder_requires_config() {
        assert!(ServerBuilder::new().build().is_err());
    }

    #[actix_web::test]
    async fn test_degenerate_account_is_logged_out() {
        let state = SiteFactory::state();
        let accounts = state.storage.accounts.clone();
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let resp = test::call_service(&app, get("/node/1", Some(7)).to_request()).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
        assert!(accounts.load_account(7).unwrap().is_none());

        // The superuser is never treated as degenerate
        let resp = test::call_service(&app, get("/node/1", Some(1)).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_menu_endpoint_for_anonymous_visitor() {
        let app =
            test::init_service(HttpServer::create_app(web::Data::new(SiteFactory::state()))).await;

        let resp = test::call_service(&app, get("/menu/main", None).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let ids: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|link| link["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["home", "members", "docs"]);

        let resp = test::call_service(&app, get("/menu/footer", None).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_media_denial_keeps_forbidden_status() {
        let app =
            test::init_service(HttpServer::create_app(web::Data::new(SiteFactory::state()))).await;

        let resp = test::call_service(&app, get("/media/20", None).to_request()).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert!(resp.headers().get(header::LOCATION).is_none());

        let resp = test::call_service(&app, get("/media/21", None).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
