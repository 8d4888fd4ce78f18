//! Removes accounts that hold no role besides `authenticated`

use crate::server::AppState;
use crate::server::middleware::helpers::{is_public_route, principal_for};
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header;
use actix_web::{HttpResponse, web};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use tracing::{info, warn};

/// Degenerate-account guard for Actix-web
pub struct AccountGuardMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AccountGuardMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AccountGuardMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccountGuardMiddlewareService { service }))
    }
}

/// Service implementation for the account guard
pub struct AccountGuardMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AccountGuardMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if is_public_route(req.path()) {
            let fut = self.service.call(req);
            return Box::pin(async move { Ok(fut.await?.map_into_left_body()) });
        }

        let principal = principal_for(req.request());
        let state = req
            .app_data::<web::Data<AppState>>()
            .filter(|_| principal.is_degenerate())
            .cloned();

        if let Some(state) = state {
            info!(
                uid = principal.id,
                username = %principal.name,
                "The account was automatically deleted since the account had no roles"
            );
            if let Err(e) = state.storage.sessions.logout(&principal) {
                warn!(uid = principal.id, error = %e, "Failed to end session");
            }
            if let Err(e) = state.storage.accounts.delete_account(principal.id) {
                warn!(uid = principal.id, error = %e, "Failed to delete account");
            }

            let response = HttpResponse::Found()
                .insert_header((header::LOCATION, "/"))
                .finish()
                .map_into_right_body();
            return Box::pin(async move { Ok(req.into_response(response)) });
        }

        let fut = self.service.call(req);
        Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
    }
}
