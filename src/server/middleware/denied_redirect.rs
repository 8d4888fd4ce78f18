//! Turns 403 responses for restricted nodes into login redirects

use crate::access::ProtectedItem;
use crate::redirect::RedirectRequest;
use crate::server::AppState;
use crate::server::middleware::helpers::{USER_ID_HEADER, principal_for};
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::{StatusCode, header};
use actix_web::{HttpMessage, HttpResponse, web};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, warn};

/// The item whose access check produced a 403, set by the handler
#[derive(Debug, Clone)]
pub struct DeniedContext {
    pub item: ProtectedItem,
}

/// 403 hook for Actix-web
pub struct DeniedRedirectMiddleware;

impl<S, B> Transform<S, ServiceRequest> for DeniedRedirectMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = DeniedRedirectMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(DeniedRedirectMiddlewareService { service }))
    }
}

/// Service implementation for the 403 hook
pub struct DeniedRedirectMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for DeniedRedirectMiddlewareService<S>
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
        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;
            if res.status() != StatusCode::FORBIDDEN {
                return Ok(res.map_into_left_body());
            }

            let Some(response) = login_redirect(&res) else {
                return Ok(res.map_into_left_body());
            };
            Ok(res.into_response(response).map_into_right_body())
        })
    }
}

fn login_redirect<B>(res: &ServiceResponse<B>) -> Option<HttpResponse> {
    let req = res.request();
    let item = req.extensions().get::<DeniedContext>()?.item.clone();
    let state = req.app_data::<web::Data<AppState>>()?;

    let config = match state.redirect_config() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "Could not load redirect settings, keeping 403");
            return None;
        }
    };
    let principal = principal_for(req);
    let request = RedirectRequest::new(req.path()).with_query_string(req.query_string());

    let decision = state.redirects.resolve(
        &request,
        &principal,
        Some(&item),
        &config,
        state.config.access.federated_auth,
    )?;
    debug!(target = %decision.target, "Replacing 403 with login redirect");

    let status = StatusCode::from_u16(decision.status).unwrap_or(StatusCode::MOVED_PERMANENTLY);
    let mut builder = HttpResponse::build(status);
    builder.insert_header((header::LOCATION, decision.absolute_target(&state.base_url)));
    if decision.cache.cacheable {
        // Only anonymous requests get this response
        builder.insert_header((header::CACHE_CONTROL, "public"));
        builder.insert_header((header::VARY, USER_ID_HEADER));
    }
    builder.insert_header(("Cache-Tag", decision.cache.header_value()));
    Some(builder.finish())
}
