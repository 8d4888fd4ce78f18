//! Helper functions for middleware

use crate::auth::roles::Principal;
use crate::server::AppState;
use actix_web::http::header::HeaderMap;
use actix_web::{HttpMessage, HttpRequest, web};

/// Header carrying the id of the logged-in account
pub const USER_ID_HEADER: &str = "x-user-id";

/// User id from the request headers; absent or malformed means anonymous
pub fn extract_user_id(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

/// Principal for the request, resolved once and kept in the request extensions
pub fn principal_for(req: &HttpRequest) -> Principal {
    if let Some(principal) = req.extensions().get::<Principal>() {
        return principal.clone();
    }
    let user_id = extract_user_id(req.headers());
    let principal = match req.app_data::<web::Data<AppState>>() {
        Some(state) => state.resolve_principal(user_id),
        None => Principal::anonymous(),
    };
    req.extensions_mut().insert(principal.clone());
    principal
}

/// Routes the account guard leaves alone
pub fn is_public_route(path: &str) -> bool {
    const PUBLIC_ROUTES: &[&str] = &["/health"];

    PUBLIC_ROUTES.iter().any(|&route| path.starts_with(route))
}
