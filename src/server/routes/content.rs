//! Content view endpoints

use crate::access::{ItemKind, ProtectedItem};
use crate::server::extractors::CurrentPrincipal;
use crate::server::middleware::DeniedContext;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::{AccessError, Result};
use actix_web::{HttpMessage, HttpRequest, HttpResponse, web};
use tracing::debug;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/node/{id}", web::get().to(view_node))
        .route("/media/{id}", web::get().to(view_media));
}

async fn view_node(
    req: HttpRequest,
    state: web::Data<AppState>,
    principal: CurrentPrincipal,
    path: web::Path<u64>,
) -> Result<HttpResponse> {
    view_item(&req, &state, &principal, ItemKind::Node, path.into_inner())
}

async fn view_media(
    req: HttpRequest,
    state: web::Data<AppState>,
    principal: CurrentPrincipal,
    path: web::Path<u64>,
) -> Result<HttpResponse> {
    view_item(&req, &state, &principal, ItemKind::Media, path.into_inner())
}

/// Load an item and run the access check; denials carry the item for the 403 hook
fn view_item(
    req: &HttpRequest,
    state: &AppState,
    principal: &CurrentPrincipal,
    kind: ItemKind,
    id: u64,
) -> Result<HttpResponse> {
    let item: ProtectedItem = state
        .storage
        .content
        .load_item(kind, id)?
        .ok_or_else(|| AccessError::not_found(format!("{} {}", kind, id)))?;

    let decision = state.access.check_or_deny(&item, principal);
    if decision.is_deny() {
        debug!(kind = %kind, item = id, reason = ?decision.reason, "Access denied");
        req.extensions_mut().insert(DeniedContext { item });
        return Err(AccessError::forbidden(format!("Access denied to {} {}", kind, id)));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(item)))
}
