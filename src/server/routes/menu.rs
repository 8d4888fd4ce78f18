//! Filtered menu endpoint

use crate::access::ItemKind;
use crate::menu::{MenuAccess, MenuLink};
use crate::server::extractors::CurrentPrincipal;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::{AccessError, Result};
use actix_web::{HttpResponse, web};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/menu/{name}", web::get().to(get_menu));
}

async fn get_menu(
    state: web::Data<AppState>,
    principal: CurrentPrincipal,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let name = path.into_inner();
    let menu = state
        .menus
        .get(&name)
        .ok_or_else(|| AccessError::not_found(format!("menu {}", name)))?;

    // The host's own link access: node links follow the regular access check
    let default_access = |link: &MenuLink| match link.url.node_id() {
        Some(id) => match state.storage.content.load_item(ItemKind::Node, id) {
            Ok(Some(item)) if state.access.check_or_deny(&item, &principal).is_allow() => {
                MenuAccess::Allowed
            }
            _ => MenuAccess::Forbidden,
        },
        None => MenuAccess::Allowed,
    };

    let links = state.menu_filter.filter(&menu.links, &default_access);
    Ok(HttpResponse::Ok()
        .insert_header(("Vary", crate::server::middleware::USER_ID_HEADER))
        .json(ApiResponse::success(links)))
}
