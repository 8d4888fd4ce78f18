//! Administrative endpoints

use crate::access::ItemKind;
use crate::admin::{BundleSettingsSubmission, ItemRestrictionSubmission, SettingsSubmission};
use crate::server::extractors::CurrentPrincipal;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::{AccessError, Result};
use actix_web::{HttpResponse, web};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/settings", web::get().to(get_settings))
            .route("/settings", web::post().to(update_settings))
            .route("/bundles/{kind}/{bundle}", web::get().to(get_bundle))
            .route("/bundles/{kind}/{bundle}", web::post().to(update_bundle)),
    )
    .route("/node/{id}/access", web::get().to(get_node_access))
    .route("/node/{id}/access", web::post().to(update_node_access));
}

fn parse_kind(kind: &str) -> Result<ItemKind> {
    kind.parse()
        .map_err(|_| AccessError::not_found(format!("content kind {}", kind)))
}

async fn get_settings(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(ApiResponse::success(state.settings_form().build()?).to_http_response())
}

async fn update_settings(
    state: web::Data<AppState>,
    principal: CurrentPrincipal,
    body: web::Json<SettingsSubmission>,
) -> Result<HttpResponse> {
    let form = state.settings_form();
    form.submit(body.into_inner(), &principal)?;
    Ok(ApiResponse::success(form.build()?).to_http_response())
}

async fn get_bundle(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let (kind, bundle) = path.into_inner();
    let settings = state.bundle_form().load(parse_kind(&kind)?, &bundle)?;
    Ok(ApiResponse::success(settings).to_http_response())
}

async fn update_bundle(
    state: web::Data<AppState>,
    principal: CurrentPrincipal,
    path: web::Path<(String, String)>,
    body: web::Json<BundleSettingsSubmission>,
) -> Result<HttpResponse> {
    let (kind, bundle) = path.into_inner();
    let saved =
        state
            .bundle_form()
            .submit(parse_kind(&kind)?, &bundle, body.into_inner(), &principal)?;
    Ok(ApiResponse::success(saved).to_http_response())
}

async fn get_node_access(
    state: web::Data<AppState>,
    principal: CurrentPrincipal,
    path: web::Path<u64>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let item = state
        .storage
        .content
        .load_item(ItemKind::Node, id)?
        .ok_or_else(|| AccessError::not_found(format!("node {}", id)))?;
    let view = state.item_form().build(&item, &principal)?;
    Ok(ApiResponse::success(view).to_http_response())
}

async fn update_node_access(
    state: web::Data<AppState>,
    principal: CurrentPrincipal,
    path: web::Path<u64>,
    body: web::Json<ItemRestrictionSubmission>,
) -> Result<HttpResponse> {
    let outcome = state.item_form().submit(
        ItemKind::Node,
        path.into_inner(),
        body.into_inner(),
        &principal,
    )?;
    Ok(ApiResponse::success(outcome).to_http_response())
}
