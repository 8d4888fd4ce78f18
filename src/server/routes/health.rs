//! Health check endpoint

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

/// Health status
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: Cow<'static, str>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: Cow<'static, str>,
    /// Commit the binary was built from
    pub git_hash: Cow<'static, str>,
    /// Decision cache counters, when the cache is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<crate::access::CacheStats>,
}

/// Basic health check endpoint
pub async fn health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    let build = crate::build_info();
    let health_status = HealthStatus {
        status: Cow::Borrowed("healthy"),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(build.version),
        git_hash: Cow::Borrowed(build.git_hash),
        cache: state.access.cache().map(|cache| cache.stats()),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(health_status)))
}
