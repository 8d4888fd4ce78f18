//! HTTP route modules

pub mod admin;
pub mod content;
pub mod health;
pub mod menu;

use actix_web::{HttpResponse, web};

/// Standard API response structure
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T>
where
    T: serde::Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// 200 with this body
    pub fn to_http_response(&self) -> HttpResponse {
        HttpResponse::Ok().json(self)
    }
}

/// Register all routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(content::configure_routes)
        .configure(menu::configure_routes)
        .configure(admin::configure_routes);
}
