//! Health check endpoint

use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
}

/// Liveness probe; touches neither storage nor the auth backends
pub async fn health_check() -> ActixResult<HttpResponse> {
    debug!("Health check requested");
    Ok(HttpResponse::Ok().json(HealthStatus { status: "ok" }))
}
