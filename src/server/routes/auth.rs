//! Caller introspection endpoints

use crate::server::middleware::authenticated_user;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use tracing::debug;

/// Configure `/auth/me` routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth/me")
            .route("/permissions", web::get().to(get_my_permissions))
            .route("/roles", web::get().to(get_my_roles)),
    );
}

#[derive(Debug, Serialize)]
pub struct PermissionsView {
    pub username: String,
    /// Sorted for display; the set itself is unordered
    pub permissions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RolesView {
    pub username: String,
    pub roles: Vec<String>,
}

/// Effective permissions of the caller (direct grants plus one role level)
pub async fn get_my_permissions(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    let user = authenticated_user(&req)?;
    debug!(username = %user.username, "Permissions requested");

    let mut permissions: Vec<String> = state
        .auth
        .checker()
        .get_user_permissions(&user.username)
        .await
        .into_iter()
        .collect();
    permissions.sort();

    Ok(HttpResponse::Ok().json(ApiResponse::success(PermissionsView {
        username: user.username,
        permissions,
    })))
}

/// Roles the caller is a member of, in store order
pub async fn get_my_roles(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    let user = authenticated_user(&req)?;
    debug!(username = %user.username, "Roles requested");

    let roles = state.auth.checker().get_user_roles(&user.username).await;

    Ok(HttpResponse::Ok().json(ApiResponse::success(RolesView {
        username: user.username,
        roles,
    })))
}
