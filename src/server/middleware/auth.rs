//! Authentication middleware

use crate::auth::TokenData;
use crate::server::middleware::helpers::{
    extract_bearer_token, is_public_route, is_self_route, permission_for_method,
};
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{HttpMessage, HttpRequest, web};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use tracing::{debug, warn};

/// Auth middleware for Actix-web
///
/// Introspects the bearer token of every non-public request and, for entity
/// routes, point-checks the permission the HTTP method requires. The
/// resulting [`TokenData`] is stored in the request extensions.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

/// Service implementation for auth middleware
pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
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
            return Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) });
        }

        let service = Rc::clone(&self.service);

        Box::pin(async move {
            match authenticate_request(&req).await {
                Ok(token_data) => {
                    req.extensions_mut().insert(token_data);
                }
                Err(e) => {
                    warn!(path = %req.path(), method = %req.method(), "Request rejected: {}", e);
                    return Ok(req.error_response(e).map_into_right_body());
                }
            }

            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

async fn authenticate_request(req: &ServiceRequest) -> Result<TokenData, GatewayError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .cloned()
        .ok_or_else(|| GatewayError::internal("Application state is not configured"))?;

    if !state.auth.is_enabled() {
        return Ok(TokenData::anonymous());
    }

    let token = extract_bearer_token(req.headers())
        .ok_or_else(|| GatewayError::auth("Missing bearer token"))?;
    let token_data = state.auth.authenticate(&token).await?;

    if is_self_route(req.path()) {
        return Ok(token_data);
    }

    let permission = permission_for_method(req.method()).ok_or_else(|| {
        GatewayError::forbidden(format!("Method {} is not permitted", req.method()))
    })?;
    let decision = state.auth.authorize(&token_data.username, permission).await;
    if !decision.allowed {
        return Err(GatewayError::forbidden(decision.reason.unwrap_or_else(|| {
            format!("Permission '{}' required", permission)
        })));
    }

    debug!(username = %token_data.username, permission, "Request authorized");
    Ok(token_data)
}

/// Principal attached to the request by [`AuthMiddleware`]
pub fn authenticated_user(req: &HttpRequest) -> Result<TokenData, GatewayError> {
    req.extensions()
        .get::<TokenData>()
        .cloned()
        .ok_or_else(|| GatewayError::auth("Request is not authenticated"))
}
