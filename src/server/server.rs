//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::auth::AuthSystem;
use crate::config::{Config, ServerConfig};
use crate::core::data::{DbAccess, InboundChannel, inbound_factory};
use crate::server::middleware::AuthMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::storage::Database;
use crate::utils::error::{GatewayError, Result};
use actix_cors::Cors;
use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{App, HttpRequest, HttpServer as ActixHttpServer, middleware::DefaultHeaders, web};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server, connecting storage and the auth backends
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let database = Database::new(&config.gateway.storage.database).await?;
        let repository: Arc<dyn DbAccess> = Arc::new(database);
        let data = inbound_factory(InboundChannel::Rest, repository);

        let auth = AuthSystem::new(&config.gateway.auth)?;
        if !auth.is_enabled() {
            if config.gateway.is_development() {
                warn!("Authorization is DISABLED: every request runs as an anonymous principal");
            } else {
                error!(
                    environment = %config.gateway.environment,
                    "Authorization is DISABLED outside development: every request runs as an anonymous principal"
                );
            }
        }

        Ok(Self::with_state(AppState::new(config.clone(), auth, data)))
    }

    /// Create a server over prepared state
    pub fn with_state(state: AppState) -> Self {
        Self {
            config: state.config.gateway.server.clone(),
            state,
        }
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let cors = Self::build_cors(&state.config.gateway.server);

        App::new()
            .app_data(state)
            .app_data(web::JsonConfig::default().error_handler(json_error))
            .app_data(web::QueryConfig::default().error_handler(query_error))
            .wrap(AuthMiddleware)
            .wrap(DefaultHeaders::new().add(("Server", "Resource-Gateway")))
            .wrap(cors)
            .wrap(TracingLogger::default())
            .configure(routes::health::configure_routes)
            .configure(routes::auth::configure_routes)
            .configure(routes::entities::configure_routes)
    }

    fn build_cors(server: &ServerConfig) -> Cors {
        let cors_config = &server.cors;
        let mut cors = Cors::default();

        if cors_config.enabled {
            if cors_config.allows_all_origins() {
                cors = cors.allow_any_origin();
            } else {
                for origin in &cors_config.allowed_origins {
                    cors = cors.allowed_origin(origin);
                }
            }

            cors = cors
                .allow_any_method()
                .allow_any_header()
                .max_age(cors_config.max_age as usize);

            if cors_config.allow_credentials {
                cors = cors.supports_credentials();
            }
        }

        cors
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let mut server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .client_request_timeout(self.config.request_timeout());
        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| {
                GatewayError::config(format!("Failed to bind to {}: {}", bind_addr, e))
            })?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| GatewayError::internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }
}

/// Malformed request bodies get the gateway's JSON error shape
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    GatewayError::bad_request(format!("Invalid JSON body: {}", err)).into()
}

/// Undecodable query strings are reported like out-of-range pagination
fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    GatewayError::validation(format!("Invalid query string: {}", err)).into()
}
