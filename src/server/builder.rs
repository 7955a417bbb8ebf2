//! Server entry point

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use tracing::info;

/// Build the server from a loaded configuration and run it until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting resource gateway");

    let server = HttpServer::new(&config).await?;
    info!(
        "Server starting at: http://{}:{}",
        config.server().host,
        config.server().port
    );
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   GET  /auth/me/permissions - Caller's effective permissions");
    info!("   GET  /auth/me/roles - Caller's roles");
    info!("   *    /users, /teams - Entity CRUD");

    server.start().await
}
