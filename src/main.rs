use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use activity_signup::config::ServerConfig;
use activity_signup::database::ActivityRegistry;
use activity_signup::web::build_router;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();

    let registry = Arc::new(ActivityRegistry::seeded());
    info!(activities = registry.len().await, "registry seeded");

    let app = build_router(registry, &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr()).await {
        Ok(l) => l,
        Err(e) => {
            warn!(
                "Could not bind {}: {}. Trying fallback {}",
                config.bind_addr(),
                e,
                config.fallback_addr()
            );
            match tokio::net::TcpListener::bind(config.fallback_addr()).await {
                Ok(l) => l,
                Err(e) => {
                    error!("Could not bind fallback {}: {}", config.fallback_addr(), e);
                    std::process::exit(1);
                }
            }
        }
    };

    match listener.local_addr() {
        Ok(addr) => info!("Server running on http://{}", addr),
        Err(e) => warn!("Could not read bound address: {}", e),
    }

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}
