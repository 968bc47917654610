use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::{InMemoryUserRepository, UserRepository};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let repository = if config.seed_demo_users {
        InMemoryUserRepository::with_demo_users()
    } else {
        InMemoryUserRepository::new()
    };
    info!(users = repository.count().await?, "User store ready");

    // The repository shares its table across clones; keep one for shutdown reporting
    let app = api::build_app(config.app, &config.server, repository.clone());

    log_endpoints(&config.server.address());

    info!(
        "Starting {} v{} ({:?} graceful shutdown timeout)",
        config.app.name, config.app.version, config.shutdown_timeout
    );

    create_production_app(app, &config.server, config.shutdown_timeout, async move {
        match repository.count().await {
            Ok(count) => info!(users = count, "Shutting down: discarding in-memory users"),
            Err(e) => tracing::error!("Failed to count users during shutdown: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("User service shutdown complete");
    Ok(())
}

fn log_endpoints(address: &str) {
    info!("Available endpoints:");
    for (route, summary) in [
        ("GET    /", "Service description"),
        ("GET    /health", "Health check"),
        ("GET    /users", "Get all users"),
        ("POST   /users", "Create a new user"),
        ("GET    /users/{id}", "Get user by ID"),
        ("PUT    /users/{id}", "Update user by ID"),
        ("DELETE /users/{id}", "Delete user by ID"),
        ("GET    /scalar", "API reference"),
    ] {
        info!("  {route:<20} {summary}");
    }
    info!(
        "Example: curl -X POST http://{address}/users -H 'Content-Type: application/json' \
         -d '{{\"name\":\"Alice\",\"email\":\"alice@example.com\"}}'"
    );
}
