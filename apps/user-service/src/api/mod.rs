use axum::Router;
use axum_helpers::server::{create_router, health_router};
use core_config::{AppInfo, server::ServerConfig};
use domain_users::{InMemoryUserRepository, UserService, handlers};

use crate::openapi::ApiDoc;

pub mod index;

/// Creates the API routes: the users resource under `/users`, the
/// service description at `/` and the liveness probe at `/health`.
pub fn routes(app: AppInfo, repository: InMemoryUserRepository) -> Router {
    let service = UserService::new(repository);

    Router::new()
        .nest("/users", handlers::router(service))
        .merge(index::router(app))
        .merge(health_router(app))
}

/// Assembles the whole application: API routes, docs and middleware.
///
/// Every route, `/health` included, runs under the tracing and timeout layers.
pub fn build_app(
    app: AppInfo,
    server: &ServerConfig,
    repository: InMemoryUserRepository,
) -> Router {
    // create_router adds docs/middleware to our composed routes
    create_router::<ApiDoc>(routes(app, repository), server)
}
