//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with OpenAPI documentation, tracing and timeouts
//! - The liveness endpoint
//! - Graceful shutdown coordination
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//!
//! let config = ServerConfig::default();
//! let app = create_router::<ApiDoc>(api_routes, &config).merge(health_router(app_info!()));
//!
//! create_production_app(app, &config, Duration::from_secs(30), async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{OPENAPI_JSON_PATH, create_production_app, create_router};
pub use health::{HealthResponse, health_handler, health_router};
pub use shutdown::ShutdownCoordinator;
