//! `GET /`: a short description of the service and its endpoints.

use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::errors::handlers::method_not_allowed;
use core_config::AppInfo;
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceIndex {
    pub message: String,
    pub version: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Endpoints {
    pub users: BTreeMap<String, String>,
    pub health: String,
}

impl ServiceIndex {
    fn describe(app: AppInfo) -> Self {
        let users = [
            ("GET /users", "Get all users"),
            ("POST /users", "Create a new user"),
            ("GET /users/{id}", "Get user by ID"),
            ("PUT /users/{id}", "Update user by ID"),
            ("DELETE /users/{id}", "Delete user by ID"),
        ]
        .into_iter()
        .map(|(route, summary)| (route.to_string(), summary.to_string()))
        .collect();

        Self {
            message: "Welcome to User Service API".to_string(),
            version: app.version.to_string(),
            endpoints: Endpoints {
                users,
                health: "GET /health - Health check".to_string(),
            },
        }
    }
}

/// Describe the service
#[utoipa::path(
    get,
    path = "/",
    tag = "service",
    responses((status = 200, description = "Service description", body = ServiceIndex))
)]
pub async fn index(State(app): State<AppInfo>) -> Json<ServiceIndex> {
    Json(ServiceIndex::describe(app))
}

pub fn router(app: AppInfo) -> Router {
    Router::new()
        .route("/", get(index).fallback(method_not_allowed))
        .with_state(app)
}
