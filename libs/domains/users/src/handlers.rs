use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{ErrorResponse, IdPath, JsonBody, errors::handlers::method_not_allowed};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;
use crate::service::UserService;

pub const TAG: &str = "users";

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, update_user, delete_user),
    components(schemas(User, CreateUser, UpdateUser, ErrorResponse)),
    tags((name = TAG, description = "User management endpoints"))
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints.
///
/// Routes are relative; the caller nests them (conventionally at `/users`).
/// Any other method on these paths answers 405.
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(list_users::<R>)
                .post(create_user::<R>)
                .fallback(method_not_allowed),
        )
        .route(
            "/{id}",
            get(get_user::<R>)
                .put(update_user::<R>)
                .delete(delete_user::<R>)
                .fallback(method_not_allowed),
        )
        .with_state(shared_service)
}

/// List all users
///
/// GET /users
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<Vec<User>>> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Create a new user
///
/// POST /users
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Undecodable body or invalid field", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    JsonBody(input): JsonBody<CreateUser>,
) -> UserResult<impl IntoResponse> {
    let user = service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by ID
///
/// GET /users/{id}
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "No user with this ID", body = ErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<Json<User>> {
    let user = service.get_user(&id).await?;
    Ok(Json(user))
}

/// Update a user
///
/// PUT /users/{id}
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(("id" = String, Path, description = "User ID")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Undecodable body or invalid field", body = ErrorResponse),
        (status = 404, description = "No user with this ID", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse)
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<UpdateUser>,
) -> UserResult<Json<User>> {
    let user = service.update_user(&id, input).await?;
    Ok(Json(user))
}

/// Delete a user
///
/// DELETE /users/{id}
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "No user with this ID", body = ErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<impl IntoResponse> {
    service.delete_user(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
