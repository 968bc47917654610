use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(crate::api::index::index),
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "User Service API",
        version = "1.0.0",
        description = "In-memory user management: create, read, update and delete users with unique emails"
    ),
    nest(
        (path = "/users", api = domain_users::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
