//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::User;

/// OpenAPI documentation for the User Directory Service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Directory Service",
        version = "0.1.0",
        description = "A small user-management API keyed by email",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        user_handler::get_user,
        user_handler::create_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            User,
            user_handler::CreateUserRequest,
        )
    ),
    tags(
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;
