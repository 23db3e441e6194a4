//! User management handlers.
//!
//! All three operations live on a single `/user` route and identify
//! the record by email: lookup and deletion pass it as a query
//! parameter, creation carries it in the JSON body.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::User;
use crate::errors::AppResult;

/// Query parameters identifying a user by email
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserQuery {
    /// Email address of the user
    pub email: String,
}

/// User creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// User display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Sergey Sergeev")]
    pub name: String,
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "s.s.sergeev@mail.com")]
    pub email: String,
}

/// Create user management routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/user", get(get_user).post(create_user).delete(delete_user))
}

/// Get a user by email
#[utoipa::path(
    get,
    path = "/api/v1/user",
    tag = "Users",
    params(UserQuery),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(&query.email).await?;

    Ok(Json(user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/v1/user",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created, returns the assigned id", body = i64),
        (status = 400, description = "Validation error"),
        (status = 409, description = "User with this email already exists")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<i64>)> {
    let id = state
        .user_service
        .create_user(payload.name, payload.email)
        .await?;

    Ok((StatusCode::CREATED, Json(id)))
}

/// Delete a user by email
#[utoipa::path(
    delete,
    path = "/api/v1/user",
    tag = "Users",
    params(UserQuery),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> AppResult<StatusCode> {
    state.user_service.delete_user(&query.email).await?;

    Ok(StatusCode::NO_CONTENT)
}
