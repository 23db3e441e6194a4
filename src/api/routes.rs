//! Application route configuration.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::user_routes;
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // User directory routes
        .nest("/api/v1", user_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Welcome to User Directory Service"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    users: Option<usize>,
}

/// Health check endpoint reporting store reachability and size
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.user_service.count_users().await {
        Ok(count) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                users: Some(count),
            }),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "unhealthy",
                users: None,
            }),
        ),
    }
}
