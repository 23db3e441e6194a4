//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services.

use std::sync::Arc;

use crate::infra::UserRepository;
use crate::services::{Services, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Create application state from a user repository.
    ///
    /// This is the recommended way to create AppState as it uses
    /// the service container for centralized service wiring.
    pub fn from_store(repo: Arc<dyn UserRepository>) -> Self {
        let container = Services::from_repository(repo);

        Self {
            user_service: container.users(),
        }
    }

    /// Create application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }
}
