//! Service Container - Centralized service access.
//!
//! Manages service lifecycle and wiring so handlers depend on service
//! traits rather than concrete implementations.

use std::sync::Arc;

use super::{UserManager, UserService};
use crate::infra::UserRepository;

/// Concrete service container holding all application services
pub struct Services {
    user_service: Arc<dyn UserService>,
}

impl Services {
    /// Create a new service container with pre-built services
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Create service container from a repository
    pub fn from_repository(repo: Arc<dyn UserRepository>) -> Self {
        let user_service = Arc::new(UserManager::new(repo));

        Self { user_service }
    }

    /// Get user service
    pub fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }
}
