//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::User;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
///
/// All operations are keyed by email, the unique identifier exposed
/// to API clients.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by email
    async fn get_user(&self, email: &str) -> AppResult<User>;

    /// Create a new user, returning the assigned id
    async fn create_user(&self, name: String, email: String) -> AppResult<i64>;

    /// Delete user by email
    async fn delete_user(&self, email: &str) -> AppResult<()>;

    /// Count all users
    async fn count_users(&self) -> AppResult<usize>;
}

/// Concrete implementation of UserService backed by a repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, email: &str) -> AppResult<User> {
        self.repo.find_by_email(email).await?.ok_or_not_found()
    }

    async fn create_user(&self, name: String, email: String) -> AppResult<i64> {
        let user = self.repo.insert(name, email).await?;
        tracing::debug!("Created user {} ({})", user.id, user.email);
        Ok(user.id)
    }

    async fn delete_user(&self, email: &str) -> AppResult<()> {
        if self.repo.delete_by_email(email).await? {
            tracing::debug!("Deleted user {}", email);
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }

    async fn count_users(&self) -> AppResult<usize> {
        self.repo.count().await
    }
}
