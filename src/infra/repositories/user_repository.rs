//! User repository with an in-memory implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::config::SEED_USERS;
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Email is the unique lookup key for all operations; numeric ids are
/// assigned by the repository on insert.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user, assigning a fresh id.
    ///
    /// Fails with `AppError::EmailTaken` if the email is already used.
    async fn insert(&self, name: String, email: String) -> AppResult<User>;

    /// Remove user by email address. Returns whether a record was removed.
    async fn delete_by_email(&self, email: &str) -> AppResult<bool>;

    /// Count all users
    async fn count(&self) -> AppResult<usize>;
}

/// Mutable directory state guarded by one lock, so insert can check
/// email uniqueness and assign an id in a single critical section.
struct Directory {
    users: HashMap<i64, User>,
    next_id: i64,
}

/// Concrete in-memory implementation of UserRepository
pub struct InMemoryUserStore {
    inner: RwLock<Directory>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Directory {
                users: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store pre-populated with the default directory entries
    pub fn seeded() -> Self {
        Self::with_users(
            SEED_USERS
                .iter()
                .map(|(name, email)| (name.to_string(), email.to_string())),
        )
    }

    /// Create a store pre-populated with the given (name, email) pairs.
    /// Ids are assigned in order starting from 1.
    pub fn with_users(users: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut map = HashMap::new();
        let mut next_id = 1;
        for (name, email) in users {
            map.insert(next_id, User::new(next_id, name, email));
            next_id += 1;
        }

        Self {
            inner: RwLock::new(Directory {
                users: map,
                next_id,
            }),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let dir = self.inner.read().await;
        Ok(dir.users.values().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, name: String, email: String) -> AppResult<User> {
        let mut dir = self.inner.write().await;

        // Uniqueness check and insert under the same write lock
        if dir.users.values().any(|u| u.email == email) {
            return Err(AppError::EmailTaken);
        }

        let id = dir.next_id;
        dir.next_id += 1;

        let user = User::new(id, name, email);
        dir.users.insert(id, user.clone());

        Ok(user)
    }

    async fn delete_by_email(&self, email: &str) -> AppResult<bool> {
        let mut dir = self.inner.write().await;

        let id = dir
            .users
            .values()
            .find(|u| u.email == email)
            .map(|u| u.id);

        match id {
            Some(id) => {
                dir.users.remove(&id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> AppResult<usize> {
        let dir = self.inner.read().await;
        Ok(dir.users.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_store_contains_default_users() {
        let store = InMemoryUserStore::seeded();

        let ivan = store
            .find_by_email("i.i.ivanov@mail.com")
            .await
            .unwrap()
            .expect("seed user missing");
        assert_eq!(ivan.id, 1);
        assert_eq!(ivan.name, "Ivan Ivanov");

        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn insert_assigns_fresh_ids_after_seeds() {
        let store = InMemoryUserStore::seeded();

        let user = store
            .insert("Sergey Sergeev".into(), "s.s.sergeev@mail.com".into())
            .await
            .unwrap();

        assert_eq!(user.id, 3);
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_email() {
        let store = InMemoryUserStore::seeded();

        let result = store
            .insert("Duplicate".into(), "i.i.ivanov@mail.com".into())
            .await;
        assert!(matches!(result, Err(AppError::EmailTaken)));

        // Existing record is untouched
        let ivan = store
            .find_by_email("i.i.ivanov@mail.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(ivan.name, "Ivan Ivanov");
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn delete_removes_matching_user_only() {
        let store = InMemoryUserStore::seeded();

        assert!(store.delete_by_email("i.i.ivanov@mail.com").await.unwrap());
        assert!(store
            .find_by_email("i.i.ivanov@mail.com")
            .await
            .unwrap()
            .is_none());

        // Second delete finds nothing
        assert!(!store.delete_by_email("i.i.ivanov@mail.com").await.unwrap());
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = InMemoryUserStore::seeded();

        store.delete_by_email("p.p.petrov@mail.com").await.unwrap();
        let user = store
            .insert("Temp User".into(), "temp.user@mail.com".into())
            .await
            .unwrap();

        assert_eq!(user.id, 3);
    }
}
