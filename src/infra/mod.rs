//! Infrastructure layer - External systems integration
//!
//! This module handles data persistence concerns. Storage is an
//! in-memory collection behind the `UserRepository` abstraction, so a
//! database-backed implementation can be swapped in without touching
//! the service layer.

pub mod repositories;

pub use repositories::{InMemoryUserStore, UserRepository};

#[cfg(test)]
pub use repositories::MockUserRepository;
