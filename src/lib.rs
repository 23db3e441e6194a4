//! User Directory Service - A small user-management REST API
//!
//! This crate provides a clean architecture foundation for a user
//! directory exposed over HTTP with Axum. Users are keyed by email:
//! lookup, creation, and deletion all use the email address as the
//! unique identifier.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (user storage)
//! - **api**: HTTP handlers, extractors, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::User;
pub use errors::{AppError, AppResult};
