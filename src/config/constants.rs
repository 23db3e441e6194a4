//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Seed Data
// =============================================================================

/// Directory entries present when the service starts: (name, email) pairs.
/// Ids are assigned in order starting from 1.
pub const SEED_USERS: &[(&str, &str)] = &[
    ("Ivan Ivanov", "i.i.ivanov@mail.com"),
    ("Petr Petrov", "p.p.petrov@mail.com"),
];

// =============================================================================
// Validation
// =============================================================================

/// Minimum name length requirement
pub const MIN_NAME_LENGTH: u64 = 1;
