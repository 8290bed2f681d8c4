//! Error types for the session manager.
//!
//! All session operations surface errors through [`AuthError`].

/// Unified error type for the itemsvc session manager.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// A user with this name is already registered.
    #[error("user already exists: {username}")]
    AlreadyExists {
        /// The name that was taken.
        username: String,
    },

    /// No user with this name is registered.
    #[error("user not found: {username}")]
    UserNotFound {
        /// The name that was looked up.
        username: String,
    },

    /// The password did not match.
    #[error("invalid password")]
    BadCredentials,

    /// The user has no active session.
    #[error("user not logged in: {username}")]
    NotActive {
        /// The name whose session was requested.
        username: String,
    },

    /// A required argument was empty or malformed.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What is wrong with the input.
        reason: String,
    },

    /// The system random source failed.
    #[error("crypto failure: {0}")]
    Crypto(&'static str),
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, AuthError>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
