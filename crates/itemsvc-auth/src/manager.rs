//! In-memory session manager.
//!
//! The [`SessionManager`] keeps registered users and their active sessions
//! behind a single `RwLock`. Password hashing runs outside the lock so a
//! slow login never blocks `is_active` checks.

use std::collections::{HashMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{AuthError, Result};
use crate::password::{hash_password, verify_password};

#[derive(Default)]
struct Registry {
    /// Username to stored password hash.
    users: HashMap<String, String>,
    /// Usernames with an active session.
    active: HashSet<String>,
}

// ---------------------------------------------------------------------------
// SessionManager
// ---------------------------------------------------------------------------

/// Tracks registered users and which of them are logged in.
///
/// A login observes every registration that completed before it started.
/// Nothing is persisted; state lives for the lifetime of the value.
#[derive(Default)]
pub struct SessionManager {
    registry: RwLock<Registry>,
}

impl SessionManager {
    /// Create an empty session manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidInput`] for an empty username or password,
    /// [`AuthError::AlreadyExists`] if the name is taken.
    pub fn register(&self, username: &str, password: &str) -> Result<()> {
        if username.is_empty() {
            return Err(AuthError::InvalidInput {
                reason: "username must not be empty".into(),
            });
        }
        if password.is_empty() {
            return Err(AuthError::InvalidInput {
                reason: "password must not be empty".into(),
            });
        }

        let hash = hash_password(password)?;

        let mut registry = self.write();
        if registry.users.contains_key(username) {
            return Err(AuthError::AlreadyExists {
                username: username.to_owned(),
            });
        }
        registry.users.insert(username.to_owned(), hash);
        drop(registry);

        tracing::info!(username, "user registered");
        Ok(())
    }

    /// Check credentials and start a session.
    ///
    /// Authenticating an already-active user succeeds and leaves the session
    /// in place.
    ///
    /// # Errors
    ///
    /// [`AuthError::UserNotFound`] for an unknown name,
    /// [`AuthError::BadCredentials`] for a wrong password.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<()> {
        let stored = self
            .read()
            .users
            .get(username)
            .cloned()
            .ok_or_else(|| AuthError::UserNotFound {
                username: username.to_owned(),
            })?;

        if !verify_password(password, &stored) {
            tracing::warn!(username, "login rejected: bad credentials");
            return Err(AuthError::BadCredentials);
        }

        self.write().active.insert(username.to_owned());
        tracing::info!(username, "user logged in");
        Ok(())
    }

    /// End the user's session.
    ///
    /// # Errors
    ///
    /// [`AuthError::NotActive`] if the user has no active session.
    pub fn end_session(&self, username: &str) -> Result<()> {
        if !self.write().active.remove(username) {
            return Err(AuthError::NotActive {
                username: username.to_owned(),
            });
        }
        tracing::info!(username, "user logged out");
        Ok(())
    }

    /// Whether the user currently has an active session.
    pub fn is_active(&self, username: &str) -> bool {
        self.read().active.contains(username)
    }

    // Every mutation is a single insert or remove, so a poisoned lock still
    // guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.registry.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.registry.write().unwrap_or_else(|e| e.into_inner())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
