//! Session manager for itemsvc.
//!
//! Tracks registered users and their logged-in state in memory:
//!
//! - `register` stores a user with a PBKDF2-hashed password.
//! - `authenticate` checks credentials and marks the user active.
//! - `end_session` clears the active mark.
//! - `is_active` reports whether a user is logged in.
//!
//! The item API does not consult this crate; it is a standalone
//! capability.
//!
//! # Quick Start
//!
//! ```rust
//! use itemsvc_auth::SessionManager;
//!
//! let auth = SessionManager::new();
//! auth.register("alice", "s3cret").unwrap();
//! auth.authenticate("alice", "s3cret").unwrap();
//! assert!(auth.is_active("alice"));
//! auth.end_session("alice").unwrap();
//! ```

pub mod error;
pub mod manager;
mod password;

pub use error::{AuthError, Result};
pub use manager::SessionManager;
