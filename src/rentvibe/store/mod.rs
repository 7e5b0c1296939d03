//! # Storage Layer
//!
//! The [`DataStore`] trait is the only path by which session state reaches
//! durable storage. Two things are persisted:
//!
//! - the favorite ids, as one serialized array
//! - registered accounts (hashed credentials only)
//!
//! The catalog itself is not stored here; it is a fixed input (see
//! [`crate::catalog`]).
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage in a data directory
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── favorites.json   # ["3", "1"]
//! ├── users.json       # [{ "id": ..., "email": ..., "password_hash": ... }]
//! └── config.json      # RentConfig
//! ```

use crate::error::Result;
use crate::model::StoredUser;

pub mod fs;
pub mod memory;

/// Abstract interface for session persistence.
///
/// Loads of data that was never written return empty collections, not errors.
/// Malformed content surfaces as `RentError::Serialization`; recovery policy
/// belongs to the caller.
pub trait DataStore {
    fn load_favorites(&self) -> Result<Vec<String>>;

    /// Replace the stored favorites. Must be durable when it returns.
    fn save_favorites(&mut self, ids: &[String]) -> Result<()>;

    fn load_users(&self) -> Result<Vec<StoredUser>>;

    fn save_users(&mut self, users: &[StoredUser]) -> Result<()>;
}
