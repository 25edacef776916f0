//! # Storage Layer
//!
//! The [`ProductStore`] trait is the only place that knows how the catalog
//! is persisted. Every access is whole-file: `read_all` rebuilds the full
//! snapshot, `write_all` replaces it.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single JSON array on disk.
//! - [`memory::InMemoryStore`]: For testing logic without filesystem I/O.
//!
//! ## File Format
//!
//! ```text
//! [
//!   { "id": 1, "name": "Oil", "quantity": 4, "code_value": "S82",
//!     "is_published": false, "expiration": "15/12/2021", "price": 71.42 }
//! ]
//! ```
//!
//! Records are written sorted by id so the file diffs cleanly between runs.
//!
//! No locking is provided. Callers that share a store across threads must
//! serialize access themselves; overlapping read-modify-write cycles lose
//! updates.

use crate::error::StorageError;
use crate::query::Snapshot;

pub mod fs;
pub mod memory;

pub type Result<T> = std::result::Result<T, StorageError>;

/// Abstract interface for whole-snapshot persistence.
///
/// Methods take `&self`: the in-memory store uses interior mutability, the
/// file store has no state beyond its path.
pub trait ProductStore {
    /// Load the complete record set keyed by id.
    fn read_all(&self) -> Result<Snapshot>;

    /// Replace the complete record set.
    fn write_all(&self, snapshot: &Snapshot) -> Result<()>;
}
