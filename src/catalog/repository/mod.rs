//! # Repository Layer
//!
//! Owns id assignment, code uniqueness and the read-modify-write cycle.
//!
//! Every operation of [`snapshot::SnapshotRepository`] starts from a fresh
//! `read_all()` and every mutation ends with `write_all()`: the store holds the
//! only durable copy and the repository keeps nothing between calls.
//!
//! The mutation rules themselves live in the `apply_*` functions below, so
//! the production repository and the in-memory double share them.
//!
//! ## Id Assignment
//!
//! New ids are `max(id) + 1` over the current snapshot (1 for an empty
//! catalog). There is no separate counter: the snapshot is the only source
//! of truth, so the next id must be derivable from it alone.

use crate::error::RepositoryError;
use crate::model::{Product, ProductId};
use crate::query::{self, Snapshot};

pub mod memory;
pub mod snapshot;

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Abstract interface for product persistence with uniqueness rules.
pub trait ProductRepository {
    /// All products, ordered by id ascending.
    fn list_all(&self) -> Result<Vec<Product>>;

    fn find_by_id(&self, id: ProductId) -> Result<Product>;

    /// Products priced strictly above `threshold`, ordered by id.
    fn find_by_price_above(&self, threshold: f64) -> Result<Vec<Product>>;

    /// Stores a new product and returns it with its assigned id.
    /// Any id on the input is ignored.
    fn insert(&mut self, product: Product) -> Result<Product>;

    /// Replaces the product with the same id.
    fn update(&mut self, product: Product) -> Result<Product>;

    fn delete(&mut self, id: ProductId) -> Result<()>;
}

pub(crate) fn apply_insert(snapshot: &mut Snapshot, mut product: Product) -> Result<Product> {
    if query::code_taken(snapshot, &product.code_value, None) {
        return Err(RepositoryError::CodeConflict(product.code_value));
    }
    product.id = query::next_id(snapshot).ok_or(RepositoryError::IdsExhausted)?;
    snapshot.insert(product.id, product.clone());
    Ok(product)
}

pub(crate) fn apply_update(snapshot: &mut Snapshot, product: Product) -> Result<Product> {
    if !snapshot.contains_key(&product.id) {
        return Err(RepositoryError::NotFound(product.id));
    }
    if query::code_taken(snapshot, &product.code_value, Some(product.id)) {
        return Err(RepositoryError::CodeConflict(product.code_value));
    }
    snapshot.insert(product.id, product.clone());
    Ok(product)
}

pub(crate) fn apply_delete(snapshot: &mut Snapshot, id: ProductId) -> Result<Product> {
    snapshot.remove(&id).ok_or(RepositoryError::NotFound(id))
}
