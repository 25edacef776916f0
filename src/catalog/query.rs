//! Pure helpers over a snapshot (`id -> Product`).
//!
//! Both repository implementations share these so that ordering, id
//! derivation and code checks behave identically no matter where the
//! snapshot came from.

use crate::model::{Product, ProductId};
use std::collections::HashMap;

pub type Snapshot = HashMap<ProductId, Product>;

/// All products ordered by id ascending.
pub fn sorted(snapshot: &Snapshot) -> Vec<Product> {
    let mut products: Vec<Product> = snapshot.values().cloned().collect();
    products.sort_by_key(|p| p.id);
    products
}

pub fn find_by_id(snapshot: &Snapshot, id: ProductId) -> Option<&Product> {
    snapshot.get(&id)
}

/// Products with a price strictly greater than `threshold`, ordered by id.
pub fn price_above(snapshot: &Snapshot, threshold: f64) -> Vec<Product> {
    let mut products: Vec<Product> = snapshot
        .values()
        .filter(|p| p.price > threshold)
        .cloned()
        .collect();
    products.sort_by_key(|p| p.id);
    products
}

/// One more than the largest id present, so the first product gets id 1.
/// `None` once the largest id is `ProductId::MAX`.
pub fn next_id(snapshot: &Snapshot) -> Option<ProductId> {
    snapshot.keys().copied().max().unwrap_or(0).checked_add(1)
}

/// Whether `code` is held by any product other than `exclude`.
pub fn code_taken(snapshot: &Snapshot, code: &str, exclude: Option<ProductId>) -> bool {
    snapshot
        .values()
        .any(|p| p.code_value == code && Some(p.id) != exclude)
}

/// Indexes a list of products by id. Later entries win on duplicate ids;
/// the duplicates are returned so callers can report them.
pub fn index_by_id(products: Vec<Product>) -> (Snapshot, Vec<ProductId>) {
    let mut snapshot = Snapshot::with_capacity(products.len());
    let mut duplicates = Vec::new();
    for product in products {
        if let Some(prev) = snapshot.insert(product.id, product) {
            duplicates.push(prev.id);
        }
    }
    (snapshot, duplicates)
}
