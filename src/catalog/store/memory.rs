use super::{ProductStore, Result};
use crate::error::StorageError;
use crate::query::Snapshot;
use std::cell::{Cell, RefCell};

/// In-memory storage for testing.
///
/// Uses `RefCell` so the `&self` trait methods can still replace the
/// snapshot; the catalog is single-threaded.
#[derive(Default)]
pub struct InMemoryStore {
    snapshot: RefCell<Snapshot>,
    simulate_read_error: Cell<bool>,
    simulate_write_error: Cell<bool>,
    writes: Cell<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: RefCell::new(snapshot),
            ..Self::default()
        }
    }

    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful `write_all` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl ProductStore for InMemoryStore {
    fn read_all(&self) -> Result<Snapshot> {
        if self.simulate_read_error.get() {
            return Err(StorageError::Store("Simulated read error".to_string()));
        }
        Ok(self.snapshot.borrow().clone())
    }

    fn write_all(&self, snapshot: &Snapshot) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(StorageError::Store("Simulated write error".to_string()));
        }
        *self.snapshot.borrow_mut() = snapshot.clone();
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Product, ProductId};

    pub struct StoreFixture {
        snapshot: Snapshot,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                snapshot: Snapshot::new(),
            }
        }

        /// Adds `count` valid products with ids 1..=count and codes `P1`, `P2`, ...
        pub fn with_products(mut self, count: usize) -> Self {
            for i in 1..=count as ProductId {
                self = self.with_product(
                    Product::new(
                        format!("Product {}", i),
                        i as i64,
                        format!("P{}", i),
                        "01/01/2020",
                        i as f64 * 10.0,
                    )
                    .with_id(i),
                );
            }
            self
        }

        pub fn with_priced(self, id: ProductId, code: &str, price: f64) -> Self {
            self.with_product(Product::new("Priced", 1, code, "01/01/2020", price).with_id(id))
        }

        pub fn with_product(mut self, product: Product) -> Self {
            self.snapshot.insert(product.id, product);
            self
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::with_snapshot(self.snapshot)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;

    #[test]
    fn write_then_read_returns_same_snapshot() {
        let store = InMemoryStore::new();
        let mut snap = Snapshot::new();
        snap.insert(4, Product::new("Oil", 1, "A", "01/01/2020", 2.0).with_id(4));
        store.write_all(&snap).unwrap();

        assert_eq!(store.read_all().unwrap(), snap);
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn simulated_errors_surface_as_storage_errors() {
        let store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        assert!(store.write_all(&Snapshot::new()).is_err());
        assert_eq!(store.write_count(), 0);

        store.set_simulate_read_error(true);
        assert!(matches!(store.read_all(), Err(StorageError::Store(_))));
    }
}
