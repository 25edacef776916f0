use super::{apply_delete, apply_insert, apply_update, ProductRepository, Result};
use crate::error::RepositoryError;
use crate::model::{Product, ProductId};
use crate::query;
use crate::store::ProductStore;
use tracing::debug;

/// Production repository: reloads the whole snapshot from the store on every
/// call and writes it back after every successful mutation.
pub struct SnapshotRepository<S: ProductStore> {
    store: S,
}

impl<S: ProductStore> SnapshotRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: ProductStore> ProductRepository for SnapshotRepository<S> {
    fn list_all(&self) -> Result<Vec<Product>> {
        let snapshot = self.store.read_all()?;
        Ok(query::sorted(&snapshot))
    }

    fn find_by_id(&self, id: ProductId) -> Result<Product> {
        let snapshot = self.store.read_all()?;
        query::find_by_id(&snapshot, id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    fn find_by_price_above(&self, threshold: f64) -> Result<Vec<Product>> {
        let snapshot = self.store.read_all()?;
        Ok(query::price_above(&snapshot, threshold))
    }

    fn insert(&mut self, product: Product) -> Result<Product> {
        let mut snapshot = self.store.read_all()?;
        let saved = apply_insert(&mut snapshot, product)?;
        self.store.write_all(&snapshot)?;
        debug!(id = saved.id, code = %saved.code_value, "product inserted");
        Ok(saved)
    }

    fn update(&mut self, product: Product) -> Result<Product> {
        let mut snapshot = self.store.read_all()?;
        let saved = apply_update(&mut snapshot, product)?;
        self.store.write_all(&snapshot)?;
        debug!(id = saved.id, code = %saved.code_value, "product updated");
        Ok(saved)
    }

    fn delete(&mut self, id: ProductId) -> Result<()> {
        let mut snapshot = self.store.read_all()?;
        let removed = apply_delete(&mut snapshot, id)?;
        self.store.write_all(&snapshot)?;
        debug!(id, code = %removed.code_value, "product deleted");
        Ok(())
    }
}
