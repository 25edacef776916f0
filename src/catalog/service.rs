//! # Catalog Service
//!
//! The domain-facing entry point. Every client (the bundled CLI, an HTTP
//! adapter, tests) talks to [`CatalogService`] rather than to a repository.
//!
//! The service:
//! - **Validates** products before any repository or storage call
//!   (see [`validation`](crate::validation)), so invalid input never causes a
//!   write.
//! - **Translates** repository errors into domain errors: `NotFound` becomes
//!   [`CatalogError::NotExists`], `CodeConflict` becomes
//!   [`CatalogError::AlreadyExists`]. Storage failures pass through as
//!   [`CatalogError::Storage`].
//!
//! ## Generic Over ProductRepository
//!
//! - Production: `CatalogService<SnapshotRepository<FileStore>>`
//! - Testing: `CatalogService<InMemoryRepository>`

use crate::error::Result;
use crate::model::{Product, ProductId, ProductPatch};
use crate::repository::ProductRepository;
use crate::validation;
use tracing::info;

pub struct CatalogService<R: ProductRepository> {
    repository: R,
}

impl<R: ProductRepository> CatalogService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn list_all(&self) -> Result<Vec<Product>> {
        Ok(self.repository.list_all()?)
    }

    pub fn find_by_id(&self, id: ProductId) -> Result<Product> {
        Ok(self.repository.find_by_id(id)?)
    }

    pub fn find_by_price_above(&self, threshold: f64) -> Result<Vec<Product>> {
        Ok(self.repository.find_by_price_above(threshold)?)
    }

    pub fn insert(&mut self, product: Product) -> Result<Product> {
        validation::validate(&product)?;
        let saved = self.repository.insert(product)?;
        info!(id = saved.id, code = %saved.code_value, "product created");
        Ok(saved)
    }

    pub fn update(&mut self, product: Product) -> Result<Product> {
        validation::validate(&product)?;
        let saved = self.repository.update(product)?;
        info!(id = saved.id, "product updated");
        Ok(saved)
    }

    /// Overlays `patch` on the stored product and saves the result through
    /// the same validation as a full update.
    pub fn patch(&mut self, id: ProductId, patch: ProductPatch) -> Result<Product> {
        let mut product = self.repository.find_by_id(id)?;
        patch.apply(&mut product);
        self.update(product)
    }

    pub fn delete(&mut self, id: ProductId) -> Result<()> {
        self.repository.delete(id)?;
        info!(id, "product deleted");
        Ok(())
    }
}
