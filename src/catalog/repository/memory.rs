use super::{apply_delete, apply_insert, apply_update, ProductRepository, Result};
use crate::error::RepositoryError;
use crate::model::{Product, ProductId};
use crate::query::{self, Snapshot};

/// Repository that keeps its snapshot in memory with no store behind it.
/// Used to exercise the service layer in isolation.
#[derive(Default)]
pub struct InMemoryRepository {
    products: Snapshot,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductRepository for InMemoryRepository {
    fn list_all(&self) -> Result<Vec<Product>> {
        Ok(query::sorted(&self.products))
    }

    fn find_by_id(&self, id: ProductId) -> Result<Product> {
        query::find_by_id(&self.products, id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    fn find_by_price_above(&self, threshold: f64) -> Result<Vec<Product>> {
        Ok(query::price_above(&self.products, threshold))
    }

    fn insert(&mut self, product: Product) -> Result<Product> {
        apply_insert(&mut self.products, product)
    }

    fn update(&mut self, product: Product) -> Result<Product> {
        apply_update(&mut self.products, product)
    }

    fn delete(&mut self, id: ProductId) -> Result<()> {
        apply_delete(&mut self.products, id).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn behaves_like_snapshot_repository() {
        let mut repo = InMemoryRepository::new();
        let a = repo
            .insert(Product::new("A", 1, "A", "01/01/2020", 5.0))
            .unwrap();
        let b = repo
            .insert(Product::new("B", 1, "B", "01/01/2020", 15.0))
            .unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        assert_eq!(repo.find_by_price_above(5.0).unwrap(), vec![b.clone()]);
        repo.delete(a.id).unwrap();
        assert_eq!(repo.list_all().unwrap(), vec![b]);
        assert!(matches!(
            repo.find_by_id(a.id),
            Err(RepositoryError::NotFound(1))
        ));
    }
}
