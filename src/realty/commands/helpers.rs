use crate::catalog::Catalog;
use crate::error::{RealtyError, Result};
use crate::model::Product;
use crate::store::StorageBackend;

/// Looks the id up in the catalog's current snapshot.
pub fn find_product<B: StorageBackend>(catalog: &Catalog<B>, id: &str) -> Result<Product> {
    catalog
        .products()
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .ok_or_else(|| RealtyError::ProductNotFound(id.to_string()))
}
