use super::backend::StorageBackend;
use super::DEFAULT_STORAGE_KEY;
use crate::error::{RealtyError, Result};
use crate::model::Product;
use serde::{Deserialize, Serialize};

/// What `read_all` does when the slot holds something that is not a product list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Propagate the deserialization error.
    #[default]
    Fail,
    /// Log a warning and read the collection as empty.
    Empty,
}

/// What `insert` does when the id is already in the collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateIdPolicy {
    #[default]
    Reject,
    Allow,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreOptions {
    pub on_malformed: MalformedPolicy,
    pub duplicate_ids: DuplicateIdPolicy,
}

/// The product collection in one storage slot.
///
/// Every mutation is a read-modify-write of the whole collection. Nothing is
/// cached here: each call goes to the backend.
pub struct ProductStore<B: StorageBackend> {
    backend: B,
    key: String,
    options: StoreOptions,
}

impl<B: StorageBackend> ProductStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            options: StoreOptions::default(),
        }
    }

    pub fn with_options(mut self, options: StoreOptions) -> Self {
        self.options = options;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn read_all(&self) -> Result<Vec<Product>> {
        if !self.backend.is_available() {
            tracing::debug!(key = %self.key, "storage unavailable, reading empty collection");
            return Ok(Vec::new());
        }

        let Some(raw) = self.backend.get_item(&self.key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Product>>(&raw) {
            Ok(products) => {
                tracing::debug!(key = %self.key, count = products.len(), "read collection");
                Ok(products)
            }
            Err(err) => match self.options.on_malformed {
                MalformedPolicy::Fail => Err(RealtyError::Serialization(err)),
                MalformedPolicy::Empty => {
                    tracing::warn!(key = %self.key, error = %err, "malformed collection, reading as empty");
                    Ok(Vec::new())
                }
            },
        }
    }

    pub fn write_all(&self, products: &[Product]) -> Result<()> {
        if !self.backend.is_available() {
            tracing::debug!(key = %self.key, "storage unavailable, dropping write");
            return Ok(());
        }
        let content = serde_json::to_string_pretty(products).map_err(RealtyError::Serialization)?;
        self.backend.set_item(&self.key, &content)?;
        tracing::debug!(key = %self.key, count = products.len(), "wrote collection");
        Ok(())
    }

    pub fn insert(&self, product: Product) -> Result<()> {
        let mut products = self.read_all()?;
        if self.options.duplicate_ids == DuplicateIdPolicy::Reject
            && products.iter().any(|p| p.id == product.id)
        {
            return Err(RealtyError::DuplicateId(product.id));
        }
        tracing::debug!(id = %product.id, "insert");
        products.push(product);
        self.write_all(&products)
    }

    /// Replaces every product whose id matches. Returns how many matched;
    /// zero leaves the slot untouched.
    pub fn update_by_id(&self, updated: &Product) -> Result<usize> {
        let mut products = self.read_all()?;
        let mut replaced = 0;
        for p in products.iter_mut().filter(|p| p.id == updated.id) {
            *p = updated.clone();
            replaced += 1;
        }
        tracing::debug!(id = %updated.id, replaced, "update");
        if replaced > 0 {
            self.write_all(&products)?;
        }
        Ok(replaced)
    }

    /// Removes every product whose id matches. Returns how many were removed.
    pub fn delete_by_id(&self, id: &str) -> Result<usize> {
        let mut products = self.read_all()?;
        let before = products.len();
        products.retain(|p| p.id != id);
        let removed = before - products.len();
        tracing::debug!(id, removed, "delete");
        if removed > 0 {
            self.write_all(&products)?;
        }
        Ok(removed)
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<Product>> {
        Ok(self.read_all()?.into_iter().find(|p| p.id == id))
    }
}
