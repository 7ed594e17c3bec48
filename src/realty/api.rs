//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for catalog operations, whichever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! - **Owns** the mounted [`Catalog`] and the effective [`RealtyConfig`]
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (raw filter bounds into a [`ProductFilter`] per config)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//!
//! ## Generic Over StorageBackend
//!
//! `RealtyApi<B: StorageBackend>` is generic over the backend:
//! - Production: `RealtyApi<FsBackend>`
//! - Testing: `RealtyApi<MemBackend>`

use crate::catalog::Catalog;
use crate::commands;
use crate::config::RealtyConfig;
use crate::error::{RealtyError, Result};
use crate::filter::ProductFilter;
use crate::model::{Product, ProductDraft, ProductPatch};
use crate::store::{ProductStore, StorageBackend};
use chrono::Utc;

/// The main API facade for catalog operations.
pub struct RealtyApi<B: StorageBackend> {
    catalog: Catalog<B>,
    config: RealtyConfig,
}

impl<B: StorageBackend> RealtyApi<B> {
    /// Builds the store from `config` and mounts the catalog.
    pub fn open(backend: B, config: RealtyConfig) -> Result<Self> {
        let store = ProductStore::with_key(backend, config.storage_key.clone())
            .with_options(config.store_options());
        let catalog = Catalog::mount(store)?;
        Ok(Self { catalog, config })
    }

    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    pub fn catalog(&self) -> &Catalog<B> {
        &self.catalog
    }

    pub fn config(&self) -> &RealtyConfig {
        &self.config
    }

    /// Filter from raw inputs, honoring `zero_bound_is_unset`.
    ///
    /// Without the zero convention a NaN bound has no meaning and is rejected.
    pub fn filter_from(
        &self,
        category: Option<&str>,
        min_price: Option<f64>,
        max_price: Option<f64>,
    ) -> Result<ProductFilter> {
        let zero_is_unset = self.config.zero_bound_is_unset;
        if !zero_is_unset && [min_price, max_price].iter().flatten().any(|v| v.is_nan()) {
            return Err(RealtyError::Validation(
                "price bound is not a number".to_string(),
            ));
        }
        Ok(ProductFilter::from_bounds(
            category,
            min_price,
            max_price,
            zero_is_unset,
        ))
    }

    pub fn add_product(&mut self, draft: ProductDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.catalog, draft)
    }

    pub fn list_products(&self, filter: &ProductFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.catalog, filter)
    }

    pub fn view_product(&self, id: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.catalog, id)
    }

    pub fn update_product(&mut self, id: &str, patch: ProductPatch) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.catalog, id, patch)
    }

    pub fn delete_products<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.catalog, ids)
    }

    pub fn categories(&self) -> Result<commands::CmdResult> {
        commands::categories::run(&self.catalog)
    }

    pub fn structured_data(&self, id: &str) -> Result<commands::CmdResult> {
        commands::schema::run(&self.catalog, id, &self.config.currency)
    }

    /// `base_url` overrides the configured one.
    pub fn sitemap(&self, base_url: Option<&str>) -> Result<commands::CmdResult> {
        let base_url = base_url.or(self.config.base_url.as_deref());
        commands::sitemap::run(&self.catalog, base_url, Utc::now())
    }

    /// `base_url` overrides the configured one.
    pub fn robots(&self, base_url: Option<&str>) -> Result<commands::CmdResult> {
        commands::robots::run(base_url.or(self.config.base_url.as_deref()))
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
