//! Derived views over a snapshot: the category list and price/category filtering.
//!
//! Nothing here is persisted. Callers recompute on demand from whatever
//! snapshot the catalog currently holds.

use crate::model::Product;
use std::collections::HashSet;

/// Distinct categories, in the order they first appear.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter(|p| seen.insert(p.category.as_str()))
        .map(|p| p.category.clone())
        .collect()
}

/// Category and price bounds. `None` means the criterion is not applied.
///
/// Bounds are inclusive. A bound of `Some(0.0)` is a real bound; see
/// [`ProductFilter::from_form`] for the legacy form convention where zero
/// means "unset".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_min_price(mut self, min: f64) -> Self {
        self.min_price = Some(min);
        self
    }

    pub fn with_max_price(mut self, max: f64) -> Self {
        self.max_price = Some(max);
        self
    }

    /// Builds a filter from form-style inputs: an empty category, a zero
    /// bound and a NaN bound all mean "no constraint".
    pub fn from_form(category: &str, min_price: f64, max_price: f64) -> Self {
        Self::from_bounds(Some(category), Some(min_price), Some(max_price), true)
    }

    /// Builds a filter from optional inputs. With `zero_is_unset`, a zero or
    /// NaN bound is dropped the same way [`from_form`](Self::from_form) does.
    pub fn from_bounds(
        category: Option<&str>,
        min_price: Option<f64>,
        max_price: Option<f64>,
        zero_is_unset: bool,
    ) -> Self {
        let bound =
            |b: Option<f64>| b.filter(|v| !(zero_is_unset && (*v == 0.0 || v.is_nan())));
        Self {
            category: category.filter(|c| !c.is_empty()).map(str::to_string),
            min_price: bound(min_price),
            max_price: bound(max_price),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.min_price.is_none() && self.max_price.is_none()
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.category
            .as_deref()
            .is_none_or(|c| product.category == c)
            && self.min_price.is_none_or(|min| product.price >= min)
            && self.max_price.is_none_or(|max| product.price <= max)
    }
}

/// The products matching `filter`, in their original order.
pub fn filtered(products: &[Product], filter: &ProductFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}
