use super::backend::StorageBackend;
use crate::error::{RealtyError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the catalog is single-threaded.
/// This keeps `StorageBackend` on `&self` without paying for a lock.
pub struct MemBackend {
    slots: RefCell<HashMap<String, String>>,
    available: bool,
    simulate_write_error: Cell<bool>,
    writes: Cell<usize>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            slots: RefCell::new(HashMap::new()),
            available: true,
            simulate_write_error: Cell::new(false),
            writes: Cell::new(0),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend standing in for an environment without durable storage.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::default()
        }
    }

    /// Seed a slot with raw text, bypassing serialization.
    pub fn with_raw(self, key: &str, value: &str) -> Self {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Raw text currently held in a slot.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful `set_item` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl StorageBackend for MemBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(RealtyError::Store("Simulated write error".to_string()));
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_slot_reads_none() {
        let backend = MemBackend::new();
        assert_eq!(backend.get_item("products").unwrap(), None);
    }

    #[test]
    fn set_replaces_whole_value() {
        let backend = MemBackend::new();
        backend.set_item("k", "[1]").unwrap();
        backend.set_item("k", "[2]").unwrap();
        assert_eq!(backend.get_item("k").unwrap().as_deref(), Some("[2]"));
        assert_eq!(backend.write_count(), 2);
    }

    #[test]
    fn simulated_write_error_leaves_value() {
        let backend = MemBackend::new().with_raw("k", "old");
        backend.set_simulate_write_error(true);
        assert!(backend.set_item("k", "new").is_err());
        assert_eq!(backend.raw("k").as_deref(), Some("old"));
    }
}
