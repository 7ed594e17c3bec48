use crate::error::Result;
use std::rc::Rc;

/// Abstract interface for raw slot I/O.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// `ProductStore` handles the "what" (serialization and the product
/// operations). Values are opaque strings; backends never parse them.
pub trait StorageBackend {
    /// Read the whole value stored under `key`.
    /// Returns Ok(None) if the slot has never been written.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the whole value stored under `key`.
    /// MUST be atomic from the caller's point of view: a reader sees either
    /// the old value or the new one.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Whether this backend has durable storage at all.
    fn is_available(&self) -> bool;
}

/// Lets several stores share one backend (and thus one slot).
impl<B: StorageBackend + ?Sized> StorageBackend for Rc<B> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}
