//! # Storage Layer
//!
//! The catalog lives in a single **storage slot**: one key holding the whole
//! collection as a JSON array. There is no index and no per-record file.
//!
//! ## Split of Responsibilities
//!
//! - [`backend::StorageBackend`]: the "how". Whole-value get/set of a named
//!   slot, plus an availability check. Nothing here knows about products.
//! - [`product_store::ProductStore`]: the "what". Read-all, write-all, and
//!   the point operations, each a full read-modify-write of the slot.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one file per slot, `<root>/<key>.json`,
//!   replaced atomically (write to tmp, then rename).
//! - [`mem_backend::MemBackend`]: `RefCell<HashMap>` for tests.
//!
//! ## Availability
//!
//! A backend may report that it has no durable storage at all (an
//! `FsBackend` without a root directory, or `MemBackend::unavailable()`).
//! Reads then yield an empty collection and writes are dropped. This is not
//! an error.
//!
//! ## Consistency Boundary
//!
//! Mutations read the whole slot, change it in memory, and write the whole
//! slot back. Two writers sharing a slot can therefore lose each other's
//! changes: the last write wins. There is no locking or versioning.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//! └── products.json       # [{"id": ..., "name": ..., "imageUrl": ...}, ...]
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod product_store;

pub use backend::StorageBackend;
pub use product_store::{DuplicateIdPolicy, MalformedPolicy, ProductStore, StoreOptions};

/// Default name of the storage slot.
pub const DEFAULT_STORAGE_KEY: &str = "products";
