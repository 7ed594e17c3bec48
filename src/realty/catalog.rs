//! # Catalog Binding
//!
//! [`Catalog`] is what a view holds on to. It owns a [`ProductStore`] and a
//! **snapshot** of the collection, and it is the only way views mutate the
//! catalog.
//!
//! ## Write-Through, Then Re-Read
//!
//! Every mutation goes to the store first and then replaces the snapshot
//! with a fresh `read_all()`. The snapshot is never patched in place, so
//! after `add`, `update`, or `remove` returns it equals the persisted
//! collection at that instant.
//!
//! If the store call fails, the error propagates and the snapshot is left
//! as it was.
//!
//! ## What It Does Not Track
//!
//! Changes made to the slot by anyone else (another `Catalog`, another
//! process) are not seen until this catalog's next mutation. Two catalogs
//! over the same slot can overwrite each other's work.

use crate::error::Result;
use crate::model::Product;
use crate::store::{ProductStore, StorageBackend};

type Subscriber = Box<dyn FnMut(&[Product])>;

pub struct Catalog<B: StorageBackend> {
    store: ProductStore<B>,
    snapshot: Vec<Product>,
    subscribers: Vec<Subscriber>,
}

impl<B: StorageBackend> Catalog<B> {
    /// Loads the collection once and publishes it as the first snapshot.
    pub fn mount(store: ProductStore<B>) -> Result<Self> {
        let snapshot = store.read_all()?;
        Ok(Self {
            store,
            snapshot,
            subscribers: Vec::new(),
        })
    }

    pub fn products(&self) -> &[Product] {
        &self.snapshot
    }

    pub fn store(&self) -> &ProductStore<B> {
        &self.store
    }

    /// Registers a callback run with every snapshot published from now on.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&[Product]) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn add(&mut self, product: Product) -> Result<()> {
        self.store.insert(product)?;
        self.publish()
    }

    /// Returns how many stored products had the id.
    pub fn update(&mut self, product: Product) -> Result<usize> {
        let replaced = self.store.update_by_id(&product)?;
        self.publish()?;
        Ok(replaced)
    }

    /// Returns how many stored products had the id.
    pub fn remove(&mut self, id: &str) -> Result<usize> {
        let removed = self.store.delete_by_id(id)?;
        self.publish()?;
        Ok(removed)
    }

    fn publish(&mut self) -> Result<()> {
        self.snapshot = self.store.read_all()?;
        for subscriber in self.subscribers.iter_mut() {
            subscriber(&self.snapshot);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RealtyError;
    use crate::store::mem_backend::MemBackend;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn product(id: &str) -> Product {
        Product::new(id, "X", "d", 500000.0, "Villa", "/i.jpg")
    }

    fn mounted() -> Catalog<MemBackend> {
        Catalog::mount(ProductStore::new(MemBackend::new())).unwrap()
    }

    fn assert_consistent<B: StorageBackend>(catalog: &Catalog<B>) {
        assert_eq!(catalog.products(), catalog.store().read_all().unwrap());
    }

    #[test]
    fn mount_loads_existing_collection() {
        let store = ProductStore::new(MemBackend::new());
        store.insert(product("1")).unwrap();
        store.insert(product("2")).unwrap();

        let catalog = Catalog::mount(store).unwrap();
        assert_eq!(catalog.products().len(), 2);
    }

    #[test]
    fn add_into_empty_store() {
        let mut catalog = mounted();
        catalog.add(product("1")).unwrap();

        assert_eq!(catalog.store().read_all().unwrap(), vec![product("1")]);
        assert_consistent(&catalog);
    }

    #[test]
    fn snapshot_matches_store_after_every_mutation() {
        let mut catalog = mounted();
        catalog.add(product("1")).unwrap();
        assert_consistent(&catalog);
        catalog.add(product("2")).unwrap();
        assert_consistent(&catalog);

        let mut changed = product("1");
        changed.name = "Renamed".into();
        assert_eq!(catalog.update(changed).unwrap(), 1);
        assert_consistent(&catalog);
        assert_eq!(catalog.products()[0].name, "Renamed");

        assert_eq!(catalog.remove("2").unwrap(), 1);
        assert_consistent(&catalog);
        assert_eq!(catalog.products().len(), 1);
    }

    #[test]
    fn missing_ids_are_noops() {
        let mut catalog = mounted();
        catalog.add(product("1")).unwrap();
        assert_eq!(catalog.update(product("7")).unwrap(), 0);
        assert_eq!(catalog.remove("7").unwrap(), 0);
        assert_eq!(catalog.products(), vec![product("1")]);
    }

    #[test]
    fn subscribers_see_each_published_snapshot() {
        let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let mut catalog = mounted();
        let sink = Rc::clone(&seen);
        catalog.subscribe(move |products| sink.borrow_mut().push(products.len()));

        catalog.add(product("1")).unwrap();
        catalog.add(product("2")).unwrap();
        catalog.remove("1").unwrap();

        assert_eq!(*seen.borrow(), vec![1, 2, 1]);
    }

    #[test]
    fn failed_write_keeps_previous_snapshot() {
        let mut catalog = mounted();
        catalog.add(product("1")).unwrap();
        catalog.store().backend().set_simulate_write_error(true);

        assert!(matches!(
            catalog.add(product("2")),
            Err(RealtyError::Store(_))
        ));
        assert_eq!(catalog.products(), vec![product("1")]);
    }

    #[test]
    fn failed_duplicate_add_does_not_publish() {
        let calls = Rc::new(RefCell::new(0));
        let mut catalog = mounted();
        catalog.add(product("1")).unwrap();
        let counter = Rc::clone(&calls);
        catalog.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(catalog.add(product("1")).is_err());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn two_catalogs_on_one_slot_lose_updates() {
        let backend = Rc::new(MemBackend::new());
        let seed = ProductStore::new(Rc::clone(&backend));
        seed.insert(product("1")).unwrap();
        seed.insert(product("2")).unwrap();

        let mut first = Catalog::mount(ProductStore::new(Rc::clone(&backend))).unwrap();
        let second = Catalog::mount(ProductStore::new(Rc::clone(&backend))).unwrap();

        first.add(product("3")).unwrap();
        // `second` still holds the stale snapshot from mount time.
        assert_eq!(second.products().len(), 2);

        // A whole-collection write built from that stale view clobbers "3".
        second
            .store()
            .write_all(&second.products()[..1])
            .unwrap();
        let ids: Vec<String> = first
            .store()
            .read_all()
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["1"]);
    }
}
