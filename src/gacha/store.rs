//! Key/value persistence.
//!
//! `BrowserStore` wraps `window.localStorage`; any read/write failure flips it
//! onto a shared in-memory map for the rest of the session, logged once and
//! never surfaced to the caller (the quota then resets on reload, which is the
//! accepted degraded mode). `MemoryStore` is the same map without the browser
//! half, used by tests and persistence round-trips.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::Storage;

pub trait KeyStore {
    fn read(&self, key: &str) -> Option<String>;

    /// Writes never fail from the caller's perspective; implementations
    /// degrade internally instead of propagating storage errors.
    fn write(&self, key: &str, value: &str);
}

type SharedMap = Rc<RefCell<HashMap<String, String>>>;

/// Plain in-memory store. Clones share the same map, so a "reload" in tests
/// is a fresh tracker over the same store.
#[derive(Clone, Default)]
pub struct MemoryStore {
    map: SharedMap,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.map
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Browser-backed store with in-memory fallback.
#[derive(Clone)]
pub struct BrowserStore {
    backing: Option<Storage>,
    fallback: SharedMap,
    degraded: Rc<Cell<bool>>,
}

impl BrowserStore {
    pub fn new() -> Self {
        let backing = web_sys::window().and_then(|win| win.local_storage().ok().flatten());
        if backing.is_none() {
            super::log("storage unavailable, quota state is in-memory for this session");
        }
        Self {
            backing,
            fallback: SharedMap::default(),
            degraded: Rc::new(Cell::new(false)),
        }
    }

    fn mark_degraded(&self) {
        if !self.degraded.replace(true) {
            super::log("storage access failed, continuing with in-memory quota state");
        }
    }
}

impl Default for BrowserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        if !self.degraded.get() {
            if let Some(storage) = &self.backing {
                match storage.get_item(key) {
                    Ok(value) => return value,
                    Err(_) => self.mark_degraded(),
                }
            }
        }
        self.fallback.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        if !self.degraded.get() {
            if let Some(storage) = &self.backing {
                if storage.set_item(key, value).is_ok() {
                    return;
                }
                self.mark_degraded();
            }
        }
        self.fallback
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert_eq!(store.read("k"), None);
        store.write("k", "v");
        assert_eq!(store.read("k").as_deref(), Some("v"));
        store.write("k", "w");
        assert_eq!(store.read("k").as_deref(), Some("w"));
    }

    #[test]
    fn memory_store_clones_share_the_map() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.write("k", "v");
        assert_eq!(handle.read("k").as_deref(), Some("v"));
    }
}
