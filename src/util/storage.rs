//! Key-value storage tiers holding the persisted session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store writes to exactly one of two tiers: `localStorage`
//! (durable) or `sessionStorage` (ephemeral). These helpers centralize the
//! hydrate-only web-sys glue so the store itself stays browser-agnostic.
//!
//! TRADE-OFFS
//! ==========
//! Browser storage is best-effort: a missing window or a quota error degrades
//! to "nothing stored" with a warning, and SSR paths no-op.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// A synchronous string key-value store.
pub trait StorageTier {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Which browser storage area a [`BrowserTier`] wraps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BrowserArea {
    Local,
    Session,
}

/// `StorageTier` over `window.localStorage` / `window.sessionStorage`.
#[derive(Clone, Copy, Debug)]
pub struct BrowserTier {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    area: BrowserArea,
}

impl BrowserTier {
    /// Survives browser restarts.
    pub fn durable() -> Self {
        Self { area: BrowserArea::Local }
    }

    /// Scoped to the current tab session.
    pub fn ephemeral() -> Self {
        Self { area: BrowserArea::Session }
    }

    #[cfg(feature = "hydrate")]
    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        let storage = match self.area {
            BrowserArea::Local => window.local_storage(),
            BrowserArea::Session => window.session_storage(),
        };
        storage.ok().flatten()
    }
}

impl StorageTier for BrowserTier {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            self.storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = self.storage() else {
                leptos::logging::warn!("storage {:?} unavailable; {key} not saved", self.area);
                return;
            };
            if storage.set_item(key, value).is_err() {
                leptos::logging::warn!("storage {:?} rejected write to {key}", self.area);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = self.storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory `StorageTier`, used off-browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryTier {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryTier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl StorageTier for MemoryTier {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}
