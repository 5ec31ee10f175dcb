//! Key/value storage areas backing the persisted session.
//!
//! DESIGN
//! ======
//! The trait mirrors the browser Web Storage API (`getItem`, `setItem`,
//! `removeItem`) with string keys and string values, so the browser binding in
//! the `client` crate is a thin adapter. Methods take `&self` because storage
//! handles refer to a shared area rather than owning it.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::error::StorageError;

/// Which of the two storage locations a handle points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageArea {
    /// Survives browser restarts (`localStorage`). Used for remember-me.
    Durable,
    /// Cleared when the tab closes (`sessionStorage`).
    SessionScoped,
}

impl StorageArea {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Durable => "durable",
            Self::SessionScoped => "session-scoped",
        }
    }
}

impl fmt::Display for StorageArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string key/value store.
pub trait Storage {
    /// The area this handle reads and writes.
    fn area(&self) -> StorageArea;

    /// Read the value for `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the area cannot be reached.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] when the area rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Remove`] when the area rejects the removal.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage area.
///
/// Clones share the same underlying map, the same way two `localStorage`
/// handles observe each other's writes. Used by tests and by builds without a
/// browser.
#[derive(Clone, Debug)]
pub struct MemoryStorage {
    area: StorageArea,
    items: Rc<RefCell<BTreeMap<String, String>>>,
    reject_writes: Rc<Cell<bool>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new(area: StorageArea) -> Self {
        Self { area, items: Rc::default(), reject_writes: Rc::default() }
    }

    #[must_use]
    pub fn durable() -> Self {
        Self::new(StorageArea::Durable)
    }

    #[must_use]
    pub fn session_scoped() -> Self {
        Self::new(StorageArea::SessionScoped)
    }

    /// Make subsequent `set_item` calls fail, simulating an exhausted quota.
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }

    /// Keys currently stored, in sorted order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.items.borrow().keys().cloned().collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn area(&self) -> StorageArea {
        self.area
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_writes.get() {
            return Err(StorageError::Write { key: key.to_owned(), reason: "quota exceeded".to_owned() });
        }
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
