//! Web Storage bindings for the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `localStorage` backs remember-me logins and `sessionStorage` backs
//! tab-scoped logins. Outside the `csr` feature there is no browser, so reads
//! find nothing and writes are dropped, keeping native builds deterministic.

#[cfg(test)]
#[path = "browser_storage_test.rs"]
mod browser_storage_test;

use survey_session::{Storage, StorageArea, StorageError};

/// Handle to one of the two browser storage areas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrowserStorage {
    /// `window.localStorage`
    Local,
    /// `window.sessionStorage`
    Session,
}

impl BrowserStorage {
    #[cfg(feature = "csr")]
    fn handle(self) -> Result<web_sys::Storage, StorageError> {
        let unavailable = StorageError::Unavailable(self.area());
        let Some(window) = web_sys::window() else {
            return Err(unavailable);
        };
        let storage = match self {
            Self::Local => window.local_storage(),
            Self::Session => window.session_storage(),
        };
        match storage {
            Ok(Some(storage)) => Ok(storage),
            _ => Err(unavailable),
        }
    }
}

impl Storage for BrowserStorage {
    fn area(&self) -> StorageArea {
        match self {
            Self::Local => StorageArea::Durable,
            Self::Session => StorageArea::SessionScoped,
        }
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            self.handle()?.get_item(key).map_err(|_| StorageError::Unavailable(self.area()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            self.handle()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            self.handle()?
                .remove_item(key)
                .map_err(|e| StorageError::Remove { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Ok(())
        }
    }
}
