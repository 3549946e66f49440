//! Key/value preference persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site persists exactly one value (the theme). `LocalStoragePreferences`
//! is the browser backend; outside the browser build it stores nothing so
//! native builds stay deterministic. `MemoryPreferences` keeps values in
//! process for embedders and tests.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::SiteError;

pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::Storage` when the backing store cannot be reached.
    fn load(&self, key: &str) -> Result<Option<String>, SiteError>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::Storage` when the backing store cannot be reached
    /// or refuses the write.
    fn save(&self, key: &str, value: &str) -> Result<(), SiteError>;
}

/// Browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStoragePreferences;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, SiteError> {
    let window = web_sys::window().ok_or(SiteError::NoWindow)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(SiteError::Storage("localStorage is disabled".to_owned())),
        Err(err) => Err(SiteError::Storage(format!("{err:?}"))),
    }
}

impl PreferenceStore for LocalStoragePreferences {
    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn load(&self, key: &str) -> Result<Option<String>, SiteError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|err| SiteError::Storage(format!("{err:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(None)
        }
    }

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn save(&self, key: &str, value: &str) -> Result<(), SiteError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|err| SiteError::Storage(format!("{err:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(())
        }
    }
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with one existing value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self, key: &str) -> Result<Option<String>, SiteError> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), SiteError> {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
