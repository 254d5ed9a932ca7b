use thiserror::Error;
use tracing::warn;

use crate::{LANGUAGE_KEY, Language};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    #[error("browser storage unavailable")]
    StorageUnavailable,
    #[error("preference storage error: {0}")]
    Io(String),
}

/// Persistence for the interface language.
pub trait PreferenceStore {
    /// Raw stored code, if any. Validation is the caller's job so that
    /// unknown values fall back instead of failing.
    fn load_raw(&self) -> Result<Option<String>, PreferenceError>;
    fn save(&mut self, lang: Language) -> Result<(), PreferenceError>;

    /// Stored language, ignoring unreadable or unknown values.
    fn load(&self) -> Option<Language> {
        match self.load_raw() {
            Ok(raw) => raw.as_deref().and_then(Language::from_code),
            Err(err) => {
                warn!(%err, "language preference unreadable");
                None
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    value: Option<String>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn load_raw(&self) -> Result<Option<String>, PreferenceError> {
        Ok(self.value.clone())
    }

    fn save(&mut self, lang: Language) -> Result<(), PreferenceError> {
        self.value = Some(lang.code().to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm_storage {
    use super::{PreferenceError, PreferenceStore};
    use crate::Language;

    /// `localStorage`-backed preference under a single key.
    #[derive(Debug)]
    pub struct LocalStoragePreferenceStore {
        key: String,
    }

    impl LocalStoragePreferenceStore {
        pub fn new(key: impl Into<String>) -> Result<Self, PreferenceError> {
            // Fail early so callers can fall back to memory.
            window_local_storage()?;
            Ok(Self { key: key.into() })
        }
    }

    impl PreferenceStore for LocalStoragePreferenceStore {
        fn load_raw(&self) -> Result<Option<String>, PreferenceError> {
            let storage = window_local_storage()?;
            storage
                .get_item(&self.key)
                .map_err(|e| PreferenceError::Io(format!("get_item failed: {:?}", e)))
        }

        fn save(&mut self, lang: Language) -> Result<(), PreferenceError> {
            let storage = window_local_storage()?;
            storage
                .set_item(&self.key, lang.code())
                .map_err(|e| PreferenceError::Io(format!("set_item failed: {:?}", e)))
        }
    }

    fn window_local_storage() -> Result<web_sys::Storage, PreferenceError> {
        let win = web_sys::window().ok_or(PreferenceError::StorageUnavailable)?;
        win.local_storage()
            .map_err(|e| PreferenceError::Io(format!("localStorage error: {:?}", e)))?
            .ok_or(PreferenceError::StorageUnavailable)
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_storage::LocalStoragePreferenceStore;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct LocalStoragePreferenceStore;

#[cfg(not(target_arch = "wasm32"))]
impl LocalStoragePreferenceStore {
    pub fn new(_key: impl Into<String>) -> Result<Self, PreferenceError> {
        Err(PreferenceError::StorageUnavailable)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for LocalStoragePreferenceStore {
    fn load_raw(&self) -> Result<Option<String>, PreferenceError> {
        Err(PreferenceError::StorageUnavailable)
    }

    fn save(&mut self, _lang: Language) -> Result<(), PreferenceError> {
        Err(PreferenceError::StorageUnavailable)
    }
}

/// Whichever store the host supports: `localStorage` when reachable,
/// memory otherwise (private browsing, storage disabled, native tests).
#[derive(Debug)]
pub enum LanguagePreference {
    Local(LocalStoragePreferenceStore),
    Memory(InMemoryPreferenceStore),
}

impl LanguagePreference {
    pub fn open() -> Self {
        match LocalStoragePreferenceStore::new(LANGUAGE_KEY) {
            Ok(s) => LanguagePreference::Local(s),
            Err(err) => {
                warn!(%err, "falling back to in-memory language preference");
                LanguagePreference::Memory(InMemoryPreferenceStore::new())
            }
        }
    }
}

impl PreferenceStore for LanguagePreference {
    fn load_raw(&self) -> Result<Option<String>, PreferenceError> {
        match self {
            LanguagePreference::Local(s) => s.load_raw(),
            LanguagePreference::Memory(s) => s.load_raw(),
        }
    }

    fn save(&mut self, lang: Language) -> Result<(), PreferenceError> {
        match self {
            LanguagePreference::Local(s) => s.save(lang),
            LanguagePreference::Memory(s) => s.save(lang),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let mut store = InMemoryPreferenceStore::new();
        assert_eq!(store.load(), None);
        store.save(Language::En).unwrap();
        assert_eq!(store.load_raw().unwrap().as_deref(), Some("en"));
        assert_eq!(store.load(), Some(Language::En));
    }

    #[test]
    fn unknown_stored_values_are_ignored() {
        let store = InMemoryPreferenceStore {
            value: Some("klingon".to_string()),
        };
        assert_eq!(store.load(), None);
    }

    #[test]
    fn native_build_falls_back_to_memory() {
        let mut pref = LanguagePreference::open();
        assert!(matches!(pref, LanguagePreference::Memory(_)));
        pref.save(Language::It).unwrap();
        assert_eq!(pref.load(), Some(Language::It));
    }

    #[test]
    fn native_local_storage_is_unavailable() {
        assert_eq!(
            LocalStoragePreferenceStore::new("k").unwrap_err(),
            PreferenceError::StorageUnavailable
        );
    }
}
