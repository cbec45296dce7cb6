//! Persisted visitor preferences for country and language.
//!
//! The store abstracts whatever key-value mechanism the frontend hands
//! us (local storage in the browser, a cookie jar, an in-memory map in
//! tests). Reads distinguish "nothing stored" from "stored but
//! unparseable" from "store unreachable" so callers can decide whether
//! to repair the stored value.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::country::Country;
use crate::language::Language;

pub const COUNTRY_KEY: &str = "preferred_country";

/// Country-scoped key for the language preference.
pub fn language_key(country: Country) -> String {
    format!("preferred_language_{}", country.code())
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("preference store unavailable: {0}")]
    Unavailable(String),
}

/// Key-value storage for visitor preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Result of reading a preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredPreference<T> {
    /// A valid value was stored.
    Set(T),
    /// Nothing stored under the key.
    Missing,
    /// A value was stored but could not be interpreted; carries the raw
    /// stored string.
    Invalid(String),
    /// The store itself could not be read; carries the cause.
    Unavailable(String),
}

impl<T> StoredPreference<T> {
    /// The stored value, or `fallback` for every other state.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            StoredPreference::Set(value) => value,
            _ => fallback,
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, StoredPreference::Set(_))
    }
}

/// In-memory store, used in tests and server-side rendering.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self
            .values
            .read()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self
            .values
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut values = self
            .values
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        values.remove(key);
        Ok(())
    }
}

pub fn load_country_preference(store: &dyn PreferenceStore) -> StoredPreference<Country> {
    match store.get(COUNTRY_KEY) {
        Err(err) => StoredPreference::Unavailable(err.to_string()),
        Ok(None) => StoredPreference::Missing,
        Ok(Some(raw)) => match Country::from_code(&raw) {
            Some(country) => StoredPreference::Set(country),
            None => StoredPreference::Invalid(raw),
        },
    }
}

pub fn store_country_preference(
    store: &dyn PreferenceStore,
    country: Country,
) -> Result<(), StoreError> {
    store.set(COUNTRY_KEY, country.code())
}

/// Reads the language preference for a country. A stored language that
/// is not in the country's allowed set is reported as `Invalid`, not
/// silently accepted.
pub fn load_language_preference(
    store: &dyn PreferenceStore,
    country: Country,
) -> StoredPreference<Language> {
    match store.get(&language_key(country)) {
        Err(err) => StoredPreference::Unavailable(err.to_string()),
        Ok(None) => StoredPreference::Missing,
        Ok(Some(raw)) => match Language::from_code(&raw) {
            Some(language) if country.allows_language(language) => StoredPreference::Set(language),
            _ => StoredPreference::Invalid(raw),
        },
    }
}

/// Persists a language choice under the country-scoped key. Languages
/// outside the country's allowed set are rejected upstream; this only
/// writes.
pub fn store_language_preference(
    store: &dyn PreferenceStore,
    country: Country,
    language: Language,
) -> Result<(), StoreError> {
    store.set(&language_key(country), language.code())
}

/// The language in effect for a country: the stored preference when it
/// is valid for the country, otherwise the country's default. Total.
pub fn resolve_language(country: Country, store: &dyn PreferenceStore) -> Language {
    load_language_preference(store, country).unwrap_or(country.default_language())
}
