use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

/// Words the dictionary starts with
pub const SEED_ENTRIES: [(&str, &str); 3] = [
    ("knight", "a man in armor"),
    ("knife", "a piece of metal"),
    ("knee", "ur knee"),
];

/// A single word and its definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub description: String,
}

/// Errors returned by dictionary mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("word '{0}' not found")]
    NotFound(String),
    #[error("word '{0}' already exists")]
    Conflict(String),
}

#[derive(Debug, Default)]
struct Entries {
    definitions: HashMap<String, String>,
    // insertion order of the keys in `definitions`
    order: Vec<String>,
}

impl Entries {
    fn insert(&mut self, name: String, description: String) {
        if self.definitions.insert(name.clone(), description).is_none() {
            self.order.push(name);
        }
    }
}

/// Shareable in-memory dictionary for use across async handlers
///
/// Every operation holds the lock for its whole read-modify-write, so
/// concurrent mutations never interleave. No operation awaits while the
/// lock is held.
#[derive(Clone, Default)]
pub struct Dictionary {
    inner: Arc<RwLock<Entries>>,
}

impl Dictionary {
    /// Create an empty dictionary
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dictionary holding [`SEED_ENTRIES`]
    pub fn seeded() -> Self {
        Self::from_entries(
            SEED_ENTRIES
                .iter()
                .map(|(name, description)| (name.to_string(), description.to_string())),
        )
    }

    /// Create a dictionary from `(name, description)` pairs, keeping their order
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut inner = Entries::default();
        for (name, description) in entries {
            inner.insert(name, description);
        }
        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    // A panic while holding the lock cannot leave `Entries` half-updated,
    // so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up the definition of `name`
    pub fn get(&self, name: &str) -> Option<String> {
        self.read().definitions.get(name).cloned()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.read().definitions.contains_key(name)
    }

    /// Insert a new word
    ///
    /// # Errors
    /// Returns [`StoreError::Conflict`] if `name` is already defined; the
    /// existing definition is left untouched.
    pub fn create(&self, name: String, description: String) -> Result<Entry, StoreError> {
        let mut entries = self.write();
        if entries.definitions.contains_key(&name) {
            return Err(StoreError::Conflict(name));
        }
        entries.insert(name.clone(), description.clone());
        tracing::debug!("Created word: {}", name);
        Ok(Entry { name, description })
    }

    /// Set the definition of `name`, adding the word if it is missing
    pub fn update(&self, name: String, description: String) -> Entry {
        let mut entries = self.write();
        entries.insert(name.clone(), description.clone());
        tracing::debug!("Updated word: {}", name);
        Entry { name, description }
    }

    /// Remove `name` from the dictionary
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if `name` is not defined.
    pub fn delete(&self, name: &str) -> Result<(), StoreError> {
        let mut entries = self.write();
        if entries.definitions.remove(name).is_none() {
            return Err(StoreError::NotFound(name.to_string()));
        }
        entries.order.retain(|key| key != name);
        tracing::debug!("Deleted word: {}", name);
        Ok(())
    }

    /// All words in insertion order
    pub fn keys(&self) -> Vec<String> {
        self.read().order.clone()
    }

    pub fn len(&self) -> usize {
        self.read().definitions.len()
    }
}
