//! Seed stores - where the session seed lives between page loads

use tracing::warn;

/// A single-entry key-value store holding the current seed
pub trait SeedStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, seed: &str);
}

/// `sessionStorage` key holding the seed
pub const SEED_KEY: &str = "clueGridSeed";

/// Browser `sessionStorage`, scoped to the tab's browsing session.
///
/// Storage can be missing or throw (private modes, sandboxed frames);
/// the seed then only lives as long as the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStore;

impl SessionStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.session_storage().ok().flatten())
    }
}

impl SeedStore for SessionStore {
    fn load(&self) -> Option<String> {
        Self::storage()?
            .get_item(SEED_KEY)
            .ok()
            .flatten()
            .filter(|s| !s.is_empty())
    }

    fn save(&mut self, seed: &str) {
        let Some(storage) = Self::storage() else {
            warn!("sessionStorage unavailable, seed not persisted");
            return;
        };
        if let Err(err) = storage.set_item(SEED_KEY, seed) {
            warn!(?err, "failed to persist seed");
        }
    }
}

/// In-process store for tests
#[cfg(test)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    seed: Option<String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: Some(seed.into()),
        }
    }
}

#[cfg(test)]
impl SeedStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.seed.clone().filter(|s| !s.is_empty())
    }

    fn save(&mut self, seed: &str) {
        self.seed = Some(seed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites() {
        let mut store = MemoryStore::with_seed("old");
        store.save("new");
        assert_eq!(store.load().as_deref(), Some("new"));
    }

    #[test]
    fn memory_store_treats_empty_as_missing() {
        let store = MemoryStore::with_seed("");
        assert_eq!(store.load(), None);
    }
}
