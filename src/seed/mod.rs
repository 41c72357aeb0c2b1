//! Seed provider - picks the session seed and keeps it for the tab's lifetime
//!
//! Priority: an explicit `?seed=` value, then whatever the session store
//! already holds, then a fresh random base-36 string.

pub mod hash;
pub mod store;

pub use hash::seed_to_int;
pub use store::{SeedStore, SessionStore};

use std::fmt;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Where the active seed came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    /// Supplied externally (URL parameter)
    Requested,
    /// Read back from the store
    Stored,
    /// Freshly generated
    Fresh,
}

impl fmt::Display for SeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Requested => "url",
            Self::Stored => "session",
            Self::Fresh => "fresh",
        })
    }
}

/// One player's session: the seed and the store it is persisted in.
///
/// Held by the single UI controller; tests build isolated sessions over
/// a `MemoryStore`.
#[derive(Debug)]
pub struct Session<S: SeedStore> {
    store: S,
    seed: String,
    source: SeedSource,
}

impl<S: SeedStore> Session<S> {
    /// Resolve the session seed, persisting it whenever it was not already stored.
    pub fn open<R: Rng>(mut store: S, requested: Option<&str>, rng: &mut R, seed_len: usize) -> Self {
        let requested = requested.filter(|s| !s.is_empty());
        let (seed, source) = match (requested, store.load()) {
            (Some(seed), _) => {
                store.save(seed);
                (seed.to_string(), SeedSource::Requested)
            }
            (None, Some(stored)) => (stored, SeedSource::Stored),
            (None, None) => {
                let seed = fresh_seed(rng, seed_len);
                store.save(&seed);
                (seed, SeedSource::Fresh)
            }
        };
        info!(seed = %seed, source = ?source, "session opened");
        Self { store, seed, source }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn source(&self) -> SeedSource {
        self.source
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Throw the current seed away and persist a fresh one.
    /// Everything derived from the old seed is stale after this.
    pub fn regenerate<R: Rng>(&mut self, rng: &mut R, seed_len: usize) -> &str {
        let seed = fresh_seed(rng, seed_len);
        self.store.save(&seed);
        info!(old = %self.seed, new = %seed, "seed regenerated");
        self.seed = seed;
        self.source = SeedSource::Fresh;
        &self.seed
    }
}

/// Random lowercase base-36 string, at least one character long
pub fn fresh_seed<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len.max(1))
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

/// OS-seeded generator for anything that should differ per visit
pub fn fresh_rng() -> SmallRng {
    let mut buf = [0u8; 32];
    getrandom::fill(&mut buf).expect("getrandom");
    SmallRng::from_seed(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::store::MemoryStore;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    #[test]
    fn requested_seed_wins_and_is_persisted() {
        let session = Session::open(MemoryStore::with_seed("stored"), Some("abc"), &mut rng(), 8);
        assert_eq!(session.seed(), "abc");
        assert_eq!(session.source(), SeedSource::Requested);
        assert_eq!(session.store().load().as_deref(), Some("abc"));
    }

    #[test]
    fn stored_seed_is_reused() {
        let session = Session::open(MemoryStore::with_seed("stored"), None, &mut rng(), 8);
        assert_eq!(session.seed(), "stored");
        assert_eq!(session.source(), SeedSource::Stored);
    }

    #[test]
    fn empty_request_is_ignored() {
        let session = Session::open(MemoryStore::with_seed("stored"), Some(""), &mut rng(), 8);
        assert_eq!(session.seed(), "stored");
    }

    #[test]
    fn fresh_seed_when_nothing_stored() {
        let session = Session::open(MemoryStore::new(), None, &mut rng(), 8);
        assert_eq!(session.source(), SeedSource::Fresh);
        assert_eq!(session.seed().len(), 8);
        assert!(session.seed().bytes().all(|b| BASE36.contains(&b)));
        assert_eq!(session.store().load().as_deref(), Some(session.seed()));
    }

    #[test]
    fn regenerate_replaces_and_persists() {
        let mut session = Session::open(MemoryStore::with_seed("stored"), None, &mut rng(), 8);
        let new_seed = session.regenerate(&mut rng(), 8).to_string();
        assert_ne!(new_seed, "stored");
        assert_eq!(session.seed(), new_seed);
        assert_eq!(session.source(), SeedSource::Fresh);
        assert_eq!(session.store().load(), Some(new_seed));
    }

    #[test]
    fn source_names_where_the_seed_came_from() {
        assert_eq!(SeedSource::Requested.to_string(), "url");
        assert_eq!(SeedSource::Stored.to_string(), "session");
        assert_eq!(SeedSource::Fresh.to_string(), "fresh");
    }

    #[test]
    fn fresh_seed_is_never_empty() {
        assert_eq!(fresh_seed(&mut rng(), 0).len(), 1);
    }
}
