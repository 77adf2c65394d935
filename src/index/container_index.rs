//! Resolve-once container cache.
//!
//! Every card picture lookup starts by finding the card's container, and
//! many cards are drawn at once, so the index is read far more often than it
//! is written. Entries are never evicted or refreshed: the first answer for
//! an id, including "not installed", is kept for the life of the process.
//!
//! ## Locking
//!
//! Double-checked locking. Lookups take the shared lock. On a miss the
//! shared lock is released and the exclusive lock taken; the entry is
//! checked again before the source is queried and the answer inserted. The
//! source is only ever called under the exclusive lock, and no thread
//! re-enters the lock while holding it.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::core::{Container, ContainerId};

use super::source::ContainerSource;

type Entries = FxHashMap<ContainerId, Option<Arc<Container>>>;

/// Memoizing `ContainerId` → `Container` index.
///
/// ## Example
///
/// ```
/// use card_imagery::core::{Container, ContainerId, GameId};
/// use card_imagery::index::ContainerIndex;
///
/// let id = ContainerId::random();
/// let index = ContainerIndex::new(move |wanted: ContainerId| {
///     (wanted == id).then(|| Container::new(id, GameId::random(), "Core"))
/// });
///
/// let first = index.resolve(id).unwrap();
/// let second = index.resolve(id).unwrap();
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
/// ```
pub struct ContainerIndex<S> {
    source: S,
    entries: RwLock<Entries>,
}

impl<S: ContainerSource> ContainerIndex<S> {
    /// Create an empty index over a container source.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            entries: RwLock::new(Entries::default()),
        }
    }

    /// Resolve a container, querying the source on first use only.
    ///
    /// A `None` from the source is cached too and never retried.
    pub fn resolve(&self, id: ContainerId) -> Option<Arc<Container>> {
        if let Some(entry) = self.read().get(&id) {
            return entry.clone();
        }

        let mut entries = self.write();
        // Another thread may have filled it while we waited.
        if let Some(entry) = entries.get(&id) {
            return entry.clone();
        }

        let resolved = self.source.container_by_id(id).map(Arc::new);
        match &resolved {
            Some(container) => debug!("Indexed {} ({})", id, container.name),
            None => warn!("{} is not installed; caching the miss", id),
        }
        entries.insert(id, resolved.clone());
        resolved
    }

    /// Check whether an id has been resolved (successfully or not).
    #[must_use]
    pub fn contains(&self, id: ContainerId) -> bool {
        self.read().contains_key(&id)
    }

    /// Number of resolved ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Access the underlying source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    // Entries are only ever added whole, so a poisoned map is still valid.
    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S> std::fmt::Debug for ContainerIndex<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let len = self
            .entries
            .read()
            .map(|e| e.len())
            .unwrap_or_else(|poisoned| poisoned.into_inner().len());
        f.debug_struct("ContainerIndex").field("entries", &len).finish()
    }
}
