//! Per-collection clustering state container.
//!
//! A [`ClusteringStore`] holds the fetched clustering list, the current
//! selection, and request status for one collection, with reducer-style
//! transitions applied under a single write lock. [`ClusteringStores`] is
//! the registry handing out one store per collection id.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};

use super::Clustering;
use super::tree::{self, TreeNodes};

/// Fetch status of the clustering list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// Initial state, or a fetch is in flight.
    #[default]
    Pending,
    /// Fetch succeeded with a non-empty list.
    Success,
    /// Fetch succeeded with zero clusterings.
    Empty,
    /// Fetch failed; the message is kept for logging, the view renders a
    /// generic failure line.
    Error(String),
}

/// Token tying a fetch completion to the fetch that started it.
///
/// Completions carrying a stale epoch are dropped, so the latest fetch
/// always wins regardless of completion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchEpoch(u64);

#[derive(Debug, Default)]
struct StoreState {
    phase: Phase,
    epoch: u64,
    clusterings: Vec<Clustering>,
    selected_id: Option<String>,
    fetched_at: Option<DateTime<Utc>>,
    generating: bool,
    /// Memoized tree for the selected clustering, keyed by clustering id.
    /// A cache miss rebuilds; correctness never depends on a hit.
    tree_cache: Option<(String, Arc<TreeNodes>)>,
}

/// State container for one collection's clusterings.
#[derive(Debug, Clone, Default)]
pub struct ClusteringStore {
    inner: Arc<RwLock<StoreState>>,
}

impl ClusteringStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current fetch phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.inner.read().unwrap().phase.clone()
    }

    /// Mark a fetch as started. Any phase transitions back to `Pending`.
    #[must_use]
    pub fn begin_fetch(&self) -> FetchEpoch {
        let mut state = self.inner.write().unwrap();
        state.epoch += 1;
        state.phase = Phase::Pending;
        FetchEpoch(state.epoch)
    }

    /// Apply a fetch result. Returns `false` when the epoch is stale and
    /// the result was dropped.
    pub fn finish_fetch(
        &self,
        epoch: FetchEpoch,
        result: Result<Vec<Clustering>, String>,
    ) -> bool {
        let mut state = self.inner.write().unwrap();
        if epoch.0 != state.epoch {
            return false;
        }
        match result {
            Ok(clusterings) => {
                state.phase = if clusterings.is_empty() {
                    Phase::Empty
                } else {
                    Phase::Success
                };
                // Keep the selection when it survived the refetch,
                // otherwise fall back to the first clustering.
                let keep = state
                    .selected_id
                    .as_ref()
                    .is_some_and(|id| clusterings.iter().any(|c| &c.id == id));
                if !keep {
                    state.selected_id = clusterings.first().map(|c| c.id.clone());
                }
                state.clusterings = clusterings;
                state.fetched_at = Some(Utc::now());
                // New data may carry new items under an old id.
                state.tree_cache = None;
            }
            Err(message) => {
                state.phase = Phase::Error(message);
            }
        }
        true
    }

    /// Select a clustering by id. An unknown id clears the selection; the
    /// view renders that as "no clustering selected", not as an error.
    pub fn select(&self, id: &str) {
        let mut state = self.inner.write().unwrap();
        if state.clusterings.iter().any(|c| c.id == id) {
            state.selected_id = Some(id.to_string());
        } else {
            state.selected_id = None;
        }
    }

    /// Currently selected clustering, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Clustering> {
        let state = self.inner.read().unwrap();
        let id = state.selected_id.as_ref()?;
        state.clusterings.iter().find(|c| &c.id == id).cloned()
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<String> {
        self.inner.read().unwrap().selected_id.clone()
    }

    /// Snapshot of the clustering list.
    #[must_use]
    pub fn clusterings(&self) -> Vec<Clustering> {
        self.inner.read().unwrap().clusterings.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().clusterings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tree projection for a clustering, memoized per clustering id so a
    /// re-render of the same selection reuses the map.
    #[must_use]
    pub fn tree_for(&self, clustering: &Clustering) -> Arc<TreeNodes> {
        {
            let state = self.inner.read().unwrap();
            if let Some((id, cached)) = &state.tree_cache {
                if id == &clustering.id {
                    return Arc::clone(cached);
                }
            }
        }
        let built = Arc::new(tree::build_tree(clustering));
        let mut state = self.inner.write().unwrap();
        state.tree_cache = Some((clustering.id.clone(), Arc::clone(&built)));
        built
    }

    /// Claim the generation single-flight slot. Returns `false` when a
    /// generation is already in flight; both triggers share this flag.
    #[must_use]
    pub fn begin_generation(&self) -> bool {
        let mut state = self.inner.write().unwrap();
        if state.generating {
            return false;
        }
        state.generating = true;
        true
    }

    /// Release the generation slot.
    pub fn finish_generation(&self) {
        self.inner.write().unwrap().generating = false;
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.inner.read().unwrap().generating
    }

    /// Last successful fetch time, if any.
    #[must_use]
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.inner.read().unwrap().fetched_at
    }
}

/// Registry of clustering stores keyed by collection id.
#[derive(Debug, Clone, Default)]
pub struct ClusteringStores {
    inner: Arc<RwLock<HashMap<String, ClusteringStore>>>,
}

impl ClusteringStores {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the store for a collection, creating it on first use.
    #[must_use]
    pub fn for_collection(&self, collection_id: &str) -> ClusteringStore {
        {
            let guard = self.inner.read().unwrap();
            if let Some(store) = guard.get(collection_id) {
                return store.clone();
            }
        }
        let mut guard = self.inner.write().unwrap();
        guard
            .entry(collection_id.to_string())
            .or_default()
            .clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clustering(id: &str) -> Clustering {
        Clustering {
            id: id.to_string(),
            title: format!("Clustering {id}"),
            description: String::new(),
            items: Vec::new(),
        }
    }

    #[test]
    fn test_phase_transitions() {
        let store = ClusteringStore::new();
        assert_eq!(store.phase(), Phase::Pending);

        let epoch = store.begin_fetch();
        assert!(store.finish_fetch(epoch, Ok(vec![clustering("c1")])));
        assert_eq!(store.phase(), Phase::Success);

        let epoch = store.begin_fetch();
        assert_eq!(store.phase(), Phase::Pending);
        assert!(store.finish_fetch(epoch, Ok(Vec::new())));
        assert_eq!(store.phase(), Phase::Empty);

        let epoch = store.begin_fetch();
        assert!(store.finish_fetch(epoch, Err("boom".to_string())));
        assert_eq!(store.phase(), Phase::Error("boom".to_string()));
    }

    #[test]
    fn test_stale_fetch_result_is_dropped() {
        let store = ClusteringStore::new();
        let stale = store.begin_fetch();
        let current = store.begin_fetch();

        assert!(store.finish_fetch(current, Ok(vec![clustering("new")])));
        assert!(!store.finish_fetch(stale, Ok(vec![clustering("old")])));

        let ids: Vec<String> = store.clusterings().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["new"]);
    }

    #[test]
    fn test_first_clustering_selected_by_default() {
        let store = ClusteringStore::new();
        let epoch = store.begin_fetch();
        store.finish_fetch(epoch, Ok(vec![clustering("c1"), clustering("c2")]));
        assert_eq!(store.selected_id().as_deref(), Some("c1"));
    }

    #[test]
    fn test_select_unknown_id_clears_selection() {
        let store = ClusteringStore::new();
        let epoch = store.begin_fetch();
        store.finish_fetch(epoch, Ok(vec![clustering("c1")]));

        store.select("does-not-exist");
        assert!(store.selected().is_none());

        store.select("c1");
        assert_eq!(store.selected().unwrap().id, "c1");
    }

    #[test]
    fn test_selection_survives_refetch_when_still_present() {
        let store = ClusteringStore::new();
        let epoch = store.begin_fetch();
        store.finish_fetch(epoch, Ok(vec![clustering("c1"), clustering("c2")]));
        store.select("c2");

        let epoch = store.begin_fetch();
        store.finish_fetch(epoch, Ok(vec![clustering("c2"), clustering("c3")]));
        assert_eq!(store.selected_id().as_deref(), Some("c2"));

        let epoch = store.begin_fetch();
        store.finish_fetch(epoch, Ok(vec![clustering("c9")]));
        assert_eq!(store.selected_id().as_deref(), Some("c9"));
    }

    #[test]
    fn test_fetched_at_tracks_successful_fetches() {
        let store = ClusteringStore::new();
        assert!(store.fetched_at().is_none());

        let epoch = store.begin_fetch();
        store.finish_fetch(epoch, Err("boom".to_string()));
        assert!(store.fetched_at().is_none());

        let epoch = store.begin_fetch();
        store.finish_fetch(epoch, Ok(vec![clustering("c1")]));
        assert!(store.fetched_at().is_some());
    }

    #[test]
    fn test_tree_memoized_per_clustering_id() {
        let store = ClusteringStore::new();
        let c = clustering("c1");
        let first = store.tree_for(&c);
        let second = store.tree_for(&c);
        assert!(Arc::ptr_eq(&first, &second));

        let other = store.tree_for(&clustering("c2"));
        assert!(!Arc::ptr_eq(&first, &other));
    }

    #[test]
    fn test_generation_single_flight() {
        let store = ClusteringStore::new();
        assert!(store.begin_generation());
        assert!(!store.begin_generation());
        assert!(store.is_generating());

        store.finish_generation();
        assert!(store.begin_generation());
    }

    #[test]
    fn test_store_registry() {
        let stores = ClusteringStores::new();
        assert!(stores.is_empty());

        let a = stores.for_collection("col-1");
        let epoch = a.begin_fetch();
        a.finish_fetch(epoch, Ok(vec![clustering("c1")]));

        // Same collection id hands back the same store.
        assert_eq!(stores.for_collection("col-1").len(), 1);
        assert_eq!(stores.for_collection("col-2").len(), 0);
        assert_eq!(stores.len(), 2);
    }
}
