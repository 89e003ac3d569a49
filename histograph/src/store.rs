use std::collections::HashMap;

#[cfg(not(feature = "ahash-hasher"))]
use std::collections::hash_map::RandomState;

#[cfg(feature = "ahash-hasher")]
use ahash::RandomState;

use crate::Marker;

/// Alias for the default hasher, selected by the ahash-hasher crate feature
pub(crate) type Hasher = RandomState;

/// An append-only multiset of markers.
///
/// Each distinct marker is stored once with its multiplicity, and the store
/// remembers the smallest and largest marker it has ever seen. Nothing is ever
/// removed, so the tracked span only grows.
///
/// ```
/// # use histograph::MarkerStore;
/// let mut store: MarkerStore<i64> = MarkerStore::new();
/// assert_eq!((None, None), store.get_timespan());
///
/// store.add_marker(1_588_561_321);
/// store.add_marker(1_588_561_321);
/// store.add_marker(1_588_560_000);
/// assert_eq!((Some(1_588_560_000), Some(1_588_561_321)), store.get_timespan());
/// assert_eq!(2, store.count(1_588_561_321));
/// ```
#[derive(Debug, Clone)]
pub struct MarkerStore<K> {
    markers: HashMap<K, u64, Hasher>,
    first: Option<K>,
    last: Option<K>,
}

impl<K> Default for MarkerStore<K> {
    fn default() -> Self {
        Self {
            markers: HashMap::default(),
            first: None,
            last: None,
        }
    }
}

impl<K: Marker> MarkerStore<K> {
    /// An empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty store with room for `distinct` different markers
    pub fn with_capacity(distinct: usize) -> Self {
        Self {
            markers: HashMap::with_capacity_and_hasher(distinct, Hasher::default()),
            first: None,
            last: None,
        }
    }

    /// Record one occurrence of a marker
    #[inline]
    pub fn add_marker(&mut self, marker: impl Into<K>) {
        self.add_marker_count(marker, 1)
    }

    /// Record `count` occurrences of a marker at once.
    ///
    /// A count of 0 records nothing and leaves the timespan alone.
    /// Multiplicities saturate at `u64::MAX`.
    pub fn add_marker_count(&mut self, marker: impl Into<K>, count: u64) {
        if count == 0 {
            return;
        }
        let marker = marker.into();
        self.markers
            .entry(marker)
            .and_modify(|multiplicity| *multiplicity = multiplicity.saturating_add(count))
            .or_insert(count);
        self.first = Some(self.first.map_or(marker, |first| first.min(marker)));
        self.last = Some(self.last.map_or(marker, |last| last.max(marker)));
    }

    /// The smallest and largest markers ever recorded. Both are None until
    /// the first marker arrives.
    pub fn get_timespan(&self) -> (Option<K>, Option<K>) {
        (self.first, self.last)
    }

    /// How many times exactly this marker was recorded
    pub fn count(&self, marker: impl Into<K>) -> u64 {
        self.markers.get(&marker.into()).copied().unwrap_or(0)
    }

    /// How many markers were recorded, duplicates included. Saturates at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.markers
            .values()
            .fold(0, |total, multiplicity| total.saturating_add(*multiplicity))
    }

    /// How many different markers were recorded
    pub fn distinct(&self) -> usize {
        self.markers.len()
    }

    /// True until the first marker is recorded
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Markers and their multiplicities, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (K, u64)> + '_ {
        self.markers
            .iter()
            .map(|(marker, multiplicity)| (*marker, *multiplicity))
    }

    /// Markers and their multiplicities, ascending by marker
    pub(crate) fn sorted(&self) -> Vec<(K, u64)> {
        let mut sorted: Vec<(K, u64)> = self.iter().collect();
        sorted.sort_unstable_by_key(|(marker, _)| *marker);
        sorted
    }
}

impl<K: Marker, T: Into<K>> Extend<T> for MarkerStore<K> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, markers: I) {
        for marker in markers {
            self.add_marker(marker);
        }
    }
}

impl<K: Marker, T: Into<K>> FromIterator<T> for MarkerStore<K> {
    fn from_iter<I: IntoIterator<Item = T>>(markers: I) -> Self {
        let mut store = Self::new();
        store.extend(markers);
        store
    }
}
