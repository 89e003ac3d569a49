use crate::{HistographError, Marker, MarkerStore, Resolution, Result};

/// Settings for cutting a [`MarkerStore`] into a histogram.
///
/// A builder carries a validated [`Resolution`] and optional bounds. Bounds
/// that are not set fall back to the store's own timespan when the histogram
/// is built, each one independently.
///
/// ```
/// # use histograph::{HistogramBuilder, MarkerStore};
/// let store: MarkerStore<i64> = (0..10).collect();
///
/// let histogram = HistogramBuilder::new(3)?.build(&store);
/// assert_eq!(&[4, 3, 3], histogram.buckets());
///
/// let histogram = HistogramBuilder::new(5)?.bounds(3, 6).build(&store);
/// assert_eq!(&[1, 1, 0, 1, 1], histogram.buckets());
/// # Ok::<(), histograph::HistographError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramBuilder<K> {
    resolution: Resolution,
    first: Option<K>,
    last: Option<K>,
}

impl<K> Default for HistogramBuilder<K> {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            first: None,
            last: None,
        }
    }
}

impl<K: Marker> HistogramBuilder<K> {
    /// A builder for `resolution` buckets. The resolution is checked here, so
    /// [`HistogramBuilder::build`] cannot fail.
    pub fn new<R>(resolution: R) -> Result<Self>
    where
        R: TryInto<Resolution>,
        HistographError: From<R::Error>,
    {
        Ok(Self {
            resolution: resolution.try_into()?,
            first: None,
            last: None,
        })
    }

    /// Start the histogram at `first` instead of the store's first marker
    pub fn first(mut self, first: impl Into<K>) -> Self {
        self.first = Some(first.into());
        self
    }

    /// End the histogram at `last` instead of the store's last marker
    pub fn last(mut self, last: impl Into<K>) -> Self {
        self.last = Some(last.into());
        self
    }

    /// Override both ends at once
    pub fn bounds(self, first: impl Into<K>, last: impl Into<K>) -> Self {
        self.first(first).last(last)
    }

    /// How many buckets a build produces
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Count the store's markers into equal-width buckets.
    ///
    /// * Without markers and without explicit bounds every bucket is 0.
    /// * Bounds where `first > last` cover nothing, so every bucket is 0.
    /// * When `first == last` the multiplicity of that exact marker is spread
    ///   over the buckets, larger chunks first: 10 markers in 3 buckets are
    ///   `[4, 3, 3]`. Markers that differ but share an `f64` projection are
    ///   not a zero-width range; they all land in bucket 0.
    /// * Counts saturate at `u64::MAX`.
    /// * Otherwise bucket 0 is `[first, end_0]` and bucket `i` is
    ///   `(end_{i-1}, end_i]`, with `end_i = last - (resolution - i - 1) * width`.
    ///   Edges are measured back from `last` so the final edge is exactly
    ///   `last`, and neighbouring buckets share one computed edge so every
    ///   marker inside the bounds lands in exactly one bucket.
    pub fn build(&self, store: &MarkerStore<K>) -> Histogram<K> {
        let resolution = self.resolution.get();
        let (store_first, store_last) = store.get_timespan();
        let first = self.first.or(store_first);
        let last = self.last.or(store_last);

        let buckets = match (first, last) {
            (Some(first), Some(last)) => bucket_markers(store, resolution, first, last),
            _ => {
                log::debug!("no markers and no explicit bounds: {resolution} empty buckets");
                vec![0; resolution]
            }
        };

        Histogram {
            buckets,
            first,
            last,
        }
    }
}

impl<K: Marker> MarkerStore<K> {
    /// Bucket counts for `resolution` buckets between `first` and `last`.
    ///
    /// `None` bounds default to this store's timespan. Fails only when the
    /// resolution is not a positive integer.
    ///
    /// ```
    /// # use histograph::MarkerStore;
    /// let mut store: MarkerStore<i64> = MarkerStore::new();
    /// for _ in 0..10 {
    ///     store.add_marker(5);
    /// }
    /// assert_eq!(vec![4, 3, 3], store.build_histogram(3, None, None)?);
    /// assert_eq!(vec![0, 10, 0], store.build_histogram(3, Some(0), Some(10))?);
    /// assert!(store.build_histogram(5.5, None, None).is_err());
    /// # Ok::<(), histograph::HistographError>(())
    /// ```
    pub fn build_histogram<R>(
        &self,
        resolution: R,
        first: Option<K>,
        last: Option<K>,
    ) -> Result<Vec<u64>>
    where
        R: TryInto<Resolution>,
        HistographError: From<R::Error>,
    {
        let builder = HistogramBuilder {
            first,
            last,
            ..HistogramBuilder::new(resolution)?
        };
        Ok(builder.build(self).into_vec())
    }

    /// A histogram over this store's whole timespan
    pub fn histogram<R>(&self, resolution: R) -> Result<Histogram<K>>
    where
        R: TryInto<Resolution>,
        HistographError: From<R::Error>,
    {
        Ok(HistogramBuilder::new(resolution)?.build(self))
    }
}

/// Bucket counts, plus the bounds they were computed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram<K> {
    buckets: Vec<u64>,
    first: Option<K>,
    last: Option<K>,
}

impl<K: Marker> Histogram<K> {
    /// Bucket counts, earliest bucket first
    pub fn buckets(&self) -> &[u64] {
        &self.buckets
    }

    /// Bucket counts by value, earliest bucket first
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.buckets.iter().copied()
    }

    /// The resolution
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Never true for a built histogram; a resolution is at least 1.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Sum of all buckets. Saturates at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.buckets
            .iter()
            .fold(0, |total, count| total.saturating_add(*count))
    }

    /// The effective first bound, if there was one
    pub fn first(&self) -> Option<K> {
        self.first
    }

    /// The effective last bound, if there was one
    pub fn last(&self) -> Option<K> {
        self.last
    }

    /// The `(begin, end)` edges that were used for bucket `index`.
    ///
    /// None when there is no such bucket, or when the histogram had no range
    /// to divide: missing bounds, inverted bounds, or `first == last`.
    pub fn bucket_bounds(&self, index: usize) -> Option<(f64, f64)> {
        let (first, last) = (self.first?, self.last?);
        if last <= first || self.buckets.len() <= index {
            return None;
        }
        let edges = Edges::new(first.to_f64(), last.to_f64(), self.buckets.len());
        if !edges.timespan().is_finite() {
            return None;
        }
        Some((edges.begin(index), edges.end(index)))
    }

    /// Take the bucket counts
    pub fn into_vec(self) -> Vec<u64> {
        self.buckets
    }
}

impl<K: Marker> std::fmt::Display for Histogram<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entry(&"first", &self.first)
            .entry(&"last", &self.last)
            .entry(&"buckets", &self.buckets)
            .finish()
    }
}

/// Bucket edges on the real line
struct Edges {
    first: f64,
    last: f64,
    timestep: f64,
    resolution: usize,
}

impl Edges {
    fn new(first: f64, last: f64, resolution: usize) -> Self {
        Self {
            first,
            last,
            timestep: (last - first).abs() / resolution as f64,
            resolution,
        }
    }

    fn timespan(&self) -> f64 {
        (self.last - self.first).abs()
    }

    fn begin(&self, index: usize) -> f64 {
        match index.checked_sub(1) {
            Some(previous) => self.end(previous),
            None => self.first,
        }
    }

    // Measured from the far end: accumulating from `first` can leave the last
    // edge just short of `last` and drop the last marker.
    fn end(&self, index: usize) -> f64 {
        self.last - (self.resolution - (index + 1)) as f64 * self.timestep
    }
}

fn bucket_markers<K: Marker>(
    store: &MarkerStore<K>,
    resolution: usize,
    first: K,
    last: K,
) -> Vec<u64> {
    if last < first {
        log::debug!("inverted bounds {first:?} > {last:?}: {resolution} empty buckets");
        return vec![0; resolution];
    }

    // Decided on the markers themselves: distinct 64-bit markers can share an
    // f64 projection, and those still go through the edges.
    if first == last && !first.to_f64().is_nan() {
        let total = store.count(first);
        log::debug!(
            "zero-width range at {first:?}: spreading {total} markers over {resolution} buckets"
        );
        return spread(total, resolution);
    }

    let edges = Edges::new(first.to_f64(), last.to_f64(), resolution);
    if !edges.timespan().is_finite() {
        log::debug!("range {first:?}..={last:?} has no finite width: {resolution} empty buckets");
        return vec![0; resolution];
    }

    count_between_edges(store, &edges)
}

/// Hand out `total` left to right, each bucket taking the ceiling of an even
/// share of what is left. The remainder lands in the earliest buckets.
fn spread(total: u64, resolution: usize) -> Vec<u64> {
    let mut remaining = total;
    (0..resolution)
        .map(|index| {
            let chunk = remaining.div_ceil((resolution - index) as u64);
            remaining -= chunk;
            chunk
        })
        .collect()
}

fn count_between_edges<K: Marker>(store: &MarkerStore<K>, edges: &Edges) -> Vec<u64> {
    // Sorted positions alongside their multiplicities. NaN belongs to no
    // bucket.
    let mut positions = Vec::with_capacity(store.distinct());
    let mut multiplicities = Vec::with_capacity(store.distinct());
    for (marker, multiplicity) in store.sorted() {
        let position = marker.to_f64();
        if position.is_nan() {
            continue;
        }
        positions.push(position);
        multiplicities.push(multiplicity);
    }

    let mut lower = positions.partition_point(|&position| position < edges.first);
    (0..edges.resolution)
        .map(|index| {
            let end = edges.end(index);
            let upper = positions
                .partition_point(|&position| position <= end)
                .max(lower);
            let count = multiplicities[lower..upper]
                .iter()
                .fold(0, |count: u64, multiplicity| count.saturating_add(*multiplicity));
            log::trace!(
                "bucket {index} ({}, {end}] holds {count}",
                edges.begin(index)
            );
            lower = upper;
            count
        })
        .collect()
}
