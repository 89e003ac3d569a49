//! Fixed-resolution histograms over timestamps, or any other ordered markers.
//!
//! [`histograph`](crate) keeps a multiset of markers in a [`MarkerStore`] and
//! cuts the recorded range, or a range you choose, into a requested number of
//! equal-width buckets. Repeated markers are counted once per occurrence.
//!
//! # Examples
//!
//! ```
//! use histograph::{make_marker, MarkerStore};
//!
//! let mut store: MarkerStore<i64> = MarkerStore::new();
//! for hour in [0, 1, 1, 5, 23] {
//!     store.add_marker(make_marker(2020, 5, 4, hour, 0, 0)?);
//! }
//!
//! // Four 6-hour buckets across the day.
//! let midnight = make_marker(2020, 5, 4, 0, 0, 0)?;
//! let histogram = store.build_histogram(4, Some(midnight), Some(midnight + 86_400))?;
//! assert_eq!(vec![4, 0, 0, 1], histogram);
//! # Ok::<(), histograph::HistographError>(())
//! ```
//!
//! # Bucketing
//!
//! The first bucket is closed on both ends and every later bucket is open on
//! the left, so a marker that sits on an edge between two buckets is counted
//! in the earlier one. A range of zero width spreads the exact marker's count
//! over all buckets, front-loading any remainder. See
//! [`HistogramBuilder::build`] for the full set of rules.
//!
//! # Feature Flags
//!
//! * `ahash-hasher`: use [ahash](https://docs.rs/ahash) for the store's map.

mod error;
mod histogram;
mod marker;
mod resolution;
mod store;

pub use error::{HistographError, Result};
pub use histogram::{Histogram, HistogramBuilder};
pub use marker::{make_marker, Marker};
pub use resolution::Resolution;
pub use store::MarkerStore;
