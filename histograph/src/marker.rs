use std::{fmt::Debug, hash::Hash};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use ordered_float::OrderedFloat;

use crate::{HistographError, Result};

/// A single recorded point in a one dimensional domain.
///
/// Markers are usually unix epoch seconds, but anything totally ordered and
/// hashable with a numeric projection works. Real numbers go through
/// [`OrderedFloat`] so they can be counted in a map:
///
/// ```
/// # use histograph::MarkerStore;
/// # use ordered_float::OrderedFloat;
/// let mut store: MarkerStore<OrderedFloat<f64>> = MarkerStore::new();
/// store.add_marker(0.25);
/// store.add_marker(0.75);
/// assert_eq!((Some(OrderedFloat(0.25)), Some(OrderedFloat(0.75))), store.get_timespan());
/// ```
pub trait Marker: Copy + Ord + Hash + Debug {
    /// The marker's position on the real line, used for bucket arithmetic.
    ///
    /// 64 bit integers beyond 2^53 lose precision here.
    fn to_f64(self) -> f64;
}

macro_rules! impl_integer_marker {
    ($($integer:ty),+ $(,)?) => {
        $(
            impl Marker for $integer {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}

impl_integer_marker!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Marker for OrderedFloat<f64> {
    #[inline]
    fn to_f64(self) -> f64 {
        self.into_inner()
    }
}

impl Marker for OrderedFloat<f32> {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self.into_inner())
    }
}

/// Make a marker from a UTC civil date and time: the unix epoch second count.
///
/// ```
/// # use histograph::make_marker;
/// assert_eq!(Ok(1_588_561_321), make_marker(2020, 5, 4, 3, 2, 1));
/// ```
///
/// Fields that do not name a real instant, like February 30th or hour 24,
/// are an [`HistographError::InvalidArgument`].
pub fn make_marker(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<i64> {
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        HistographError::invalid_argument(format!(
            "{year:04}-{month:02}-{day:02} is not a calendar date"
        ))
    })?;
    let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
        HistographError::invalid_argument(format!(
            "{hour:02}:{minute:02}:{second:02} is not a time of day"
        ))
    })?;
    Ok(NaiveDateTime::new(date, time).and_utc().timestamp())
}

#[cfg(test)]
mod test {
    use ordered_float::OrderedFloat;

    use super::{make_marker, Marker};
    use crate::HistographError;

    #[test_log::test]
    fn make_marker_known_points() {
        assert_eq!(Ok(0), make_marker(1970, 1, 1, 0, 0, 0));
        assert_eq!(Ok(1), make_marker(1970, 1, 1, 0, 0, 1));
        assert_eq!(Ok(1_588_561_321), make_marker(2020, 5, 4, 3, 2, 1));
        assert_eq!(Ok(951_782_400), make_marker(2000, 2, 29, 0, 0, 0));
    }

    #[test_log::test]
    fn make_marker_before_epoch_is_negative() {
        assert_eq!(Ok(-1), make_marker(1969, 12, 31, 23, 59, 59));
        assert_eq!(Ok(-86_400), make_marker(1969, 12, 31, 0, 0, 0));
    }

    #[test_log::test]
    fn make_marker_rejects_impossible_fields() {
        for (year, month, day, hour, minute, second) in [
            (2020, 13, 1, 0, 0, 0),
            (2020, 0, 1, 0, 0, 0),
            (2021, 2, 29, 0, 0, 0),
            (2020, 4, 31, 0, 0, 0),
            (2020, 1, 1, 24, 0, 0),
            (2020, 1, 1, 0, 60, 0),
            (2020, 1, 1, 0, 0, 60),
        ] {
            assert!(
                matches!(
                    make_marker(year, month, day, hour, minute, second),
                    Err(HistographError::InvalidArgument(_))
                ),
                "{year}-{month}-{day} {hour}:{minute}:{second} should be rejected"
            );
        }
    }

    #[test_log::test]
    fn projections() {
        assert_eq!(-3.0, (-3_i64).to_f64());
        assert_eq!(7.0, 7_u8.to_f64());
        assert_eq!(0.5, OrderedFloat(0.5_f64).to_f64());
        assert_eq!(0.25, OrderedFloat(0.25_f32).to_f64());
        assert!(OrderedFloat(f64::NAN).to_f64().is_nan());
    }
}
