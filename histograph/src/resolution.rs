use std::{fmt::Display, num::NonZeroUsize};

use crate::HistographError;

/// How many equal-width buckets a histogram has. Always at least 1.
///
/// Integers convert when they are positive. Floating point numbers never
/// convert, not even whole ones: a bucket count is a count.
///
/// ```
/// # use histograph::Resolution;
/// assert_eq!(12, Resolution::try_from(12_i32).expect("positive").get());
/// assert!(Resolution::try_from(0_u64).is_err());
/// assert!(Resolution::try_from(-1_i64).is_err());
/// assert!(Resolution::try_from(5.0_f64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Resolution(NonZeroUsize);

impl Resolution {
    /// The number of buckets
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

const DEFAULT_RESOLUTION: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(buckets) => buckets,
    None => unreachable!(),
};

impl Default for Resolution {
    fn default() -> Self {
        Self(DEFAULT_RESOLUTION)
    }
}

impl Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NonZeroUsize> for Resolution {
    fn from(buckets: NonZeroUsize) -> Self {
        Self(buckets)
    }
}

impl From<Resolution> for usize {
    fn from(resolution: Resolution) -> Self {
        resolution.get()
    }
}

macro_rules! impl_integer_resolution {
    ($($integer:ty),+ $(,)?) => {
        $(
            impl TryFrom<$integer> for Resolution {
                type Error = HistographError;

                fn try_from(buckets: $integer) -> Result<Self, Self::Error> {
                    usize::try_from(buckets)
                        .ok()
                        .and_then(NonZeroUsize::new)
                        .map(Self)
                        .ok_or_else(|| {
                            HistographError::invalid_argument(format!(
                                "resolution must be a positive bucket count, got {buckets}"
                            ))
                        })
                }
            }
        )+
    };
}

impl_integer_resolution!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_float_resolution {
    ($($float:ty),+ $(,)?) => {
        $(
            impl TryFrom<$float> for Resolution {
                type Error = HistographError;

                fn try_from(buckets: $float) -> Result<Self, Self::Error> {
                    Err(HistographError::invalid_argument(format!(
                        "resolution must be an integer bucket count, got {buckets:?}"
                    )))
                }
            }
        )+
    };
}

impl_float_resolution!(f32, f64);

#[cfg(test)]
mod test {
    use std::num::NonZeroUsize;

    use super::Resolution;
    use crate::HistographError;

    #[test_log::test]
    fn positive_integers_convert() {
        assert_eq!(Ok(1), Resolution::try_from(1_u8).map(Resolution::get));
        assert_eq!(Ok(30), Resolution::try_from(30_i32).map(Resolution::get));
        assert_eq!(Ok(7), Resolution::try_from(7_isize).map(Resolution::get));
        assert_eq!(
            Ok(1_000_000),
            Resolution::try_from(1_000_000_u64).map(Resolution::get)
        );
        assert_eq!(
            5,
            Resolution::from(NonZeroUsize::new(5).expect("nonzero")).get()
        );
    }

    #[test_log::test]
    fn zero_and_negatives_are_rejected() {
        assert!(matches!(
            Resolution::try_from(0_usize),
            Err(HistographError::InvalidArgument(_))
        ));
        assert!(matches!(
            Resolution::try_from(-1_i32),
            Err(HistographError::InvalidArgument(_))
        ));
        assert!(matches!(
            Resolution::try_from(-77_i64),
            Err(HistographError::InvalidArgument(_))
        ));
        assert!(matches!(
            Resolution::try_from(i8::MIN),
            Err(HistographError::InvalidArgument(_))
        ));
    }

    #[test_log::test]
    fn floats_are_rejected_even_when_whole() {
        assert!(Resolution::try_from(5.5_f64).is_err());
        assert!(Resolution::try_from(5.0_f64).is_err());
        assert!(Resolution::try_from(1.0_f32).is_err());
        assert!(Resolution::try_from(f64::NAN).is_err());
    }

    #[test_log::test]
    fn default_is_ten() {
        assert_eq!(10, Resolution::default().get());
        assert_eq!("10", Resolution::default().to_string());
    }
}
