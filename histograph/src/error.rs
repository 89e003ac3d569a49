use std::convert::Infallible;

/// Errors raised by histograph.
///
/// There is exactly one kind: an argument the caller passed could not be used.
/// It is always raised before any work starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistographError {
    /// A malformed resolution, or calendar fields that do not name a real instant.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl HistographError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }
}

// Lets infallible conversions (Resolution -> Resolution) flow through the same
// `TryInto` bounds as the fallible ones.
impl From<Infallible> for HistographError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Result alias for histograph operations
pub type Result<T> = std::result::Result<T, HistographError>;
