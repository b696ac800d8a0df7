//! Error types for ordered map operations.

/// Errors raised by [`OrderedMap`](crate::OrderedMap) operations.
///
/// Almost every operation on the map is total. The only fallible one is
/// [`OrderedMap::try_for_each`](crate::OrderedMap::try_for_each).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An argument supplied to an operation cannot be used by it.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// A specialized [`Result`](std::result::Result) type for ordered map operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
