//! Error types for sorting and flattening.

use thiserror::Error;

/// Errors returned by the counting sort entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// An element fell outside `[0, bound)`.
    ///
    /// The value is widened to `i128` so that every primitive integer type
    /// (including `u64::MAX` and negative signed values) can be reported as-is.
    #[error("value {value} is out of range [0, {bound})")]
    RangeViolation { value: i128, bound: usize },
}

/// Errors returned by [`flatten`](crate::flatten::flatten).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlattenError {
    /// The top-level value is a leaf, so there is nothing to iterate.
    #[error("cannot flatten a value of type `{type_name}`: not an iterable container")]
    NotIterable { type_name: &'static str },
}
