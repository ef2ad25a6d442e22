//! # seqkit
//!
//! Two small sequence utilities:
//!
//! - **Counting sort** for integers known to lie in `[0, k)`: O(n + k), with
//!   every element range checked ([`counting_sort`], [`parallel_sort`]).
//! - **Lazy flattening** of arbitrarily nested sequences into their leaves, in
//!   depth-first pre-order ([`flatten`], [`nested`]).
//!
//! ```
//! use seqkit::prelude::*;
//!
//! let sorted = sort(&[3u8, 1, 2, 1], 4)?;
//! assert_eq!(sorted, vec![1, 1, 2, 3]);
//!
//! let value = nested!([1, [2, 3], [4, [5, 6]], 7]);
//! let leaves: Vec<i32> = flatten(&value)?.copied().collect();
//! assert_eq!(leaves, vec![1, 2, 3, 4, 5, 6, 7]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod counting_sort;
pub mod error;
pub mod flatten;
pub mod nested;
pub mod parallel_sort;

pub mod prelude {
    pub use crate::counting_sort::{is_sorted, sort, sort_in_place, BucketKey, FrequencyTable};
    pub use crate::error::{FlattenError, SortError};
    pub use crate::flatten::{flatten, flatten_lenient, Flatten, Node, Shape};
    pub use crate::nested;
    pub use crate::nested::Nested;
    pub use crate::parallel_sort::par_sort;
}
