//! Parallel Counting Sort using Rayon
//!
//! The counting phase is the only part of a counting sort that touches every
//! input element, so it is the part worth spreading across cores:
//!
//! 1. Split the input into one chunk per worker thread
//! 2. Count each chunk into its own [`FrequencyTable`] in parallel
//! 3. Merge the tables by elementwise addition
//! 4. Expand the merged table sequentially (O(n + k), memory bound)
//!
//! Small inputs skip the thread pool entirely and use the sequential sort.

use log::debug;
use rayon::prelude::*;

use crate::counting_sort::{self, BucketKey, FrequencyTable};
use crate::error::SortError;

/// Inputs shorter than this are sorted on the calling thread.
pub const PARALLEL_THRESHOLD: usize = 10_000;

/// Parallel counting sort with the same contract as [`counting_sort::sort`].
///
/// When several elements are out of range, which one is reported depends on
/// scheduling.
///
/// # Example
///
/// ```
/// use seqkit::parallel_sort::par_sort;
///
/// let data: Vec<u32> = (0..20_000).rev().map(|x| x % 100).collect();
/// let sorted = par_sort(&data, 100).unwrap();
/// assert!(seqkit::counting_sort::is_sorted(&sorted));
/// ```
pub fn par_sort<T>(data: &[T], bound: usize) -> Result<Vec<T>, SortError>
where
    T: BucketKey + Send + Sync,
{
    if data.len() < PARALLEL_THRESHOLD {
        return counting_sort::sort(data, bound);
    }

    let threads = rayon::current_num_threads().max(1);
    let chunk_size = data.len().div_ceil(threads).max(PARALLEL_THRESHOLD / 4);
    debug!(
        "parallel counting sort: {} elements, bound {}, {} chunks",
        data.len(),
        bound,
        data.len().div_ceil(chunk_size)
    );

    let table = data
        .par_chunks(chunk_size)
        .map(|chunk| FrequencyTable::count(chunk, bound))
        .try_reduce(
            || FrequencyTable::new(bound),
            |mut acc, table| {
                acc.merge(&table);
                Ok(acc)
            },
        )?;

    Ok(table.into_sorted())
}
