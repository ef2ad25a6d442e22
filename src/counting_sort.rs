//! Counting Sort for Bounded Integers
//!
//! This module sorts integers that are known to lie in `[0, k)` using a
//! frequency table indexed by value. The input is counted in one pass and the
//! output is rebuilt by walking the table in ascending order.
//!
//! Complexity: O(n + k) time, O(k) auxiliary space.
//!
//! Any element outside `[0, k)` aborts the sort with
//! [`SortError::RangeViolation`]. Counting always finishes before anything is
//! written, so a failed call never produces partial output.

use log::debug;

use crate::error::SortError;

/// Integer types that can be bucketed by a [`FrequencyTable`].
///
/// Implemented for every primitive integer up to 64 bits.
pub trait BucketKey: Copy {
    /// Widen the value for range checks and error reporting.
    fn to_i128(self) -> i128;

    /// Rebuild a value from a bucket index.
    ///
    /// Only called for indices that were produced by counting a value of the
    /// same type, so the conversion is lossless.
    fn from_bucket(index: usize) -> Self;
}

macro_rules! impl_bucket_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl BucketKey for $t {
                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_bucket(index: usize) -> Self {
                    index as $t
                }
            }
        )*
    };
}

impl_bucket_key!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Map a value to its bucket, or report it as out of range.
#[inline]
fn bucket_of<T: BucketKey>(value: T, bound: usize) -> Result<usize, SortError> {
    let wide = value.to_i128();
    if wide >= 0 && wide < bound as i128 {
        Ok(wide as usize)
    } else {
        Err(SortError::RangeViolation { value: wide, bound })
    }
}

/// Occurrence counts for every value in `[0, bound)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<usize>,
}

impl FrequencyTable {
    /// Create a zeroed table for values in `[0, bound)`.
    pub fn new(bound: usize) -> Self {
        FrequencyTable {
            counts: vec![0; bound],
        }
    }

    /// Count every element of `data`, stopping at the first out-of-range value.
    pub fn count<T: BucketKey>(data: &[T], bound: usize) -> Result<Self, SortError> {
        let mut table = FrequencyTable::new(bound);
        for &value in data {
            table.record(value)?;
        }
        Ok(table)
    }

    /// Record a single occurrence of `value`.
    #[inline]
    pub fn record<T: BucketKey>(&mut self, value: T) -> Result<(), SortError> {
        let bucket = bucket_of(value, self.bound())?;
        self.counts[bucket] += 1;
        Ok(())
    }

    /// Exclusive upper bound of the values this table accepts.
    #[inline]
    pub fn bound(&self) -> usize {
        self.counts.len()
    }

    /// Per-value counts, indexed by value.
    #[inline]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of values recorded so far.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Add the counts of `other` into this table.
    ///
    /// # Panics
    /// Panics if the two tables were created with different bounds.
    pub fn merge(&mut self, other: &FrequencyTable) {
        assert_eq!(
            self.bound(),
            other.bound(),
            "cannot merge frequency tables with different bounds"
        );
        for (mine, theirs) in self.counts.iter_mut().zip(&other.counts) {
            *mine += theirs;
        }
    }

    /// Expand the table into an ascending vector.
    pub fn into_sorted<T: BucketKey>(self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.total());
        for (value, &count) in self.counts.iter().enumerate() {
            sorted.extend(std::iter::repeat(T::from_bucket(value)).take(count));
        }
        sorted
    }

    /// Write the ascending expansion of the table into `out`.
    ///
    /// # Panics
    /// Panics if `out.len()` differs from [`total`](Self::total).
    pub fn write_sorted<T: BucketKey>(&self, out: &mut [T]) {
        assert_eq!(
            out.len(),
            self.total(),
            "output length must match the number of counted values"
        );

        let mut pos = 0;
        for (value, &count) in self.counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            out[pos..pos + count].fill(T::from_bucket(value));
            pos += count;
        }
    }
}

/// Sort `data`, whose elements must all lie in `[0, bound)`, into a new vector.
///
/// # Arguments
/// * `data` - The values to sort
/// * `bound` - Exclusive upper bound on every value
///
/// # Example
///
/// ```
/// use seqkit::counting_sort::sort;
///
/// assert_eq!(sort(&[3, 1, 2, 1], 4).unwrap(), vec![1, 1, 2, 3]);
/// assert!(sort(&[5], 4).is_err());
/// ```
pub fn sort<T: BucketKey>(data: &[T], bound: usize) -> Result<Vec<T>, SortError> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    debug!("counting sort: {} elements, bound {}", data.len(), bound);
    Ok(FrequencyTable::count(data, bound)?.into_sorted())
}

/// Sort `data` in place. On error the slice is left unchanged.
pub fn sort_in_place<T: BucketKey>(data: &mut [T], bound: usize) -> Result<(), SortError> {
    if data.len() <= 1 {
        // A single element still has to be range checked.
        if let Some(&value) = data.first() {
            bucket_of(value, bound)?;
        }
        return Ok(());
    }

    debug!("in-place counting sort: {} elements, bound {}", data.len(), bound);
    let table = FrequencyTable::count(data, bound)?;
    table.write_sorted(data);
    Ok(())
}

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
