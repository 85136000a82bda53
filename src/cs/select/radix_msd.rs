//! # MSD radix selection, one byte at a time
//!
//! For unsigned integer keys the k-th smallest value can be found without comparing
//! keys at all. Starting with the most significant byte, the keys of the active range
//! are counted per byte value, the bin that covers index `k` is found by walking the
//! counts, and the keys belonging to that bin are migrated into it in place. Only that
//! bin is carried to the next byte, so total work is bounded by the number of bytes per
//! key times the range length, with a 256-entry counts table as the only extra memory.
//!
//! Windows that shrink to `threshold` keys or fewer are finished with median of
//! medians, where a handful of comparisons beats another histogram pass.
//!
//! ```rust
//! use orderstat::select::select_radix_msd;
//!
//! let mut keys: Vec<u32> = vec![300, 65536, 1, 70000];
//! assert_eq!(select_radix_msd(&mut keys, 0, 4, 1, 0).unwrap(), 300);
//! assert_eq!(keys[1], 300);
//! ```

use crate::cs::select::check_window;
use crate::cs::select::radix::{radix_select, BinLocator, RadixPlan};
use crate::cs::sort::histogram::RadixKey;
use crate::error::Result;

/// Window size at or below which the byte-wise selector stops bucketing.
pub const DEFAULT_RADIX_THRESHOLD: usize = 1024;

const BYTE_BITS: u32 = 8;

/// Leaves the `k`-th smallest key of `arr[start..start + length]` at index `k` and
/// returns it. `k` indexes `arr` itself. A `threshold` of 0 buckets all the way down.
pub fn select_radix_msd<T: RadixKey>(
    arr: &mut [T],
    start: usize,
    length: usize,
    k: usize,
    threshold: usize,
) -> Result<T> {
    check_window(arr.len(), start, length, k)?;
    radix_select(
        arr,
        start,
        length,
        k,
        RadixPlan {
            digit_bits: BYTE_BITS,
            locator: BinLocator::Scan,
            threshold,
        },
    )
}
