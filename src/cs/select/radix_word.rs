//! MSD radix selection with 16-bit digits.
//!
//! Half as many levels as the byte-wise selector on wide keys, paid for with a
//! 65536-entry counts table per level. The k-th bin is found by binary searching the
//! prefix table of bin offsets rather than walking the counts.

use crate::cs::select::check_window;
use crate::cs::select::radix::{radix_select, BinLocator, RadixPlan};
use crate::cs::sort::histogram::{RadixKey, MAX_DIGIT_BITS};
use crate::error::Result;

/// Leaves the `k`-th smallest key of `arr[start..start + length]` at index `k` and
/// returns it. Keys narrower than 16 bits are handled in a single level.
pub fn select_radix_word<T: RadixKey>(arr: &mut [T], start: usize, length: usize, k: usize) -> Result<T> {
    check_window(arr.len(), start, length, k)?;
    radix_select(
        arr,
        start,
        length,
        k,
        RadixPlan {
            digit_bits: MAX_DIGIT_BITS,
            locator: BinLocator::OffsetTable,
            threshold: 0,
        },
    )
}
