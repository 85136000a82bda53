//! Shared machinery of the MSD radix selectors.
//!
//! The active range is a window `[lo, hi)` over the caller's buffer. Each level builds
//! a histogram of the current digit over the window, finds the bin that covers `k`,
//! migrates every key with that digit into the bin's slots, and shrinks the window to
//! the bin before moving to the next lower digit. Keys outside the window are never
//! looked at again.

use std::cmp::Ordering;

use crate::cs::compare::NaturalOrder;
use crate::cs::select::median_of_medians::{narrow_mom, DEFAULT_CHUNK_SIZE};
use crate::cs::sort::histogram::{count_digits, Digit, RadixKey};
use crate::error::{Error, Result};

/// The bin holding `k`: keys whose current digit equals `value` occupy
/// `[start, start + len)` once migrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Bin {
    pub value: usize,
    pub start: usize,
    pub len: usize,
}

impl Bin {
    fn end(&self) -> usize {
        self.start + self.len
    }
}

/// How a level turns digit counts into the k-th bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinLocator {
    /// Walk the counts, accumulating bin starts until one covers `k`.
    Scan,
    /// Build the full table of bin offsets and binary search it.
    OffsetTable,
}

impl BinLocator {
    pub(crate) fn locate(self, counts: &[usize], lo: usize, k: usize) -> Result<Bin> {
        match self {
            BinLocator::Scan => scan_for_bin(counts, lo, k),
            BinLocator::OffsetTable => search_offsets(counts, lo, k),
        }
    }
}

fn scan_for_bin(counts: &[usize], lo: usize, k: usize) -> Result<Bin> {
    let mut start = lo;
    for (value, &len) in counts.iter().enumerate() {
        if k < start + len {
            return Ok(Bin { value, start, len });
        }
        start += len;
    }
    Err(Error::invariant(format!("no elements in the k-th bin for k = {}", k)))
}

fn search_offsets(counts: &[usize], lo: usize, k: usize) -> Result<Bin> {
    let mut offsets = Vec::with_capacity(counts.len() + 1);
    let mut next = lo;
    offsets.push(next);
    for &count in counts {
        next += count;
        offsets.push(next);
    }
    // Last offset `<= k`; empty bins share their start with the following bin, so this
    // lands on the non-empty one.
    let value = offsets[..counts.len()]
        .partition_point(|&offset| offset <= k)
        .checked_sub(1)
        .ok_or_else(|| Error::invariant(format!("k = {} precedes the first bin at {}", k, lo)))?;
    let (start, end) = (offsets[value], offsets[value + 1]);
    if end <= k {
        return Err(Error::invariant(format!("no elements in the k-th bin for k = {}", k)));
    }
    Ok(Bin {
        value,
        start,
        len: end - start,
    })
}

/// Moves every key of `arr[lo..hi]` whose digit equals `bin.value` into the bin's slots,
/// keys with a smaller digit to its left and keys with a larger digit to its right.
pub(crate) fn migrate<T: RadixKey>(arr: &mut [T], lo: usize, hi: usize, bin: Bin, digit: Digit) -> Result<()> {
    let (mut lt, mut i, mut gt) = (lo, lo, hi);
    while i < gt {
        match digit.extract(arr[i]).cmp(&bin.value) {
            Ordering::Less => {
                arr.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Equal => i += 1,
            Ordering::Greater => {
                gt -= 1;
                arr.swap(i, gt);
            }
        }
    }
    if lt != bin.start || gt != bin.end() {
        return Err(Error::invariant(format!(
            "bin for digit {:#x} migrated to [{}, {}) but the histogram placed it at [{}, {})",
            bin.value,
            lt,
            gt,
            bin.start,
            bin.end()
        )));
    }
    Ok(())
}

/// Digit width and bin discovery for one radix selector flavour.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RadixPlan {
    pub digit_bits: u32,
    pub locator: BinLocator,
    /// Windows of at most this many keys are finished by median of medians. 0 disables.
    pub threshold: usize,
}

/// Narrows `arr[start..start + length]` digit by digit until `arr[k]` is final.
/// Arguments are validated by the caller.
pub(crate) fn radix_select<T: RadixKey>(
    arr: &mut [T],
    start: usize,
    length: usize,
    k: usize,
    plan: RadixPlan,
) -> Result<T> {
    let (mut lo, mut hi) = (start, start + length);
    let mut digit = Digit::most_significant::<T>(plan.digit_bits);
    loop {
        let len = hi - lo;
        if len == 1 {
            return Ok(arr[k]);
        }
        if len <= plan.threshold {
            log::debug!("radix window [{}, {}) under threshold {}, finishing with median of medians", lo, hi, plan.threshold);
            let mut scratch = Vec::with_capacity(len);
            narrow_mom(arr, &mut scratch, lo, hi - 1, k, &NaturalOrder, DEFAULT_CHUNK_SIZE)?;
            return Ok(arr[k]);
        }

        let counts = count_digits(&arr[lo..hi], digit);
        let bin = plan.locator.locate(&counts, lo, k)?;
        if bin.len == 0 {
            return Err(Error::invariant(format!("no elements in the k-th bin for k = {}", k)));
        }
        log::trace!(
            "radix digit shift {} width {}: window [{}, {}) narrowed to bin {:#x} at [{}, {})",
            digit.shift,
            digit.width,
            lo,
            hi,
            bin.value,
            bin.start,
            bin.end()
        );
        if bin.len < len {
            migrate(arr, lo, hi, bin, digit)?;
        }
        lo = bin.start;
        hi = bin.end();

        match digit.next() {
            Some(next) => digit = next,
            // Every digit matched, so the whole window holds copies of one key.
            None => return Ok(arr[k]),
        }
    }
}
