//! # Median of Medians
//!
//! Deterministic pivot selection. The range is copied into a scratch buffer, cut into
//! groups of `chunk_size` elements, every group is insertion sorted and its median is
//! compacted to the front. The medians form a new, shorter sequence and the step repeats
//! until a single value is left. That value is then located in the original range and
//! used as the pivot of a two-pointer partition.
//!
//! Because every partition uses such a pivot, [`select_mom`] needs no randomness and no
//! iteration cap. It costs more per partition than randomized quickselect, so the
//! introspective selector only reaches for it once quickselect stalls.
//!
//! ```rust
//! use orderstat::select::select_mom;
//!
//! let mut data: Vec<u32> = (0..100).rev().collect();
//! assert_eq!(select_mom(&mut data, 0, 100, 42, 5).unwrap(), 42);
//! ```

use std::cmp::Ordering;

use crate::cs::compare::{Comparer, NaturalOrder};
use crate::cs::select::{check_range, check_window};
use crate::cs::sort::insertion_sort::sort_window;
use crate::error::{Error, Result};

/// Smallest allowed group size.
pub const MIN_CHUNK_SIZE: usize = 5;
/// Largest allowed group size.
pub const MAX_CHUNK_SIZE: usize = 31;
/// Group size used when the caller does not pick one.
pub const DEFAULT_CHUNK_SIZE: usize = 5;

pub(crate) fn check_chunk_size(chunk_size: usize) -> Result<()> {
    if !(MIN_CHUNK_SIZE..=MAX_CHUNK_SIZE).contains(&chunk_size) {
        return Err(Error::invalid(format!(
            "chunk size {} not in [{}, {}]",
            chunk_size, MIN_CHUNK_SIZE, MAX_CHUNK_SIZE
        )));
    }
    Ok(())
}

/// Returns the index, within `arr`, of an element equal to the median of medians of
/// `arr[start..start + length]`. `scratch` is cleared and refilled; pass the same buffer
/// across calls to avoid reallocating.
pub fn median_of_medians<T, C>(
    arr: &[T],
    scratch: &mut Vec<T>,
    start: usize,
    length: usize,
    cmp: &C,
    chunk_size: usize,
) -> Result<usize>
where
    T: Clone,
    C: Comparer<T> + ?Sized,
{
    check_chunk_size(chunk_size)?;
    let end = start
        .checked_add(length)
        .filter(|&end| length > 0 && end <= arr.len())
        .ok_or_else(|| {
            Error::invalid(format!(
                "median of medians window {}+{} invalid for length {}",
                start,
                length,
                arr.len()
            ))
        })?;

    scratch.clear();
    scratch.extend_from_slice(&arr[start..end]);

    let mut working = length;
    while working > 1 {
        let mut groups = 0;
        let mut group_start = 0;
        while group_start < working {
            let group_len = chunk_size.min(working - group_start);
            let group = &mut scratch[group_start..group_start + group_len];
            sort_window(group, cmp);
            // Slots before `group_start` belong to groups already reduced, so the median
            // can be compacted down to `groups` without clobbering live data.
            scratch.swap(groups, group_start + (group_len - 1) / 2);
            groups += 1;
            group_start += group_len;
        }
        working = groups;
    }

    let pivot = &scratch[0];
    arr[start..end]
        .iter()
        .position(|x| cmp.compare(x, pivot) == Ordering::Equal)
        .map(|offset| start + offset)
        .ok_or_else(|| Error::invariant("median of medians value not found in the original range"))
}

/// Partitions `arr[l..=r]` around a median-of-medians pivot and returns the pivot's final
/// index. Elements left of it are `<=` the pivot, elements right of it are `>=`.
pub fn partition_mom<T, C>(
    arr: &mut [T],
    scratch: &mut Vec<T>,
    l: usize,
    r: usize,
    cmp: &C,
    chunk_size: usize,
) -> Result<usize>
where
    T: Clone,
    C: Comparer<T> + ?Sized,
{
    check_range(arr.len(), l, r, l)?;
    if l == r {
        return Ok(l);
    }
    let pivot = median_of_medians(arr, scratch, l, r - l + 1, cmp, chunk_size)?;
    arr.swap(pivot, r);
    Ok(two_pointer_partition(arr, l, r, cmp))
}

// Pivot sits at `r`. Both scans stop on elements equal to the pivot, so runs of
// duplicates get split down the middle instead of piling up on one side.
fn two_pointer_partition<T, C>(arr: &mut [T], l: usize, r: usize, cmp: &C) -> usize
where
    C: Comparer<T> + ?Sized,
{
    let mut i = l;
    // Next right-hand candidate is `j - 1`.
    let mut j = r;
    loop {
        while cmp.compare(&arr[i], &arr[r]) == Ordering::Less {
            i += 1;
        }
        while j > l && cmp.compare(&arr[r], &arr[j - 1]) == Ordering::Less {
            j -= 1;
        }
        if j == l || i >= j - 1 {
            break;
        }
        arr.swap(i, j - 1);
        i += 1;
        j -= 1;
    }
    arr.swap(i, r);
    i
}

/// Narrows `[l, r]` with median-of-medians partitions until `arr[k]` is final. Returns
/// the number of partitions performed.
pub(crate) fn narrow_mom<T, C>(
    arr: &mut [T],
    scratch: &mut Vec<T>,
    l: usize,
    r: usize,
    k: usize,
    cmp: &C,
    chunk_size: usize,
) -> Result<usize>
where
    T: Clone,
    C: Comparer<T> + ?Sized,
{
    let (mut l, mut r) = (l, r);
    let mut partitions = 0;
    while l < r {
        let p = partition_mom(arr, scratch, l, r, cmp, chunk_size)?;
        partitions += 1;
        log::trace!("median of medians partition of [{}, {}] landed at {}", l, r, p);
        match p.cmp(&k) {
            Ordering::Equal => break,
            Ordering::Greater => r = p - 1,
            Ordering::Less => l = p + 1,
        }
    }
    Ok(partitions)
}

/// Worst-case linear selection of the `k`-th smallest element of
/// `arr[start..start + length]`, where `k` indexes `arr` itself.
pub fn select_mom<T: Ord + Clone>(
    arr: &mut [T],
    start: usize,
    length: usize,
    k: usize,
    chunk_size: usize,
) -> Result<T> {
    select_mom_by(arr, start, length, k, &NaturalOrder, chunk_size)
}

/// [`select_mom`] under an arbitrary comparer.
pub fn select_mom_by<T, C>(
    arr: &mut [T],
    start: usize,
    length: usize,
    k: usize,
    cmp: &C,
    chunk_size: usize,
) -> Result<T>
where
    T: Clone,
    C: Comparer<T> + ?Sized,
{
    check_chunk_size(chunk_size)?;
    let (l, r) = check_window(arr.len(), start, length, k)?;
    if l == r {
        return Ok(arr[k].clone());
    }
    let mut scratch = Vec::with_capacity(length);
    narrow_mom(arr, &mut scratch, l, r, k, cmp, chunk_size)?;
    Ok(arr[k].clone())
}
