use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cs::compare::{Comparer, NaturalOrder};
use crate::cs::select::check_range;
use crate::error::Result;

/// What is left of `[l, r]` after a bounded quickselect run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Narrowed {
    pub l: usize,
    pub r: usize,
    /// Partitions performed.
    pub partitions: usize,
}

impl Narrowed {
    /// The run found the answer: the range collapsed onto `k`.
    pub fn converged(&self) -> bool {
        self.l == self.r
    }
}

/// Partition cap for a range of `len` elements: `ceil(factor * log2(len))`, at least 1.
pub fn iteration_cap(len: usize, factor: f64) -> usize {
    if len <= 1 {
        return 0;
    }
    let cap = (factor * (len as f64).log2()).ceil();
    if cap.is_finite() && cap >= 1.0 {
        cap as usize
    } else {
        1
    }
}

/// Lomuto partition of `arr[l..=r]` around `arr[pivot]`. Elements `<=` the pivot end up
/// left of it; returns the pivot's final index.
pub fn lomuto_partition<T, C>(arr: &mut [T], l: usize, r: usize, pivot: usize, cmp: &C) -> usize
where
    C: Comparer<T> + ?Sized,
{
    arr.swap(pivot, r);
    let mut i = l;
    for j in l..r {
        if cmp.le(&arr[j], &arr[r]) {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, r);
    i
}

/// Randomized quickselect over the inclusive range `[l, r]`, iterated rather than
/// recursed, stopping after `max_partitions` partitions.
///
/// On return `arr[k]` is final if the returned range converged. Otherwise every
/// element left of the returned range is `<=` every element inside it, and every
/// element right of it is `>=`, so selection can carry on within the range.
pub fn quickselect_bounded<T, C, R>(
    arr: &mut [T],
    l: usize,
    r: usize,
    k: usize,
    max_partitions: usize,
    rng: &mut R,
    cmp: &C,
) -> Result<Narrowed>
where
    C: Comparer<T> + ?Sized,
    R: Rng + ?Sized,
{
    check_range(arr.len(), l, r, k)?;
    let (mut l, mut r) = (l, r);
    let mut partitions = 0;
    while r > l && partitions < max_partitions {
        let pivot = rng.gen_range(l..=r);
        let i = lomuto_partition(arr, l, r, pivot, cmp);
        partitions += 1;
        log::trace!("quickselect partition {} of [{}, {}] landed at {}", partitions, l, r, i);
        if i == k {
            l = k;
            r = k;
        } else if i > k {
            r = i - 1;
        } else {
            l = i + 1;
        }
    }
    Ok(Narrowed { l, r, partitions })
}

/// Plain randomized quickselect: runs to convergence with no partition cap.
/// Expected linear, quadratic in the worst case.
pub fn randomized_quickselect<T: Ord + Clone>(arr: &mut [T], k: usize, seed: u64) -> Result<T> {
    check_range(arr.len(), 0, arr.len().saturating_sub(1), k)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let narrowed = quickselect_bounded(arr, 0, arr.len() - 1, k, usize::MAX, &mut rng, &NaturalOrder)?;
    debug_assert!(narrowed.converged());
    Ok(arr[k].clone())
}
