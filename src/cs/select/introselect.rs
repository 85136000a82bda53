//! # Introspective selection
//!
//! Randomized quickselect is fast on typical input but has no worst-case bound.
//! Median-of-medians selection is linear in the worst case but slow in practice. The
//! introspective selector runs quickselect with a cap of `ceil(c * log2(n))` partitions
//! and, if the range has not collapsed onto `k` by then, finishes the remaining range
//! with median-of-medians partitions.
//!
//! ```rust
//! use orderstat::select::IntroSelector;
//!
//! let selector = IntroSelector::new().with_seed(42);
//! let mut data: Vec<i64> = (0..1000).rev().collect();
//! assert_eq!(selector.select(&mut data, 500).unwrap(), 500);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cs::compare::{Comparer, NaturalOrder};
use crate::cs::select::check_range;
use crate::cs::select::median_of_medians::{check_chunk_size, narrow_mom, DEFAULT_CHUNK_SIZE};
use crate::cs::select::quickselect::{iteration_cap, quickselect_bounded};
use crate::error::{Error, Result};

/// Default `c` in the quickselect cap `ceil(c * log2(n))`.
pub const DEFAULT_ITERATION_FACTOR: f64 = 4.0;

/// What a selection run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionStats {
    /// Randomized partitions performed before converging or hitting the cap.
    pub quickselect_partitions: usize,
    /// Median-of-medians partitions performed after falling back.
    pub mom_partitions: usize,
    /// The quickselect cap ran out and median-of-medians finished the job.
    pub fell_back: bool,
}

/// Builder-style configuration for introspective selection.
#[derive(Debug, Clone, PartialEq)]
pub struct IntroSelector {
    seed: Option<u64>,
    iteration_factor: f64,
    chunk_size: usize,
}

impl Default for IntroSelector {
    fn default() -> Self {
        Self {
            seed: None,
            iteration_factor: DEFAULT_ITERATION_FACTOR,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl IntroSelector {
    /// Unseeded selector with the default cap factor and group size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the pivot generator. Same seed and input, same permutation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets `c` in the quickselect cap `ceil(c * log2(n))`. Must be finite and positive.
    pub fn with_iteration_factor(mut self, factor: f64) -> Self {
        self.iteration_factor = factor;
        self
    }

    /// Sets the median-of-medians group size, in `[5, 31]`.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn iteration_factor(&self) -> f64 {
        self.iteration_factor
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    fn validate(&self) -> Result<()> {
        if !self.iteration_factor.is_finite() || self.iteration_factor <= 0.0 {
            return Err(Error::invalid(format!(
                "iteration factor must be finite and positive, got {}",
                self.iteration_factor
            )));
        }
        check_chunk_size(self.chunk_size)
    }

    fn rng(&self) -> ChaCha8Rng {
        let seed = self.seed.unwrap_or_else(rand::random);
        ChaCha8Rng::seed_from_u64(seed)
    }

    /// Leaves the `k`-th smallest element at index `k` and returns it.
    pub fn select<T: Ord + Clone>(&self, arr: &mut [T], k: usize) -> Result<T> {
        self.select_by(arr, k, &NaturalOrder)
    }

    /// [`IntroSelector::select`] under an arbitrary comparer.
    pub fn select_by<T, C>(&self, arr: &mut [T], k: usize, cmp: &C) -> Result<T>
    where
        T: Clone,
        C: Comparer<T> + ?Sized,
    {
        if arr.is_empty() {
            return Err(Error::invalid("cannot select from an empty slice"));
        }
        self.select_range_by(arr, 0, arr.len() - 1, k, cmp)
    }

    /// Selects within the inclusive range `[l, r]`; elements outside it are untouched.
    pub fn select_range_by<T, C>(&self, arr: &mut [T], l: usize, r: usize, k: usize, cmp: &C) -> Result<T>
    where
        T: Clone,
        C: Comparer<T> + ?Sized,
    {
        self.select_with_stats(arr, l, r, k, cmp).map(|(value, _)| value)
    }

    /// Like [`IntroSelector::select_range_by`], also reporting how the run went.
    pub fn select_with_stats<T, C>(
        &self,
        arr: &mut [T],
        l: usize,
        r: usize,
        k: usize,
        cmp: &C,
    ) -> Result<(T, SelectionStats)>
    where
        T: Clone,
        C: Comparer<T> + ?Sized,
    {
        self.validate()?;
        check_range(arr.len(), l, r, k)?;
        let mut rng = self.rng();
        introselect(arr, l, r, k, self.iteration_factor, self.chunk_size, &mut rng, cmp)
    }
}

fn introselect<T, C, R>(
    arr: &mut [T],
    l: usize,
    r: usize,
    k: usize,
    iteration_factor: f64,
    chunk_size: usize,
    rng: &mut R,
    cmp: &C,
) -> Result<(T, SelectionStats)>
where
    T: Clone,
    C: Comparer<T> + ?Sized,
    R: Rng + ?Sized,
{
    let cap = iteration_cap(r - l + 1, iteration_factor);
    let narrowed = quickselect_bounded(arr, l, r, k, cap, rng, cmp)?;
    let mut stats = SelectionStats {
        quickselect_partitions: narrowed.partitions,
        ..SelectionStats::default()
    };
    if !narrowed.converged() {
        log::debug!(
            "quickselect hit its cap of {} partitions with [{}, {}] left, finishing with median of medians",
            cap,
            narrowed.l,
            narrowed.r
        );
        let mut scratch = Vec::with_capacity(narrowed.r - narrowed.l + 1);
        stats.mom_partitions = narrow_mom(arr, &mut scratch, narrowed.l, narrowed.r, k, cmp, chunk_size)?;
        stats.fell_back = true;
    }
    Ok((arr[k].clone(), stats))
}

/// Leaves the `k`-th smallest element of `arr` at index `k` and returns it. `seed`
/// makes the run reproducible.
pub fn select<T: Ord + Clone>(arr: &mut [T], k: usize, seed: Option<u64>) -> Result<T> {
    select_by(arr, k, seed, &NaturalOrder)
}

/// [`select`] under an arbitrary comparer.
pub fn select_by<T, C>(arr: &mut [T], k: usize, seed: Option<u64>, cmp: &C) -> Result<T>
where
    T: Clone,
    C: Comparer<T> + ?Sized,
{
    selector(seed).select_by(arr, k, cmp)
}

/// Selects within the inclusive range `[l, r]`; `k` indexes `arr` itself.
pub fn select_range<T: Ord + Clone>(arr: &mut [T], l: usize, r: usize, k: usize, seed: Option<u64>) -> Result<T> {
    select_range_by(arr, l, r, k, seed, &NaturalOrder)
}

/// [`select_range`] under an arbitrary comparer.
pub fn select_range_by<T, C>(arr: &mut [T], l: usize, r: usize, k: usize, seed: Option<u64>, cmp: &C) -> Result<T>
where
    T: Clone,
    C: Comparer<T> + ?Sized,
{
    selector(seed).select_range_by(arr, l, r, k, cmp)
}

fn selector(seed: Option<u64>) -> IntroSelector {
    match seed {
        Some(seed) => IntroSelector::new().with_seed(seed),
        None => IntroSelector::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::compare::Reversed;
    use rand::rngs::StdRng;

    fn sorted_copy<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
        let mut sorted = arr.to_vec();
        sorted.sort();
        sorted
    }

    #[test]
    fn test_select() {
        let mut arr = vec![5, 3, 8, 1, 9, 2];
        assert_eq!(select(&mut arr, 2, Some(1)).unwrap(), 3);
        assert_eq!(arr[2], 3);
    }

    #[test]
    fn all_equal() {
        for k in 0..4 {
            let mut arr = vec![7, 7, 7, 7];
            assert_eq!(select(&mut arr, k, Some(9)).unwrap(), 7);
        }
    }

    #[test]
    fn single_element_does_no_work() {
        let mut arr = vec![1];
        let (value, stats) = IntroSelector::new()
            .with_seed(0)
            .select_with_stats(&mut arr, 0, 0, 0, &NaturalOrder)
            .unwrap();
        assert_eq!(value, 1);
        assert_eq!(stats, SelectionStats::default());
    }

    #[test]
    fn boundary_k_gives_min_and_max() {
        let original = vec![12, -4, 33, 0, 7, 7, -19, 50];
        let mut arr = original.clone();
        assert_eq!(select(&mut arr, 0, Some(2)).unwrap(), -19);
        let mut arr = original.clone();
        assert_eq!(select(&mut arr, original.len() - 1, Some(2)).unwrap(), 50);
    }

    #[test]
    fn descending_input_falls_back_when_cap_runs_out() {
        let original: Vec<u32> = (0..1000).rev().collect();
        let expected = sorted_copy(&original)[500];
        let mut arr = original.clone();
        let selector = IntroSelector::new().with_seed(17).with_iteration_factor(0.1);
        let (value, stats) = selector.select_with_stats(&mut arr, 0, 999, 500, &NaturalOrder).unwrap();
        assert_eq!(value, expected);
        assert_eq!(arr[500], expected);
        assert_eq!(stats.quickselect_partitions, 1);
        assert!(stats.fell_back);
        assert!(stats.mom_partitions >= 1);
        assert_eq!(sorted_copy(&arr), sorted_copy(&original));
    }

    #[test]
    fn descending_input_with_default_cap() {
        let original: Vec<u32> = (0..1000).rev().collect();
        let mut arr = original.clone();
        let value = IntroSelector::new().with_seed(5).select(&mut arr, 500).unwrap();
        assert_eq!(value, 500);
    }

    #[test]
    fn random_inputs_match_sorting_for_every_k() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..30 {
            let n = rng.gen_range(1..64);
            let original: Vec<u8> = (0..n).map(|_| rng.gen_range(0..10)).collect();
            let sorted = sorted_copy(&original);
            for k in 0..n {
                let mut arr = original.clone();
                assert_eq!(select(&mut arr, k, Some(k as u64)).unwrap(), sorted[k]);
                assert_eq!(sorted_copy(&arr), sorted);
            }
        }
    }

    #[test]
    fn reselecting_is_idempotent() {
        let mut arr: Vec<i32> = vec![40, -2, 13, 13, 99, 0, 5, 71, -8];
        let first = select(&mut arr, 4, None).unwrap();
        let snapshot = arr.clone();
        let second = select(&mut arr, 4, None).unwrap();
        assert_eq!(first, second);
        assert_eq!(arr[4], snapshot[4]);
    }

    #[test]
    fn same_seed_same_permutation() {
        let original: Vec<u64> = (0..500).map(|i| (i * 7919) % 503).collect();
        let mut a = original.clone();
        let mut b = original.clone();
        select(&mut a, 123, Some(77)).unwrap();
        select(&mut b, 123, Some(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn range_selection_leaves_outside_untouched() {
        let mut arr = vec![100, 9, 3, 7, 1, 5, -100];
        assert_eq!(select_range(&mut arr, 1, 5, 3, Some(4)).unwrap(), 5);
        assert_eq!(arr[0], 100);
        assert_eq!(arr[6], -100);
    }

    #[test]
    fn comparer_top_k_cutoff() {
        let mut scores = vec![0.25f64, 0.75, 0.5, 1.0, 0.125];
        let by_score = |a: &f64, b: &f64| a.total_cmp(b);
        let third_best = select_by(&mut scores, 2, Some(3), &Reversed(by_score)).unwrap();
        assert_eq!(third_best, 0.5);
    }

    #[test]
    fn invalid_arguments_leave_input_alone() {
        let mut arr = vec![3, 1, 2];
        assert!(select(&mut arr, 3, None).unwrap_err().is_invalid_argument());
        assert!(select_range(&mut arr, 2, 1, 1, None).unwrap_err().is_invalid_argument());
        assert!(select_range(&mut arr, 0, 3, 1, None).unwrap_err().is_invalid_argument());
        assert!(select_range(&mut arr, 1, 2, 0, None).unwrap_err().is_invalid_argument());
        assert!(select(&mut Vec::<i32>::new(), 0, None).unwrap_err().is_invalid_argument());
        let bad_factor = IntroSelector::new().with_iteration_factor(f64::NAN);
        assert!(bad_factor.select(&mut arr, 0).unwrap_err().is_invalid_argument());
        let bad_chunk = IntroSelector::new().with_chunk_size(3);
        assert!(bad_chunk.select(&mut arr, 0).unwrap_err().is_invalid_argument());
        assert_eq!(arr, vec![3, 1, 2]);
    }
}
