//! # Order-statistic selection
//!
//! Every engine here leaves the k-th order statistic at index `k` of the input: the
//! value that would sit there if the slice were sorted. The rest of the slice is only
//! permuted ("selected, not sorted").
//!
//! - [`quickselect`]: randomized Lomuto quickselect with a partition cap.
//! - [`median_of_medians`]: deterministic pivots, linear-time selection.
//! - [`introselect`]: quickselect first, median-of-medians once the cap runs out. This is
//!   what [`select`] and friends use.
//! - [`radix_msd`] / [`radix_word`]: most-significant-digit radix selection for unsigned
//!   integers with 8-bit and 16-bit digits.
//!
//! ```rust
//! use orderstat::select::{select, select_radix_msd};
//!
//! let mut data = vec![5, 3, 8, 1, 9, 2];
//! assert_eq!(select(&mut data, 2, Some(7)).unwrap(), 3);
//! assert_eq!(data[2], 3);
//!
//! let mut keys: Vec<u32> = vec![300, 65536, 1, 70000];
//! assert_eq!(select_radix_msd(&mut keys, 0, 4, 1, 0).unwrap(), 300);
//! ```

pub mod introselect;
pub mod median_of_medians;
pub mod quickselect;
mod radix;
pub mod radix_msd;
pub mod radix_word;

pub use introselect::{select, select_by, select_range, select_range_by, IntroSelector, SelectionStats};
pub use median_of_medians::{median_of_medians, partition_mom, select_mom, select_mom_by};
pub use quickselect::{quickselect_bounded, randomized_quickselect, Narrowed};
pub use radix_msd::{select_radix_msd, DEFAULT_RADIX_THRESHOLD};
pub use radix_word::select_radix_word;

use crate::error::{Error, Result};

/// Validates an inclusive active range `[l, r]` and target `k` against a slice length.
pub(crate) fn check_range(len: usize, l: usize, r: usize, k: usize) -> Result<()> {
    if len == 0 {
        return Err(Error::invalid("cannot select from an empty slice"));
    }
    if l > r || r >= len {
        return Err(Error::invalid(format!(
            "range [{}, {}] is not a valid range of a slice of length {}",
            l, r, len
        )));
    }
    if k < l || k > r {
        return Err(Error::invalid(format!("k = {} outside of [{}, {}]", k, l, r)));
    }
    Ok(())
}

/// Validates a `start`/`length` window and converts it to an inclusive range.
pub(crate) fn check_window(len: usize, start: usize, length: usize, k: usize) -> Result<(usize, usize)> {
    if length == 0 {
        return Err(Error::invalid("length must be at least 1"));
    }
    let r = start
        .checked_add(length - 1)
        .ok_or_else(|| Error::invalid("start + length overflows"))?;
    check_range(len, start, r, k)?;
    Ok((start, r))
}

/// Lower median: the element at index `(len - 1) / 2` of the sorted slice.
pub fn median<T: Ord + Clone>(arr: &mut [T], seed: Option<u64>) -> Result<T> {
    if arr.is_empty() {
        return Err(Error::invalid("median of an empty slice"));
    }
    let k = (arr.len() - 1) / 2;
    select(arr, k, seed)
}

/// Nearest-rank percentile, `p` in `[0, 100]`. `p = 0` is the minimum and `p = 100`
/// the maximum.
pub fn percentile<T: Ord + Clone>(arr: &mut [T], p: f64, seed: Option<u64>) -> Result<T> {
    if arr.is_empty() {
        return Err(Error::invalid("percentile of an empty slice"));
    }
    if !(0.0..=100.0).contains(&p) {
        return Err(Error::invalid(format!("percentile {} not in [0, 100]", p)));
    }
    let len = arr.len();
    let rank = (p / 100.0 * len as f64).ceil() as usize;
    let k = rank.saturating_sub(1).min(len - 1);
    select(arr, k, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_checks() {
        assert!(check_range(0, 0, 0, 0).is_err());
        assert!(check_range(3, 2, 1, 1).is_err());
        assert!(check_range(3, 0, 3, 1).is_err());
        assert!(check_range(3, 1, 2, 0).is_err());
        assert!(check_range(3, 0, 2, 2).is_ok());
        assert_eq!(check_window(5, 1, 3, 2).unwrap(), (1, 3));
        assert!(check_window(5, 1, 0, 1).is_err());
        assert!(check_window(5, 3, 3, 3).is_err());
        assert!(check_window(5, usize::MAX, 2, 0).is_err());
    }

    #[test]
    fn test_median() {
        let mut odd = vec![9, 1, 5, 3, 7];
        assert_eq!(median(&mut odd, Some(1)).unwrap(), 5);
        let mut even = vec![4, 1, 3, 2];
        assert_eq!(median(&mut even, Some(1)).unwrap(), 2);
        assert!(median(&mut Vec::<i32>::new(), None).is_err());
    }

    #[test]
    fn test_percentile() {
        let original: Vec<u32> = (1..=100).rev().collect();
        let mut arr = original.clone();
        assert_eq!(percentile(&mut arr, 0.0, Some(3)).unwrap(), 1);
        assert_eq!(percentile(&mut arr, 50.0, Some(3)).unwrap(), 50);
        assert_eq!(percentile(&mut arr, 90.0, Some(3)).unwrap(), 90);
        assert_eq!(percentile(&mut arr, 99.5, Some(3)).unwrap(), 100);
        assert_eq!(percentile(&mut arr, 100.0, Some(3)).unwrap(), 100);
        assert!(percentile(&mut arr, 100.5, None).unwrap_err().is_invalid_argument());
        assert!(percentile(&mut arr, f64::NAN, None).unwrap_err().is_invalid_argument());
    }
}
