use crate::cs::compare::{Comparer, NaturalOrder};
use crate::error::{Error, Result};

/// Sorts the whole slice ascending in place.
pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    sort_window(arr, &NaturalOrder);
}

/// Sorts `length` elements starting at `start` in place, ascending under `cmp`.
///
/// Quadratic; meant for the small groups median-of-medians works on and for short
/// tails where partitioning no longer pays off.
pub fn insertion_sort_by<T, C>(arr: &mut [T], start: usize, length: usize, cmp: &C) -> Result<()>
where
    C: Comparer<T> + ?Sized,
{
    let end = start
        .checked_add(length)
        .filter(|&end| end <= arr.len())
        .ok_or_else(|| {
            Error::invalid(format!(
                "insertion sort window {}+{} exceeds length {}",
                start,
                length,
                arr.len()
            ))
        })?;
    sort_window(&mut arr[start..end], cmp);
    Ok(())
}

pub(crate) fn sort_window<T, C>(window: &mut [T], cmp: &C)
where
    C: Comparer<T> + ?Sized,
{
    for i in 1..window.len() {
        let mut j = i;
        while j > 0 && cmp.compare(&window[j - 1], &window[j]) == std::cmp::Ordering::Greater {
            window.swap(j - 1, j);
            j -= 1;
        }
    }
}
