//! # Digit histograms
//!
//! Radix selection looks at an unsigned key one digit at a time, most significant digit
//! first. A [`Digit`] names the slice of bits being examined (`shift` and `width`), and
//! [`histogram`] counts how many keys of a range fall into each of the `2^width` digit
//! values.
//!
//! ```rust
//! use orderstat::sort::histogram;
//!
//! let keys: [u32; 4] = [300, 65536, 1, 70000];
//! // Second-highest byte of each key.
//! let counts = histogram(&keys, 0, 3, 16, 8).unwrap();
//! assert_eq!(counts[0], 2);
//! assert_eq!(counts[1], 2);
//! ```

use num_traits::{AsPrimitive, PrimInt, Unsigned};

use crate::error::{Error, Result};

/// Widest digit a histogram is built for. 16 bits is a 65536-entry table.
pub const MAX_DIGIT_BITS: u32 = 16;

/// Unsigned fixed-width integers usable as radix keys.
pub trait RadixKey: PrimInt + Unsigned + AsPrimitive<usize> {
    /// Width of the key in bits.
    fn bits() -> u32 {
        Self::zero().count_zeros()
    }
}

impl<T> RadixKey for T where T: PrimInt + Unsigned + AsPrimitive<usize> {}

/// The slice of key bits currently examined: `width` bits starting `shift` bits from
/// the least significant end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit {
    pub shift: u32,
    pub width: u32,
}

impl Digit {
    /// The top `width` bits of `T`. A width wider than the key is clamped to the key.
    pub fn most_significant<T: RadixKey>(width: u32) -> Self {
        let bits = T::bits();
        let width = width.clamp(1, bits);
        Digit {
            shift: bits - width,
            width,
        }
    }

    pub fn bins(&self) -> usize {
        1usize << self.width
    }

    pub fn mask(&self) -> usize {
        self.bins() - 1
    }

    #[inline]
    pub fn extract<T: RadixKey>(&self, key: T) -> usize {
        let shifted: usize = (key >> self.shift as usize).as_();
        shifted & self.mask()
    }

    /// The next less significant digit, or `None` once the lowest bits were examined.
    pub fn next(&self) -> Option<Digit> {
        if self.shift == 0 {
            return None;
        }
        let width = self.width.min(self.shift);
        Some(Digit {
            shift: self.shift - width,
            width,
        })
    }
}

/// Counts the keys of `arr[l..=r]` per value of the `bit_width`-bit digit found
/// `shift` bits up. The result has `2^bit_width` entries summing to `r - l + 1`.
pub fn histogram<T: RadixKey>(
    arr: &[T],
    l: usize,
    r: usize,
    shift: u32,
    bit_width: u32,
) -> Result<Vec<usize>> {
    if l > r || r >= arr.len() {
        return Err(Error::invalid(format!(
            "histogram range [{}, {}] outside slice of length {}",
            l,
            r,
            arr.len()
        )));
    }
    if bit_width == 0 || bit_width > MAX_DIGIT_BITS {
        return Err(Error::invalid(format!(
            "digit width {} not in 1..={}",
            bit_width, MAX_DIGIT_BITS
        )));
    }
    if shift >= T::bits() {
        return Err(Error::invalid(format!(
            "shift {} out of range for a {}-bit key",
            shift,
            T::bits()
        )));
    }
    let digit = Digit {
        shift,
        width: bit_width,
    };
    Ok(count_digits(&arr[l..=r], digit))
}

pub(crate) fn count_digits<T: RadixKey>(keys: &[T], digit: Digit) -> Vec<usize> {
    let mut counts = vec![0usize; digit.bins()];
    for &key in keys {
        counts[digit.extract(key)] += 1;
    }
    counts
}
