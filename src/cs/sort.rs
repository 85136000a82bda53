pub mod histogram;
pub mod insertion_sort;

pub use histogram::{histogram, Digit, RadixKey};
pub use insertion_sort::{insertion_sort, insertion_sort_by};
