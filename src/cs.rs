pub mod compare;
pub mod select;
pub mod sort;

pub use compare::{Comparer, NaturalOrder, Reversed};
