//! In-place order-statistic selection: find the element that would sit at index `k`
//! of the sorted sequence without sorting it.

pub mod cs;
pub mod error;

pub use cs::{compare, select, sort};
pub use error::{Error, Result};
