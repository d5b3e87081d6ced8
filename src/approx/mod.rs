//! Approximation constructors.
//!
//! Simple greedy algorithms that turn an [`Instance`](crate::model::Instance)
//! into an initial [`Solution`](crate::model::Solution):
//!
//! - [`WorstFit`]: one bin per item.
//! - [`NextFit`]: only the last bin is open. O(n).
//! - [`FirstFit`]: first existing bin that fits. O(n · bins).
//! - [`Decreasing`]: runs any constructor on items sorted by decreasing
//!   weight; [`FirstFitDecreasing`] is `Decreasing<FirstFit>`.
//!
//! # References
//!
//! Johnson, D. S. (1974). "Fast algorithms for bin packing",
//! *Journal of Computer and System Sciences* 8(3), 272-314.

mod greedy;
mod types;

pub use greedy::{Decreasing, FirstFit, FirstFitDecreasing, NextFit, WorstFit};
pub use types::{Constructor, ConstructorKind};
