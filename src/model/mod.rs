//! Problem and solution model.
//!
//! - [`Instance`]: immutable capacity and item weights, with the
//!   `ceil(total / capacity)` lower bound.
//! - [`Bin`]: a capacity-bounded multiset of item weights.
//! - [`Solution`]: an ordered list of bins; the unit every constructor
//!   produces and every search step copies.

mod bin;
mod instance;
mod solution;

pub use bin::Bin;
pub use instance::Instance;
pub use solution::Solution;
