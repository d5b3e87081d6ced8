//! Move model for bin packing neighborhoods.
//!
//! A [`Move`] is one [`Transfer`] (relocate an item) or two crossing
//! transfers (swap two items between bins). The [`neighborhood`]
//! generators enumerate every feasible move of a solution lazily.

pub mod neighborhood;
mod types;

pub use neighborhood::{all_moves, swaps, transfers};
pub use types::{Move, Transfer};
