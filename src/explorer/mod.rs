//! Neighborhood exploration for bin packing.
//!
//! [`BinPackingExplorer`] wraps a [`Solution`](crate::model::Solution) with
//! the operations the VNS loop drives: fitness, O(1) delta fitness of a
//! move, shaking into the k-th neighborhood and local search.

mod bin_packing;

pub use bin_packing::BinPackingExplorer;
