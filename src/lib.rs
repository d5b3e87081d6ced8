//! One-dimensional bin packing with Variable Neighborhood Search.
//!
//! Packs items of given weights into fixed-capacity bins, minimizing the
//! number of bins:
//!
//! - **Model**: immutable [`Instance`](model::Instance) and mutable
//!   [`Solution`](model::Solution) of [`Bin`](model::Bin)s.
//! - **Approximation**: greedy constructors (next-fit, first-fit,
//!   first-fit-decreasing) that build a starting solution.
//! - **Moves**: item transfers and swaps between bins, enumerated lazily.
//! - **Explorer**: squared-occupancy fitness with O(1) move deltas,
//!   shaking and local search over a solution.
//! - **Variable Neighborhood Search (VNS)**: Basic and Reduced VNS under a
//!   time budget, stopping early when the lower bound is met.
//! - **Report / Batch**: experiment records and independent runs over
//!   many instances.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use u_binpack::approx::FirstFitDecreasing;
//! use u_binpack::explorer::BinPackingExplorer;
//! use u_binpack::model::Instance;
//! use u_binpack::vns::{VnsConfig, VnsRunner};
//!
//! let instance = Instance::new(10.0, vec![9.0, 1.0, 8.0, 2.0, 7.0, 3.0]).unwrap();
//! let explorer = BinPackingExplorer::construct(instance, &FirstFitDecreasing::default());
//! let config = VnsConfig::default()
//!     .with_k_max(5)
//!     .with_t_max(Duration::from_secs(1))
//!     .with_seed(42);
//! let result = VnsRunner::run(explorer, &config).unwrap();
//! assert_eq!(result.best.solution().len(), 3);
//! ```

pub mod approx;
pub mod batch;
pub mod error;
pub mod explorer;
pub mod model;
pub mod moves;
pub mod report;
pub mod vns;

pub use error::{BinPackingError, Result};
