//! Variable Neighborhood Search (VNS).
//!
//! A single-solution metaheuristic that systematically changes
//! neighborhood structures during the search. At each step, a random
//! perturbation (shaking) in the current neighborhood is optionally
//! followed by local search. If the result is better, the search resets
//! to the first (smallest) neighborhood; otherwise, it moves to the next
//! (larger) one, wrapping back to the first after `k_max`.
//!
//! Two variants are provided through [`VnsVariant`]:
//! - **Basic VNS**: shake, then local search with a [`LocalSearchStrategy`].
//! - **Reduced VNS**: shake only.
//!
//! The run stops when the explorer reports a provable optimum or when the
//! time budget measured by a [`Clock`] is spent.
//!
//! # References
//!
//! - Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//!   *Computers & Operations Research* 24(11), 1097-1100.
//! - Hansen, P. & Mladenović, N. (2001). "Variable neighborhood search:
//!   Principles and applications", *European Journal of Operational Research* 130(3), 449-467.

mod clock;
mod config;
mod runner;
mod types;

pub use clock::{Clock, Stopwatch};
pub use config::VnsConfig;
pub use runner::{Termination, VnsResult, VnsRunner};
pub use types::{LocalSearchStrategy, NeighborhoodExplorer, VnsVariant};
