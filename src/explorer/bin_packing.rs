//! Bin packing neighborhood explorer.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use rand::seq::IteratorRandom;
use rand::Rng;
use tracing::{trace, warn};

use crate::approx::Constructor;
use crate::error::Result;
use crate::model::{Instance, Solution};
use crate::moves::{self, Move};
use crate::vns::{LocalSearchStrategy, NeighborhoodExplorer};

/// Smallest accepted improvement, relative to `capacity²`.
///
/// A delta below this is rounding noise: a transfer that only exchanges
/// two bin contents has a true delta of zero but can evaluate slightly
/// positive in both directions.
const MIN_IMPROVEMENT: f64 = 1e-9;

/// A solution paired with its instance, plus the search operations VNS needs.
///
/// The explorer owns its solution; the instance is shared read-only.
/// Search operations never mutate `self`: [`shake`](Self::shake) and
/// [`improve`](Self::improve) work on a private copy and return it, so a
/// rejected candidate is simply dropped.
///
/// # Fitness
///
/// `Σ content²` over all bins, maximized. With a fixed total weight it
/// grows whenever weight is concentrated into fewer, fuller bins.
///
/// # Reference
///
/// Fleszar, K. & Hindi, K. S. (2002). "New heuristics for one-dimensional
/// bin-packing", *Computers & Operations Research* 29(7), 821-839.
#[derive(Debug, Clone)]
pub struct BinPackingExplorer {
    instance: Arc<Instance>,
    solution: Solution,
}

impl BinPackingExplorer {
    /// Wraps an existing solution of `instance`.
    pub fn new(instance: impl Into<Arc<Instance>>, solution: Solution) -> Self {
        Self {
            instance: instance.into(),
            solution,
        }
    }

    /// Builds the initial solution with `constructor`.
    pub fn construct(instance: impl Into<Arc<Instance>>, constructor: &dyn Constructor) -> Self {
        let instance = instance.into();
        let solution = constructor.solve(&instance);
        Self { instance, solution }
    }

    /// The shared instance.
    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    /// The current solution.
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Consumes the explorer, returning its solution.
    pub fn into_solution(self) -> Solution {
        self.solution
    }

    /// Sum of squared bin contents.
    pub fn fitness(&self) -> f64 {
        self.solution.bins().iter().map(|b| b.content().powi(2)).sum()
    }

    /// Fitness change `mv` would cause, from the two affected bin contents.
    ///
    /// For a transfer of `w` from content `b1` to content `b2`:
    /// `(b1-w)² + (b2+w)² - b1² - b2²`. For a swap of `w1` (content `b1`)
    /// with `w2` (content `b2`): `(b1-w1+w2)² + (b2+w1-w2)² - b1² - b2²`.
    ///
    /// `mv` must refer to bins of the current solution.
    pub fn delta_fitness(&self, mv: &Move) -> f64 {
        let bins = self.solution.bins();
        let mut transfers = mv.iter();
        let Some(first) = transfers.next() else {
            return 0.0;
        };
        match transfers.next() {
            None => {
                let b1 = bins[first.bin_from].content();
                let b2 = bins[first.bin_to].content();
                let w = first.item;
                (b1 - w).powi(2) + (b2 + w).powi(2) - b1.powi(2) - b2.powi(2)
            }
            Some(second) => {
                let b1 = bins[first.bin_from].content();
                let w1 = first.item;
                let b2 = bins[second.bin_from].content();
                let w2 = second.item;
                (b1 - w1 + w2).powi(2) + (b2 + w1 - w2).powi(2) - b1.powi(2) - b2.powi(2)
            }
        }
    }

    /// Feasible transfers on the current solution.
    pub fn possible_transfers(&self, skip_full_bins: bool) -> impl Iterator<Item = Move> + '_ {
        moves::transfers(&self.solution, skip_full_bins)
    }

    /// Feasible swaps on the current solution.
    pub fn possible_swaps(&self, skip_full_bins: bool) -> impl Iterator<Item = Move> + '_ {
        moves::swaps(&self.solution, skip_full_bins)
    }

    /// Transfers, then swaps.
    pub fn possible_moves(&self, skip_full_bins: bool) -> impl Iterator<Item = Move> + '_ {
        moves::all_moves(&self.solution, skip_full_bins)
    }

    /// Applies `mv` in place and drops the bins it emptied.
    ///
    /// # Errors
    ///
    /// [`BinPackingError::InfeasibleMove`](crate::error::BinPackingError::InfeasibleMove)
    /// if `mv` was not generated from the current state.
    pub fn do_move(&mut self, mv: &Move) -> Result<&mut Self> {
        self.solution.apply_move(mv)?;
        self.solution.remove_empty_bins();
        Ok(self)
    }

    /// A random point of the `k`-th neighborhood.
    ///
    /// Applies up to `k` uniformly chosen feasible moves to a copy, never
    /// picking a move that undoes one applied earlier in the same shake.
    /// Stops early when no candidate is left.
    pub fn shake<R: Rng>(&self, k: usize, rng: &mut R) -> Self {
        let mut next = self.clone();
        let mut undo_moves: HashSet<Move> = HashSet::with_capacity(k);

        for step in 0..k {
            let chosen = next
                .possible_moves(false)
                .filter(|mv| !undo_moves.contains(mv))
                .choose(rng);

            let Some(mv) = chosen else {
                trace!(event = "shake_exhausted", k, applied = step);
                break;
            };

            if let Err(err) = next.do_move(&mv) {
                warn!(event = "shake_aborted", k, applied = step, error = %err);
                break;
            }
            undo_moves.insert(mv.reversed());
        }

        next
    }

    /// Hill-climbs a copy until no move improves fitness.
    ///
    /// Full bins are skipped when generating candidates: a move touching
    /// a full bin cannot raise the fitness. A move counts as improving only
    /// if its delta exceeds [`min_improvement`](Self::min_improvement), so
    /// every accepted move raises the fitness by a fixed amount and the
    /// climb terminates.
    pub fn improve(&self, strategy: LocalSearchStrategy) -> Self {
        let mut next = self.clone();

        loop {
            let chosen = match strategy {
                LocalSearchStrategy::Best => next.best_improving_move(),
                LocalSearchStrategy::First => next.first_improving_move(),
            };

            let Some(mv) = chosen else {
                break;
            };

            if let Err(err) = next.do_move(&mv) {
                warn!(event = "improve_aborted", error = %err);
                break;
            }
        }

        next
    }

    /// Threshold a delta must exceed to count as an improvement.
    pub fn min_improvement(&self) -> f64 {
        MIN_IMPROVEMENT * self.instance.capacity().powi(2)
    }

    /// Move with the largest improving delta; ties go to the first enumerated.
    fn best_improving_move(&self) -> Option<Move> {
        let mut best: Option<(Move, f64)> = None;
        for mv in self.possible_moves(true) {
            let delta = self.delta_fitness(&mv);
            if best.as_ref().map_or(true, |&(_, d)| delta > d) {
                best = Some((mv, delta));
            }
        }
        let threshold = self.min_improvement();
        best.filter(|&(_, d)| d > threshold).map(|(mv, _)| mv)
    }

    fn first_improving_move(&self) -> Option<Move> {
        let threshold = self.min_improvement();
        self.possible_moves(true)
            .find(|mv| self.delta_fitness(mv) > threshold)
    }

    /// Whether the bin count has reached the instance lower bound.
    pub fn is_optimum(&self) -> bool {
        self.solution.len() == self.instance.lower_bound()
    }

    /// One-line summary: bin count and fitness.
    pub fn stats(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BinPackingExplorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Number of bins = {} \tFitness = {:.3}",
            self.solution.len(),
            self.fitness()
        )
    }
}

impl NeighborhoodExplorer for BinPackingExplorer {
    fn fitness(&self) -> f64 {
        BinPackingExplorer::fitness(self)
    }

    fn shake<R: Rng>(&self, k: usize, rng: &mut R) -> Self {
        BinPackingExplorer::shake(self, k, rng)
    }

    fn improve(&self, strategy: LocalSearchStrategy) -> Self {
        BinPackingExplorer::improve(self, strategy)
    }

    fn is_optimum(&self) -> bool {
        BinPackingExplorer::is_optimum(self)
    }

    fn size(&self) -> usize {
        self.solution.len()
    }
}
