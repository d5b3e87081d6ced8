//! Core trait and variant types for Variable Neighborhood Search.

use rand::Rng;

/// A solution wrapped with the neighborhood operations VNS drives.
///
/// Implementors supply a fitness to maximize, a randomized jump into the
/// k-th neighborhood and a local search. Both operations return a new
/// explorer and leave `self` untouched, so the runner can discard a
/// rejected candidate without undoing anything.
///
/// # Maximization
///
/// VNS maximizes [`fitness`](Self::fitness). For minimization, negate the cost.
///
/// # References
///
/// Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
/// *Computers & Operations Research* 24(11), 1097-1100.
pub trait NeighborhoodExplorer: Clone + Send {
    /// Fitness of the wrapped solution. Higher is better.
    fn fitness(&self) -> f64;

    /// Returns a random neighbor in the k-th neighborhood (shaking).
    ///
    /// `k` starts at 1. Larger `k` should mean a larger perturbation.
    fn shake<R: Rng>(&self, k: usize, rng: &mut R) -> Self;

    /// Returns a local optimum reached from this solution.
    fn improve(&self, strategy: LocalSearchStrategy) -> Self;

    /// Whether this solution is provably optimal. Ends the search early.
    ///
    /// The default never claims optimality.
    fn is_optimum(&self) -> bool {
        false
    }

    /// Size measure reported in logs (e.g. number of bins).
    fn size(&self) -> usize {
        0
    }
}

/// Which improving move local search applies at each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocalSearchStrategy {
    /// The move with the largest fitness gain.
    #[default]
    Best,
    /// The first enumerated move with a positive gain.
    First,
}

impl LocalSearchStrategy {
    pub fn name(self) -> &'static str {
        match self {
            LocalSearchStrategy::Best => "BEST",
            LocalSearchStrategy::First => "FIRST",
        }
    }
}

/// VNS variant: what happens to the shaken neighbor before it is compared.
///
/// # References
///
/// Hansen, P. & Mladenović, N. (2001). "Variable neighborhood search:
/// Principles and applications", *European Journal of Operational Research* 130(3), 449-467.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VnsVariant {
    /// Basic VNS: shake, then local search with the given strategy.
    Basic(LocalSearchStrategy),
    /// Reduced VNS: shake only.
    Reduced,
}

impl Default for VnsVariant {
    fn default() -> Self {
        VnsVariant::Basic(LocalSearchStrategy::default())
    }
}

impl VnsVariant {
    /// Algorithm name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            VnsVariant::Basic(_) => "BasicVns",
            VnsVariant::Reduced => "ReducedVns",
        }
    }

    /// Local search strategy, `None` for Reduced VNS.
    pub fn strategy(self) -> Option<LocalSearchStrategy> {
        match self {
            VnsVariant::Basic(strategy) => Some(strategy),
            VnsVariant::Reduced => None,
        }
    }

    /// Produces the candidate for neighborhood `k`.
    pub fn do_steps<E, R>(self, explorer: &E, k: usize, rng: &mut R) -> E
    where
        E: NeighborhoodExplorer,
        R: Rng,
    {
        let shaken = explorer.shake(k, rng);
        match self {
            VnsVariant::Basic(strategy) => shaken.improve(strategy),
            VnsVariant::Reduced => shaken,
        }
    }
}
