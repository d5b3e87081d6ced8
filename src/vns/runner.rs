//! Variable Neighborhood Search execution engine.
//!
//! # Algorithm (sequential neighborhood change)
//!
//! 1. Start from the given explorer x, set k = 1
//! 2. Stop if x is provably optimal or the time budget is spent
//! 3. **Steps**: shake x into N_k(x) → x'; Basic VNS then applies local
//!    search to x' → x'', Reduced VNS takes x'' = x'
//! 4. **Move or not**: if f(x'') > f(x), set x = x'' and k = 1;
//!    otherwise k = k + 1
//! 5. If k > k_max, restart the scan at k = 1
//! 6. Go to 2
//!
//! # Reference
//!
//! Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//! *Computers & Operations Research* 24(11), 1097-1100.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use super::clock::{Clock, Stopwatch};
use super::config::VnsConfig;
use super::types::{NeighborhoodExplorer, VnsVariant};
use crate::error::Result;

/// Why a VNS run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The current solution met the explorer's optimality test.
    OptimumFound,
    /// The time budget ran out. The result holds the best solution so far.
    TimedOut,
    /// `max_iterations` steps were executed.
    IterationLimit,
}

/// Result of a VNS run.
#[derive(Debug, Clone)]
pub struct VnsResult<E> {
    /// Final (and best) explorer.
    pub best: E,
    /// Fitness of `best`.
    pub best_fitness: f64,
    /// Variant and strategy the run used.
    pub variant: VnsVariant,
    /// Elapsed time measured by the run's clock.
    pub elapsed: Duration,
    /// Neighborhood index the run stopped at.
    pub final_k: usize,
    /// Shake/improve steps executed.
    pub iterations: usize,
    /// Accepted candidates.
    pub improvements: usize,
    /// Why the run stopped.
    pub termination: Termination,
    /// Fitness of the start and of every accepted candidate.
    pub fitness_history: Vec<f64>,
}

impl<E> VnsResult<E> {
    /// Whether the run stopped on a provably optimal solution.
    pub fn is_optimum(&self) -> bool {
        self.termination == Termination::OptimumFound
    }
}

/// Variable Neighborhood Search runner.
pub struct VnsRunner;

impl VnsRunner {
    /// Runs VNS from `explorer` with a wall-clock [`Stopwatch`] and a
    /// [`StdRng`] seeded from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use u_binpack::approx::NextFit;
    /// use u_binpack::explorer::BinPackingExplorer;
    /// use u_binpack::model::Instance;
    /// use u_binpack::vns::{VnsConfig, VnsRunner};
    ///
    /// let instance = Instance::new(10.0, vec![5.0, 6.0, 4.0, 3.0, 7.0, 5.0]).unwrap();
    /// let explorer = BinPackingExplorer::construct(instance, &NextFit);
    /// let config = VnsConfig::default()
    ///     .with_t_max(Duration::from_secs(10))
    ///     .with_seed(42);
    ///
    /// let result = VnsRunner::run(explorer, &config).unwrap();
    /// assert!(result.is_optimum());
    /// assert_eq!(result.best.solution().len(), 3);
    /// ```
    ///
    /// # Errors
    ///
    /// [`BinPackingError::InvalidConfig`](crate::error::BinPackingError::InvalidConfig)
    /// if `config` fails validation.
    pub fn run<E: NeighborhoodExplorer>(explorer: E, config: &VnsConfig) -> Result<VnsResult<E>> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        let mut clock = Stopwatch::new();
        Self::run_with(explorer, config, &mut rng, &mut clock)
    }

    /// Runs VNS with caller-supplied randomness and clock.
    pub fn run_with<E, R, C>(
        explorer: E,
        config: &VnsConfig,
        rng: &mut R,
        clock: &mut C,
    ) -> Result<VnsResult<E>>
    where
        E: NeighborhoodExplorer,
        R: Rng,
        C: Clock,
    {
        config.validate()?;

        let variant = config.variant;
        info!(
            event = "vns_start",
            variant = variant.name(),
            strategy = variant.strategy().map(|s| s.name()),
            k_max = config.k_max,
            t_max_ms = config.t_max.as_millis() as u64,
            size = explorer.size(),
            fitness = explorer.fitness(),
        );

        clock.start();

        let mut current = explorer;
        let mut current_fitness = current.fitness();
        let mut fitness_history = vec![current_fitness];
        let mut k = 1;
        let mut iterations = 0;
        let mut improvements = 0;

        let termination = loop {
            if current.is_optimum() {
                break Termination::OptimumFound;
            }
            if clock.elapsed() >= config.t_max {
                break Termination::TimedOut;
            }
            if config.max_iterations.is_some_and(|max| iterations >= max) {
                break Termination::IterationLimit;
            }

            let candidate = variant.do_steps(&current, k, rng);
            let candidate_fitness = candidate.fitness();
            iterations += 1;

            if candidate_fitness > current_fitness {
                debug!(
                    event = "accepted",
                    iteration = iterations,
                    k,
                    fitness = candidate_fitness,
                    size = candidate.size(),
                );
                current = candidate;
                current_fitness = candidate_fitness;
                fitness_history.push(current_fitness);
                improvements += 1;
                k = 1;
            } else {
                trace!(
                    event = "rejected",
                    iteration = iterations,
                    k,
                    fitness = candidate_fitness,
                );
                k += 1;
                if k > config.k_max {
                    trace!(event = "restart", iteration = iterations);
                    k = 1;
                }
            }
        };

        clock.stop();
        let elapsed = clock.elapsed();

        info!(
            event = "vns_end",
            variant = variant.name(),
            termination = ?termination,
            iterations,
            improvements,
            elapsed_ms = elapsed.as_millis() as u64,
            size = current.size(),
            fitness = current_fitness,
        );

        Ok(VnsResult {
            best: current,
            best_fitness: current_fitness,
            variant,
            elapsed,
            final_k: k,
            iterations,
            improvements,
            termination,
            fitness_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx::{FirstFitDecreasing, NextFit, WorstFit};
    use crate::explorer::BinPackingExplorer;
    use crate::model::Instance;
    use crate::vns::LocalSearchStrategy;
    use std::cell::Cell;

    /// Advances a fixed tick on every reading.
    struct TickClock {
        now: Cell<Duration>,
        tick: Duration,
    }

    impl TickClock {
        fn new(tick: Duration) -> Self {
            Self {
                now: Cell::new(Duration::ZERO),
                tick,
            }
        }
    }

    impl Clock for TickClock {
        fn start(&mut self) {
            self.now.set(Duration::ZERO);
        }

        fn elapsed(&self) -> Duration {
            let now = self.now.get() + self.tick;
            self.now.set(now);
            now
        }
    }

    // ---- Discretized quadratic: f(x) = -(x - 10)^2, max at x = 10 ----

    #[derive(Clone)]
    struct Quadratic(i32);

    impl NeighborhoodExplorer for Quadratic {
        fn fitness(&self) -> f64 {
            let d = self.0 as f64 - 10.0;
            -d * d
        }

        fn shake<R: Rng>(&self, k: usize, rng: &mut R) -> Self {
            let radius = k as i32 * 2;
            Quadratic(self.0 + rng.random_range(-radius..=radius))
        }

        fn improve(&self, _strategy: LocalSearchStrategy) -> Self {
            let mut x = self.0;
            while (x - 10).abs() > 0 {
                x += (10 - x).signum();
            }
            Quadratic(x)
        }

        fn is_optimum(&self) -> bool {
            self.0 == 10
        }
    }

    fn scenario() -> Instance {
        Instance::new(10.0, vec![9.0, 1.0, 8.0, 2.0, 7.0, 3.0]).unwrap()
    }

    #[test]
    fn test_vns_quadratic_finds_optimum() {
        let config = VnsConfig::default().with_seed(42);
        let result = VnsRunner::run(Quadratic(-40), &config).unwrap();
        assert_eq!(result.best.0, 10);
        assert_eq!(result.termination, Termination::OptimumFound);
        assert_eq!(result.improvements, 1);
    }

    #[test]
    fn test_vns_already_optimal_returns_immediately() {
        let explorer = BinPackingExplorer::construct(scenario(), &NextFit);
        assert!(explorer.is_optimum());

        let result = VnsRunner::run(explorer, &VnsConfig::default().with_seed(1)).unwrap();
        assert!(result.is_optimum());
        assert_eq!(result.iterations, 0);
        assert_eq!(result.final_k, 1);
        assert_eq!(result.best.solution().len(), 3);
    }

    #[test]
    fn test_basic_vns_reaches_lower_bound() {
        let explorer = BinPackingExplorer::construct(scenario(), &WorstFit);
        assert_eq!(explorer.solution().len(), 6);

        let config = VnsConfig::default()
            .with_k_max(5)
            .with_t_max(Duration::from_secs(30))
            .with_seed(7);
        let result = VnsRunner::run(explorer, &config).unwrap();

        assert_eq!(result.termination, Termination::OptimumFound);
        assert_eq!(result.best.solution().len(), 3);
        assert_eq!(result.best.solution().total_weight(), 30.0);
    }

    #[test]
    fn test_optimum_detected_on_first_optimal_state() {
        // sum 40, capacity 10: only a packing of four full bins reaches fitness 400
        let instance = Instance::new(10.0, vec![5.0, 6.0, 4.0, 3.0, 7.0, 5.0, 2.0, 8.0]).unwrap();
        let explorer = BinPackingExplorer::construct(instance, &WorstFit);
        let config = VnsConfig::default()
            .with_strategy(LocalSearchStrategy::First)
            .with_t_max(Duration::from_secs(30))
            .with_seed(3);
        let result = VnsRunner::run(explorer, &config).unwrap();

        assert_eq!(result.termination, Termination::OptimumFound);
        assert_eq!(result.best.solution().len(), 4);
        assert_eq!(result.best_fitness, 400.0);

        let (last, earlier) = result.fitness_history.split_last().unwrap();
        assert_eq!(*last, 400.0);
        assert!(earlier.iter().all(|&f| f < 400.0));
    }

    #[test]
    fn test_fitness_history_strictly_increasing() {
        let instance = Instance::new(
            20.0,
            vec![3.0, 11.0, 7.0, 9.0, 4.0, 13.0, 5.0, 8.0, 6.0, 2.0, 12.0, 10.0],
        )
        .unwrap();
        let explorer = BinPackingExplorer::construct(instance, &WorstFit);
        let config = VnsConfig::default()
            .with_strategy(LocalSearchStrategy::First)
            .with_max_iterations(200)
            .with_seed(11);
        let result = VnsRunner::run(explorer, &config).unwrap();

        for window in result.fitness_history.windows(2) {
            assert!(window[1] > window[0], "{} !> {}", window[1], window[0]);
        }
        assert_eq!(result.fitness_history.len(), result.improvements + 1);
    }

    #[test]
    fn test_timeout_returns_best_so_far() {
        // lower bound 2 is unreachable: three items of 6 need three bins
        let instance = Instance::new(10.0, vec![6.0, 6.0, 6.0]).unwrap();
        let explorer = BinPackingExplorer::construct(instance, &FirstFitDecreasing::default());
        let config = VnsConfig::default()
            .with_k_max(2)
            .with_t_max(Duration::from_secs(1));
        let mut clock = TickClock::new(Duration::from_millis(100));
        let mut rng = StdRng::seed_from_u64(5);

        let result = VnsRunner::run_with(explorer, &config, &mut rng, &mut clock).unwrap();

        assert_eq!(result.termination, Termination::TimedOut);
        assert!(!result.is_optimum());
        assert_eq!(result.best.solution().len(), 3);
        assert_eq!(result.improvements, 0);
        assert!(result.iterations > 0);
        assert!(result.elapsed >= Duration::from_secs(1));
    }

    #[test]
    fn test_neighborhood_restarts_after_k_max() {
        let instance = Instance::new(10.0, vec![6.0, 6.0, 6.0]).unwrap();
        let explorer = BinPackingExplorer::construct(instance, &NextFit);
        let config = VnsConfig::default()
            .with_k_max(3)
            .with_max_iterations(7)
            .with_seed(9);
        let result = VnsRunner::run(explorer, &config).unwrap();

        assert_eq!(result.termination, Termination::IterationLimit);
        assert_eq!(result.iterations, 7);
        // k runs 1,2,3,1,2,3,1 and then advances once more
        assert_eq!(result.final_k, 2);
    }

    #[test]
    fn test_reduced_vns_has_no_strategy() {
        let explorer = BinPackingExplorer::construct(scenario(), &WorstFit);
        let config = VnsConfig::default()
            .with_variant(VnsVariant::Reduced)
            .with_max_iterations(10_000)
            .with_seed(2);
        let result = VnsRunner::run(explorer, &config).unwrap();
        assert_eq!(result.variant.strategy(), None);
        assert_eq!(result.variant.name(), "ReducedVns");
        assert!(result.best.solution().len() >= 3);
    }

    #[test]
    fn test_seed_reproducible() {
        let instance = Instance::new(
            20.0,
            vec![3.0, 11.0, 7.0, 9.0, 4.0, 13.0, 5.0, 8.0, 6.0, 2.0, 12.0, 10.0],
        )
        .unwrap();
        let config = VnsConfig::default()
            .with_variant(VnsVariant::Reduced)
            .with_max_iterations(300)
            .with_seed(99);
        let a = VnsRunner::run(BinPackingExplorer::construct(instance.clone(), &WorstFit), &config)
            .unwrap();
        let b = VnsRunner::run(BinPackingExplorer::construct(instance, &WorstFit), &config)
            .unwrap();
        assert_eq!(a.best.solution(), b.best.solution());
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let explorer = BinPackingExplorer::construct(scenario(), &NextFit);
        let config = VnsConfig::default().with_k_max(0);
        assert!(VnsRunner::run(explorer, &config).is_err());
    }
}
