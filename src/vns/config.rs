//! Variable Neighborhood Search configuration.

use std::time::Duration;

use super::types::{LocalSearchStrategy, VnsVariant};
use crate::error::{BinPackingError, Result};

/// Configuration parameters for Variable Neighborhood Search.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_binpack::vns::{LocalSearchStrategy, VnsConfig, VnsVariant};
///
/// let config = VnsConfig::default()
///     .with_k_max(8)
///     .with_t_max(Duration::from_secs(5))
///     .with_strategy(LocalSearchStrategy::First);
/// assert_eq!(config.k_max, 8);
/// assert_eq!(config.variant, VnsVariant::Basic(LocalSearchStrategy::First));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VnsConfig {
    /// Largest neighborhood index. Neighborhoods run from 1 to `k_max`.
    pub k_max: usize,
    /// Time budget. Checked before every shake, so a run may overshoot by
    /// one shake/improve step.
    pub t_max: Duration,
    /// Basic (with local search) or Reduced (shake only).
    pub variant: VnsVariant,
    /// Optional cap on shake/improve steps (None for time-only stopping).
    pub max_iterations: Option<usize>,
    /// Random seed (None for a fresh random seed).
    pub seed: Option<u64>,
}

impl Default for VnsConfig {
    fn default() -> Self {
        Self {
            k_max: 5,
            t_max: Duration::from_secs(60),
            variant: VnsVariant::default(),
            max_iterations: None,
            seed: None,
        }
    }
}

impl VnsConfig {
    /// Sets the largest neighborhood index.
    pub fn with_k_max(mut self, k_max: usize) -> Self {
        self.k_max = k_max;
        self
    }

    /// Sets the time budget.
    pub fn with_t_max(mut self, t_max: Duration) -> Self {
        self.t_max = t_max;
        self
    }

    pub fn with_variant(mut self, variant: VnsVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Switches to Basic VNS with the given local search strategy.
    pub fn with_strategy(mut self, strategy: LocalSearchStrategy) -> Self {
        self.variant = VnsVariant::Basic(strategy);
        self
    }

    /// Caps the number of shake/improve steps.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.k_max == 0 {
            return Err(BinPackingError::InvalidConfig(
                "k_max must be at least 1".into(),
            ));
        }
        if self.t_max.is_zero() {
            return Err(BinPackingError::InvalidConfig(
                "t_max must be positive".into(),
            ));
        }
        if self.max_iterations == Some(0) {
            return Err(BinPackingError::InvalidConfig(
                "max_iterations must be positive or None".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vns_config_defaults() {
        let config = VnsConfig::default();
        assert_eq!(config.k_max, 5);
        assert_eq!(config.t_max, Duration::from_secs(60));
        assert_eq!(config.variant, VnsVariant::Basic(LocalSearchStrategy::Best));
        assert!(config.max_iterations.is_none());
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_vns_config_builder() {
        let config = VnsConfig::default()
            .with_k_max(3)
            .with_t_max(Duration::from_millis(250))
            .with_variant(VnsVariant::Reduced)
            .with_max_iterations(100)
            .with_seed(123);

        assert_eq!(config.k_max, 3);
        assert_eq!(config.t_max, Duration::from_millis(250));
        assert_eq!(config.variant, VnsVariant::Reduced);
        assert_eq!(config.max_iterations, Some(100));
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_vns_config_validate() {
        assert!(VnsConfig::default().with_k_max(0).validate().is_err());
        assert!(VnsConfig::default()
            .with_t_max(Duration::ZERO)
            .validate()
            .is_err());
        assert!(VnsConfig::default()
            .with_max_iterations(0)
            .validate()
            .is_err());
    }
}
