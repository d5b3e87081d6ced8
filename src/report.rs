//! Experiment records for external reporting.
//!
//! One [`Experiment`] per VNS run, collected in an [`ExperimentLog`] that
//! the caller owns. With the `serde` feature both serialize, so a
//! reporting layer can write them to any format.

use crate::explorer::BinPackingExplorer;
use crate::vns::{VnsConfig, VnsResult};

/// Summary of one VNS run on one instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Experiment {
    /// Instance name, if it has one.
    pub instance: Option<String>,
    /// Number of items.
    pub items: usize,
    pub lower_bound: usize,
    /// Constructor that built the starting solution, when known.
    pub constructor: Option<String>,
    /// `BasicVns` or `ReducedVns`.
    pub algorithm: String,
    /// Local search strategy; `None` for Reduced VNS.
    pub local_search: Option<String>,
    pub k_max: usize,
    /// Time budget in seconds.
    pub t_max: f64,
    /// Elapsed seconds.
    pub t: f64,
    /// Bins in the final solution.
    pub bins: usize,
    /// Whether the final solution met the lower bound.
    pub optimum: bool,
}

impl Experiment {
    /// Builds the record of a finished run.
    pub fn from_run(config: &VnsConfig, result: &VnsResult<BinPackingExplorer>) -> Self {
        let instance = result.best.instance();
        Self {
            instance: instance.name().map(str::to_owned),
            items: instance.len(),
            lower_bound: instance.lower_bound(),
            constructor: None,
            algorithm: result.variant.name().to_owned(),
            local_search: result.variant.strategy().map(|s| s.name().to_owned()),
            k_max: config.k_max,
            t_max: config.t_max.as_secs_f64(),
            t: result.elapsed.as_secs_f64(),
            bins: result.best.solution().len(),
            optimum: result.best.is_optimum(),
        }
    }

    /// Records the constructor name.
    pub fn with_constructor(mut self, name: impl Into<String>) -> Self {
        self.constructor = Some(name.into());
        self
    }
}

/// Ordered collection of experiment records.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ExperimentLog {
    records: Vec<Experiment>,
}

impl ExperimentLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn push(&mut self, experiment: Experiment) {
        self.records.push(experiment);
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Experiment] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Experiment> {
        self.records.iter()
    }

    /// Number of runs that reached the lower bound.
    pub fn optimum_count(&self) -> usize {
        self.records.iter().filter(|e| e.optimum).count()
    }
}

impl FromIterator<Experiment> for ExperimentLog {
    fn from_iter<I: IntoIterator<Item = Experiment>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<Experiment> for ExperimentLog {
    fn extend<I: IntoIterator<Item = Experiment>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl IntoIterator for ExperimentLog {
    type Item = Experiment;
    type IntoIter = std::vec::IntoIter<Experiment>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ExperimentLog {
    type Item = &'a Experiment;
    type IntoIter = std::slice::Iter<'a, Experiment>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
