//! Independent runs over many instances.
//!
//! Each instance gets its own constructor call, explorer and VNS run;
//! nothing is shared between runs. With the `parallel` feature the runs
//! are spread over the rayon thread pool.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::info;

use crate::approx::ConstructorKind;
use crate::error::Result;
use crate::explorer::BinPackingExplorer;
use crate::model::Instance;
use crate::report::{Experiment, ExperimentLog};
use crate::vns::{VnsConfig, VnsResult, VnsRunner};

/// Builds a starting solution with `constructor` and runs VNS on it.
pub fn solve_instance(
    instance: &Instance,
    constructor: ConstructorKind,
    config: &VnsConfig,
) -> Result<(Experiment, VnsResult<BinPackingExplorer>)> {
    let explorer = BinPackingExplorer::construct(instance.clone(), constructor.build().as_ref());
    let result = VnsRunner::run(explorer, config)?;
    let experiment = Experiment::from_run(config, &result).with_constructor(constructor.name());

    info!(
        event = "instance_done",
        instance = instance.name().unwrap_or("-"),
        items = experiment.items,
        lower_bound = experiment.lower_bound,
        bins = experiment.bins,
        optimum = experiment.optimum,
    );

    Ok((experiment, result))
}

/// Solves every instance and returns one record per instance, in input order.
///
/// When `config.seed` is set, run `i` uses `seed + i`, so a batch is
/// reproducible regardless of scheduling.
pub fn solve_batch(
    instances: &[Instance],
    constructor: ConstructorKind,
    config: &VnsConfig,
) -> Result<ExperimentLog> {
    config.validate()?;

    let run = |(index, instance): (usize, &Instance)| {
        let config = match config.seed {
            Some(seed) => config.clone().with_seed(seed.wrapping_add(index as u64)),
            None => config.clone(),
        };
        solve_instance(instance, constructor, &config).map(|(experiment, _)| experiment)
    };

    #[cfg(feature = "parallel")]
    let experiments = instances
        .par_iter()
        .enumerate()
        .map(run)
        .collect::<Result<Vec<_>>>()?;

    #[cfg(not(feature = "parallel"))]
    let experiments = instances
        .iter()
        .enumerate()
        .map(run)
        .collect::<Result<Vec<_>>>()?;

    Ok(experiments.into_iter().collect())
}
