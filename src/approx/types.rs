//! Core trait for approximation constructors.

use super::greedy::{Decreasing, FirstFit, NextFit, WorstFit};
use crate::model::{Instance, Solution};

/// A greedy algorithm that packs an instance into an initial solution.
///
/// Constructors are stateless strategy objects; the same value can solve
/// any number of instances. Composite orderings such as
/// first-fit-decreasing are built by wrapping one constructor in
/// [`Decreasing`] rather than by a dedicated type.
pub trait Constructor: Send + Sync {
    /// Algorithm name used in reports.
    fn name(&self) -> String;

    /// Packs every item of `instance` into a new solution.
    fn solve(&self, instance: &Instance) -> Solution;
}

/// Names a constructor so it can be chosen from data.
///
/// # Examples
///
/// ```
/// use u_binpack::approx::ConstructorKind;
/// use u_binpack::model::Instance;
///
/// let instance = Instance::new(10.0, vec![6.0, 5.0, 4.0, 3.0, 2.0, 1.0]).unwrap();
/// let solution = ConstructorKind::FirstFitDecreasing.solve(&instance);
/// assert_eq!(solution.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstructorKind {
    /// One bin per item.
    Worst,
    NextFit,
    FirstFit,
    #[default]
    FirstFitDecreasing,
}

impl ConstructorKind {
    /// Every kind, weakest first.
    pub const ALL: [ConstructorKind; 4] = [
        ConstructorKind::Worst,
        ConstructorKind::NextFit,
        ConstructorKind::FirstFit,
        ConstructorKind::FirstFitDecreasing,
    ];

    /// The constructor this kind names.
    pub fn build(self) -> Box<dyn Constructor> {
        match self {
            ConstructorKind::Worst => Box::new(WorstFit),
            ConstructorKind::NextFit => Box::new(NextFit),
            ConstructorKind::FirstFit => Box::new(FirstFit),
            ConstructorKind::FirstFitDecreasing => Box::new(Decreasing(FirstFit)),
        }
    }

    pub fn name(self) -> String {
        self.build().name()
    }

    pub fn solve(self, instance: &Instance) -> Solution {
        self.build().solve(instance)
    }
}
