//! Greedy packing algorithms.

use super::types::Constructor;
use crate::model::{Instance, Solution};

/// Puts every item in its own bin. Baseline for tests and comparisons.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorstFit;

impl Constructor for WorstFit {
    fn name(&self) -> String {
        "Worst".into()
    }

    fn solve(&self, instance: &Instance) -> Solution {
        let mut solution = Solution::new(instance.capacity());
        for &item in instance.items() {
            solution.push_to_new_bin(item);
        }
        solution
    }
}

/// Keeps only the last bin open.
///
/// When an item does not fit in the last bin, that bin is closed and a
/// new one is opened. Earlier bins are never revisited. O(n).
#[derive(Debug, Clone, Copy, Default)]
pub struct NextFit;

impl Constructor for NextFit {
    fn name(&self) -> String {
        "NextFit".into()
    }

    fn solve(&self, instance: &Instance) -> Solution {
        let mut solution = Solution::new(instance.capacity());
        for &item in instance.items() {
            let last = solution.last_bin_mut();
            if last.fits(item) {
                last.push(item);
            } else {
                last.closed = true;
                solution.push_to_new_bin(item);
            }
        }
        solution
    }
}

/// Places each item in the first bin, in creation order, that fits it.
/// O(n · bins).
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFit;

impl Constructor for FirstFit {
    fn name(&self) -> String {
        "FirstFit".into()
    }

    fn solve(&self, instance: &Instance) -> Solution {
        let mut solution = Solution::new(instance.capacity());
        for &item in instance.items() {
            match solution.bins_mut().iter_mut().find(|bin| bin.fits(item)) {
                Some(bin) => bin.push(item),
                None => solution.push_to_new_bin(item),
            }
        }
        solution
    }
}

/// Runs the wrapped constructor on the items sorted by decreasing weight.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decreasing<C>(pub C);

impl<C: Constructor> Constructor for Decreasing<C> {
    fn name(&self) -> String {
        format!("{}Decreasing", self.0.name())
    }

    fn solve(&self, instance: &Instance) -> Solution {
        self.0.solve(&instance.sort_decreasing())
    }
}

/// First-fit over items sorted by decreasing weight.
pub type FirstFitDecreasing = Decreasing<FirstFit>;
