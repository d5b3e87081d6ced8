//! Mutable packing of items into bins.

use super::bin::Bin;
use crate::error::{BinPackingError, Result};
use crate::moves::Move;

/// An ordered sequence of bins sharing one capacity.
///
/// A solution always holds at least one bin. Bins may become empty during
/// search; they are only dropped when [`remove_empty_bins`](Self::remove_empty_bins)
/// is called.
///
/// With the `serde` feature, deserialization rejects an empty bin list
/// and bins whose capacity differs from the solution's.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SolutionRepr"))]
pub struct Solution {
    capacity: f64,
    bins: Vec<Bin>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SolutionRepr {
    capacity: f64,
    bins: Vec<Bin>,
}

#[cfg(feature = "serde")]
impl TryFrom<SolutionRepr> for Solution {
    type Error = BinPackingError;

    fn try_from(repr: SolutionRepr) -> Result<Self> {
        if !(repr.capacity.is_finite() && repr.capacity > 0.0) {
            return Err(BinPackingError::InvalidCapacity(repr.capacity));
        }
        if repr.bins.is_empty() {
            return Err(BinPackingError::InvalidSolution(
                "a solution holds at least one bin".into(),
            ));
        }
        if let Some(bin) = repr.bins.iter().find(|b| b.capacity() != repr.capacity) {
            return Err(BinPackingError::InvalidSolution(format!(
                "bin capacity {} differs from solution capacity {}",
                bin.capacity(),
                repr.capacity
            )));
        }
        Ok(Self {
            capacity: repr.capacity,
            bins: repr.bins,
        })
    }
}

impl Solution {
    /// Creates a solution holding a single empty bin.
    pub fn new(capacity: f64) -> Self {
        Self {
            capacity,
            bins: vec![Bin::new(capacity)],
        }
    }

    /// Capacity shared by every bin.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Bins in order, empty ones included.
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Mutable access to the bins. The bin list itself cannot shrink through this.
    pub fn bins_mut(&mut self) -> &mut [Bin] {
        &mut self.bins
    }

    /// Bin at `index`, if it exists.
    pub fn bin(&self, index: usize) -> Option<&Bin> {
        self.bins.get(index)
    }

    /// Number of bins, empty ones included.
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Whether no bin holds any item.
    pub fn is_empty(&self) -> bool {
        self.bins.iter().all(Bin::is_empty)
    }

    /// The most recently opened bin.
    pub fn last_bin(&self) -> &Bin {
        // the bin list is never empty
        &self.bins[self.bins.len() - 1]
    }

    /// Mutable access to the most recently opened bin.
    pub fn last_bin_mut(&mut self) -> &mut Bin {
        let last = self.bins.len() - 1;
        &mut self.bins[last]
    }

    /// Opens a new empty bin at the end.
    pub fn add_empty_bin(&mut self) {
        self.bins.push(Bin::new(self.capacity));
    }

    /// Puts `item` into a fresh bin, reusing the last bin if it is still empty.
    ///
    /// # Errors
    ///
    /// [`BinPackingError::InvalidItem`] if `item` is not positive and finite.
    pub fn pack_in_new_bin(&mut self, item: f64) -> Result<()> {
        if !(item.is_finite() && item > 0.0) {
            return Err(BinPackingError::InvalidItem(item));
        }
        self.push_to_new_bin(item);
        Ok(())
    }

    pub(crate) fn push_to_new_bin(&mut self, item: f64) {
        if !self.last_bin().is_empty() {
            self.add_empty_bin();
        }
        self.last_bin_mut().push(item);
    }

    /// Total weight over all bins.
    pub fn total_weight(&self) -> f64 {
        self.bins.iter().map(Bin::content).sum()
    }

    /// Total number of packed items.
    pub fn item_count(&self) -> usize {
        self.bins.iter().map(Bin::len).sum()
    }

    /// Relocates one item. Shorthand for applying [`Move::transfer`].
    pub fn move_item(&mut self, bin_from: usize, item: f64, bin_to: usize) -> Result<()> {
        self.apply_move(&Move::transfer(bin_from, item, bin_to))
    }

    /// Applies every transfer of `mv` at once.
    ///
    /// Preconditions are checked on the current state before anything is
    /// touched: bin indices exist and differ, every transferred item is
    /// present in its source bin, and each bin can absorb its net change
    /// in weight. Empty bins are left in place.
    ///
    /// # Errors
    ///
    /// [`BinPackingError::InfeasibleMove`] if any precondition fails; the
    /// solution is unchanged in that case.
    pub fn apply_move(&mut self, mv: &Move) -> Result<()> {
        let len = self.bins.len();
        for t in mv.iter() {
            if t.bin_from >= len || t.bin_to >= len {
                return Err(BinPackingError::InfeasibleMove(format!(
                    "{t} refers to a bin outside 0..{len}"
                )));
            }
            if t.bin_from == t.bin_to {
                return Err(BinPackingError::InfeasibleMove(format!(
                    "{t} has identical source and destination"
                )));
            }
            let needed = mv
                .iter()
                .filter(|o| o.bin_from == t.bin_from && o.item.to_bits() == t.item.to_bits())
                .count();
            let available = self.bins[t.bin_from]
                .items()
                .iter()
                .filter(|w| w.to_bits() == t.item.to_bits())
                .count();
            if available < needed {
                return Err(BinPackingError::InfeasibleMove(format!(
                    "{t}: item not present in source bin"
                )));
            }
        }
        for t in mv.iter() {
            for index in [t.bin_from, t.bin_to] {
                let delta = mv.net_delta(index);
                if !self.bins[index].fits(delta) {
                    return Err(BinPackingError::InfeasibleMove(format!(
                        "bin {index} cannot absorb {delta}"
                    )));
                }
            }
        }

        for t in mv.iter() {
            self.bins[t.bin_from].remove(t.item);
        }
        for t in mv.iter() {
            self.bins[t.bin_to].push(t.item);
        }
        Ok(())
    }

    /// Drops every empty bin, keeping one if all of them are empty.
    pub fn remove_empty_bins(&mut self) {
        self.bins.retain(|b| !b.is_empty());
        if self.bins.is_empty() {
            self.add_empty_bin();
        }
    }
}
