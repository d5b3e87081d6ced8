//! A single capacity-bounded bin.

use crate::error::{BinPackingError, Result};

/// A bin holding item weights.
///
/// The content (sum of weights) is recomputed on every mutation so the
/// hot-loop queries [`content`](Self::content), [`gap`](Self::gap) and
/// [`fits`](Self::fits) are O(1).
///
/// `append` does not check capacity: callers check [`fits`](Self::fits)
/// first.
///
/// With the `serde` feature the content is not stored; deserialization
/// recomputes it and rejects invalid or overfull bins.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BinRepr"))]
pub struct Bin {
    capacity: f64,
    items: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    content: f64,
    /// Set by sequential constructors when no later item will be tried here.
    /// Advisory only.
    pub closed: bool,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BinRepr {
    capacity: f64,
    items: Vec<f64>,
    #[serde(default)]
    closed: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<BinRepr> for Bin {
    type Error = BinPackingError;

    fn try_from(repr: BinRepr) -> Result<Self> {
        if !(repr.capacity.is_finite() && repr.capacity > 0.0) {
            return Err(BinPackingError::InvalidCapacity(repr.capacity));
        }
        let mut bin = Bin::new(repr.capacity);
        for item in repr.items {
            bin.append(item)?;
        }
        if bin.content() > bin.capacity() {
            return Err(BinPackingError::InvalidSolution(format!(
                "bin content {} exceeds capacity {}",
                bin.content(),
                bin.capacity()
            )));
        }
        bin.closed = repr.closed;
        Ok(bin)
    }
}

impl Bin {
    /// Creates an empty bin.
    pub fn new(capacity: f64) -> Self {
        Self {
            capacity,
            items: Vec::new(),
            content: 0.0,
            closed: false,
        }
    }

    /// Adds an item.
    ///
    /// # Errors
    ///
    /// [`BinPackingError::InvalidItem`] if `item` is not positive and finite.
    pub fn append(&mut self, item: f64) -> Result<()> {
        if !(item.is_finite() && item > 0.0) {
            return Err(BinPackingError::InvalidItem(item));
        }
        self.push(item);
        Ok(())
    }

    /// Adds an already validated item.
    pub(crate) fn push(&mut self, item: f64) {
        debug_assert!(item > 0.0);
        self.items.push(item);
        self.refresh();
    }

    /// Removes the first item with exactly this weight. Returns whether one was found.
    pub fn remove(&mut self, item: f64) -> bool {
        match self.position(item) {
            Some(index) => {
                self.items.remove(index);
                self.refresh();
                true
            }
            None => false,
        }
    }

    /// Index of the first item with exactly this weight.
    pub fn position(&self, item: f64) -> Option<usize> {
        self.items.iter().position(|&w| w.to_bits() == item.to_bits())
    }

    /// Whether `delta` more weight fits. Non-positive deltas always fit.
    pub fn fits(&self, delta: f64) -> bool {
        delta <= self.gap()
    }

    /// Maximum content.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Item weights in insertion order.
    pub fn items(&self) -> &[f64] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Sum of the item weights.
    pub fn content(&self) -> f64 {
        self.content
    }

    /// Remaining free capacity.
    pub fn gap(&self) -> f64 {
        self.capacity - self.content
    }

    /// Whether the bin holds no item.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether content equals capacity exactly.
    ///
    /// This is an exact floating-point comparison: with non-integer
    /// weights a mathematically full bin may report `false`.
    pub fn is_full(&self) -> bool {
        self.content == self.capacity
    }

    fn refresh(&mut self) {
        self.content = self.items.iter().sum();
    }
}
