//! Transfer and move value types.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Relocation of one item from one bin to another.
///
/// Items are identified by weight; equality and hashing compare the
/// weight bit pattern so transfers can live in hash sets.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transfer {
    pub bin_from: usize,
    pub item: f64,
    pub bin_to: usize,
}

impl Transfer {
    pub fn new(bin_from: usize, item: f64, bin_to: usize) -> Self {
        Self {
            bin_from,
            item,
            bin_to,
        }
    }

    /// The transfer that undoes this one: same item, endpoints swapped.
    pub fn reversed(&self) -> Self {
        Self::new(self.bin_to, self.item, self.bin_from)
    }

    fn key(&self) -> (usize, u64, usize) {
        (self.bin_from, self.item.to_bits(), self.bin_to)
    }
}

impl PartialEq for Transfer {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Transfer {}

impl Hash for Transfer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Transfer {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Transfer {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "item {} from bin {} to bin {}",
            self.item, self.bin_from, self.bin_to
        )
    }
}

/// An unordered set of one or two transfers.
///
/// A single transfer relocates an item; two mutually crossing transfers
/// form a swap. Transfers are stored in a canonical order, so two moves
/// built from the same transfers compare and hash equal regardless of
/// construction order.
///
/// # Examples
///
/// ```
/// use u_binpack::moves::Move;
///
/// let swap = Move::swap(0, 4.0, 2, 3.0);
/// assert_eq!(swap, Move::swap(2, 3.0, 0, 4.0));
/// assert_eq!(swap.reversed().reversed(), swap);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    first: Transfer,
    second: Option<Transfer>,
}

impl Move {
    /// A move consisting of a single transfer.
    pub fn transfer(bin_from: usize, item: f64, bin_to: usize) -> Self {
        Self {
            first: Transfer::new(bin_from, item, bin_to),
            second: None,
        }
    }

    /// Exchanges `item_first` (in `bin_first`) with `item_second` (in `bin_second`).
    pub fn swap(bin_first: usize, item_first: f64, bin_second: usize, item_second: f64) -> Self {
        Self::pair(
            Transfer::new(bin_first, item_first, bin_second),
            Transfer::new(bin_second, item_second, bin_first),
        )
    }

    fn pair(a: Transfer, b: Transfer) -> Self {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Self {
            first,
            second: Some(second),
        }
    }

    /// The move that undoes this one: every transfer reversed.
    pub fn reversed(&self) -> Self {
        match self.second {
            None => Self {
                first: self.first.reversed(),
                second: None,
            },
            Some(second) => Self::pair(self.first.reversed(), second.reversed()),
        }
    }

    /// Iterates the transfers in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Transfer> {
        std::iter::once(self.first).chain(self.second)
    }

    /// Number of transfers (1 or 2).
    pub fn len(&self) -> usize {
        1 + usize::from(self.second.is_some())
    }

    /// Always `false`; a move holds at least one transfer.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether this move exchanges two items.
    pub fn is_swap(&self) -> bool {
        self.second.is_some()
    }

    /// Weight gained (positive) or lost (negative) by `bin` when the move is applied.
    pub fn net_delta(&self, bin: usize) -> f64 {
        self.iter()
            .map(|t| {
                let mut delta = 0.0;
                if t.bin_to == bin {
                    delta += t.item;
                }
                if t.bin_from == bin {
                    delta -= t.item;
                }
                delta
            })
            .sum()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.second {
            None => write!(f, "transfer {}", self.first),
            Some(second) => write!(f, "swap {} / {}", self.first, second),
        }
    }
}
