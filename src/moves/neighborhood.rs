//! Lazy enumeration of feasible moves.
//!
//! Every generator borrows the solution and yields moves on demand, so a
//! caller that samples one move or stops at the first improving one never
//! builds the full candidate list.

use super::types::Move;
use crate::model::{Bin, Solution};

/// All feasible single-item transfers.
///
/// Iterates source bins, then their items, then destination bins, in
/// index order. With `skip_full_bins`, full source bins are skipped (a
/// full destination cannot take an item anyway).
pub fn transfers(solution: &Solution, skip_full_bins: bool) -> impl Iterator<Item = Move> + '_ {
    let bins = solution.bins();
    bins.iter()
        .enumerate()
        .filter(move |(_, bin)| !(skip_full_bins && bin.is_full()))
        .flat_map(move |(from, bin_from)| {
            bin_from.items().iter().flat_map(move |&item| {
                bins.iter()
                    .enumerate()
                    .filter(move |&(to, bin_to)| to != from && bin_to.fits(item))
                    .map(move |(to, _)| Move::transfer(from, item, to))
            })
        })
}

/// All feasible swaps between two bins.
///
/// Only pairs with `first < second` are produced, and items of equal
/// weight are never swapped. A swap is feasible when each bin can absorb
/// its net weight change.
pub fn swaps(solution: &Solution, skip_full_bins: bool) -> impl Iterator<Item = Move> + '_ {
    let bins = solution.bins();
    let skip = move |bin: &Bin| skip_full_bins && bin.is_full();
    bins.iter()
        .enumerate()
        .filter(move |&(_, bin)| !skip(bin))
        .flat_map(move |(first, bin_first)| {
            bin_first.items().iter().flat_map(move |&item_first| {
                bins.iter()
                    .enumerate()
                    .skip(first + 1)
                    .filter(move |&(_, bin)| !skip(bin))
                    .flat_map(move |(second, bin_second)| {
                        bin_second
                            .items()
                            .iter()
                            .filter(move |&&item_second| {
                                item_first != item_second
                                    && bin_second.fits(item_first - item_second)
                                    && bin_first.fits(item_second - item_first)
                            })
                            .map(move |&item_second| {
                                Move::swap(first, item_first, second, item_second)
                            })
                    })
            })
        })
}

/// Transfers followed by swaps.
pub fn all_moves(solution: &Solution, skip_full_bins: bool) -> impl Iterator<Item = Move> + '_ {
    transfers(solution, skip_full_bins).chain(swaps(solution, skip_full_bins))
}
