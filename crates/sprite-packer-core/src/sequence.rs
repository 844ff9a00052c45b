//! Largest-first orderings applied to items before packing.
//!
//! All comparators are total over `(width, height)` and the sort is stable, so
//! items with identical dimensions keep the caller's relative order and the
//! result is reproducible run to run.

use crate::config::Heuristic;
use crate::model::Item;
use std::cmp::Ordering;

impl Heuristic {
    /// Compares two items so that the one to pack first sorts first.
    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        match self {
            Heuristic::ByWidth => b.width.cmp(&a.width).then_with(|| b.height.cmp(&a.height)),
            Heuristic::ByHeight => b.height.cmp(&a.height).then_with(|| b.width.cmp(&a.width)),
            Heuristic::ByArea => b
                .area()
                .cmp(&a.area())
                .then_with(|| b.height.cmp(&a.height))
                .then_with(|| b.width.cmp(&a.width)),
            Heuristic::ByMax => {
                let (a_max, a_min) = (a.width.max(a.height), a.width.min(a.height));
                let (b_max, b_min) = (b.width.max(b.height), b.width.min(b.height));
                b_max
                    .cmp(&a_max)
                    .then_with(|| b_min.cmp(&a_min))
                    .then_with(|| b.height.cmp(&a.height))
                    .then_with(|| b.width.cmp(&a.width))
            }
        }
    }
}

/// Indices into `items` in packing order for `heuristic`.
pub fn order(items: &[Item], heuristic: Heuristic) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..items.len()).collect();
    idx.sort_by(|&a, &b| heuristic.compare(&items[a], &items[b]));
    idx
}

/// Returns a sorted copy of `items`; the input is left untouched.
pub fn sequence(items: &[Item], heuristic: Heuristic) -> Vec<Item> {
    order(items, heuristic)
        .into_iter()
        .map(|i| items[i].clone())
        .collect()
}
