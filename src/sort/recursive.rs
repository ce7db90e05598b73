use super::partition::{SortProbe, partition};
use crate::Sorter;

/// Quicksort driven by the call stack.
///
/// Recursion depth grows with the partition imbalance; already-sorted or
/// constant input reaches depth `n`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecursiveSorter;

fn quicksort<P: SortProbe>(data: &mut [i32], low: usize, high: usize, probe: &mut P) {
    if low >= high {
        return;
    }

    let p = partition(data, low, high, probe);
    if p > low {
        quicksort(data, low, p - 1, probe);
    }
    quicksort(data, p + 1, high, probe);
}

impl Sorter for RecursiveSorter {
    fn name(&self) -> &'static str {
        "recursive"
    }

    fn sort_probed<P: SortProbe>(&self, data: &mut [i32], low: usize, high: usize, probe: &mut P) {
        quicksort(data, low, high, probe);
    }
}
