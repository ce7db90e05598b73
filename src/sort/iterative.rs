use super::partition::{SortProbe, partition};
use crate::Sorter;

/// Quicksort driven by an explicit stack of `(low, high)` ranges.
///
/// After each partition the left range is pushed before the right one, so the
/// right side is always processed first.
#[derive(Clone, Copy, Debug, Default)]
pub struct IterativeSorter;

impl Sorter for IterativeSorter {
    fn name(&self) -> &'static str {
        "iterative"
    }

    fn sort_probed<P: SortProbe>(&self, data: &mut [i32], low: usize, high: usize, probe: &mut P) {
        if low >= high {
            return;
        }

        let mut stack: Vec<(usize, usize)> = vec![(low, high)];
        while let Some((lo, hi)) = stack.pop() {
            let p = partition(data, lo, hi, probe);

            // only ranges with at least two elements are worth a partition
            if p > lo + 1 {
                stack.push((lo, p - 1));
            }
            if p + 1 < hi {
                stack.push((p + 1, hi));
            }
        }
    }
}
