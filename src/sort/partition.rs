//! Lomuto partition shared by both quicksort strategies.
//!
//! The pivot is always the element at `high`. Elements `<=` the pivot are
//! moved to the left, the pivot lands between the two sides, and its final
//! index is returned. Keeping a single routine means the iterative and the
//! recursive sorter perform exactly the same comparisons and swaps for a
//! given input; only the way pending ranges are tracked differs.

/// Observer for the primitive operations of a partition pass.
///
/// The `()` implementation does nothing and is what timed sorts use.
pub trait SortProbe {
    fn compared(&mut self) {}
    fn swapped(&mut self) {}
}

impl SortProbe for () {}

/// Tally of comparisons and swaps performed by a sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpCounts {
    pub comparisons: u64,
    pub swaps: u64,
}

impl SortProbe for OpCounts {
    fn compared(&mut self) {
        self.comparisons += 1;
    }

    fn swapped(&mut self) {
        self.swaps += 1;
    }
}

/// Partition `data[low..=high]` around `data[high]` and return the pivot's
/// final index. Requires `low <= high < data.len()`.
pub fn partition<P: SortProbe>(data: &mut [i32], low: usize, high: usize, probe: &mut P) -> usize {
    debug_assert!(low <= high && high < data.len());

    let pivot = data[high];
    let mut store = low;
    for j in low..high {
        probe.compared();
        if data[j] <= pivot {
            data.swap(store, j);
            probe.swapped();
            store += 1;
        }
    }
    data.swap(store, high);
    probe.swapped();
    store
}
