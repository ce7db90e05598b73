// Quicksort Benchmark Library

use benchmark::BenchmarkResult;
use sort::partition::SortProbe;

/// In-place integer sorter over an inclusive index range.
///
/// `high` must be a valid index of `data` whenever `low < high`; a call with
/// `low >= high` returns without touching the slice.
pub trait Sorter {
    fn name(&self) -> &'static str;

    /// Sort `data[low..=high]`, reporting every comparison and swap to `probe`.
    fn sort_probed<P: SortProbe>(&self, data: &mut [i32], low: usize, high: usize, probe: &mut P);

    fn sort(&self, data: &mut [i32], low: usize, high: usize) {
        self.sort_probed(data, low, high, &mut ());
    }

    /// Sort the whole slice. Empty slices are a no-op.
    fn sort_all(&self, data: &mut [i32]) {
        if let Some(high) = data.len().checked_sub(1) {
            self.sort(data, 0, high);
        }
    }
}

// Collaborators notified by the benchmark worker. All calls arrive on the
// worker thread, in queue order.

/// Disables and re-enables the inputs that could change a run in flight.
pub trait UiControl: Send + Sync {
    fn block(&self);
    fn unblock(&self);
}

/// Plain-text event log (banners and one line per finished job).
pub trait LogSink: Send + Sync {
    fn write(&self, line: &str);

    /// Drop everything written so far.
    fn clear(&self) {}
}

/// Receives structured timings for the chart and table views.
pub trait ResultSink: Send + Sync {
    fn record(&self, result: &BenchmarkResult);

    /// Forget all timings from the previous run.
    fn reset(&self);
}

// Implementations
pub mod benchmark;
pub mod error;
pub mod rand;
pub mod sort;

// Export the main types
pub use benchmark::{
    Algorithm, BenchmarkConfig, BenchmarkJob, BenchmarkOrchestrator, Collaborators, RunHandle,
    SampleSet,
};
pub use error::{BenchmarkError, SampleSetError, VerificationError};
pub use sort::iterative::IterativeSorter;
pub use sort::partition::OpCounts;
pub use sort::recursive::RecursiveSorter;
