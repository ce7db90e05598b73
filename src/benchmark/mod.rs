pub mod job;
pub mod orchestrator;
pub mod queue;
pub mod reporting;
pub mod sinks;
pub mod types;
pub mod verification;

use std::sync::{Mutex, MutexGuard};

pub use job::BenchmarkJob;
pub use orchestrator::{BenchmarkOrchestrator, Collaborators, RunHandle, RunState};
pub use queue::JobQueue;
pub use reporting::{format_elapsed, job_log_line, print_summary, rows_to_csv, write_csv};
pub use sinks::{ConsoleLog, ConsoleUi, ResultTable, TableRow};
pub use types::{Algorithm, BenchmarkConfig, BenchmarkResult, SampleSet};
pub use verification::verify_sorted;

// A sink that panicked mid-update leaves plain timing data behind; keep using it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
