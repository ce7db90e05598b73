use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crossbeam_channel::{Receiver, bounded};
use tracing::{info, warn};

use super::job::BenchmarkJob;
use super::lock;
use super::queue::{JobQueue, Task};
use super::reporting::{RUN_FINISHED, RUN_STARTED, job_log_line};
use super::types::{Algorithm, BenchmarkConfig, SAMPLE_COUNT};
use super::verification::verify_sorted;
use crate::error::BenchmarkError;
use crate::rand::generate_sample_array;
use crate::{LogSink, ResultSink, UiControl};

/// The external surfaces a run reports to.
#[derive(Clone)]
pub struct Collaborators {
    pub ui: Arc<dyn UiControl>,
    pub log: Arc<dyn LogSink>,
    pub results: Arc<dyn ResultSink>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

/// Iterative timings of the last run, one per sample index. Zero means
/// "nothing recorded".
type RecordedTimings = Arc<Mutex<[u64; SAMPLE_COUNT]>>;

/// Completion signal for one run.
pub struct RunHandle {
    done: Receiver<()>,
}

impl RunHandle {
    /// Block until the run's last step has executed.
    pub fn wait(self) -> Result<(), BenchmarkError> {
        self.done.recv().map_err(|_| BenchmarkError::WorkerGone)
    }
}

/// Turns a sample set into an ordered series of steps on one background worker.
///
/// `start` only snapshots the configuration and enqueues; every step runs on
/// the worker, so collaborators are always called from that thread and in
/// this order:
///
/// 1. block the UI
/// 2. log the start banner
/// 3. per sample index: generate, clone, time iterative, time recursive,
///    reporting each result as soon as it exists
/// 4. log the finish banner
/// 5. unblock the UI
///
/// A reset step is placed in front when the previous run left results behind.
pub struct BenchmarkOrchestrator {
    queue: JobQueue,
    collaborators: Collaborators,
    running: Arc<AtomicBool>,
    recorded: RecordedTimings,
}

impl BenchmarkOrchestrator {
    pub fn new(collaborators: Collaborators) -> Result<Self, BenchmarkError> {
        Ok(Self {
            queue: JobQueue::new("qsbench-worker")?,
            collaborators,
            running: Arc::new(AtomicBool::new(false)),
            recorded: Arc::new(Mutex::new([0; SAMPLE_COUNT])),
        })
    }

    pub fn state(&self) -> RunState {
        if self.running.load(Ordering::Acquire) {
            RunState::Running
        } else {
            RunState::Idle
        }
    }

    /// Begin a run and return immediately.
    ///
    /// The caller is expected to have validated the sample set; a second
    /// request while a run is in flight is refused.
    pub fn start(&self, config: BenchmarkConfig) -> Result<RunHandle, BenchmarkError> {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(BenchmarkError::RunInProgress);
        }

        info!(samples = %config.samples, verify = config.verify, "benchmark run requested");

        let (done_tx, done_rx) = bounded(1);
        let mut tasks: Vec<Task> = Vec::with_capacity(SAMPLE_COUNT + 5);

        // Held until the batch is queued so a concurrent clear cannot slip a
        // reset in behind this run.
        let mut timings = lock(&self.recorded);
        if let Some(reset) = self.take_stale_results(&mut timings) {
            tasks.push(reset);
        }

        let ui = Arc::clone(&self.collaborators.ui);
        tasks.push(Box::new(move || ui.block()));

        let log = Arc::clone(&self.collaborators.log);
        tasks.push(Box::new(move || log.write(RUN_STARTED)));

        for sample_index in 0..SAMPLE_COUNT {
            let collaborators = self.collaborators.clone();
            let recorded = Arc::clone(&self.recorded);
            tasks.push(Box::new(move || {
                run_sample(sample_index, config, &collaborators, &recorded)
            }));
        }

        let log = Arc::clone(&self.collaborators.log);
        tasks.push(Box::new(move || log.write(RUN_FINISHED)));

        let ui = Arc::clone(&self.collaborators.ui);
        let running = Arc::clone(&self.running);
        tasks.push(Box::new(move || {
            ui.unblock();
            running.store(false, Ordering::Release);
            info!("benchmark run finished");
            let _ = done_tx.send(());
        }));

        let submitted = self.queue.submit_batch(tasks);
        drop(timings);
        if let Err(e) = submitted {
            self.running.store(false, Ordering::Release);
            return Err(e);
        }

        Ok(RunHandle { done: done_rx })
    }

    /// Clear results left by a finished run, e.g. after a sample size was
    /// edited. Returns whether anything needed clearing.
    pub fn clear_stale_results(&self) -> Result<bool, BenchmarkError> {
        // `start` flips `running` before queueing under this lock, so checking
        // it here cannot miss a run whose batch is already queued.
        let mut timings = lock(&self.recorded);
        if self.state() == RunState::Running {
            return Err(BenchmarkError::RunInProgress);
        }

        match self.take_stale_results(&mut timings) {
            Some(reset) => {
                self.queue.submit(reset)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// If any timing from the previous run is non-zero, forget them and
    /// return the step that tells the collaborators to do the same.
    fn take_stale_results(&self, recorded: &mut [u64; SAMPLE_COUNT]) -> Option<Task> {
        if recorded.iter().all(|&nanos| nanos == 0) {
            return None;
        }
        *recorded = [0; SAMPLE_COUNT];

        let results = Arc::clone(&self.collaborators.results);
        let log = Arc::clone(&self.collaborators.log);
        Some(Box::new(move || {
            results.reset();
            log.clear();
        }))
    }
}

/// One sample index: both algorithms on identical, independently owned input.
fn run_sample(
    sample_index: usize,
    config: BenchmarkConfig,
    collaborators: &Collaborators,
    recorded: &RecordedTimings,
) {
    let elements_in_thousands = config.samples.get(sample_index);
    let data = generate_sample_array(config.samples.element_count(sample_index));
    let inputs = [data.clone(), data];

    for (algorithm, input) in Algorithm::ALL.into_iter().zip(inputs) {
        let mut job = BenchmarkJob::new(sample_index, elements_in_thousands, algorithm, input);
        let result = job.run();

        if config.verify {
            if let Err(e) = verify_sorted(job.data()) {
                warn!(sample_index, %algorithm, error = %e, "sorted output failed verification");
                collaborators.log.write(&format!(
                    "Verification failed for {} thousand elements sorted {}: {}.",
                    elements_in_thousands,
                    algorithm.adverb(),
                    e
                ));
            }
        }

        if algorithm == Algorithm::Iterative {
            // keep it non-zero so the reset trigger sees a recorded timing
            lock(recorded)[sample_index] = result.elapsed_nanos.max(1);
        }

        collaborators.results.record(&result);
        collaborators.log.write(&job_log_line(&result));
    }
}
