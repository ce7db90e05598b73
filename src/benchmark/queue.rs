use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Sender, unbounded};
use tracing::{debug, warn};

use crate::error::BenchmarkError;

pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Stack reserved for the worker. Recursive quicksort on degenerate input
/// goes one frame deep per element.
const WORKER_STACK_SIZE: usize = 64 * 1024 * 1024;

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "non-string panic payload"
    }
}

/// FIFO queue drained by exactly one background thread.
///
/// Tasks are submitted in batches; a batch is one channel message, so two
/// batches never interleave and tasks run strictly in submission order.
/// A panicking task is logged and skipped; the tasks queued after it still run.
pub struct JobQueue {
    sender: Option<Sender<Vec<Task>>>,
    worker: Option<JoinHandle<()>>,
}

impl JobQueue {
    pub fn new(name: &str) -> Result<Self, BenchmarkError> {
        let (sender, receiver) = unbounded::<Vec<Task>>();

        let worker = thread::Builder::new()
            .name(name.to_string())
            .stack_size(WORKER_STACK_SIZE)
            .spawn(move || {
                for batch in receiver {
                    debug!(tasks = batch.len(), "worker picked up batch");
                    for task in batch {
                        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(task)) {
                            warn!(panic = panic_message(&*payload), "worker task panicked");
                        }
                    }
                }
                debug!("worker queue closed");
            })?;

        Ok(Self {
            sender: Some(sender),
            worker: Some(worker),
        })
    }

    pub fn submit<F>(&self, task: F) -> Result<(), BenchmarkError>
    where
        F: FnOnce() + Send + 'static,
    {
        self.submit_batch(vec![Box::new(task)])
    }

    /// Enqueue `tasks` as one unit.
    pub fn submit_batch(&self, tasks: Vec<Task>) -> Result<(), BenchmarkError> {
        let sender = self.sender.as_ref().ok_or(BenchmarkError::WorkerGone)?;
        sender
            .send(tasks)
            .map_err(|_| BenchmarkError::WorkerGone)
    }
}

impl Drop for JobQueue {
    fn drop(&mut self) {
        // Closing the channel lets the worker finish what is queued and exit.
        drop(self.sender.take());
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
