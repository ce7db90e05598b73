#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crossbeam_channel::{Receiver, Sender, bounded, unbounded};
use qsbench::benchmark::BenchmarkResult;
use qsbench::{Algorithm, Collaborators, LogSink, ResultSink, UiControl};

/// Everything a run reports, in the order it reached the collaborators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Block,
    Unblock,
    Log(String),
    ClearLog,
    Result(usize, Algorithm),
    Reset,
}

/// Records every collaborator call. `block` or `record` optionally waits on a
/// gate so a test can hold the worker at a known step of a run; once the
/// sender is dropped the gate stays open.
#[derive(Default)]
pub struct Recorder {
    events: Mutex<Vec<Event>>,
    results: Mutex<Vec<BenchmarkResult>>,
    gate: Option<Receiver<()>>,
    record_gate: Option<Receiver<()>>,
    record_entered: Option<Sender<()>>,
    panic_on_record: AtomicBool,
}

impl Recorder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A recorder whose `block` waits until the returned sender fires.
    pub fn gated() -> (Arc<Self>, Sender<()>) {
        let (tx, rx) = bounded(1);
        let recorder = Self {
            gate: Some(rx),
            ..Self::default()
        };
        (Arc::new(recorder), tx)
    }

    /// A recorder whose `record` announces itself on the returned receiver,
    /// then waits on the returned sender. By then the worker has already
    /// stored the job's timing.
    pub fn gated_on_record() -> (Arc<Self>, Sender<()>, Receiver<()>) {
        let (release_tx, release_rx) = bounded(1);
        let (entered_tx, entered_rx) = unbounded();
        let recorder = Self {
            record_gate: Some(release_rx),
            record_entered: Some(entered_tx),
            ..Self::default()
        };
        (Arc::new(recorder), release_tx, entered_rx)
    }

    /// A recorder whose first `record` call panics.
    pub fn panicking_once() -> Arc<Self> {
        let recorder = Self {
            panic_on_record: AtomicBool::new(true),
            ..Self::default()
        };
        Arc::new(recorder)
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn results(&self) -> Vec<BenchmarkResult> {
        self.results.lock().unwrap().clone()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl UiControl for Recorder {
    fn block(&self) {
        if let Some(gate) = &self.gate {
            let _ = gate.recv();
        }
        self.push(Event::Block);
    }

    fn unblock(&self) {
        self.push(Event::Unblock);
    }
}

impl LogSink for Recorder {
    fn write(&self, line: &str) {
        self.push(Event::Log(line.to_string()));
    }

    fn clear(&self) {
        self.push(Event::ClearLog);
    }
}

impl ResultSink for Recorder {
    fn record(&self, result: &BenchmarkResult) {
        if let Some(entered) = &self.record_entered {
            let _ = entered.send(());
        }
        if let Some(gate) = &self.record_gate {
            let _ = gate.recv();
        }
        if self.panic_on_record.swap(false, Ordering::SeqCst) {
            panic!("result sink failed for sample {}", result.sample_index);
        }
        self.results.lock().unwrap().push(*result);
        self.push(Event::Result(result.sample_index, result.algorithm));
    }

    fn reset(&self) {
        self.push(Event::Reset);
    }
}

pub fn collaborators(recorder: &Arc<Recorder>) -> Collaborators {
    Collaborators {
        ui: recorder.clone(),
        log: recorder.clone(),
        results: recorder.clone(),
    }
}

pub fn is_sorted(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
