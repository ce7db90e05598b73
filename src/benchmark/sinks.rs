use std::sync::Mutex;

use tracing::debug;

use super::lock;
use super::types::{Algorithm, BenchmarkResult, SAMPLE_COUNT};
use crate::{LogSink, ResultSink, UiControl};

/// Log sink that prints every line to stdout.
#[derive(Default)]
pub struct ConsoleLog;

impl LogSink for ConsoleLog {
    fn write(&self, line: &str) {
        println!("{}", line);
    }

    fn clear(&self) {
        println!("{}", "-".repeat(60));
    }
}

/// Stand-in for the interactive surface: a terminal has nothing to disable.
#[derive(Default)]
pub struct ConsoleUi;

impl UiControl for ConsoleUi {
    fn block(&self) {
        debug!("inputs blocked");
    }

    fn unblock(&self) {
        debug!("inputs unblocked");
    }
}

/// One row of the results table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableRow {
    pub elements_in_thousands: u32,
    pub iterative_nanos: Option<u64>,
    pub recursive_nanos: Option<u64>,
}

impl TableRow {
    /// Recursive time divided by iterative time, once both are known.
    pub fn ratio(&self) -> Option<f64> {
        match (self.iterative_nanos, self.recursive_nanos) {
            (Some(it), Some(rec)) if it > 0 => Some(rec as f64 / it as f64),
            _ => None,
        }
    }
}

/// Result sink that keeps the latest timing per sample index and algorithm.
#[derive(Default)]
pub struct ResultTable {
    rows: Mutex<[TableRow; SAMPLE_COUNT]>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> Vec<TableRow> {
        lock(&self.rows).to_vec()
    }

    pub fn is_complete(&self) -> bool {
        lock(&self.rows)
            .iter()
            .all(|row| row.iterative_nanos.is_some() && row.recursive_nanos.is_some())
    }
}

impl ResultSink for ResultTable {
    fn record(&self, result: &BenchmarkResult) {
        let mut rows = lock(&self.rows);
        let Some(row) = rows.get_mut(result.sample_index) else {
            return;
        };
        row.elements_in_thousands = result.elements_in_thousands;
        match result.algorithm {
            Algorithm::Iterative => row.iterative_nanos = Some(result.elapsed_nanos),
            Algorithm::Recursive => row.recursive_nanos = Some(result.elapsed_nanos),
        }
    }

    fn reset(&self) {
        for row in lock(&self.rows).iter_mut() {
            row.iterative_nanos = None;
            row.recursive_nanos = None;
        }
    }
}
