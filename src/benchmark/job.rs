use std::time::Instant;

use tracing::debug;

use super::types::{Algorithm, BenchmarkResult};

/// One timed sort: a sample index, an algorithm, and the array it owns.
pub struct BenchmarkJob {
    pub sample_index: usize,
    pub elements_in_thousands: u32,
    pub algorithm: Algorithm,
    data: Vec<i32>,
}

impl BenchmarkJob {
    pub fn new(
        sample_index: usize,
        elements_in_thousands: u32,
        algorithm: Algorithm,
        data: Vec<i32>,
    ) -> Self {
        Self {
            sample_index,
            elements_in_thousands,
            algorithm,
            data,
        }
    }

    /// Sort the owned array in place and time it with the monotonic clock.
    pub fn run(&mut self) -> BenchmarkResult {
        let start = Instant::now();
        self.algorithm.sort(&mut self.data);
        let elapsed_nanos = start.elapsed().as_nanos() as u64;

        debug!(
            sample_index = self.sample_index,
            algorithm = %self.algorithm,
            elements = self.data.len(),
            elapsed_nanos,
            "benchmark job finished"
        );

        BenchmarkResult {
            sample_index: self.sample_index,
            elements_in_thousands: self.elements_in_thousands,
            algorithm: self.algorithm,
            elapsed_nanos,
        }
    }

    pub fn data(&self) -> &[i32] {
        &self.data
    }

    pub fn into_data(self) -> Vec<i32> {
        self.data
    }
}
