use std::fmt;
use std::str::FromStr;

use crate::error::SampleSetError;
use crate::{IterativeSorter, RecursiveSorter, Sorter};

/// Number of sample sizes in one run.
pub const SAMPLE_COUNT: usize = 5;
/// Smallest allowed sample size, in thousands of elements.
pub const SAMPLE_MIN: u32 = 5;
/// Largest allowed sample size, in thousands of elements.
pub const SAMPLE_MAX: u32 = 100;
pub const DEFAULT_SAMPLES: [u32; SAMPLE_COUNT] = [50, 60, 70, 80, 90];
pub const ELEMENTS_PER_UNIT: usize = 1000;

/// Five distinct sample sizes, each in `[SAMPLE_MIN, SAMPLE_MAX]` thousands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleSet([u32; SAMPLE_COUNT]);

impl SampleSet {
    pub fn new(values: &[u32]) -> Result<Self, SampleSetError> {
        let values: [u32; SAMPLE_COUNT] = values
            .try_into()
            .map_err(|_| SampleSetError::WrongCount(values.len()))?;

        for (i, &value) in values.iter().enumerate() {
            if !(SAMPLE_MIN..=SAMPLE_MAX).contains(&value) {
                return Err(SampleSetError::OutOfRange(value));
            }
            if values[..i].contains(&value) {
                return Err(SampleSetError::Duplicate(value));
            }
        }

        Ok(Self(values))
    }

    /// Sample size at `index`, in thousands.
    pub fn get(&self, index: usize) -> u32 {
        self.0[index]
    }

    /// Number of elements generated for the sample at `index`.
    pub fn element_count(&self, index: usize) -> usize {
        self.0[index] as usize * ELEMENTS_PER_UNIT
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

impl Default for SampleSet {
    fn default() -> Self {
        Self(DEFAULT_SAMPLES)
    }
}

impl FromStr for SampleSet {
    type Err = SampleSetError;

    /// Parse a comma-separated list such as `"50,60,70,80,90"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<u32>()
                    .map_err(|_| SampleSetError::Parse(part.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&values)
    }
}

impl fmt::Display for SampleSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

/// Which quicksort control-flow strategy a job uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Iterative,
    Recursive,
}

impl Algorithm {
    /// Execution order within one sample index.
    pub const ALL: [Algorithm; 2] = [Algorithm::Iterative, Algorithm::Recursive];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Iterative => IterativeSorter.name(),
            Algorithm::Recursive => RecursiveSorter.name(),
        }
    }

    pub fn adverb(&self) -> &'static str {
        match self {
            Algorithm::Iterative => "iteratively",
            Algorithm::Recursive => "recursively",
        }
    }

    /// Sort the whole slice with this strategy.
    pub fn sort(&self, data: &mut [i32]) {
        match self {
            Algorithm::Iterative => IterativeSorter.sort_all(data),
            Algorithm::Recursive => RecursiveSorter.sort_all(data),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Timing of one (sample index, algorithm) job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenchmarkResult {
    pub sample_index: usize,
    pub elements_in_thousands: u32,
    pub algorithm: Algorithm,
    pub elapsed_nanos: u64,
}

/// Snapshot taken when a run is requested; the worker never sees later edits.
#[derive(Clone, Copy, Debug, Default)]
pub struct BenchmarkConfig {
    pub samples: SampleSet,
    /// Check that every job left its array in ascending order.
    pub verify: bool,
}
