use thiserror::Error;

/// Rejections raised while building a [`SampleSet`](crate::SampleSet).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleSetError {
    #[error("expected exactly 5 sample sizes, got {0}")]
    WrongCount(usize),

    #[error("sample size {0} is outside [5, 100]")]
    OutOfRange(u32),

    #[error("sample size {0} appears more than once; sample sizes must not repeat")]
    Duplicate(u32),

    #[error("cannot parse sample size {0:?}")]
    Parse(String),
}

#[derive(Debug, Error)]
pub enum BenchmarkError {
    #[error("invalid sample sizes: {0}")]
    InvalidSamples(#[from] SampleSetError),

    #[error("a benchmark run is already in progress")]
    RunInProgress,

    #[error("benchmark worker is no longer running")]
    WorkerGone,

    #[error("failed to spawn benchmark worker: {0}")]
    Spawn(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("sort order violation at index {index}: {previous} > {current}")]
    OrderViolation {
        index: usize,
        previous: i32,
        current: i32,
    },
}
