pub mod iterative;
pub mod partition;
pub mod recursive;

pub use self::iterative::IterativeSorter;
pub use self::recursive::RecursiveSorter;
