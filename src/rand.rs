use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Exclusive upper bound for generated sample values.
pub const VALUE_UPPER_BOUND: i32 = 100_000;

/// Fast non-cryptographic generator seeded from the thread-local RNG.
pub fn small_thread_rng() -> SmallRng {
    SmallRng::from_rng(&mut rand::rng())
}

/// Generate `count` integers drawn uniformly from `[0, 100000)`.
pub fn generate_sample_array(count: usize) -> Vec<i32> {
    let mut rng = small_thread_rng();
    (0..count)
        .map(|_| rng.random_range(0..VALUE_UPPER_BOUND))
        .collect()
}
