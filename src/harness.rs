use std::hint::black_box;
use std::time::{Duration, Instant};

use log::debug;

use crate::sorts::SortFn;

/// Runs `func` `repeats` times, each time against a fresh copy of `data`,
/// and returns the minimum elapsed wall-clock time. The minimum suppresses
/// transient scheduling noise better than a mean for micro-benchmarks.
///
/// `Instant` is monotonic; copies are made outside the timed region.
pub fn time_algorithm(func: SortFn, data: &[i64], repeats: usize) -> Duration {
    assert!(repeats > 0, "repeats must be positive");

    let mut best = Duration::MAX;
    for run in 0..repeats {
        let copy = data.to_vec();
        let start = Instant::now();
        let sorted = func(black_box(&copy));
        let elapsed = start.elapsed();
        black_box(sorted);

        debug!("run {}: {:?}", run, elapsed);
        if elapsed < best {
            best = elapsed;
        }
    }
    best
}
