use std::cmp::max;
use std::fmt;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::VALUE_RANGE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Random,
    Sorted,
    Reversed,
    NearlySorted,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 4] = [
        DatasetKind::Random,
        DatasetKind::Sorted,
        DatasetKind::Reversed,
        DatasetKind::NearlySorted,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DatasetKind::Random => "random",
            DatasetKind::Sorted => "sorted",
            DatasetKind::Reversed => "reversed",
            DatasetKind::NearlySorted => "nearly_sorted",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Builds the four input distributions for one size. All randomness comes
/// from the seeded generator owned here, so identical (n, seed) arguments
/// reproduce identical datasets.
pub fn build_datasets(n: usize, seed: u64) -> Vec<(DatasetKind, Vec<i64>)> {
    let mut rng = StdRng::seed_from_u64(seed);

    let random: Vec<i64> = (0..n)
        .map(|_| rng.gen_range(-VALUE_RANGE..=VALUE_RANGE))
        .collect();

    let mut sorted = random.clone();
    sorted.sort_unstable();

    let mut reversed = sorted.clone();
    reversed.reverse();

    // nearly sorted: ~1% random pairwise swaps, at least one
    let mut nearly_sorted = sorted.clone();
    if n > 0 {
        let swaps = max(1, n / 100);
        debug!("n = {}: applying {} swaps", n, swaps);
        for _ in 0..swaps {
            let i = rng.gen_range(0..n);
            let j = rng.gen_range(0..n);
            nearly_sorted.swap(i, j);
        }
    }

    vec![
        (DatasetKind::Random, random),
        (DatasetKind::Sorted, sorted),
        (DatasetKind::Reversed, reversed),
        (DatasetKind::NearlySorted, nearly_sorted),
    ]
}
