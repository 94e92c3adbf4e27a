use std::{env, process};

use log::{info, LevelFilter};

mod config;
mod datasets;
mod harness;
mod sorts;

use crate::config::{REPEATS, SEED, SIZES};
use crate::datasets::{build_datasets, DatasetKind};
use crate::harness::time_algorithm;
use crate::sorts::{insertion_sort, merge_sort, std_sort, ALGORITHMS};

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Error)
        .parse_default_env()
        .init();

    let mut args = env::args();
    args.next();

    let sizes: Vec<usize> = match args.next() {
        Some(arg) => {
            let arg = arg.trim_matches(|c| c == '[' || c == ']');
            arg.split(',')
                .map(|s| s.trim().parse::<usize>().unwrap())
                .collect()
        }
        None => {
            eprintln!("No sizes specified. Using {:?}", SIZES);
            SIZES.to_vec()
        }
    };

    let repeats = match args.next() {
        Some(arg) => arg.parse::<usize>().unwrap(),
        None => {
            eprintln!("No repeat count specified. Using {}", REPEATS);
            REPEATS
        }
    };

    let seed = match args.next() {
        Some(arg) => arg.parse::<u64>().unwrap(),
        None => {
            eprintln!("No seed specified. Using {}", SEED);
            SEED
        }
    };

    println!("Benchmark: insertion_sort vs merge_sort vs std_sort");

    for n in sizes {
        println!("\n=== N = {} ===", n);
        let datasets = build_datasets(n, seed);

        // sanity check on one dataset before timing anything
        let (_, sample) = datasets
            .iter()
            .find(|(kind, _)| *kind == DatasetKind::Random)
            .unwrap();
        let reference = std_sort(sample);
        for (name, result) in [
            ("insertion_sort", insertion_sort(sample)),
            ("merge_sort", merge_sort(sample)),
        ] {
            if result != reference {
                eprintln!("correctness check failed: {} disagrees with std_sort at n = {}", name, n);
                process::exit(1);
            }
        }
        info!("correctness check passed for n = {}", n);

        for (kind, data) in &datasets {
            println!("\nDataset: {}", kind);
            for (name, func) in ALGORITHMS {
                let t = time_algorithm(func, data, repeats);
                println!("{:16} -> {:.6} sec", name, t.as_secs_f64());
            }
        }
    }
}
