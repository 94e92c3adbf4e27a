pub mod config;
pub mod datasets;
pub mod harness;
pub mod sorts;

pub use config::{REPEATS, SEED, SIZES, VALUE_RANGE};
pub use datasets::{build_datasets, DatasetKind};
pub use harness::time_algorithm;
pub use sorts::{insertion_sort, merge_sort, std_sort, SortFn, ALGORITHMS};
