pub const SIZES: [usize; 3] = [100, 1000, 5000];
pub const REPEATS: usize = 5;
pub const SEED: u64 = 42;
pub const VALUE_RANGE: i64 = 1_000_000;

const _: () = {
    assert!(REPEATS > 0, "REPEATS must be positive");
    assert!(VALUE_RANGE > 0, "VALUE_RANGE must be positive");
};
