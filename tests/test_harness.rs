#[cfg(test)]
mod harness {
    use std::time::Duration;

    use sortbench::{build_datasets, insertion_sort, merge_sort, std_sort, time_algorithm, DatasetKind};

    #[test]
    fn input_is_not_mutated() {
        let (_, data) = build_datasets(256, 42)
            .into_iter()
            .find(|(k, _)| *k == DatasetKind::Random)
            .unwrap();
        let before = data.clone();
        time_algorithm(insertion_sort, &data, 3);
        assert_eq!(data, before);
    }

    #[test]
    fn empty_dataset_times_without_error() {
        let t = time_algorithm(merge_sort, &[], 5);
        assert!(t < Duration::from_secs(1));
    }

    #[test]
    #[should_panic(expected = "repeats must be positive")]
    fn zero_repeats_rejected() {
        time_algorithm(std_sort, &[1, 2, 3], 0);
    }

    // regression test that the asymptotic gap is observable: insertion sort
    // on 1000 reversed elements must be slower than merge sort on the same
    #[test]
    fn insertion_slower_than_merge_on_reversed() {
        let (_, reversed) = build_datasets(1000, 42)
            .into_iter()
            .find(|(k, _)| *k == DatasetKind::Reversed)
            .unwrap();

        let insertion = time_algorithm(insertion_sort, &reversed, 5);
        let merge = time_algorithm(merge_sort, &reversed, 5);
        assert!(
            insertion > merge,
            "insertion sort ({:?}) not slower than merge sort ({:?}) on reversed input",
            insertion,
            merge
        );
    }
}
