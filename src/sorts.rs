//! The benchmarked algorithms. Every sort takes a borrowed slice and returns
//! a freshly allocated sorted vector, so callers never observe mutation.

pub type SortFn = fn(&[i64]) -> Vec<i64>;

pub const ALGORITHMS: [(&str, SortFn); 3] = [
    ("insertion_sort", insertion_sort),
    ("merge_sort", merge_sort),
    ("std_sort", std_sort),
];

pub fn insertion_sort(arr: &[i64]) -> Vec<i64> {
    let mut out = arr.to_vec();
    for j in 1..out.len() {
        let key = out[j];
        let mut i = j;
        while i > 0 && out[i - 1] > key {
            out[i] = out[i - 1];
            i -= 1;
        }
        out[i] = key;
    }
    out
}

pub fn merge_sort(arr: &[i64]) -> Vec<i64> {
    if arr.len() <= 1 {
        return arr.to_vec();
    }
    let mid = arr.len() / 2;
    let left = merge_sort(&arr[..mid]);
    let right = merge_sort(&arr[mid..]);
    merge(&left, &right)
}

fn merge(left: &[i64], right: &[i64]) -> Vec<i64> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        // ties take from the left half, keeping the merge stable
        if left[i] <= right[j] {
            out.push(left[i]);
            i += 1;
        } else {
            out.push(right[j]);
            j += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}

/// Baseline and correctness oracle: the standard library's adaptive stable sort.
pub fn std_sort(arr: &[i64]) -> Vec<i64> {
    let mut out = arr.to_vec();
    out.sort();
    out
}
