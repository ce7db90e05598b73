mod common;
use common::is_sorted;

use qsbench::rand::{VALUE_UPPER_BOUND, generate_sample_array, small_thread_rng};
use qsbench::{IterativeSorter, OpCounts, RecursiveSorter, Sorter};
use rand::Rng;
use rand::seq::SliceRandom;

fn random_input(len: usize, max: i32) -> Vec<i32> {
    let mut rng = rand::rng();
    (0..len).map(|_| rng.random_range(-max..max)).collect()
}

#[test]
fn test_both_sorters_match_std_sort() {
    for len in [0, 1, 2, 3, 10, 97, 1000, 5000] {
        let input = random_input(len, 1_000);
        let mut expected = input.clone();
        expected.sort();

        let mut iterative = input.clone();
        IterativeSorter.sort_all(&mut iterative);
        let mut recursive = input.clone();
        RecursiveSorter.sort_all(&mut recursive);

        assert_eq!(iterative, expected, "iterative, len {}", len);
        assert_eq!(recursive, expected, "recursive, len {}", len);
    }
}

#[test]
fn test_concrete_example() {
    let mut a = vec![5, 3, 8, 1, 9, 2];
    let mut b = a.clone();
    IterativeSorter.sort(&mut a, 0, 5);
    RecursiveSorter.sort(&mut b, 0, 5);
    assert_eq!(a, vec![1, 2, 3, 5, 8, 9]);
    assert_eq!(b, vec![1, 2, 3, 5, 8, 9]);
}

#[test]
fn test_same_work_for_same_input() {
    let mut rng = small_thread_rng();
    for _ in 0..20 {
        let len = rng.random_range(0..2_000);
        let input = random_input(len, 50);

        let mut iterative = input.clone();
        let mut iterative_ops = OpCounts::default();
        if len > 0 {
            IterativeSorter.sort_probed(&mut iterative, 0, len - 1, &mut iterative_ops);
        }

        let mut recursive = input.clone();
        let mut recursive_ops = OpCounts::default();
        if len > 0 {
            RecursiveSorter.sort_probed(&mut recursive, 0, len - 1, &mut recursive_ops);
        }

        assert_eq!(iterative, recursive);
        assert_eq!(iterative_ops, recursive_ops);
    }
}

#[test]
fn test_sorting_is_idempotent() {
    let mut data = generate_sample_array(3_000);
    IterativeSorter.sort_all(&mut data);
    let once = data.clone();

    IterativeSorter.sort_all(&mut data);
    assert_eq!(data, once);
    RecursiveSorter.sort_all(&mut data);
    assert_eq!(data, once);
}

#[test]
fn test_output_is_a_permutation() {
    let mut input: Vec<i32> = (0..1_000).map(|i| i % 37).collect();
    input.shuffle(&mut rand::rng());

    let mut sorted = input.clone();
    RecursiveSorter.sort_all(&mut sorted);
    assert!(is_sorted(&sorted));

    let mut expected = input;
    expected.sort_unstable();
    assert_eq!(sorted, expected);
}

#[test]
fn test_generated_array_sorts_within_range() {
    let mut data = generate_sample_array(10_000);
    IterativeSorter.sort_all(&mut data);
    assert!(is_sorted(&data));
    assert!(data.first().is_some_and(|&v| v >= 0));
    assert!(data.last().is_some_and(|&v| v < VALUE_UPPER_BOUND));
}
