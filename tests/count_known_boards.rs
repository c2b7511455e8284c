// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end counts against the known values of OEIS A000170.

mod common;

use common::{count, count_row_symm};

#[test]
fn test_count_8() {
    assert_eq!(count::<8, 4>(1, 0, 1), 92);
    assert_eq!(count::<8, 4>(4, 0, 1), 92);
}

#[test]
fn test_count_9() {
    assert_eq!(count::<9, 4>(1, 0, 1), 352);
    assert_eq!(count::<9, 4>(4, 0, 1), 352);
}

#[test]
fn test_count_10() {
    assert_eq!(count::<10, 5>(1, 0, 1), 724);
    assert_eq!(count::<10, 5>(4, 0, 1), 724);
}

#[test]
fn test_count_12() {
    assert_eq!(count::<12, 6>(1, 0, 1), 14200);
    assert_eq!(count::<12, 6>(4, 0, 1), 14200);
}

#[test]
fn test_count_14() {
    assert_eq!(count::<14, 7>(1, 0, 1), 365_596);
    assert_eq!(count::<14, 7>(4, 0, 1), 365_596);
}

#[test]
fn test_row_symmetric_store() {
    assert_eq!(count_row_symm::<8, 4>(4, 0, 1), 92);
    assert_eq!(count_row_symm::<10, 5>(4, 0, 1), 724);
}

#[test]
fn test_partitioned_runs_sum_to_total_10() {
    let parts = 4;
    let total: u64 = (0..parts).map(|part| count::<10, 5>(4, part, parts)).sum();
    assert_eq!(total, count::<10, 5>(4, 0, 1));
}

#[test]
fn test_partitioned_runs_sum_to_total_12() {
    let parts = 7;
    let total: u64 = (0..parts).map(|part| count::<12, 6>(1, part, parts)).sum();
    assert_eq!(total, count::<12, 6>(1, 0, 1));
}

#[cfg(feature = "board_8")]
#[test]
fn test_board_feature_entry_point() {
    assert_eq!(queens_count::count_solutions(4, 0, 1), 92);
}

#[cfg(feature = "board_12")]
#[test]
fn test_board_feature_entry_point() {
    assert_eq!(queens_count::count_solutions(4, 0, 1), 14200);
}
