//! End-to-end tests for rel_diff and rel_dist_bound.

use pretty_assertions::assert_eq;

use kappa_rs::{Relation, rel_diff, rel_dist_bound};

fn rel(rows: Vec<Vec<u8>>) -> Relation {
    Relation::from_rows(rows).unwrap()
}

// ============================================================================
// 1. Worked example 4.17 — bound of 9
// ============================================================================

#[test]
fn example_4_17() {
    let r1 = rel(vec![
        vec![1, 0, 1, 1, 0, 0, 1, 1, 0, 1],
        vec![0, 1, 0, 1, 0, 0, 0, 1, 1, 1],
        vec![1, 1, 1, 0, 1, 0, 0, 0, 0, 0],
        vec![1, 1, 1, 0, 1, 0, 0, 0, 0, 1],
        vec![1, 1, 1, 1, 1, 0, 1, 1, 1, 1],
    ]);
    let r2 = rel(vec![
        vec![0, 0, 1, 1, 0, 1, 1, 1, 0, 1],
        vec![0, 0, 1, 1, 1, 1, 0, 1, 1, 0],
        vec![1, 0, 1, 1, 0, 1, 1, 0, 1, 1],
        vec![0, 1, 0, 1, 0, 0, 0, 1, 1, 0],
        vec![0, 0, 0, 0, 0, 1, 0, 0, 1, 1],
    ]);
    assert_eq!(rel_dist_bound(&r1, &r2, true).unwrap(), 9);
}

// ============================================================================
// 2. Worked example 4.18 — bound of 2
// ============================================================================

#[test]
fn example_4_18() {
    let r1 = rel(vec![
        vec![0, 0, 1, 0, 0, 1, 0, 0, 0, 1],
        vec![0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
        vec![0, 1, 0, 1, 0, 0, 1, 0, 1, 0],
        vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        vec![0, 1, 0, 0, 0, 0, 1, 0, 0, 0],
    ]);
    let r2 = rel(vec![
        vec![0, 0, 1, 0, 0, 1, 0, 0, 0, 1],
        vec![0, 0, 1, 1, 1, 0, 0, 0, 0, 0],
        vec![0, 1, 0, 1, 0, 0, 0, 0, 1, 0],
        vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
        vec![0, 1, 0, 0, 0, 0, 1, 1, 0, 0],
    ]);
    assert_eq!(rel_dist_bound(&r1, &r2, true).unwrap(), 2);
}

// ============================================================================
// 3. rel_diff semantics
// ============================================================================

#[test]
fn diff_of_relation_with_itself_is_empty() {
    let r = rel(vec![
        vec![1, 0, 1, 1],
        vec![0, 1, 1, 0],
        vec![1, 1, 0, 0],
    ]);
    let d = rel_diff(&r, &r, true).unwrap();
    assert_eq!(d.cols(), 0);
    assert_eq!(d.rows(), 3);
}

#[test]
fn duplicate_columns_match_one_to_one() {
    // r1 carries three copies of [1,0]; r2 offers two. Exactly one survives.
    let r1 = rel(vec![
        vec![1, 1, 1],
        vec![0, 0, 0],
    ]);
    let r2 = rel(vec![
        vec![1, 1, 0],
        vec![0, 0, 1],
    ]);
    let d = rel_diff(&r1, &r2, true).unwrap();
    assert_eq!(d.cols(), 1);
}

#[test]
fn diff_is_directional() {
    let r1 = rel(vec![
        vec![1, 0],
        vec![0, 0],
    ]);
    let r2 = rel(vec![
        vec![1, 1],
        vec![0, 0],
    ]);
    // Everything in r1 appears in r2, but not vice versa.
    assert_eq!(rel_diff(&r1, &r2, true).unwrap().cols(), 0);
    assert_eq!(rel_diff(&r2, &r1, true).unwrap().cols(), 1);
}

// ============================================================================
// 4. Distance bound boundary behavior
// ============================================================================

#[test]
fn identical_relations_have_zero_distance() {
    let r = rel(vec![
        vec![0, 1, 1, 1, 0, 0, 0, 0, 0, 0],
        vec![0, 0, 1, 1, 0, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 1, 1, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 0, 1, 1, 1, 1],
    ]);
    assert_eq!(rel_dist_bound(&r, &r, true).unwrap(), 0);
}

#[test]
fn permuted_columns_have_zero_distance() {
    let r = rel(vec![
        vec![1, 0, 1],
        vec![0, 1, 1],
    ]);
    let permuted = r.select_columns(&[2, 0, 1]);
    assert_eq!(rel_dist_bound(&r, &permuted, true).unwrap(), 0);
}

#[test]
fn row_count_mismatch_fails() {
    let r1 = rel(vec![vec![1, 0]]);
    let r2 = rel(vec![vec![1, 0], vec![0, 1]]);
    let err = rel_dist_bound(&r1, &r2, false).unwrap_err();
    assert!(matches!(
        err,
        kappa_rs::Error::RowCountMismatch { left: 1, right: 2 }
    ));
}

#[test]
fn non_binary_input_fails_when_checked() {
    let r1 = rel(vec![vec![2, 0]]);
    let r2 = rel(vec![vec![1, 0]]);
    assert!(rel_dist_bound(&r1, &r2, true).is_err());
}

#[test]
fn subset_relation_distance_counts_missing_columns() {
    // r2 extends r1 with two unmatched columns whose supports are disjoint.
    let r1 = rel(vec![
        vec![1, 0, 0, 0],
        vec![0, 1, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);
    let r2 = rel(vec![
        vec![1, 0, 0, 0, 0, 0],
        vec![0, 1, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 1, 0],
        vec![0, 0, 0, 0, 0, 1],
    ]);
    // D1 is empty, D2 has the two new columns plus the surviving zero
    // columns; the direction through r1 reconciles all four of r1's columns.
    let d = rel_dist_bound(&r1, &r2, true).unwrap();
    assert_eq!(d, 2);
}
