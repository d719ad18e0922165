//! A* front-end scenarios: optimal totals on the fixture instances,
//! cost-only output contract, and agreement with uniform cost.

use std::io::Cursor;

use lock_tests::{astar_output, ucs_output};
use swapcost_harness::runner::{run_astar, RunError};
use swapcost_search::error::SearchError;

// ---------------------------------------------------------------------------
// Fixture instances
// ---------------------------------------------------------------------------

#[test]
fn seven_element_mixed_sign_sample() {
    assert_eq!(astar_output("-2 4 0 -1 3 5 1\n-2 -1 0 1 3 4 5\n"), "33\n");
}

#[test]
fn reversed_eight_sample() {
    assert_eq!(astar_output("8 7 6 5 4 3 2 1\n1 2 3 4 5 6 7 8\n"), "44\n");
}

#[test]
fn scrambled_ten_sample() {
    // Four displaced pairs; the optimum pairs each even with an odd.
    assert_eq!(
        astar_output("9 8 7 6 5 4 3 2 1 10\n1 2 3 4 5 6 7 8 9 10\n"),
        "44\n"
    );
}

// ---------------------------------------------------------------------------
// Output contract
// ---------------------------------------------------------------------------

#[test]
fn only_the_total_is_printed() {
    let out = astar_output("9 7 8\n7 8 9\n");
    assert_eq!(out, "22\n");
    assert_eq!(out.lines().count(), 1, "no intermediate layouts on stdout");
}

#[test]
fn unsolvable_permutation_free_instance_errors() {
    // The heuristic's multiset precondition rejects this before any search.
    let mut reader = Cursor::new(b"1 2\n3 4\n".to_vec());
    let mut out = Vec::new();
    let err = run_astar(&mut reader, &mut out).unwrap_err();
    assert!(matches!(
        err,
        RunError::Search(SearchError::MultisetMismatch { .. })
    ));
}

#[test]
fn goal_input_prints_zero() {
    assert_eq!(astar_output("1 2 3\n1 2 3\n"), "0\n");
}

// ---------------------------------------------------------------------------
// Cross-strategy agreement
// ---------------------------------------------------------------------------

#[test]
fn astar_total_matches_uniform_cost_total() {
    for input in [
        "9 7 8\n7 8 9\n",
        "6 8 2 5 10\n8 10 2 5 6\n",
        "14 11 15 13 12\n15 14 13 12 11\n",
        "5 2 4 1 3\n1 2 3 4 5\n",
    ] {
        let ucs_total = ucs_output(input)
            .lines()
            .last()
            .expect("uniform-cost output is non-empty")
            .to_string();
        let astar_total = astar_output(input).trim_end().to_string();
        assert_eq!(ucs_total, astar_total, "strategies disagree on {input:?}");
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    let first = astar_output("8 7 6 5 4 3 2 1\n1 2 3 4 5 6 7 8\n");
    for _ in 0..3 {
        assert_eq!(
            astar_output("8 7 6 5 4 3 2 1\n1 2 3 4 5 6 7 8\n"),
            first
        );
    }
}
