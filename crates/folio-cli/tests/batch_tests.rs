//! Integration tests for the batch driver.
//!
//! These tests run fixture command files end-to-end against a fresh engine.

use folio_cli::run_lines;
use folio_ledger::LedgerEngine;

fn run_fixture(fixture: &str) -> Vec<String> {
    let mut engine = LedgerEngine::new();
    run_lines(&mut engine, fixture.lines())
}

#[test]
fn first_quarter_batch_cannot_rebalance_yet() {
    let outputs = run_fixture(include_str!("fixtures/first_quarter.txt"));
    assert_eq!(outputs, vec!["10593 7897 2272", "CANNOT_REBALANCE"]);
}

#[test]
fn first_half_batch_rebalances_at_june() {
    let outputs = run_fixture(include_str!("fixtures/first_half.txt"));
    assert_eq!(outputs, vec!["10593 7897 2272", "23622 11811 3937"]);
}

#[test]
fn malformed_lines_do_not_abort_the_batch() {
    let batch = "\
ALLOCATE 6000 3000 1000
SIP 2000 1000 500
CHANGE 4% 10% JANUARY
WITHDRAW 100 100 100
CHANGE 4% 10% 2% JANUARY
BALANCE JANUARY
";
    // The short CHANGE and the unknown verb are logged and skipped; the
    // valid CHANGE that follows still lands.
    let outputs = run_fixture(batch);
    assert_eq!(outputs, vec!["6240 3300 1020"]);
}

#[test]
fn violated_preconditions_do_not_abort_the_batch() {
    let batch = "\
ALLOCATE 6000 3000 1000
ALLOCATE 1 2 3
SIP 2000 1000 500
CHANGE 4% 10% 2% JANUARY
CHANGE 9% 9% 9% JANUARY
BALANCE JANUARY
";
    // The repeated ALLOCATE and the duplicate-month CHANGE are rejected by
    // the engine; neither disturbs the surviving state.
    let outputs = run_fixture(batch);
    assert_eq!(outputs, vec!["6240 3300 1020"]);
}

#[test]
fn blank_lines_are_skipped() {
    let batch = "\
ALLOCATE 6000 3000 1000

SIP 2000 1000 500

CHANGE 4% 10% 2% JANUARY
BALANCE JANUARY
";
    let outputs = run_fixture(batch);
    assert_eq!(outputs, vec!["6240 3300 1020"]);
}
