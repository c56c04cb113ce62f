use pretty_assertions::assert_eq;

use dial_pattern::MalformedPattern;
use dial_range::NumberRange;

use super::{reconcile, ReconcileOptions, ReconcileReport};
use crate::entry::PatternEntry;

fn range(start: &str, end: &str) -> NumberRange {
    match NumberRange::parse(start, end) {
        Ok(r) => r,
        Err(e) => panic!("{e}"),
    }
}

fn entry(pattern: &str, partition: Option<&str>) -> PatternEntry {
    PatternEntry::new(pattern, partition)
}

fn run(entries: &[PatternEntry], r: &NumberRange, partition: &str) -> ReconcileReport {
    reconcile(entries, r, partition, &ReconcileOptions::default())
}

fn numbers(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

// === Spec scenarios ===

#[test]
fn no_entries_leaves_everything_unused() {
    let report = run(&[], &range("100", "105"), "PT");
    assert_eq!(
        report.unused,
        numbers(&["100", "101", "102", "103", "104", "105"])
    );
    assert_eq!(report.unused_count(), 6);
    assert_eq!(report.entries_seen, 0);
}

#[test]
fn covering_pattern_leaves_nothing_unused() {
    let entries = [entry("10X", Some("PT"))];
    let report = run(&entries, &range("100", "105"), "PT");
    assert_eq!(report.unused, Vec::<String>::new());
    assert_eq!(report.entries_matched, 1);
    // "10X" expands to 100..=109; only 100..=105 survive the range.
    assert_eq!(report.candidates_marked, 6);
}

#[test]
fn out_of_range_pattern_claims_nothing() {
    let entries = [entry("999", Some("PT"))];
    let report = run(&entries, &range("100", "105"), "PT");
    assert_eq!(
        report.unused,
        numbers(&["100", "101", "102", "103", "104", "105"])
    );
    assert_eq!(report.entries_matched, 1);
    assert_eq!(report.candidates_marked, 0);
}

#[test]
fn partial_coverage_reports_the_gap() {
    let entries = [
        entry("100", Some("PT")),
        entry("10[3-5]", Some("PT")),
    ];
    let report = run(&entries, &range("100", "105"), "PT");
    assert_eq!(report.unused, numbers(&["101", "102"]));
    assert_eq!(report.candidates_marked, 4);
}

// === Partition filtering ===

#[test]
fn other_partitions_are_inert() {
    let entries = [
        entry("10X", Some("PT-Other")),
        entry("10X", None),
    ];
    let report = run(&entries, &range("100", "105"), "PT");
    assert_eq!(report.unused_count(), 6);
    assert_eq!(report.entries_seen, 2);
    assert_eq!(report.entries_matched, 0);
}

#[test]
fn partition_match_is_case_insensitive() {
    let entries = [entry("10X", Some("pt-internal"))];
    let report = run(&entries, &range("100", "105"), "PT-INTERNAL");
    assert_eq!(report.entries_matched, 1);
    assert_eq!(report.unused_count(), 0);
}

#[test]
fn absent_partition_matches_empty_target() {
    let entries = [entry("10X", None)];
    let report = run(&entries, &range("100", "105"), "");
    assert_eq!(report.entries_matched, 1);
    assert_eq!(report.unused_count(), 0);
}

// === Per-entry failure recovery ===

#[test]
fn non_numeric_entries_are_counted_not_failed() {
    let entries = [
        entry("10#", Some("PT")),
        entry("*10X", Some("PT")),
        entry("10X", Some("PT")),
    ];
    let report = run(&entries, &range("100", "105"), "PT");
    assert_eq!(report.non_numeric, 2);
    assert!(report.malformed.is_empty());
    assert_eq!(report.unused_count(), 0);
}

#[test]
fn malformed_entry_is_recorded_and_run_continues() {
    let entries = [
        entry("1[5-0]X", Some("PT")),
        entry("10X", Some("PT")),
    ];
    let report = run(&entries, &range("100", "105"), "PT");
    assert_eq!(report.malformed.len(), 1);
    assert_eq!(report.malformed[0].pattern, "1[5-0]X");
    assert_eq!(report.malformed[0].partition, "PT");
    assert_eq!(
        report.malformed[0].error,
        MalformedPattern::DescendingRange { lo: '5', hi: '0' }
    );
    // The healthy entry still covered the range.
    assert_eq!(report.unused_count(), 0);
}

// === Ordering and idempotence ===

#[test]
fn unused_order_is_independent_of_entry_order() {
    let forward = [
        entry("100", Some("PT")),
        entry("104", Some("PT")),
    ];
    let reverse = [
        entry("104", Some("PT")),
        entry("100", Some("PT")),
    ];
    let r = range("100", "105");
    assert_eq!(run(&forward, &r, "PT").unused, run(&reverse, &r, "PT").unused);
    assert_eq!(
        run(&forward, &r, "PT").unused,
        numbers(&["101", "102", "103", "105"])
    );
}

#[test]
fn reconcile_is_idempotent() {
    let entries = [entry("10[0-2]", Some("PT"))];
    let r = range("100", "105");
    let first = run(&entries, &r, "PT");
    let second = run(&entries, &r, "PT");
    assert_eq!(first, second);
}

// === Width normalization policy ===

#[test]
fn short_candidates_miss_by_default() {
    // "10X" yields three-character candidates; the inventory is padded to
    // four. Historical behavior: every number reported unused even though
    // the pattern covers the range numerically.
    let entries = [entry("10X", Some("PT"))];
    let report = run(&entries, &range("0100", "0105"), "PT");
    assert_eq!(report.unused_count(), 6);
    assert_eq!(report.candidates_marked, 0);
}

#[test]
fn normalize_width_closes_the_padding_gap() {
    let entries = [entry("10X", Some("PT"))];
    let opts = ReconcileOptions {
        normalize_width: true,
    };
    let report = reconcile(&entries, &range("0100", "0105"), "PT", &opts);
    assert_eq!(report.unused_count(), 0);
    assert_eq!(report.candidates_marked, 6);
}

// === Counts ===

#[test]
fn report_counters_add_up() {
    let entries = [
        entry("10[0-1]", Some("PT")),
        entry("9#", Some("PT")),
        entry("[-2]", Some("PT")),
        entry("555", Some("Elsewhere")),
    ];
    let report = run(&entries, &range("100", "105"), "PT");
    assert_eq!(report.entries_seen, 4);
    assert_eq!(report.entries_matched, 3);
    assert_eq!(report.non_numeric, 1);
    assert_eq!(report.malformed.len(), 1);
    assert_eq!(report.candidates_marked, 2);
    assert_eq!(report.unused, numbers(&["102", "103", "104", "105"]));
}
