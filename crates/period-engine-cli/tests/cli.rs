//! CLI integration tests for period-compare

use predicates::prelude::*;
use serde_json::Value;

fn period_compare() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("period-compare"));
    cmd.env_remove("PERIOD_COMPARE_FIRST_WEEKDAY")
        .env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// compare
// =============================================================================

#[test]
fn test_compare_month_over_month() {
    period_compare()
        .args([
            "compare",
            "--start",
            "2024-06-01",
            "--end",
            "2024-06-15",
            "--granularity",
            "daily",
            "--offset",
            "-1",
            "--offset-granularity",
            "monthly",
        ])
        .assert()
        .success()
        .stdout("2024-05-01 2024-05-15\n");
}

#[test]
fn test_compare_weekly_year_over_year() {
    period_compare()
        .args([
            "compare",
            "--start",
            "2024-01-01",
            "--end",
            "2024-03-31",
            "-g",
            "weekly",
            "-o",
            "-9",
            "--offset-granularity",
            "yearly",
        ])
        .assert()
        .success()
        .stdout("2014-12-29 2015-03-29\n");
}

#[test]
fn test_compare_whole_range_periodic() {
    let args = [
        "compare",
        "--start",
        "2024-04-01",
        "--end",
        "2024-06-30",
        "-g",
        "monthly",
        "-o",
        "-1",
        "--offset-granularity",
        "periodic",
    ];

    period_compare()
        .args(args)
        .assert()
        .success()
        .stdout("2024-03-01 2024-05-31\n");

    period_compare()
        .args(args)
        .arg("--whole-range")
        .assert()
        .success()
        .stdout("2024-01-01 2024-03-31\n");
}

#[test]
fn test_compare_json_output() {
    let output = period_compare()
        .args([
            "compare",
            "--start",
            "2024-07-01",
            "--end",
            "2024-12-31",
            "-g",
            "monthly",
            "-o",
            "-6",
            "--offset-granularity",
            "monthly",
            "--json",
        ])
        .assert()
        .success();

    let json: Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(json["start_date"], "2024-01-01");
    assert_eq!(json["end_date"], "2024-06-30");
}

#[test]
fn test_compare_first_weekday_from_env() {
    // Sunday-first weeks: 2023-12-31 .. 2024-01-13 is two whole weeks.
    period_compare()
        .env("PERIOD_COMPARE_FIRST_WEEKDAY", "6")
        .args([
            "compare",
            "--start",
            "2023-12-31",
            "--end",
            "2024-01-13",
            "-g",
            "weekly",
            "-o",
            "-1",
            "--offset-granularity",
            "yearly",
        ])
        .assert()
        .success()
        .stdout("2023-01-01 2023-01-14\n");
}

#[test]
fn test_compare_reports_start_date_overflow() {
    // No 30th day exists in February.
    period_compare()
        .args([
            "compare",
            "--start",
            "2024-03-30",
            "--end",
            "2024-03-30",
            "-g",
            "daily",
            "-o",
            "-1",
            "--offset-granularity",
            "monthly",
        ])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Start date overflow"));
}

#[test]
fn test_compare_rejects_finer_offset() {
    period_compare()
        .args([
            "compare",
            "--start",
            "2024-01-01",
            "--end",
            "2024-01-31",
            "-g",
            "monthly",
            "-o",
            "-1",
            "--offset-granularity",
            "weekly",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported combination"));
}

#[test]
fn test_compare_rejects_bad_date() {
    period_compare()
        .args([
            "compare",
            "--start",
            "2024-13-01",
            "--end",
            "2024-12-31",
            "-g",
            "daily",
            "-o",
            "-1",
            "--offset-granularity",
            "yearly",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date '2024-13-01'"));
}

#[test]
fn test_compare_rejects_bad_weekday() {
    period_compare()
        .args([
            "compare",
            "--start",
            "2024-01-01",
            "--end",
            "2024-01-07",
            "-g",
            "weekly",
            "-o",
            "-1",
            "--offset-granularity",
            "weekly",
            "--first-weekday",
            "7",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid weekday: 7"));
}

#[test]
fn test_compare_rejects_unknown_granularity() {
    period_compare()
        .args([
            "compare",
            "--start",
            "2024-01-01",
            "--end",
            "2024-01-31",
            "-g",
            "quarterly",
            "-o",
            "-1",
            "--offset-granularity",
            "yearly",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("quarterly"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    period_compare()
        .args([
            "--verbose",
            "compare",
            "--start",
            "2024-06-01",
            "--end",
            "2024-06-15",
            "-g",
            "daily",
            "-o",
            "-1",
            "--offset-granularity",
            "monthly",
        ])
        .assert()
        .success()
        .stdout("2024-05-01 2024-05-15\n")
        .stderr(predicate::str::contains("located compared container"));
}

// =============================================================================
// length / offsets
// =============================================================================

#[test]
fn test_length_counts_whole_periods() {
    period_compare()
        .args([
            "length",
            "--start",
            "2024-01-01",
            "--end",
            "2024-03-31",
            "-g",
            "weekly",
        ])
        .assert()
        .success()
        .stdout("13\n");
}

#[test]
fn test_length_rejects_partial_month() {
    period_compare()
        .args([
            "length",
            "--start",
            "2024-01-01",
            "--end",
            "2024-02-15",
            "-g",
            "monthly",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Incomplete period"));
}

#[test]
fn test_offsets_lists_periodic_first() {
    period_compare()
        .args(["offsets", "-g", "weekly"])
        .assert()
        .success()
        .stdout("periodic\nweekly\nmonthly\nyearly\n");
}
