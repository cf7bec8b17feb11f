use super::*;

fn loan(status: LoanStatus, due: &str, renewals: u32, fine: f64) -> Loan {
    Loan {
        id: 1,
        book: None,
        user: None,
        loan_date: "2026-07-01T09:00:00".to_owned(),
        expiration_date: due.to_owned(),
        return_date: None,
        status,
        fine_amount: fine,
        renewals,
    }
}

// =============================================================
// Civil day arithmetic
// =============================================================

#[test]
fn epoch_is_day_zero() {
    assert_eq!(days_from_civil(1970, 1, 1), 0);
}

#[test]
fn civil_days_handle_leap_years() {
    assert_eq!(days_from_civil(2024, 3, 1) - days_from_civil(2024, 2, 28), 2);
    assert_eq!(days_from_civil(2025, 3, 1) - days_from_civil(2025, 2, 28), 1);
}

#[test]
fn parse_days_reads_iso_timestamps() {
    assert_eq!(parse_days("1970-01-02T15:04:05"), Some(1));
    assert_eq!(parse_days("1970-01-11 00:00:00"), Some(10));
    assert_eq!(parse_days("1970-01-31"), Some(30));
}

#[test]
fn parse_days_rejects_garbage() {
    assert_eq!(parse_days("not a date"), None);
    assert_eq!(parse_days("2026-13-01"), None);
    assert_eq!(parse_days("2026-00-10"), None);
}

#[test]
fn format_date_is_short_and_readable() {
    assert_eq!(format_date("2026-08-07T12:00:00"), "Aug 7, 2026");
    assert_eq!(format_date("2025-12-31"), "Dec 31, 2025");
}

#[test]
fn format_date_passes_through_unparseable_input() {
    assert_eq!(format_date("pending"), "pending");
}

// =============================================================
// Active partition
// =============================================================

#[test]
fn active_keeps_on_loan_and_overdue() {
    let loans = vec![
        loan(LoanStatus::OnLoan, "2026-08-10", 0, 0.0),
        loan(LoanStatus::Overdue, "2026-07-20", 0, 1.5),
        loan(LoanStatus::Returned, "2026-07-01", 1, 0.0),
    ];
    assert_eq!(active(&loans).len(), 2);
}

// =============================================================
// Renewability
// =============================================================

#[test]
fn renewal_allowed_below_cap() {
    assert!(can_renew(&loan(LoanStatus::OnLoan, "2026-08-10", 0, 0.0)));
    assert!(can_renew(&loan(LoanStatus::OnLoan, "2026-08-10", 1, 0.0)));
}

#[test]
fn renewal_blocked_at_cap() {
    assert!(!can_renew(&loan(LoanStatus::OnLoan, "2026-08-10", 2, 0.0)));
    assert!(!can_renew(&loan(LoanStatus::OnLoan, "2026-08-10", 3, 0.0)));
}

#[test]
fn renewal_blocked_when_overdue_or_returned() {
    assert!(!can_renew(&loan(LoanStatus::Overdue, "2026-07-20", 0, 2.0)));
    assert!(!can_renew(&loan(LoanStatus::Returned, "2026-07-20", 0, 0.0)));
}

// =============================================================
// Summary counters
// =============================================================

#[test]
fn summarize_counts_each_bucket_once() {
    let today = days_from_civil(2026, 8, 7);
    let loans = vec![
        // due inside the window
        loan(LoanStatus::OnLoan, "2026-08-10", 0, 0.0),
        // due past the window
        loan(LoanStatus::OnLoan, "2026-09-01", 0, 0.0),
        loan(LoanStatus::Overdue, "2026-07-20", 0, 3.0),
        loan(LoanStatus::Returned, "2026-07-01", 0, 0.0),
    ];
    let summary = summarize(&loans, today);
    assert_eq!(
        summary,
        LoanSummary {
            active: 2,
            due_this_week: 1,
            overdue: 1
        }
    );
}

#[test]
fn due_window_is_inclusive_of_today_and_day_seven() {
    let today = days_from_civil(2026, 8, 7);
    let loans = vec![
        loan(LoanStatus::OnLoan, "2026-08-07", 0, 0.0),
        loan(LoanStatus::OnLoan, "2026-08-14", 0, 0.0),
        loan(LoanStatus::OnLoan, "2026-08-15", 0, 0.0),
    ];
    assert_eq!(summarize(&loans, today).due_this_week, 2);
}

#[test]
fn past_due_dates_do_not_count_as_due_soon() {
    let today = days_from_civil(2026, 8, 7);
    let loans = vec![loan(LoanStatus::OnLoan, "2026-08-01", 0, 0.0)];
    assert_eq!(summarize(&loans, today).due_this_week, 0);
}

// =============================================================
// Fines
// =============================================================

#[test]
fn total_fines_sums_all_loans() {
    let loans = vec![
        loan(LoanStatus::Overdue, "2026-07-20", 0, 2.5),
        loan(LoanStatus::Returned, "2026-07-01", 0, 1.0),
        loan(LoanStatus::OnLoan, "2026-08-10", 0, 0.0),
    ];
    assert!((total_fines(&loans) - 3.5).abs() < f64::EPSILON);
}

#[test]
fn fined_keeps_only_positive_fines() {
    let loans = vec![
        loan(LoanStatus::Overdue, "2026-07-20", 0, 2.5),
        loan(LoanStatus::OnLoan, "2026-08-10", 0, 0.0),
    ];
    assert_eq!(fined(&loans).len(), 1);
}
