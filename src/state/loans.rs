//! Loan arithmetic: partitions, due-soon windows, fines, renewability.
//!
//! Dates arrive as ISO-8601 strings and are compared as civil day counts so
//! none of this needs a date crate or a browser clock; callers pass "today"
//! in (see `util::clock`).

#[cfg(test)]
#[path = "loans_test.rs"]
mod loans_test;

use crate::net::types::{Loan, LoanStatus};

/// Renewals allowed per loan before the desk has to reissue it.
pub const MAX_RENEWALS: u32 = 2;

/// How far ahead the dashboard's "due soon" window looks, in days.
pub const DUE_SOON_DAYS: i64 = 7;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Days since 1970-01-01 for a civil date (Howard Hinnant's algorithm).
pub fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = if year >= 0 { year } else { year - 399 } / 400;
    let year_of_era = year - era * 400;
    let month_shifted = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * month_shifted + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}

fn split_ymd(date: &str) -> Option<(i64, i64, i64)> {
    let date_part = date.split(['T', ' ']).next()?;
    let mut fields = date_part.splitn(3, '-');
    let year = fields.next()?.parse().ok()?;
    let month: i64 = fields.next()?.parse().ok()?;
    let day: i64 = fields.next()?.parse().ok()?;
    if (1..=12).contains(&month) && (1..=31).contains(&day) {
        Some((year, month, day))
    } else {
        None
    }
}

/// Parse an ISO-8601 timestamp's date part into civil days.
pub fn parse_days(date: &str) -> Option<i64> {
    let (year, month, day) = split_ymd(date)?;
    Some(days_from_civil(year, month, day))
}

/// Human-readable date for cards and tables; unparseable input is shown
/// verbatim.
pub fn format_date(date: &str) -> String {
    match split_ymd(date) {
        Some((year, month, day)) => {
            let name = MONTHS[usize::try_from(month - 1).unwrap_or(0)];
            format!("{name} {day}, {year}")
        }
        None => date.to_owned(),
    }
}

/// A loan still counts against the borrower until it comes back.
pub fn is_active(loan: &Loan) -> bool {
    matches!(loan.status, LoanStatus::OnLoan | LoanStatus::Overdue)
}

/// The loans shown on the My Loans page, in API order.
pub fn active(loans: &[Loan]) -> Vec<Loan> {
    loans.iter().filter(|loan| is_active(loan)).cloned().collect()
}

/// Renewal is only offered on in-good-standing loans below the cap; overdue
/// loans go to the desk.
pub fn can_renew(loan: &Loan) -> bool {
    loan.status == LoanStatus::OnLoan && loan.renewals < MAX_RENEWALS
}

/// Everything the borrower has accrued, including settled loans.
pub fn total_fines(loans: &[Loan]) -> f64 {
    loans.iter().map(|loan| loan.fine_amount).sum()
}

/// Dashboard counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoanSummary {
    pub active: u32,
    pub due_this_week: u32,
    pub overdue: u32,
}

/// Count current loans, those due within [`DUE_SOON_DAYS`] of `today`, and
/// overdue ones.
pub fn summarize(loans: &[Loan], today: i64) -> LoanSummary {
    let mut summary = LoanSummary::default();
    for loan in loans {
        match loan.status {
            LoanStatus::OnLoan => {
                summary.active += 1;
                if let Some(due) = parse_days(&loan.expiration_date) {
                    if due >= today && due <= today + DUE_SOON_DAYS {
                        summary.due_this_week += 1;
                    }
                }
            }
            LoanStatus::Overdue => summary.overdue += 1,
            LoanStatus::Returned => {}
        }
    }
    summary
}

/// Loans carrying an unpaid fine, for the admin fines tab.
pub fn fined(loans: &[Loan]) -> Vec<Loan> {
    loans
        .iter()
        .filter(|loan| loan.fine_amount > 0.0)
        .cloned()
        .collect()
}
