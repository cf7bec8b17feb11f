use super::*;
use crate::net::types::LoanStatus;
use crate::state::loans::days_from_civil;

fn book(total: u32) -> Book {
    Book {
        total_copies: total,
        available_copies: total,
        ..Book::default()
    }
}

fn loan(status: LoanStatus, fine: f64) -> Loan {
    Loan {
        id: 1,
        book: None,
        user: None,
        loan_date: "2026-07-01T09:00:00".to_owned(),
        expiration_date: "2026-09-01T09:00:00".to_owned(),
        return_date: None,
        status,
        fine_amount: fine,
        renewals: 0,
    }
}

// =============================================================
// Tabs
// =============================================================

#[test]
fn default_tab_is_inventory() {
    assert_eq!(AdminTab::default(), AdminTab::Inventory);
}

#[test]
fn tab_labels_are_distinct() {
    assert_ne!(AdminTab::Inventory.label(), AdminTab::Loans.label());
    assert_ne!(AdminTab::Loans.label(), AdminTab::Fines.label());
}

// =============================================================
// Stat fallbacks
// =============================================================

#[test]
fn catalog_fallback_counts_titles_and_copies() {
    let stats = catalog_fallback(&[book(10), book(3), book(1)]);
    assert_eq!(
        stats,
        CatalogStats {
            total_books: 3,
            total_copies: 14
        }
    );
}

#[test]
fn catalog_fallback_of_empty_catalog_is_zero() {
    assert_eq!(catalog_fallback(&[]), CatalogStats::default());
}

#[test]
fn loans_fallback_counts_fines_once_per_loan() {
    let today = days_from_civil(2026, 8, 7);
    let all = vec![
        loan(LoanStatus::OnLoan, 0.0),
        loan(LoanStatus::Overdue, 2.5),
        loan(LoanStatus::Returned, 1.0),
    ];
    let stats = loans_fallback(&all, today);
    assert_eq!(stats.active, 1);
    assert_eq!(stats.overdue, 1);
    assert_eq!(stats.unpaid, 2);
    assert!((stats.pending_fines - 3.5).abs() < f64::EPSILON);
}
