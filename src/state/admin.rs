//! Admin dashboard state: tab selection and stat fallbacks.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::net::types::{Book, CatalogStats, Loan, LoanStats};
use crate::state::loans;

/// Tabs on the admin panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Inventory,
    Loans,
    Fines,
}

impl AdminTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Inventory => "Inventory",
            Self::Loans => "Loans",
            Self::Fines => "Fines & Payments",
        }
    }
}

/// Inventory counters computed from the loaded catalog, used when the stats
/// endpoint is unavailable.
pub fn catalog_fallback(books: &[Book]) -> CatalogStats {
    CatalogStats {
        total_books: u32::try_from(books.len()).unwrap_or(u32::MAX),
        total_copies: books.iter().map(|book| book.total_copies).sum(),
    }
}

/// Loan/fine counters computed from the loaded loan list, used when the
/// stats endpoint is unavailable.
pub fn loans_fallback(all: &[Loan], today: i64) -> LoanStats {
    let summary = loans::summarize(all, today);
    let fined = loans::fined(all);
    LoanStats {
        active: summary.active,
        overdue: summary.overdue,
        pending_fines: fined.iter().map(|loan| loan.fine_amount).sum(),
        unpaid: u32::try_from(fined.len()).unwrap_or(u32::MAX),
    }
}
