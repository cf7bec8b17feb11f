//! Wire types exchanged with the library REST API.
//!
//! These are plain records; the API owns the invariants (copy counts, renewal
//! caps) and the UI only reflects them. Roles and loan statuses are closed
//! enums rather than raw strings so guard logic cannot drift.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role. The API emits lowercase but older records carry the
/// capitalized spelling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    #[serde(alias = "User")]
    User,
    #[serde(alias = "Admin")]
    Admin,
}

/// The authenticated user's profile, as returned by login and persisted with
/// the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl User {
    /// Full name when both parts are known, else the email local part.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            _ => self
                .email
                .split('@')
                .next()
                .filter(|part| !part.is_empty())
                .unwrap_or("User")
                .to_owned(),
        }
    }

    /// Short greeting name for the dashboard header.
    pub fn greeting_name(&self) -> String {
        if let Some(first) = &self.first_name {
            if !first.is_empty() {
                return first.clone();
            }
        }
        self.display_name()
    }

    /// Two-letter avatar initials: name initials, else derived from the email
    /// local part (`jane.doe@...` gives `JD`).
    pub fn initials(&self) -> String {
        if let (Some(first), Some(last)) = (&self.first_name, &self.last_name) {
            if let (Some(a), Some(b)) = (first.chars().next(), last.chars().next()) {
                return format!("{a}{b}").to_uppercase();
            }
        }
        let local = self.email.split('@').next().unwrap_or_default();
        let mut parts = local.split('.');
        if let (Some(a), Some(b)) = (parts.next(), parts.next()) {
            if let (Some(a), Some(b)) = (a.chars().next(), b.chars().next()) {
                return format!("{a}{b}").to_uppercase();
            }
        }
        let short: String = local.chars().take(2).collect();
        if short.is_empty() {
            "U".to_owned()
        } else {
            short.to_uppercase()
        }
    }
}

/// A catalog entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub isbn: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub genre: Option<String>,
    pub total_copies: u32,
    pub available_copies: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
}

impl Book {
    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }
}

/// Loan lifecycle status. The API emits `On Loan`/`Overdue`/`Returned`; the
/// lowercase aliases cover records written by the previous backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanStatus {
    #[default]
    #[serde(rename = "On Loan", alias = "active", alias = "Active")]
    OnLoan,
    #[serde(alias = "overdue")]
    Overdue,
    #[serde(alias = "returned")]
    Returned,
}

/// A borrowing record. Dates are ISO-8601 strings straight off the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: i64,
    #[serde(default)]
    pub book: Option<Book>,
    /// Borrower; only populated on the admin all-loans listing.
    #[serde(default)]
    pub user: Option<User>,
    pub loan_date: String,
    pub expiration_date: String,
    #[serde(default)]
    pub return_date: Option<String>,
    #[serde(default)]
    pub status: LoanStatus,
    #[serde(default)]
    pub fine_amount: f64,
    #[serde(default)]
    pub renewals: u32,
}

/// Partial book details from the ISBN lookup used to prefill the admin form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookPreview {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
}

/// Create/update payload for a catalog entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookInput {
    pub isbn: String,
    pub title: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    pub total_copies: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

/// Registration payload. New accounts always sign up as plain users.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

#[derive(Clone, Debug, Serialize)]
pub struct ReserveRequest {
    pub book_id: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoanEnvelope {
    pub loan: Loan,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ReturnResponse {
    #[serde(default)]
    pub final_fine_amount: f64,
}

/// Admin inventory counters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    #[serde(default)]
    pub total_books: u32,
    #[serde(default)]
    pub total_copies: u32,
}

/// Admin loan/fine counters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoanStats {
    #[serde(default)]
    pub active: u32,
    #[serde(default)]
    pub overdue: u32,
    #[serde(default)]
    pub pending_fines: f64,
    #[serde(default)]
    pub unpaid: u32,
}
