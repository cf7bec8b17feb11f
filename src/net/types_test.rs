use super::*;

fn user(first: Option<&str>, last: Option<&str>, email: &str, role: Role) -> User {
    User {
        id: 1,
        email: email.to_owned(),
        role,
        first_name: first.map(str::to_owned),
        last_name: last.map(str::to_owned),
    }
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_decodes_lowercase_and_capitalized() {
    assert_eq!(serde_json::from_str::<Role>(r#""admin""#).unwrap(), Role::Admin);
    assert_eq!(serde_json::from_str::<Role>(r#""Admin""#).unwrap(), Role::Admin);
    assert_eq!(serde_json::from_str::<Role>(r#""user""#).unwrap(), Role::User);
    assert_eq!(serde_json::from_str::<Role>(r#""User""#).unwrap(), Role::User);
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
}

// =============================================================
// LoanStatus spellings
// =============================================================

#[test]
fn loan_status_decodes_canonical_spellings() {
    assert_eq!(
        serde_json::from_str::<LoanStatus>(r#""On Loan""#).unwrap(),
        LoanStatus::OnLoan
    );
    assert_eq!(
        serde_json::from_str::<LoanStatus>(r#""Overdue""#).unwrap(),
        LoanStatus::Overdue
    );
    assert_eq!(
        serde_json::from_str::<LoanStatus>(r#""Returned""#).unwrap(),
        LoanStatus::Returned
    );
}

#[test]
fn loan_status_decodes_legacy_lowercase() {
    assert_eq!(
        serde_json::from_str::<LoanStatus>(r#""active""#).unwrap(),
        LoanStatus::OnLoan
    );
    assert_eq!(
        serde_json::from_str::<LoanStatus>(r#""overdue""#).unwrap(),
        LoanStatus::Overdue
    );
    assert_eq!(
        serde_json::from_str::<LoanStatus>(r#""returned""#).unwrap(),
        LoanStatus::Returned
    );
}

#[test]
fn loan_status_serializes_canonical() {
    assert_eq!(serde_json::to_string(&LoanStatus::OnLoan).unwrap(), r#""On Loan""#);
}

// =============================================================
// Loan decoding defaults
// =============================================================

#[test]
fn loan_decodes_with_missing_optional_fields() {
    let loan: Loan = serde_json::from_str(
        r#"{
            "id": 7,
            "loan_date": "2026-07-01T10:00:00",
            "expiration_date": "2026-07-15T10:00:00",
            "status": "On Loan"
        }"#,
    )
    .unwrap();
    assert!(loan.book.is_none());
    assert!(loan.user.is_none());
    assert!(loan.return_date.is_none());
    assert_eq!(loan.renewals, 0);
    assert!((loan.fine_amount - 0.0).abs() < f64::EPSILON);
}

// =============================================================
// Book availability
// =============================================================

#[test]
fn book_with_zero_available_copies_is_unavailable() {
    let book = Book {
        total_copies: 10,
        available_copies: 0,
        ..Book::default()
    };
    assert!(!book.is_available());
}

#[test]
fn book_with_copies_is_available() {
    let book = Book {
        total_copies: 10,
        available_copies: 3,
        ..Book::default()
    };
    assert!(book.is_available());
}

// =============================================================
// User display helpers
// =============================================================

#[test]
fn display_name_prefers_full_name() {
    let u = user(Some("Jane"), Some("Doe"), "jane@example.com", Role::User);
    assert_eq!(u.display_name(), "Jane Doe");
}

#[test]
fn display_name_falls_back_to_email_local_part() {
    let u = user(None, None, "jane.doe@example.com", Role::User);
    assert_eq!(u.display_name(), "jane.doe");
}

#[test]
fn greeting_name_prefers_first_name() {
    let u = user(Some("Jane"), Some("Doe"), "jane@example.com", Role::User);
    assert_eq!(u.greeting_name(), "Jane");
}

#[test]
fn initials_from_names() {
    let u = user(Some("jane"), Some("doe"), "x@example.com", Role::User);
    assert_eq!(u.initials(), "JD");
}

#[test]
fn initials_from_dotted_email() {
    let u = user(None, None, "jane.doe@example.com", Role::User);
    assert_eq!(u.initials(), "JD");
}

#[test]
fn initials_from_plain_email() {
    let u = user(None, None, "admin@library.com", Role::Admin);
    assert_eq!(u.initials(), "AD");
}
