//! Shared client-side state.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `books`, `loans`, `admin`) so pages
//! depend on small focused models, and the decision logic in each module is
//! plain functions over the wire types so it tests without a browser.

pub mod admin;
pub mod books;
pub mod loans;
pub mod session;
