//! Page components, one per route.

pub mod admin;
pub mod book_details;
pub mod browse;
pub mod dashboard;
pub mod landing;
pub mod login;
pub mod my_loans;
pub mod profile;
pub mod signup;
