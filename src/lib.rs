//! # mybookspace
//!
//! Leptos + WASM frontend for the MyBookSpace community library: members
//! browse the catalog, borrow and return books, and track loans and fines;
//! administrators manage inventory, loans, and fines from a dashboard.
//!
//! This crate contains pages, components, application state, the REST API
//! layer, and the local-storage-backed session store. It is entirely
//! presentation-layer; the library REST API it talks to is external.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
