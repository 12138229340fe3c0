//! partmatch — bulk part-record resolution against a remote product catalog.
//!
//! The library exposes the fuzzy multi-field matcher (`services::matcher`),
//! the catalog data-source boundary (`services::catalog`), and the CSV
//! request-form layer (`services::forms`). The binary in `main.rs` is a
//! thin CLI over these services.

pub mod services;
pub mod types;
