//! Fuzzy multi-field matcher — the core of partmatch.
//!
//! Resolves each request-form row against the full catalog by scoring the
//! four text fields independently, aggregating them into one weighted
//! score per candidate, and keeping the two best candidates with
//! confidence metrics.

pub mod aggregate;
pub mod dataset;
pub mod engine;
pub mod normalizer;
pub mod similarity;

pub use aggregate::FieldScores;
pub use dataset::{prepare_needle, CatalogEntry, Haystack, NeedleRow};
pub use engine::{match_all, match_one};
pub use similarity::Metric;
