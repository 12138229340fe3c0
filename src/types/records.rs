use serde::{Deserialize, Serialize};

/// One row of the uploaded request form. All fields are optional free
/// text; at least one of part_number/product is expected for meaningful
/// results (caller's responsibility, not enforced here).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryRecord {
    pub part_number: Option<String>,
    pub product: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
}

/// One catalog row as returned by the remote query endpoint
/// (`query_result.data.rows`).
///
/// `pc_id`/`ib_id` identify a category/brand description shared across
/// many rows; the dataset preparer deduplicates them into lookup tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRow {
    pub part_number: Option<String>,
    pub product: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub cost: f64,
    pub tier_1: f64,
    pub p_id: i64,
    pub pc_id: i64,
    pub ib_id: i64,
}

/// Output row for one query record: the two closest catalog matches plus
/// confidence metrics. Field order is the exported column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub details: String,
    pub match1: String,
    pub match2: String,
    pub match1_cost: f64,
    pub match1_tier_1: f64,
    pub match2_cost: f64,
    pub match2_tier_1: f64,
    pub id1: i64,
    pub id2: i64,
    /// Best/second-best aggregated scores as percentages, 2 decimals.
    pub score1: f64,
    pub score2: f64,
    pub delta_score: f64,
    /// `None` when `score1` is exactly 0 (relative error undefined).
    pub relative_error: Option<f64>,
}
