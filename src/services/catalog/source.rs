//! Remote catalog data source.
//!
//! The matcher depends on the abstract `CatalogSource` contract; the
//! concrete `RedashSource` does one blocking GET against a query endpoint
//! returning `query_result.data.rows` and fails fast on transport or
//! shape errors. No retries: a fetch failure is surfaced to the caller
//! as-is.

use std::time::Duration;

use serde_json::Value;

use crate::types::errors::{AppError, AppResult};
use crate::types::records::CatalogRow;

const FETCH_TIMEOUT_SECS: u64 = 30;

/// Abstract catalog provider: one fetch returning the full reference
/// table.
pub trait CatalogSource {
    fn fetch(&self) -> AppResult<Vec<CatalogRow>>;
}

/// HTTP+JSON query endpoint (Redash-style result envelope).
#[derive(Debug, Clone)]
pub struct RedashSource {
    endpoint: String,
}

impl RedashSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl CatalogSource for RedashSource {
    fn fetch(&self) -> AppResult<Vec<CatalogRow>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::CatalogFetch(e.to_string()))?;

        log::info!("Fetching catalog from query endpoint");
        let response = client
            .get(&self.endpoint)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| AppError::CatalogFetch(e.to_string()))?;

        let body: Value = response
            .json()
            .map_err(|e| AppError::MalformedCatalog(format!("response is not JSON: {e}")))?;

        parse_catalog_rows(&body)
    }
}

/// Extract `query_result.data.rows` from the response envelope and decode
/// every row. Any missing or mis-typed column is a hard failure.
pub fn parse_catalog_rows(body: &Value) -> AppResult<Vec<CatalogRow>> {
    let rows = body
        .get("query_result")
        .and_then(|v| v.get("data"))
        .and_then(|v| v.get("rows"))
        .ok_or_else(|| AppError::MalformedCatalog("missing query_result.data.rows".to_string()))?;

    let rows: Vec<CatalogRow> =
        serde_json::from_value(rows.clone()).map_err(|e| AppError::MalformedCatalog(e.to_string()))?;

    log::info!("Catalog fetched: {} rows", rows.len());
    Ok(rows)
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
