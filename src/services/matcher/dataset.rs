//! Dataset preparation: normalized needle rows and the catalog haystack
//! with deduplicated category/brand lookup tables.

use std::collections::BTreeMap;

use crate::services::matcher::normalizer;
use crate::types::records::{CatalogRow, QueryRecord};

/// One request-form row with its derived normalized fields. The raw
/// record is never mutated.
#[derive(Debug, Clone, Default)]
pub struct NeedleRow {
    pub record: QueryRecord,
    pub part_number_clean: Option<String>,
    pub product_clean: Option<String>,
    pub category_clean: Option<String>,
    pub brand_clean: Option<String>,
}

impl NeedleRow {
    pub fn new(record: QueryRecord) -> Self {
        let part_number_clean = normalizer::normalize_field(record.part_number.as_deref());
        let product_clean = normalizer::normalize_field(record.product.as_deref());
        let category_clean = normalizer::normalize_field(record.category.as_deref());
        let brand_clean = normalizer::normalize_field(record.brand.as_deref());
        Self {
            record,
            part_number_clean,
            product_clean,
            category_clean,
            brand_clean,
        }
    }
}

/// Normalize every request row. Row order is preserved.
pub fn prepare_needle(records: Vec<QueryRecord>) -> Vec<NeedleRow> {
    records.into_iter().map(NeedleRow::new).collect()
}

/// Raw + pre-normalized text for one deduplicated category/brand id.
#[derive(Debug, Clone, Default)]
pub struct LookupText {
    pub raw: Option<String>,
    pub clean: Option<String>,
}

/// One catalog entry prepared for matching. Category/brand normalized
/// text lives in the haystack lookup tables, keyed by `pc_id`/`ib_id`.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub part_number: Option<String>,
    pub product: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub part_number_clean: Option<String>,
    pub product_clean: Option<String>,
    pub cost: f64,
    pub tier_1: f64,
    pub p_id: i64,
    pub pc_id: i64,
    pub ib_id: i64,
}

/// The full reference catalog, immutable for the duration of a match run.
#[derive(Debug, Clone, Default)]
pub struct Haystack {
    pub entries: Vec<CatalogEntry>,
    /// Deduplicated category text keyed by `pc_id`.
    pub categories: BTreeMap<i64, LookupText>,
    /// Deduplicated brand text keyed by `ib_id`.
    pub brands: BTreeMap<i64, LookupText>,
}

impl Haystack {
    /// Build from raw catalog rows, pre-normalizing part_number/product
    /// per entry and category/brand once per distinct id.
    pub fn new(rows: Vec<CatalogRow>) -> Self {
        let mut categories: BTreeMap<i64, LookupText> = BTreeMap::new();
        let mut brands: BTreeMap<i64, LookupText> = BTreeMap::new();
        let mut entries = Vec::with_capacity(rows.len());

        for row in rows {
            categories.entry(row.pc_id).or_insert_with(|| LookupText {
                raw: row.category.clone(),
                clean: normalizer::normalize_field(row.category.as_deref()),
            });
            brands.entry(row.ib_id).or_insert_with(|| LookupText {
                raw: row.brand.clone(),
                clean: normalizer::normalize_field(row.brand.as_deref()),
            });

            entries.push(CatalogEntry {
                part_number_clean: normalizer::normalize_field(row.part_number.as_deref()),
                product_clean: normalizer::normalize_field(row.product.as_deref()),
                part_number: row.part_number,
                product: row.product,
                category: row.category,
                brand: row.brand,
                cost: row.cost,
                tier_1: row.tier_1,
                p_id: row.p_id,
                pc_id: row.pc_id,
                ib_id: row.ib_id,
            });
        }

        Self {
            entries,
            categories,
            brands,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/dataset_tests.rs"]
mod tests;
