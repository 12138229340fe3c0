//! Matcher engine: scores one needle row against the whole haystack,
//! ranks candidates, and keeps the two best with derived metrics.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::services::matcher::aggregate::FieldScores;
use crate::services::matcher::dataset::{CatalogEntry, Haystack, NeedleRow};
use crate::services::matcher::similarity::{similarity, Metric};
use crate::types::errors::{AppError, AppResult};
use crate::types::records::ResultRow;

/// Score every needle row against the haystack.
///
/// Rows are independent, so scoring runs in parallel across needle rows;
/// results come back in input order. Each call keeps its scratch maps
/// local — nothing in the haystack is mutated.
pub fn match_all(
    needles: &[NeedleRow],
    haystack: &Haystack,
    metric: Metric,
) -> AppResult<Vec<ResultRow>> {
    ensure_catalog_size(haystack)?;
    needles
        .par_iter()
        .map(|needle| match_one(needle, haystack, metric))
        .collect()
}

/// Match a single needle row, returning the top-2 result row.
///
/// Requires at least 2 catalog entries; top-2 selection never degrades to
/// partial output.
pub fn match_one(needle: &NeedleRow, haystack: &Haystack, metric: Metric) -> AppResult<ResultRow> {
    ensure_catalog_size(haystack)?;

    // Category/brand text repeats across many entries; score each distinct
    // id once and broadcast the result back by id. Scores are identical to
    // direct per-entry scoring.
    let category_scores: HashMap<i64, Option<f64>> = haystack
        .categories
        .iter()
        .map(|(id, text)| {
            let score = similarity(needle.category_clean.as_deref(), text.clean.as_deref(), metric);
            (*id, score)
        })
        .collect();
    let brand_scores: HashMap<i64, Option<f64>> = haystack
        .brands
        .iter()
        .map(|(id, text)| {
            let score = similarity(needle.brand_clean.as_deref(), text.clean.as_deref(), metric);
            (*id, score)
        })
        .collect();

    let mut ranked: Vec<(usize, f64)> = haystack
        .entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let scores = FieldScores {
                part_number: similarity(
                    needle.part_number_clean.as_deref(),
                    entry.part_number_clean.as_deref(),
                    metric,
                ),
                product: similarity(
                    needle.product_clean.as_deref(),
                    entry.product_clean.as_deref(),
                    metric,
                ),
                category: category_scores.get(&entry.pc_id).copied().flatten(),
                brand: brand_scores.get(&entry.ib_id).copied().flatten(),
            };
            (index, scores.weighted_mean())
        })
        .collect();

    // Stable sort: score descending, then tier ascending (lower tier wins
    // score ties), then original catalog order.
    ranked.sort_by(|a, b| {
        b.1.total_cmp(&a.1).then_with(|| {
            haystack.entries[a.0]
                .tier_1
                .total_cmp(&haystack.entries[b.0].tier_1)
        })
    });

    let (best_index, best_score) = ranked[0];
    let (second_index, second_score) = ranked[1];
    let best = &haystack.entries[best_index];
    let second = &haystack.entries[second_index];

    #[cfg(feature = "debug_matcher")]
    log::debug!(
        "needle {:?}: best p_id={} score={:.4}, second p_id={} score={:.4}",
        needle.record,
        best.p_id,
        best_score,
        second.p_id,
        second_score
    );

    let score1 = round2(100.0 * best_score);
    let score2 = round2(100.0 * second_score);
    let delta_score = round2(100.0 * (best_score - second_score));
    let relative_error = if score1 == 0.0 {
        None
    } else {
        Some(round2(100.0 * (score1 - score2) / score1))
    };

    Ok(ResultRow {
        details: details_concat(needle),
        match1: match_concat(needle, best),
        match2: match_concat(needle, second),
        match1_cost: best.cost,
        match1_tier_1: best.tier_1,
        match2_cost: second.cost,
        match2_tier_1: second.tier_1,
        id1: best.p_id,
        id2: second.p_id,
        score1,
        score2,
        delta_score,
        relative_error,
    })
}

fn ensure_catalog_size(haystack: &Haystack) -> AppResult<()> {
    if haystack.len() < 2 {
        return Err(AppError::InsufficientCatalog(haystack.len()));
    }
    Ok(())
}

fn has_value(field: Option<&str>) -> bool {
    field.is_some_and(|text| !text.trim().is_empty())
}

/// `|`-delimited concatenation of the needle's own non-empty field
/// values, in fixed field order.
fn details_concat(needle: &NeedleRow) -> String {
    let mut out = String::from("|");
    for field in [
        needle.record.part_number.as_deref(),
        needle.record.product.as_deref(),
        needle.record.category.as_deref(),
        needle.record.brand.as_deref(),
    ] {
        if has_value(field) {
            out.push_str(field.unwrap_or(""));
            out.push('|');
        }
    }
    out
}

/// `|`-delimited concatenation of the matched entry's values, emitting a
/// field only if the needle supplied it. Mirrors which fields the query
/// actually asked about, in fixed field order.
fn match_concat(needle: &NeedleRow, entry: &CatalogEntry) -> String {
    let pairs = [
        (
            needle.record.part_number.as_deref(),
            entry.part_number.as_deref(),
        ),
        (needle.record.product.as_deref(), entry.product.as_deref()),
        (needle.record.category.as_deref(), entry.category.as_deref()),
        (needle.record.brand.as_deref(), entry.brand.as_deref()),
    ];

    let mut out = String::from("|");
    for (query_field, entry_value) in pairs {
        if has_value(query_field) {
            out.push_str(entry_value.unwrap_or(""));
            out.push('|');
        }
    }
    out
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
