//! End-to-end pipeline test: request-form CSV → needle preparation →
//! catalog haystack → top-2 matching → result export.

use partmatch::services::catalog::parse_catalog_rows;
use partmatch::services::forms;
use partmatch::services::matcher::{match_all, prepare_needle, Haystack, Metric};
use partmatch::types::AppError;

// ─── Fixtures ─────────────────────────────────────────────────────

/// Catalog fixture in the exact shape the remote query endpoint returns.
fn fixture_haystack() -> Haystack {
    let body = serde_json::json!({
        "query_result": { "data": { "rows": [
            { "part_number": "ABC123", "product": "Widget", "category": "Fasteners",
              "brand": "Acme", "cost": 12.5, "tier_1": 1,
              "p_id": 1, "pc_id": 7, "ib_id": 3 },
            { "part_number": "XYZ999", "product": "Cooling Fan", "category": "Bearings",
              "brand": "Bolts Inc", "cost": 3.0, "tier_1": 2,
              "p_id": 2, "pc_id": 8, "ib_id": 4 },
            { "part_number": "ABD124", "product": "Widget Pro", "category": "Fasteners",
              "brand": "Acme", "cost": 15.0, "tier_1": 1,
              "p_id": 3, "pc_id": 7, "ib_id": 3 }
        ]}}
    });
    Haystack::new(parse_catalog_rows(&body).unwrap())
}

#[test]
fn test_full_pipeline_resolves_exact_match() {
    let form = "part_number,product,category,brand\nABC-123,Widget,,\n,,Bearings,\n";
    let records = forms::read_request_form(form.as_bytes()).unwrap();
    let needles = prepare_needle(records);
    let haystack = fixture_haystack();

    let results = match_all(&needles, &haystack, Metric::Jaccard).unwrap();
    assert_eq!(results.len(), 2);

    // Row 1: normalization bridges "ABC-123" to the catalog's "ABC123".
    let first = &results[0];
    assert_eq!(first.id1, 1);
    assert_eq!(first.score1, 100.0);
    assert_eq!(first.details, "|ABC-123|Widget|");
    assert_eq!(first.match1, "|ABC123|Widget|");
    assert_eq!(first.match1_cost, 12.5);
    assert_eq!(first.match1_tier_1, 1.0);
    assert!(first.score2 < first.score1);

    // Row 2: category-only query carries full category weight and the
    // matched-fields string mirrors the one supplied field.
    let second = &results[1];
    assert_eq!(second.id1, 2);
    assert_eq!(second.score1, 100.0);
    assert_eq!(second.details, "|Bearings|");
    assert_eq!(second.match1, "|Bearings|");
}

#[test]
fn test_full_pipeline_exports_results() {
    let form = "part_number,product,category,brand\nABC-123,,,Acme\n";
    let needles = prepare_needle(forms::read_request_form(form.as_bytes()).unwrap());
    let results = match_all(&needles, &fixture_haystack(), Metric::Jaccard).unwrap();

    let mut buf = Vec::new();
    forms::write_results(&mut buf, &results, true).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(text.lines().next().unwrap().contains("relative_error"));
    assert!(text.contains("|ABC123|Acme|"));
}

#[test]
fn test_full_pipeline_rejects_tiny_catalog() {
    let body = serde_json::json!({
        "query_result": { "data": { "rows": [
            { "part_number": "ABC123", "product": "Widget", "category": "Fasteners",
              "brand": "Acme", "cost": 12.5, "tier_1": 1,
              "p_id": 1, "pc_id": 7, "ib_id": 3 }
        ]}}
    });
    let haystack = Haystack::new(parse_catalog_rows(&body).unwrap());
    let needles = prepare_needle(forms::read_request_form(
        "part_number,product,category,brand\nABC-123,,,\n".as_bytes(),
    )
    .unwrap());

    let err = match_all(&needles, &haystack, Metric::Jaccard).unwrap_err();
    assert!(matches!(err, AppError::InsufficientCatalog(1)));
}

#[test]
fn test_levenshtein_metric_end_to_end() {
    let form = "part_number,product,category,brand\nABC-123,Widget,,\n";
    let needles = prepare_needle(forms::read_request_form(form.as_bytes()).unwrap());
    let results = match_all(&needles, &fixture_haystack(), Metric::Levenshtein).unwrap();
    assert_eq!(results[0].id1, 1);
    assert_eq!(results[0].score1, 100.0);
}
