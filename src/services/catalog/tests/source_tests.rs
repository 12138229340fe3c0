use super::*;

fn sample_body() -> Value {
    serde_json::json!({
        "query_result": { "data": { "rows": [
            { "part_number": "ABC123", "product": "Widget", "category": "Fasteners",
              "brand": "Acme", "cost": 12.5, "tier_1": 1,
              "p_id": 1, "pc_id": 7, "ib_id": 3 },
            { "part_number": null, "product": "Gadget", "category": "Bearings",
              "brand": "Bolts Inc", "cost": 3.0, "tier_1": 2,
              "p_id": 2, "pc_id": 8, "ib_id": 4 }
        ]}}
    })
}

#[test]
fn test_parse_catalog_rows() {
    let rows = parse_catalog_rows(&sample_body()).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].p_id, 1);
    assert_eq!(rows[0].part_number.as_deref(), Some("ABC123"));
    assert_eq!(rows[0].cost, 12.5);
    assert_eq!(rows[1].part_number, None);
    assert_eq!(rows[1].tier_1, 2.0);
}

#[test]
fn test_missing_envelope_fails_fast() {
    let err = parse_catalog_rows(&serde_json::json!({ "data": [] })).unwrap_err();
    assert!(matches!(err, AppError::MalformedCatalog(_)));
}

#[test]
fn test_missing_column_fails_fast() {
    // "cost" missing from the row: hard failure, not a skipped record.
    let body = serde_json::json!({
        "query_result": { "data": { "rows": [
            { "part_number": "A", "product": "B", "category": "C", "brand": "D",
              "tier_1": 1, "p_id": 1, "pc_id": 1, "ib_id": 1 }
        ]}}
    });
    let err = parse_catalog_rows(&body).unwrap_err();
    assert!(matches!(err, AppError::MalformedCatalog(_)));
}

#[test]
fn test_fetch_failure_is_surfaced() {
    // Nothing listens here; the transport error must map to CatalogFetch.
    let source = RedashSource::new("http://127.0.0.1:9/api/queries/1/results.json");
    match source.fetch() {
        Err(AppError::CatalogFetch(_)) => {}
        other => panic!("expected CatalogFetch, got {other:?}"),
    }
}
