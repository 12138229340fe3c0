//! CSV request-form layer: blank template export, request-form parsing,
//! and result export. This is the concrete tabular boundary standing in
//! for the spreadsheet front-end.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::types::errors::AppResult;
use crate::types::records::{QueryRecord, ResultRow};

/// Request-form column headers, in fixed field order. Case-sensitive.
pub const FORM_COLUMNS: [&str; 4] = ["part_number", "product", "category", "brand"];

/// Number of blank rows in the exported template.
pub const TEMPLATE_ROWS: usize = 20;

/// Write a blank request-form template: header plus `TEMPLATE_ROWS`
/// empty rows.
pub fn write_template<W: Write>(writer: W) -> AppResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(FORM_COLUMNS)?;
    for _ in 0..TEMPLATE_ROWS {
        csv_writer.write_record(["", "", "", ""])?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_template_file(path: &Path) -> AppResult<()> {
    write_template(File::create(path)?)
}

/// Read a filled-out request form. Empty and whitespace-only cells become
/// absent fields. Rows with no usable field at all are kept — validity is
/// the caller's concern.
pub fn read_request_form<R: Read>(reader: R) -> AppResult<Vec<QueryRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let record: QueryRecord = row?;
        records.push(blank_to_absent(record));
    }
    Ok(records)
}

pub fn read_request_form_file(path: &Path) -> AppResult<Vec<QueryRecord>> {
    read_request_form(File::open(path)?)
}

fn blank_to_absent(record: QueryRecord) -> QueryRecord {
    let drop_blank = |field: Option<String>| field.filter(|s| !s.trim().is_empty());
    QueryRecord {
        part_number: drop_blank(record.part_number),
        product: drop_blank(record.product),
        category: drop_blank(record.category),
        brand: drop_blank(record.brand),
    }
}

/// Write match results. The summary layout mirrors the user-facing result
/// sheet; `full` adds ids, scores, delta and relative error.
pub fn write_results<W: Write>(writer: W, rows: &[ResultRow], full: bool) -> AppResult<()> {
    if full {
        return write_results_full(writer, rows);
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "details",
        "match1",
        "match2",
        "match1_cost",
        "match1_tier_1",
        "match2_cost",
        "match2_tier_1",
    ])?;
    for row in rows {
        csv_writer.write_record(&[
            row.details.clone(),
            row.match1.clone(),
            row.match2.clone(),
            row.match1_cost.to_string(),
            row.match1_tier_1.to_string(),
            row.match2_cost.to_string(),
            row.match2_tier_1.to_string(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn write_results_full<W: Write>(writer: W, rows: &[ResultRow]) -> AppResult<()> {
    // Headers come from the ResultRow field names, in declaration order.
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_results_file(path: &Path, rows: &[ResultRow], full: bool) -> AppResult<()> {
    write_results(File::create(path)?, rows, full)
}

#[cfg(test)]
#[path = "tests/forms_tests.rs"]
mod tests;
