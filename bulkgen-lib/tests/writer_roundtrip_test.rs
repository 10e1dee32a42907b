//! Write a generated template to disk and read it back with calamine to
//! check the on-disk shape.

use calamine::{open_workbook, Data, Reader, Xlsx};

use bulkgen_lib::{
    entity, generate, output_filename, write_template_csv, write_template_xlsx, Market,
    TEMPLATE_COLUMNS,
};

mod common;
use common::sample_survey;

#[test]
fn test_xlsx_round_trip() {
    let survey = sample_survey();
    let template = generate(Market::CUs, &survey).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(output_filename(Market::CUs));
    let path = path.to_string_lossy().to_string();

    write_template_xlsx(&template.rows, &path).unwrap();

    let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
    let names = workbook.sheet_names();
    let sheet = names.first().cloned().unwrap();
    let range = workbook.worksheet_range(&sheet).unwrap();

    let rows: Vec<_> = range.rows().collect();
    assert_eq!(rows.len(), template.row_count() + 1, "header row plus one row per entity");

    // Header row matches the fixed schema
    let headers: Vec<String> = rows[0].iter().map(|c| c.to_string()).collect();
    let expected: Vec<String> = TEMPLATE_COLUMNS.iter().map(|c| c.to_string()).collect();
    assert_eq!(headers, expected);

    // First data row is the first campaign row
    assert_eq!(rows[1][0], Data::String("商品推广".to_string()));
    assert_eq!(rows[1][1], Data::String(entity::CAMPAIGN.to_string()));
    assert_eq!(rows[1][2], Data::String("Create".to_string()));
    // Budget comes back as a number, not a string
    assert_eq!(rows[1][15], Data::Float(15.0));
}

#[test]
fn test_csv_export_matches_schema() {
    let survey = sample_survey();
    let template = generate(Market::CUs, &survey).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preview.csv");
    let path = path.to_string_lossy().to_string();

    write_template_csv(&template.rows, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();

    let header = lines.next().unwrap();
    assert_eq!(header.split(',').count(), TEMPLATE_COLUMNS.len());
    assert!(header.starts_with("产品,实体层级,操作"));

    let body: Vec<&str> = lines.collect();
    assert_eq!(body.len(), template.row_count());
    // Whole-number budget renders without a trailing ".0"
    assert!(body[0].contains(",15,"));
}

#[test]
fn test_write_failure_reports_path() {
    let survey = sample_survey();
    let template = generate(Market::CUs, &survey).unwrap();

    let result = write_template_xlsx(&template.rows, "/nonexistent-dir/out.xlsx");
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("/nonexistent-dir/out.xlsx"));
}
