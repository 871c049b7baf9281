//! Integration tests for the upload-to-dashboard path.

use std::io::Write;
use tempfile::NamedTempFile;

use plastpartner::{
    export, ingest, Dashboard, IngestionOutcome, MemoryStore, Parser, PlastError, ReportConfig,
    SalesStore, Scope, TableValidator, TenantId,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

const HEADER: &str = "Dato for salg,Kategori,Helt/delvis av plast,Enheter solgt,Tonn plast";

// =============================================================================
// Upload Validation Tests
// =============================================================================

#[test]
fn test_valid_upload_is_accepted() {
    let content = format!(
        "{HEADER}\n\
         2022-03-15,Matbeholder,Helt av plast,100,0.5\n\
         2022-06-01,Drikkebegre,Delvis av plast,40,\n\
         2023-01-10,Drikkebegre,Helt av plast,150,0\n"
    );
    let file = create_test_file(&content);

    let (table, metadata) = Parser::new().parse_file(file.path()).expect("Parse failed");
    assert_eq!(metadata.row_count, 3);
    assert_eq!(metadata.column_count, 5);

    let config = ReportConfig::default();
    let rows = TableValidator::new(&config.schema)
        .accept(&table)
        .expect("Upload should be accepted");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1].tonnes_plastic, None);
    assert_eq!(rows[2].tonnes_plastic, Some(0.0));
}

#[test]
fn test_template_validates_cleanly() {
    let config = ReportConfig::default();
    let template = config.schema.template_csv();
    let table = Parser::new().parse_bytes(template.as_bytes()).unwrap();
    let report = TableValidator::new(&config.schema).validate_table(&table);
    assert!(report.is_accepted());
    assert!(report.unexpected_columns.is_empty());
}

#[test]
fn test_missing_column_rejects_whole_upload() {
    let content = "Dato for salg,Helt/delvis av plast,Enheter solgt\n\
                   2022-03-15,Helt av plast,100\n";
    let table = Parser::new().parse_bytes(content.as_bytes()).unwrap();

    let config = ReportConfig::default();
    let report = TableValidator::new(&config.schema)
        .accept(&table)
        .expect_err("Upload should be rejected");
    assert_eq!(report.missing_columns, vec!["Kategori".to_string()]);
    assert!(report.row_errors.is_empty());
}

#[test]
fn test_row_errors_report_spreadsheet_rows() {
    let content = format!(
        "{HEADER},Butikk\n\
         2022-03-15,Matbeholder,Helt av plast,100,0.5,Oslo\n\
         2022-03-16,Tallerken,Helt av plast,0,,Bergen\n\
         2022-03-17,Matbeholder,Helt av plast,abc,-1,Trondheim\n"
    );
    let table = Parser::new().parse_bytes(content.as_bytes()).unwrap();

    let config = ReportConfig::default();
    let report = TableValidator::new(&config.schema).validate_table(&table);

    assert_eq!(report.unexpected_columns, vec!["Butikk".to_string()]);
    assert_eq!(report.row_errors.len(), 2);

    let first = &report.row_errors[0];
    assert_eq!(first.row_index, 3);
    assert_eq!(first.errors.len(), 2);
    assert_eq!(first.errors[0].column, "Kategori");
    assert_eq!(first.errors[1].column, "Enheter solgt");

    let second = &report.row_errors[1];
    assert_eq!(second.row_index, 4);
    assert!(second.errors[0].message.contains("not a valid number"));
    assert!(second.errors[1].message.contains("cannot be negative"));
}

#[test]
fn test_header_only_upload_is_valid_and_empty() {
    let table = Parser::new().parse_bytes(format!("{HEADER}\n").as_bytes()).unwrap();
    let config = ReportConfig::default();
    let rows = TableValidator::new(&config.schema).accept(&table).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_ragged_line_is_structural_error() {
    let content = format!("{HEADER}\n2022-03-15,Matbeholder\n");
    let err = Parser::new().parse_bytes(content.as_bytes()).unwrap_err();
    assert!(matches!(err, PlastError::Parse { line: 2, .. }));
}

// =============================================================================
// End-to-End Tests
// =============================================================================

#[tokio::test]
async fn test_upload_ingest_dashboard_export() {
    let config = ReportConfig::default();
    let store = MemoryStore::new();
    let acme = TenantId::new("Acme").unwrap();
    let other = TenantId::new("Other").unwrap();

    let acme_upload = format!(
        "{HEADER}\n\
         2022-03-15,Matbeholder,Helt av plast,50,\n\
         2023-03-15,Matbeholder,Helt av plast,75,\n"
    );
    let other_upload = format!(
        "{HEADER}\n\
         2022-05-01,Drikkebegre,Delvis av plast,150,\n\
         2023-05-01,Drikkebegre,Delvis av plast,225,\n"
    );

    for (tenant, upload) in [(&acme, acme_upload), (&other, other_upload)] {
        let table = Parser::new().parse_bytes(upload.as_bytes()).unwrap();
        let rows = TableValidator::new(&config.schema).accept(&table).unwrap();
        let result = ingest(&store, tenant, rows).await;
        assert_eq!(result.outcome(), IngestionOutcome::Complete);
    }

    let mine = store.records(Scope::Tenant(&acme)).await.unwrap();
    let all = store.records(Scope::All).await.unwrap();
    let dashboard = Dashboard::build(&acme, &mine, &all, &config, 2023);

    assert_eq!(dashboard.total_company, 125);
    assert_eq!(dashboard.total_industry, 500);
    let growth = dashboard.growth.expect("base year present");
    assert_eq!(growth[0].company, Some(100.0));
    assert_eq!(growth[1].company, Some(150.0));
    assert_eq!(growth[1].industry, Some(150.0));

    let csv = export::sales_csv(&mine).unwrap();
    assert_eq!(csv.lines().count(), 3);
    assert!(csv.contains("15.3.2022;Matbeholder;Helt av plast;50;"));
}
