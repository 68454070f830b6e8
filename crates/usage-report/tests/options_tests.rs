use std::io::Write;
use usage_report::*;

#[test]
fn test_default_options_are_valid() {
    let options = ReportOptions::default();
    assert!(options.validate().is_ok());
    assert_eq!(options.column_headers.len(), 6);
}

#[test]
fn test_validation_header_count() {
    let options = ReportOptions {
        column_headers: vec!["#".to_string(), "API".to_string()],
        ..Default::default()
    };
    match options.validate() {
        Err(ReportError::ColumnMismatch { headers, widths }) => {
            assert_eq!(headers, 2);
            assert_eq!(widths, 6);
        }
        _ => panic!("Expected ColumnMismatch error"),
    }
}

#[test]
fn test_validation_month_names() {
    let mut options = ReportOptions::default();
    options.month_names.pop();
    match options.validate() {
        Err(ReportError::Config(msg)) => assert!(msg.contains("12 month names")),
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_running_total_line() {
    let options = ReportOptions::default();
    assert_eq!(
        options.running_total_line(1234),
        "Total de peticiones realizadas : 1234"
    );
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_options_save_and_load() {
    use tempfile::NamedTempFile;

    let options = ReportOptions {
        title: "Monthly usage summary".to_string(),
        ..Default::default()
    };

    let temp = NamedTempFile::new().unwrap();
    options.save(temp.path()).await.unwrap();

    let loaded = ReportOptions::load(temp.path()).await.unwrap();
    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_partial_options_fill_defaults() {
    use tempfile::NamedTempFile;

    let mut temp = NamedTempFile::new().unwrap();
    write!(temp, r#"{{ "title": "Monthly usage summary" }}"#).unwrap();

    let loaded = ReportOptions::load(temp.path()).await.unwrap();
    assert_eq!(loaded.title, "Monthly usage summary");
    assert_eq!(loaded.column_headers, ReportOptions::default().column_headers);
    assert_eq!(loaded.month_names.len(), 12);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_malformed_options_are_config_errors() {
    use tempfile::NamedTempFile;

    let mut temp = NamedTempFile::new().unwrap();
    write!(temp, "not json").unwrap();

    match ReportOptions::load(temp.path()).await {
        Err(ReportError::Config(msg)) => assert!(msg.contains("Failed to parse config")),
        _ => panic!("Expected Config error"),
    }
}

#[tokio::test]
async fn test_load_usage_csv() {
    use tempfile::NamedTempFile;

    let mut temp = NamedTempFile::new().unwrap();
    writeln!(temp, "api,version,application,owner,count").unwrap();
    writeln!(temp, "PizzaShack, 1.0.0, DefaultApplication, admin@carbon.super, 12").unwrap();
    writeln!(temp, "Weather,2.1,Forecast,ana@tenant.com,30").unwrap();
    writeln!(temp, "Broken,1.0,NoCount,bob").unwrap();
    temp.flush().unwrap();

    let records = load_usage_csv(temp.path()).await.unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].api_name, "PizzaShack");
    assert_eq!(records[0].request_count, 12);
    assert_eq!(records[2].application_owner, "bob");
    assert_eq!(records[2].request_count, 0);

    let table =
        ReportTable::from_usage_records(ReportOptions::default().column_headers, &records)
            .unwrap();
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.running_total(), 42);
    assert_eq!(table.rows()[0].cell(0), "1)");
    assert_eq!(table.rows()[0].cell(4), "admin");
    assert_eq!(table.rows()[1].cell(4), "ana");
    assert_eq!(table.rows()[2].cell(5), "0");
}

#[tokio::test]
async fn test_load_missing_csv_is_io_error() {
    let result = load_usage_csv("/nonexistent/usage.csv").await;
    assert!(matches!(result, Err(ReportError::Io(_))));
}
