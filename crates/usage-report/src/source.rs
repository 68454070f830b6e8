//! Usage records and the table built from them

use crate::table::{ReportTable, RowEntry};
use crate::types::{ReportError, Result};
use std::path::Path;

/// Aggregated request count for one API / application / user combination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageRecord {
    pub api_name: String,
    pub api_version: String,
    pub application_name: String,
    pub application_owner: String,
    pub request_count: u64,
}

/// Load usage records from a CSV file.
///
/// Expected columns, after a header line: API name, API version,
/// application name, application owner, request count. Missing fields read
/// as empty text and an unparsable count reads as zero.
pub async fn load_usage_csv(path: impl AsRef<Path>) -> Result<Vec<UsageRecord>> {
    let path = path.as_ref().to_owned();
    let contents = tokio::fs::read_to_string(&path).await?;

    let records = tokio::task::spawn_blocking(move || parse_usage_csv(&contents)).await??;

    Ok(records)
}

fn parse_usage_csv(contents: &str) -> Result<Vec<UsageRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes());
    let mut records = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() < 5 {
            log::warn!("CSV record {} has only {} fields", idx + 1, record.len());
        }
        let field = |i: usize| record.get(i).unwrap_or("").to_string();

        let count_text = record.get(4).unwrap_or("");
        let request_count = count_text.parse::<u64>().unwrap_or_else(|_| {
            log::warn!(
                "CSV record {} has a non-numeric request count '{}'",
                idx + 1,
                count_text
            );
            0
        });

        records.push(UsageRecord {
            api_name: field(0),
            api_version: field(1),
            application_name: field(2),
            application_owner: field(3),
            request_count,
        });
    }

    Ok(records)
}

/// Strip the tenant domain from a user name (`alice@carbon.super` -> `alice`)
fn owner_without_domain(owner: &str) -> &str {
    owner.split('@').next().unwrap_or(owner)
}

impl ReportTable {
    /// Build the report table from usage records, in the given order.
    ///
    /// Each row is numbered `1)`, `2)`, ... and the running total is the sum
    /// of all request counts. A total that does not fit in a `u64` is an
    /// error rather than a clamped value.
    pub fn from_usage_records(column_headers: Vec<String>, records: &[UsageRecord]) -> Result<Self> {
        let mut running_total: u64 = 0;
        let mut rows = Vec::with_capacity(records.len());

        for (idx, record) in records.iter().enumerate() {
            running_total = running_total
                .checked_add(record.request_count)
                .ok_or(ReportError::TotalOverflow { record: idx + 1 })?;

            rows.push(RowEntry::new([
                format!("{})", idx + 1),
                record.api_name.clone(),
                record.api_version.clone(),
                record.application_name.clone(),
                owner_without_domain(&record.application_owner).to_string(),
                record.request_count.to_string(),
            ]));
        }

        ReportTable::new(column_headers, rows, running_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ReportOptions;

    #[test]
    fn test_owner_without_domain() {
        assert_eq!(owner_without_domain("alice@carbon.super"), "alice");
        assert_eq!(owner_without_domain("bob"), "bob");
        assert_eq!(owner_without_domain(""), "");
    }

    #[test]
    fn test_parse_usage_csv() {
        let csv = "api,version,app,owner,count\n\
                   Pizza,1.0.0,Shop,alice@carbon.super,42\n\
                   Weather,v2,Forecast,bob,7\n";
        let records = parse_usage_csv(csv).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].api_name, "Pizza");
        assert_eq!(records[0].request_count, 42);
        assert_eq!(records[1].application_owner, "bob");
    }

    #[test]
    fn test_parse_usage_csv_recovers_bad_fields() {
        let csv = "api,version,app,owner,count\n\
                   Pizza,1.0.0\n\
                   Weather,v2,Forecast,bob,lots\n";
        let records = parse_usage_csv(csv).unwrap();
        assert_eq!(records[0].application_name, "");
        assert_eq!(records[0].request_count, 0);
        assert_eq!(records[1].request_count, 0);
    }

    #[test]
    fn test_table_from_usage_records() {
        let records = vec![
            UsageRecord {
                api_name: "Pizza".into(),
                api_version: "1.0.0".into(),
                application_name: "Shop".into(),
                application_owner: "alice@carbon.super".into(),
                request_count: 40,
            },
            UsageRecord {
                api_name: "Weather".into(),
                api_version: "v2".into(),
                application_name: "Forecast".into(),
                application_owner: "bob".into(),
                request_count: 2,
            },
        ];
        let headers = ReportOptions::default().column_headers;
        let table = ReportTable::from_usage_records(headers, &records).unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.running_total(), 42);
        assert_eq!(table.rows()[0].cell(0), "1)");
        assert_eq!(table.rows()[0].cell(4), "alice");
        assert_eq!(table.rows()[1].cell(0), "2)");
        assert_eq!(table.rows()[1].cell(5), "2");
    }

    #[test]
    fn test_running_total_overflow_is_an_error() {
        let record = UsageRecord {
            api_name: "Pizza".into(),
            api_version: "1.0.0".into(),
            application_name: "Shop".into(),
            application_owner: "alice".into(),
            request_count: u64::MAX / 2,
        };
        let records = vec![record; 1000];
        let headers = ReportOptions::default().column_headers;

        match ReportTable::from_usage_records(headers, &records) {
            Err(ReportError::TotalOverflow { record }) => assert_eq!(record, 3),
            _ => panic!("Expected TotalOverflow error"),
        }
    }
}
