// CSV summarization: shape, schema, sample rows, and descriptive statistics

use crate::types::{AppError, AppResult};
use std::fmt::Write as _;
use std::path::Path;

const SAMPLE_ROWS: usize = 5;

/// Summarize a CSV file as a textual report: row/column counts, column
/// names, per-column inferred data types, the first five rows, and
/// descriptive statistics for numeric columns.
pub async fn extract(path: &Path) -> String {
    match summarize(path).await {
        Ok(report) => report,
        Err(e) => format!("Error reading CSV: {}", e),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnType {
    Integer,
    Float,
    String,
}

impl ColumnType {
    fn name(self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::String => "string",
        }
    }

    fn is_numeric(self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }
}

async fn summarize(path: &Path) -> AppResult<String> {
    let data = tokio::fs::read_to_string(path).await?;

    let mut reader = csv::Reader::from_reader(data.as_bytes());
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| AppError::Parse(e.to_string()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| AppError::Parse(e.to_string()))?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }

    let columns: Vec<Vec<&str>> = (0..headers.len())
        .map(|i| rows.iter().map(|r| r.get(i).map_or("", |s| s.as_str())).collect())
        .collect();
    let types: Vec<ColumnType> = columns.iter().map(|c| infer_column_type(c)).collect();

    let mut report = String::new();
    let _ = writeln!(
        report,
        "CSV file with {} rows and {} columns.",
        rows.len(),
        headers.len()
    );
    let _ = writeln!(report, "Columns: {}\n", headers.join(", "));

    let _ = writeln!(report, "Column data types:");
    for (name, ty) in headers.iter().zip(&types) {
        let _ = writeln!(report, "- {}: {}", name, ty.name());
    }

    let _ = writeln!(report, "\nFirst {} rows:", SAMPLE_ROWS);
    let _ = writeln!(report, "{}", headers.join(" | "));
    for row in rows.iter().take(SAMPLE_ROWS) {
        let _ = writeln!(report, "{}", row.join(" | "));
    }

    let numeric: Vec<usize> = (0..headers.len())
        .filter(|&i| types[i].is_numeric())
        .collect();
    if !numeric.is_empty() {
        let _ = writeln!(report, "\nNumeric column statistics:");
        for &i in &numeric {
            let values: Vec<f64> = columns[i]
                .iter()
                .filter_map(|v| v.trim().parse::<f64>().ok())
                .collect();
            let _ = writeln!(report, "{}", describe(&headers[i], &values));
        }
    }

    Ok(report)
}

/// Infer a column's data type from its non-empty values: integer when every
/// value parses as an integer, float when every value parses as a number,
/// string otherwise (including all-empty columns).
fn infer_column_type(values: &[&str]) -> ColumnType {
    let non_empty: Vec<&str> = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect();
    if non_empty.is_empty() {
        return ColumnType::String;
    }
    if non_empty.iter().all(|v| v.parse::<i64>().is_ok()) {
        return ColumnType::Integer;
    }
    if non_empty.iter().all(|v| v.parse::<f64>().is_ok()) {
        return ColumnType::Float;
    }
    ColumnType::String
}

/// Render count/mean/std/min/quartiles/max for one numeric column, sample
/// standard deviation as pandas `describe` computes it.
fn describe(name: &str, values: &[f64]) -> String {
    let count = values.len();
    if count == 0 {
        return format!("- {}: count=0", name);
    }

    let mean = values.iter().sum::<f64>() / count as f64;
    let std = if count > 1 {
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        var.sqrt()
    } else {
        0.0
    };

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    format!(
        "- {}: count={}, mean={:.4}, std={:.4}, min={}, 25%={}, 50%={}, 75%={}, max={}",
        name,
        count,
        mean,
        std,
        sorted[0],
        percentile(&sorted, 0.25),
        percentile(&sorted, 0.50),
        percentile(&sorted, 0.75),
        sorted[count - 1],
    )
}

/// Linear-interpolated percentile over an already-sorted slice.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }
    let rank = q * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_report_contains_shape_and_columns() {
        let file = write_csv("name,age,score\nalice,30,91.5\nbob,25,78.0\ncarol,41,88.25\n");
        let report = extract(file.path()).await;

        assert!(report.contains("CSV file with 3 rows and 3 columns."), "{}", report);
        assert!(report.contains("Columns: name, age, score"));
        assert!(report.contains("- name: string"));
        assert!(report.contains("- age: integer"));
        assert!(report.contains("- score: float"));
    }

    #[tokio::test]
    async fn test_report_contains_sample_rows_and_stats() {
        let file = write_csv("x\n1\n2\n3\n4\n5\n6\n7\n");
        let report = extract(file.path()).await;

        // Only the first five data rows are rendered
        assert!(report.contains("First 5 rows:"));
        assert!(report.contains("\n5\n"));
        assert!(!report.contains("\n6\n"));

        // Stats over all seven values
        assert!(report.contains("Numeric column statistics:"));
        assert!(report.contains("count=7"));
        assert!(report.contains("mean=4.0000"));
        assert!(report.contains("min=1"));
        assert!(report.contains("max=7"));
    }

    #[tokio::test]
    async fn test_ragged_csv_yields_error_string() {
        let file = write_csv("a,b\n1,2\n3\n");
        let report = extract(file.path()).await;
        assert!(report.starts_with("Error reading CSV:"), "got: {}", report);
    }

    #[tokio::test]
    async fn test_missing_file_yields_error_string() {
        let report = extract(Path::new("/nonexistent/data.csv")).await;
        assert!(report.starts_with("Error reading CSV:"));
    }

    #[test]
    fn test_infer_column_type() {
        assert_eq!(infer_column_type(&["1", "2", "3"]), ColumnType::Integer);
        assert_eq!(infer_column_type(&["1.5", "2", "3"]), ColumnType::Float);
        assert_eq!(infer_column_type(&["a", "2", "3"]), ColumnType::String);
        assert_eq!(infer_column_type(&["", ""]), ColumnType::String);
        assert_eq!(infer_column_type(&["1", "", "3"]), ColumnType::Integer);
    }

    #[test]
    fn test_percentile_interpolation() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&sorted, 0.50), 2.5);
        assert_eq!(percentile(&sorted, 0.25), 1.75);
        assert_eq!(percentile(&sorted, 0.0), 1.0);
        assert_eq!(percentile(&sorted, 1.0), 4.0);
    }
}
