use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{Result, ServiceError};
use crate::models::{BatchSummary, PredictionRecord};
use crate::service::PredictionService;

/// Parse CSV text and evaluate each row in file order. The first bad row
/// aborts the batch; rows evaluated before it stay in history.
pub fn ingest(service: &PredictionService, content: &str) -> Result<BatchSummary> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let marks_col = require_column(&headers, "marks")?;
    let attendance_col = require_column(&headers, "attendance")?;
    let feedback_col = headers.iter().position(|h| h == "feedback");

    let mut results: Vec<PredictionRecord> = Vec::new();

    for (index, row) in reader.records().enumerate() {
        let row = row?;
        // Header is line 1.
        let line = index + 2;
        let marks = numeric_cell(&row, marks_col, "marks", line)?;
        let attendance = numeric_cell(&row, attendance_col, "attendance", line)?;
        let feedback = feedback_col.and_then(|col| row.get(col)).unwrap_or("");

        let evaluation = service.evaluate(marks, attendance, feedback).map_err(|err| match err {
            ServiceError::InvalidInput(message) => {
                ServiceError::InvalidUpload(format!("row {line}: {message}"))
            }
            other => other,
        })?;
        results.push(evaluation.record);
    }

    tracing::info!(rows = results.len(), "batch ingested");

    Ok(BatchSummary {
        uploaded_students: results.len(),
        results,
    })
}

fn require_column(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| ServiceError::InvalidUpload(format!("CSV is missing the '{name}' column")))
}

fn numeric_cell(row: &StringRecord, col: usize, name: &str, line: usize) -> Result<f64> {
    let raw = row
        .get(col)
        .ok_or_else(|| ServiceError::InvalidUpload(format!("row {line}: missing {name} value")))?;
    raw.trim().parse::<f64>().map_err(|_| {
        ServiceError::InvalidUpload(format!("row {line}: {name} '{raw}' is not a number"))
    })
}
