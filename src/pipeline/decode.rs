//! Tabular decoder: raw upload bytes to an ordered, header-keyed table.

use csv::ReaderBuilder;

use crate::types::{AppError, AppResult};

/// A decoded dataset: fixed column universe from the header line plus
/// data rows aligned positionally to it.
///
/// Every row holds exactly `headers.len()` fields; short rows are
/// padded with empty strings at decode time, extra fields are dropped.
/// Row order is file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    #[cfg(test)]
    pub fn from_parts(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }
}

/// Decode raw upload bytes into a [`Table`].
///
/// The first line is the header; lines that are empty after trimming
/// are skipped entirely. Structurally ragged rows never fail: fields
/// align by position, missing trailing fields become empty strings.
/// Fails with [`AppError::Decode`] for non-UTF-8 input and
/// [`AppError::EmptyDataset`] when no data rows remain after the
/// header (a zero-byte upload included).
pub fn decode(bytes: &[u8]) -> AppResult<Table> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| AppError::Decode(format!("upload is not valid UTF-8: {}", e)))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| AppError::Decode(format!("unreadable header line: {}", e)))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(AppError::EmptyDataset);
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| AppError::Decode(format!("unreadable record: {}", e)))?;

        // A whitespace-only line surfaces as a single blank field.
        if record.len() == 1 && record.get(0).is_some_and(|f| f.trim().is_empty()) {
            continue;
        }

        let mut fields: Vec<String> = record.iter().map(|f| f.to_string()).collect();
        fields.resize(headers.len(), String::new());
        rows.push(fields);
    }

    if rows.is_empty() {
        return Err(AppError::EmptyDataset);
    }

    Ok(Table { headers, rows })
}
