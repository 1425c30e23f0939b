//! Numeric column inference.

use super::decode::Table;

/// Parse a raw cell value as a finite number.
///
/// Leading/trailing whitespace is tolerated and exponential notation
/// accepted; empty cells and non-finite results (`inf`, `NaN`) parse to
/// `None`. Both the inferencer and the aggregator go through this one
/// function so they agree on what counts as numeric.
pub fn try_parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Classify columns as numeric under the any-row rule: one parsable
/// value anywhere in a column is sufficient, regardless of what the
/// other rows hold. Real-world exports mix blank and placeholder cells
/// with numeric data, so an all-rows rule would reject almost every
/// column; the aggregator discards the unparsable leftovers.
///
/// Returned indices are in first-seen order (row-major scan), which
/// fixes the stats report iteration order.
pub fn infer_numeric_columns(table: &Table) -> Vec<usize> {
    let mut numeric: Vec<usize> = Vec::new();

    for row in table.rows() {
        for (column, value) in row.iter().enumerate() {
            if numeric.contains(&column) {
                continue;
            }
            if try_parse_number(value).is_some() {
                numeric.push(column);
            }
        }
        if numeric.len() == table.column_count() {
            break;
        }
    }

    numeric
}
