//! CSV ingestion and aggregation pipeline.
//!
//! Sequential per-request flow with a strict data dependency chain:
//! decode -> infer numeric columns -> aggregate stats -> assemble
//! prompt. Everything here is request-scoped; nothing is cached or
//! shared across requests.

pub mod decode;
pub mod infer;
pub mod prompt;
pub mod stats;

pub use decode::{decode, Table};
pub use infer::{infer_numeric_columns, try_parse_number};
pub use prompt::{build_prompt, SAMPLE_ROWS};
pub use stats::{aggregate, ColumnStats, StatsReport};

use crate::types::AppResult;

/// Transient bundle produced by one pipeline run: the decoded table,
/// the inferred numeric column indices and their aggregate stats.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub table: Table,
    pub numeric_columns: Vec<usize>,
    pub stats: StatsReport,
}

impl Dataset {
    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    /// Summarization prompt for this dataset (first five rows plus the
    /// stats report, fixed template).
    pub fn prompt(&self) -> AppResult<String> {
        build_prompt(&self.table, &self.stats)
    }
}

/// Run the full ingestion pipeline over raw upload bytes.
///
/// Zero numeric columns is not an error; the stats report is simply
/// empty. Decode failures and empty datasets abort the request before
/// any summarization call is made.
pub fn analyze(bytes: &[u8]) -> AppResult<Dataset> {
    let table = decode(bytes)?;
    let numeric_columns = infer_numeric_columns(&table);
    let stats = aggregate(&table, &numeric_columns);

    Ok(Dataset {
        table,
        numeric_columns,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AppError;

    #[test]
    fn test_analyze_end_to_end() {
        let dataset = analyze(b"a,b\n1,x\n2,y\nbad,z\n").unwrap();

        assert_eq!(dataset.row_count(), 3);
        assert_eq!(dataset.numeric_columns, vec![0]);
        assert_eq!(dataset.stats.len(), 1);

        let stats = dataset.stats.get("a").unwrap();
        assert_eq!(stats.count, 2);
        assert!((stats.sum - 3.0).abs() < 1e-9);
        assert!((stats.avg - 1.5).abs() < 1e-9);
        assert_eq!(stats.min, Some(1.0));
        assert_eq!(stats.max, Some(2.0));
    }

    #[test]
    fn test_analyze_header_only_fails() {
        let err = analyze(b"a,b\n").unwrap_err();
        assert!(matches!(err, AppError::EmptyDataset));
    }

    #[test]
    fn test_no_numeric_columns_is_valid() {
        let dataset = analyze(b"name,color\nalice,red\nbob,blue\n").unwrap();
        assert!(dataset.numeric_columns.is_empty());
        assert!(dataset.stats.is_empty());
        assert_eq!(dataset.row_count(), 2);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let input = b"a,b\n1,x\n2,y\n";
        let first = analyze(input).unwrap();
        let second = analyze(input).unwrap();

        assert_eq!(first.stats, second.stats);
        assert_eq!(first.prompt().unwrap(), second.prompt().unwrap());
    }

    #[test]
    fn test_stats_counts_bounded_by_row_count() {
        let dataset = analyze(b"a,b\n1,2\n3,\nx,4\n").unwrap();
        for (_, stats) in dataset.stats.iter() {
            assert!(stats.count <= dataset.row_count());
        }
    }
}
