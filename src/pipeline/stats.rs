//! Per-column aggregate statistics.

use serde::ser::SerializeMap;
use serde::Serialize;

use super::decode::Table;
use super::infer::try_parse_number;

/// Aggregates for one numeric column, computed over the values that
/// actually parsed. `count` can be lower than the row count because the
/// any-row inference rule admits columns with non-numeric entries,
/// which are discarded here rather than treated as errors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStats {
    pub count: usize,
    pub sum: f64,
    pub avg: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Insertion-ordered map of column name to [`ColumnStats`].
///
/// Serializes as a JSON object in insertion order so that two runs over
/// identical input produce byte-identical output (a plain map would
/// reorder keys).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsReport {
    entries: Vec<(String, ColumnStats)>,
}

impl StatsReport {
    pub fn insert(&mut self, column: impl Into<String>, stats: ColumnStats) {
        self.entries.push((column.into(), stats));
    }

    pub fn get(&self, column: &str) -> Option<&ColumnStats> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, stats)| stats)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnStats)> {
        self.entries.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for StatsReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, stats) in &self.entries {
            map.serialize_entry(name, stats)?;
        }
        map.end()
    }
}

/// Compute stats for every numeric column, in the order the inferencer
/// reported them. Values are accumulated in row order; unparsable cells
/// are skipped.
pub fn aggregate(table: &Table, numeric_columns: &[usize]) -> StatsReport {
    let mut report = StatsReport::default();

    for &column in numeric_columns {
        let mut count = 0usize;
        let mut sum = 0.0f64;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for row in table.rows() {
            if let Some(value) = try_parse_number(&row[column]) {
                count += 1;
                sum += value;
                min = min.min(value);
                max = max.max(value);
            }
        }

        let stats = if count > 0 {
            ColumnStats {
                count,
                sum,
                avg: sum / count as f64,
                min: Some(min),
                max: Some(max),
            }
        } else {
            ColumnStats {
                count: 0,
                sum: 0.0,
                avg: 0.0,
                min: None,
                max: None,
            }
        };

        report.insert(table.headers()[column].clone(), stats);
    }

    report
}
