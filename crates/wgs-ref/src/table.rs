use serde::Serialize;
use wgs_core::errors::{ErrorInfo, GrowthError};
use wgs_core::{Axis, ChartType, Sex};

use crate::resolve::resolve_lms;
use crate::row::{RawRow, ReferenceRow};

fn table_error(chart: ChartType, sex: Sex, code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("chart", chart)
        .with_context("sex", sex)
}

/// Immutable reference table for one (chart, sex) combination.
///
/// Construction validates the whole table, so every accessor can assume a
/// non-empty, strictly ordered, homogeneous set of rows whose LMS parameters
/// resolve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceTable {
    chart: ChartType,
    sex: Sex,
    rows: Vec<ReferenceRow>,
}

impl ReferenceTable {
    /// Builds a table from typed rows.
    pub fn new(chart: ChartType, sex: Sex, rows: Vec<ReferenceRow>) -> Result<Self, GrowthError> {
        let Some(first) = rows.first() else {
            return Err(GrowthError::MalformedReferenceRow(table_error(
                chart,
                sex,
                "table_empty",
                "reference table has no rows",
            )));
        };
        let kind = first.values.kind();
        for (idx, row) in rows.iter().enumerate() {
            if row.values.kind() != kind {
                return Err(GrowthError::MalformedReferenceRow(
                    table_error(chart, sex, "mixed_representation", "table mixes LMS and z-score rows")
                        .with_context("key", row.key),
                ));
            }
            if idx > 0 && row.key <= rows[idx - 1].key {
                return Err(GrowthError::MalformedReferenceRow(
                    table_error(chart, sex, "table_unordered", "row keys must be strictly increasing")
                        .with_context("previous", rows[idx - 1].key)
                        .with_context("key", row.key),
                ));
            }
            resolve_lms(&row.values).map_err(|err| {
                let info = err
                    .info()
                    .clone()
                    .with_context("chart", chart)
                    .with_context("sex", sex)
                    .with_context("key", row.key);
                GrowthError::MalformedReferenceRow(info)
            })?;
        }
        Ok(Self { chart, sex, rows })
    }

    /// Builds a table from dataset rows, validating each row first.
    pub fn from_raw(chart: ChartType, sex: Sex, raw: &[RawRow]) -> Result<Self, GrowthError> {
        let rows = raw
            .iter()
            .map(RawRow::to_row)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(chart, sex, rows)
    }

    /// Chart type served by the table.
    pub fn chart(&self) -> ChartType {
        self.chart
    }

    /// Sex served by the table.
    pub fn sex(&self) -> Sex {
        self.sex
    }

    /// Independent variable indexing the rows.
    pub fn axis(&self) -> Axis {
        self.chart.axis()
    }

    /// Rows ordered by key.
    pub fn rows(&self) -> &[ReferenceRow] {
        &self.rows
    }

    /// Smallest and largest tabulated keys.
    pub fn domain(&self) -> (f64, f64) {
        // Non-empty by construction.
        let first = self.rows[0].key;
        let last = self.rows[self.rows.len() - 1].key;
        (first, last)
    }

    /// Returns the row tabulated exactly at `key`, if any.
    pub fn row_at(&self, key: f64) -> Option<&ReferenceRow> {
        self.rows
            .binary_search_by(|row| row.key.total_cmp(&key))
            .ok()
            .map(|idx| &self.rows[idx])
    }
}
