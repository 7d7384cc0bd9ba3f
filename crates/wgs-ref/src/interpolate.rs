use serde::{Deserialize, Serialize};
use tracing::debug;
use wgs_core::errors::{ErrorInfo, GrowthError};
use wgs_core::LmsParameters;

use crate::resolve::resolve_lms;
use crate::row::{ReferenceRow, RowValues};
use crate::table::ReferenceTable;

/// Which end of the tabulated domain a request was clamped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClampSide {
    /// Requested key was below the first row.
    Below,
    /// Requested key was above the last row.
    Above,
}

/// Records that a request fell outside the tabulated domain and was served
/// from the nearest boundary row instead of being extrapolated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryClamp {
    /// Key originally requested by the caller.
    pub requested: f64,
    /// Boundary key whose row was used.
    pub boundary: f64,
    /// Side of the domain that was exceeded.
    pub side: ClampSide,
}

/// Reference values at an arbitrary key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterpolatedRow {
    /// Effective key the values describe (the boundary key when clamped).
    pub key: f64,
    /// Interpolated reference values.
    pub values: RowValues,
    /// Present when the requested key was outside the tabulated domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clamp: Option<BoundaryClamp>,
}

impl InterpolatedRow {
    fn exact(row: &ReferenceRow) -> Self {
        Self {
            key: row.key,
            values: row.values,
            clamp: None,
        }
    }

    /// Resolves the LMS parameters describing this row.
    pub fn lms(&self) -> Result<LmsParameters, GrowthError> {
        resolve_lms(&self.values)
    }

    /// True when the row was taken from a domain boundary.
    pub fn is_clamped(&self) -> bool {
        self.clamp.is_some()
    }
}

/// Produces reference values at `x` from the two nearest table rows.
///
/// Keys outside the tabulated domain are clamped to the boundary row; keys
/// matching a row exactly return it verbatim; anything else is linearly
/// interpolated field by field between the bracketing rows.
pub fn interpolate(table: &ReferenceTable, x: f64) -> Result<InterpolatedRow, GrowthError> {
    if !x.is_finite() {
        return Err(GrowthError::InvalidMeasurement(
            ErrorInfo::new("key_non_finite", "independent variable must be finite")
                .with_context("chart", table.chart())
                .with_context("x", x),
        ));
    }
    let rows = table.rows();
    let (min_key, max_key) = table.domain();
    if x < min_key || x > max_key {
        let (row, side) = if x < min_key {
            (&rows[0], ClampSide::Below)
        } else {
            (&rows[rows.len() - 1], ClampSide::Above)
        };
        debug!(
            chart = %table.chart(),
            sex = %table.sex(),
            requested = x,
            boundary = row.key,
            "clamped request to tabulated domain"
        );
        let mut out = InterpolatedRow::exact(row);
        out.clamp = Some(BoundaryClamp {
            requested: x,
            boundary: row.key,
            side,
        });
        return Ok(out);
    }

    // First row whose key is >= x; exists because x <= max_key.
    let idx = rows.partition_point(|row| row.key < x);
    let upper = &rows[idx];
    if upper.key == x || idx == 0 {
        return Ok(InterpolatedRow::exact(upper));
    }
    let lower = &rows[idx - 1];
    let span = upper.key - lower.key;
    if span == 0.0 {
        return Ok(InterpolatedRow::exact(lower));
    }
    let ratio = (x - lower.key) / span;
    Ok(InterpolatedRow {
        key: x,
        values: lower.values.lerp(&upper.values, ratio)?,
        clamp: None,
    })
}
