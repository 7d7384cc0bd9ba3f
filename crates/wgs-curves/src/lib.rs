#![deny(missing_docs)]
#![doc = "Generates the SD-band and percentile reference curves drawn behind WHO growth charts."]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use wgs_core::errors::{ErrorInfo, GrowthError};
use wgs_core::{value_at_z, Axis, ChartType, SdBand, Sex};
use wgs_ref::{interpolate, InterpolatedRow, ReferenceStore, ReferenceTable, RowValues};

/// Percentile lines and their generating z-scores.
pub mod percentile;

pub use percentile::{generate_percentile_curves, PercentileCurveSet, PercentileLine};

/// Upper bound on the number of x positions a single request may produce.
pub const MAX_POINTS: usize = 100_000;

/// One coordinate of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Independent variable.
    pub x: f64,
    /// Reference measurement at `x`.
    pub y: f64,
}

/// Inclusive sampling range along a chart's independent axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveRange {
    /// First sampled position.
    pub min_x: f64,
    /// Last sampled position (included when reachable by whole steps).
    pub max_x: f64,
    /// Distance between consecutive positions.
    pub step: f64,
}

impl CurveRange {
    /// Validates and builds a range.
    pub fn new(min_x: f64, max_x: f64, step: f64) -> Result<Self, GrowthError> {
        let invalid = |code: &str, message: &str| {
            GrowthError::InvalidMeasurement(
                ErrorInfo::new(code, message)
                    .with_context("min_x", min_x)
                    .with_context("max_x", max_x)
                    .with_context("step", step),
            )
        };
        if !(min_x.is_finite() && max_x.is_finite() && step.is_finite()) {
            return Err(invalid("curve_range_non_finite", "curve range must be finite"));
        }
        if step <= 0.0 {
            return Err(invalid("curve_step_non_positive", "curve step must be positive"));
        }
        if min_x > max_x {
            return Err(invalid("curve_range_inverted", "min_x must not exceed max_x"));
        }
        let range = Self { min_x, max_x, step };
        // Compared as f64, before any cast to usize.
        if !(range.steps() < MAX_POINTS as f64) {
            return Err(invalid("curve_too_dense", "curve range produces too many points"));
        }
        Ok(range)
    }

    fn steps(&self) -> f64 {
        (self.max_x - self.min_x) / self.step + 1e-9
    }

    /// Number of sampled positions, never more than [`MAX_POINTS`].
    pub fn point_count(&self) -> usize {
        let steps = self.steps();
        if !(steps >= 0.0) {
            return 1;
        }
        steps.min((MAX_POINTS - 1) as f64).floor() as usize + 1
    }

    /// Sampled positions, computed from the index to avoid accumulated drift.
    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.point_count()).map(move |idx| (self.min_x + idx as f64 * self.step).min(self.max_x))
    }
}

/// Seven SD curves for one chart and sex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSet {
    /// Chart the curves belong to.
    pub chart: ChartType,
    /// Sex the curves belong to.
    pub sex: Sex,
    /// Independent variable of the x coordinates.
    pub axis: Axis,
    /// Points keyed by band, ordered by x.
    pub bands: BTreeMap<SdBand, Vec<CurvePoint>>,
    /// True when part of the range lay outside the tabulated domain.
    pub clamped: bool,
}

impl CurveSet {
    /// Points of a single band.
    pub fn band(&self, band: SdBand) -> &[CurvePoint] {
        self.bands.get(&band).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Values of the seven SD lines described by an interpolated row.
///
/// Z-score rows are returned as tabulated. LMS rows are expanded with the
/// forward Box-Cox transform so that classifying a curve value reproduces
/// the band's z-score.
pub fn sd_values(row: &InterpolatedRow) -> Result<[f64; 7], GrowthError> {
    match &row.values {
        RowValues::ZScores(sd) => Ok(sd.0),
        RowValues::Lms(lms) => {
            let mut out = [0.0; 7];
            for band in SdBand::ALL {
                out[band.index()] = value_at_z(lms, band.z())?;
            }
            Ok(out)
        }
    }
}

/// Generates SD curves for a (chart, sex) from the store.
pub fn generate_curves(
    store: &ReferenceStore,
    chart: ChartType,
    sex: Sex,
    min_x: f64,
    max_x: f64,
    step: f64,
) -> Result<CurveSet, GrowthError> {
    let range = CurveRange::new(min_x, max_x, step)?;
    generate_table_curves(store.get_table(chart, sex)?, &range)
}

/// Generates SD curves for a single table over a validated range.
pub fn generate_table_curves(
    table: &ReferenceTable,
    range: &CurveRange,
) -> Result<CurveSet, GrowthError> {
    let mut bands: BTreeMap<SdBand, Vec<CurvePoint>> = SdBand::ALL
        .iter()
        .map(|band| (*band, Vec::with_capacity(range.point_count())))
        .collect();
    let mut clamped = false;
    for x in range.positions() {
        let row = interpolate(table, x)?;
        clamped |= row.is_clamped();
        let values = sd_values(&row)?;
        for (band, points) in bands.iter_mut() {
            points.push(CurvePoint {
                x,
                y: values[band.index()],
            });
        }
    }
    debug!(
        chart = %table.chart(),
        sex = %table.sex(),
        points = range.point_count(),
        clamped,
        "generated SD curves"
    );
    Ok(CurveSet {
        chart: table.chart(),
        sex: table.sex(),
        axis: table.axis(),
        bands,
        clamped,
    })
}
