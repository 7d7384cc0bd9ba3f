use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use wgs_core::errors::GrowthError;
use wgs_core::{value_at_z, Axis, ChartType, Sex};
use wgs_ref::{interpolate, ReferenceStore};

use crate::{CurvePoint, CurveRange};

/// Percentile lines printed on the WHO percentile charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PercentileLine {
    /// 1st percentile.
    P1,
    /// 3rd percentile.
    P3,
    /// 15th percentile.
    P15,
    /// Median.
    P50,
    /// 85th percentile.
    P85,
    /// 97th percentile.
    P97,
    /// 99th percentile.
    P99,
}

impl PercentileLine {
    /// Every line from the lowest to the highest.
    pub const ALL: [PercentileLine; 7] = [
        PercentileLine::P1,
        PercentileLine::P3,
        PercentileLine::P15,
        PercentileLine::P50,
        PercentileLine::P85,
        PercentileLine::P97,
        PercentileLine::P99,
    ];

    /// Nominal percentile.
    pub fn percentile(&self) -> f64 {
        match self {
            PercentileLine::P1 => 1.0,
            PercentileLine::P3 => 3.0,
            PercentileLine::P15 => 15.0,
            PercentileLine::P50 => 50.0,
            PercentileLine::P85 => 85.0,
            PercentileLine::P97 => 97.0,
            PercentileLine::P99 => 99.0,
        }
    }

    /// Standard normal quantile of the percentile.
    pub fn z(&self) -> f64 {
        match self {
            PercentileLine::P1 => -2.326348,
            PercentileLine::P3 => -1.880794,
            PercentileLine::P15 => -1.036433,
            PercentileLine::P50 => 0.0,
            PercentileLine::P85 => 1.036433,
            PercentileLine::P97 => 1.880794,
            PercentileLine::P99 => 2.326348,
        }
    }
}

/// Percentile curves for one chart and sex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentileCurveSet {
    /// Chart the curves belong to.
    pub chart: ChartType,
    /// Sex the curves belong to.
    pub sex: Sex,
    /// Independent variable of the x coordinates.
    pub axis: Axis,
    /// Points keyed by percentile line, ordered by x.
    pub lines: BTreeMap<PercentileLine, Vec<CurvePoint>>,
    /// True when part of the range lay outside the tabulated domain.
    pub clamped: bool,
}

impl PercentileCurveSet {
    /// Points of a single line.
    pub fn line(&self, line: PercentileLine) -> &[CurvePoint] {
        self.lines.get(&line).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Generates the percentile lines for a (chart, sex).
///
/// Every row is resolved to LMS first, so z-score tables are drawn through
/// their derived parameters.
pub fn generate_percentile_curves(
    store: &ReferenceStore,
    chart: ChartType,
    sex: Sex,
    min_x: f64,
    max_x: f64,
    step: f64,
) -> Result<PercentileCurveSet, GrowthError> {
    let range = CurveRange::new(min_x, max_x, step)?;
    let table = store.get_table(chart, sex)?;
    let mut lines: BTreeMap<PercentileLine, Vec<CurvePoint>> = PercentileLine::ALL
        .iter()
        .map(|line| (*line, Vec::with_capacity(range.point_count())))
        .collect();
    let mut clamped = false;
    for x in range.positions() {
        let row = interpolate(table, x)?;
        clamped |= row.is_clamped();
        let lms = row.lms()?;
        for (line, points) in lines.iter_mut() {
            points.push(CurvePoint {
                x,
                y: value_at_z(&lms, line.z())?,
            });
        }
    }
    debug!(%chart, %sex, points = range.point_count(), clamped, "generated percentile curves");
    Ok(PercentileCurveSet {
        chart,
        sex,
        axis: table.axis(),
        lines,
        clamped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgs_core::normal_cdf;

    #[test]
    fn quantiles_match_their_percentiles() {
        for line in PercentileLine::ALL {
            let p = normal_cdf(line.z()) * 100.0;
            assert!(
                (p - line.percentile()).abs() < 1e-3,
                "{line:?}: {p}"
            );
        }
    }
}
