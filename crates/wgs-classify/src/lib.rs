#![deny(missing_docs)]
#![doc = "Maps WHO z-scores onto clinical growth categories with chart-specific wording."]

use serde::{Deserialize, Serialize};
use wgs_core::errors::{ErrorInfo, GrowthError};
use wgs_core::{compute_percentile_within, ChartType, PercentileBounds};

/// Category bands and severity colours.
pub mod category;
/// Chart-specific labels and descriptions.
pub mod labels;

pub use category::{GrowthCategory, SeverityColor};
pub use labels::{description, label};

/// Outcome of classifying a single z-score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Standard score of the measurement.
    pub z_score: f64,
    /// Percentile of the measurement, clamped for display.
    pub percentile: f64,
    /// Shared category taxonomy.
    pub category: GrowthCategory,
    /// Chart-specific short label.
    pub label: String,
    /// Severity colour.
    pub color: SeverityColor,
    /// Chart-specific explanation.
    pub description: String,
}

/// Classifies a z-score for a chart, reporting the percentile within `[0.1, 99.9]`.
pub fn classify(chart: ChartType, z: f64) -> Result<Classification, GrowthError> {
    classify_with_bounds(chart, z, &PercentileBounds::default())
}

/// Classifies a z-score for a chart with explicit percentile display bounds.
pub fn classify_with_bounds(
    chart: ChartType,
    z: f64,
    bounds: &PercentileBounds,
) -> Result<Classification, GrowthError> {
    let category = GrowthCategory::from_z(z).ok_or_else(|| {
        GrowthError::InvalidMeasurement(
            ErrorInfo::new("z_not_a_number", "cannot classify a NaN z-score")
                .with_context("chart", chart),
        )
    })?;
    Ok(Classification {
        z_score: z,
        percentile: compute_percentile_within(z, bounds),
        category,
        label: label(chart, category).to_string(),
        color: category.color(),
        description: description(chart, category).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_band_reads_differently_per_chart() {
        let wfa = classify(ChartType::WeightForAge, -3.5).unwrap();
        let lhfa = classify(ChartType::LengthHeightForAge, -3.5).unwrap();
        assert_eq!(wfa.category, lhfa.category);
        assert_eq!(wfa.label, "Severely underweight");
        assert_eq!(lhfa.label, "Severely stunted");
        assert_eq!(wfa.color, SeverityColor::Red);
    }

    #[test]
    fn nan_is_rejected() {
        let err = classify(ChartType::BmiForAge, f64::NAN).unwrap_err();
        assert!(matches!(err, GrowthError::InvalidMeasurement(_)));
    }

    #[test]
    fn custom_bounds_apply_to_percentile() {
        let bounds = PercentileBounds {
            floor: 1.0,
            ceiling: 99.0,
        };
        let out = classify_with_bounds(ChartType::WeightForAge, -4.0, &bounds).unwrap();
        assert_eq!(out.percentile, 1.0);
    }
}
