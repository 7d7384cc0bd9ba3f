use serde::{Deserialize, Serialize};
use wgs_core::errors::{ErrorInfo, GrowthError};
use wgs_core::{AxisValue, ChartType, Sex};

/// Average month length used by the WHO standards, in days.
pub const DAYS_PER_MONTH: f64 = 30.4375;

/// WHO difference between recumbent length and standing height, in cm.
pub const LENGTH_HEIGHT_OFFSET_CM: f64 = 0.7;

/// Standing heights from here up are looked up as measured.
pub const STANDING_TABLE_FROM_CM: f64 = 110.0;

/// A single anthropometric observation to assess.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Observed value in the chart's unit.
    pub value: f64,
    /// Chart the value is plotted on.
    pub chart: ChartType,
    /// Sex of the child.
    pub sex: Sex,
    /// Position along the chart's independent axis.
    pub x: AxisValue,
}

impl Measurement {
    /// Bundles an observation.
    pub fn new(chart: ChartType, sex: Sex, x: AxisValue, value: f64) -> Self {
        Self {
            value,
            chart,
            sex,
            x,
        }
    }

    /// Observation on an age-indexed chart.
    pub fn at_age(chart: ChartType, sex: Sex, age_months: f64, value: f64) -> Self {
        Self::new(chart, sex, AxisValue::AgeMonths(age_months), value)
    }

    /// Weight observation on the weight-for-length/height chart.
    pub fn at_length(sex: Sex, length_cm: f64, weight_kg: f64) -> Self {
        Self::new(
            ChartType::WeightForHeight,
            sex,
            AxisValue::LengthCm(length_cm),
            weight_kg,
        )
    }

    /// Weight observation for a child measured standing.
    ///
    /// Below 110 cm the weight-for-length curve is served, so the height is
    /// converted to the equivalent recumbent length first.
    pub fn at_standing_height(sex: Sex, height_cm: f64, weight_kg: f64) -> Self {
        let length_cm = if height_cm < STANDING_TABLE_FROM_CM {
            height_cm + LENGTH_HEIGHT_OFFSET_CM
        } else {
            height_cm
        };
        Self::at_length(sex, length_cm, weight_kg)
    }
}

fn positive(name: &str, value: f64) -> Result<f64, GrowthError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GrowthError::InvalidMeasurement(
            ErrorInfo::new("value_non_positive", format!("{name} must be a positive number"))
                .with_context(name, value),
        ))
    }
}

/// Body mass index in kg/m².
pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<f64, GrowthError> {
    let weight = positive("weight_kg", weight_kg)?;
    let metres = positive("height_cm", height_cm)? / 100.0;
    Ok(weight / (metres * metres))
}

/// Converts an age in days to WHO months.
pub fn age_months_from_days(days: f64) -> Result<f64, GrowthError> {
    if !days.is_finite() || days < 0.0 {
        return Err(GrowthError::InvalidMeasurement(
            ErrorInfo::new("age_negative", "age must be a non-negative number of days")
                .with_context("days", days),
        ));
    }
    Ok(days / DAYS_PER_MONTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_uses_metres() {
        let value = bmi(12.0, 87.0).unwrap();
        assert!((value - 15.854).abs() < 1e-3);
    }

    #[test]
    fn bmi_rejects_zero_height() {
        let err = bmi(12.0, 0.0).unwrap_err();
        assert_eq!(err.code(), "value_non_positive");
        assert_eq!(err.info().context.get("height_cm").map(String::as_str), Some("0"));
    }

    #[test]
    fn standing_heights_below_the_height_table_become_lengths() {
        let short = Measurement::at_standing_height(Sex::Male, 87.0, 12.0);
        assert!((short.x.value() - 87.7).abs() < 1e-12);
        assert_eq!(short.x.axis(), wgs_core::Axis::LengthCm);
        let tall = Measurement::at_standing_height(Sex::Male, 112.0, 19.0);
        assert_eq!(tall.x, AxisValue::LengthCm(112.0));
        assert_eq!(tall.chart, ChartType::WeightForHeight);
    }

    #[test]
    fn one_year_of_days_is_twelve_months() {
        let months = age_months_from_days(365.25).unwrap();
        assert!((months - 12.0).abs() < 1e-12);
        assert!(age_months_from_days(-1.0).is_err());
    }
}
