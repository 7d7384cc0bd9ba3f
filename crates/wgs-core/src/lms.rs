//! Box-Cox (LMS) transforms between raw measurements and z-scores.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, GrowthError};

/// Below this magnitude the power `L` is treated as zero and the log form is used.
const L_ZERO: f64 = 1e-9;

/// Box-Cox power (`L`), median (`M`) and coefficient of variation (`S`)
/// describing one reference distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LmsParameters {
    /// Box-Cox power.
    #[serde(rename = "L")]
    pub l: f64,
    /// Median.
    #[serde(rename = "M")]
    pub m: f64,
    /// Coefficient of variation.
    #[serde(rename = "S")]
    pub s: f64,
}

impl LmsParameters {
    /// Creates a parameter triple without validation.
    pub const fn new(l: f64, m: f64, s: f64) -> Self {
        Self { l, m, s }
    }

    /// Rejects parameters that cannot describe a distribution: non-finite
    /// values or a non-positive median or coefficient of variation.
    pub fn validate(&self) -> Result<(), GrowthError> {
        if !self.l.is_finite() || !self.m.is_finite() || !self.s.is_finite() {
            return Err(GrowthError::InvalidMeasurement(
                self.describe(ErrorInfo::new("lms_non_finite", "LMS parameters must be finite")),
            ));
        }
        if self.m <= 0.0 || self.s <= 0.0 {
            return Err(GrowthError::InvalidMeasurement(
                self.describe(ErrorInfo::new(
                    "lms_non_positive",
                    "median and coefficient of variation must be positive",
                ))
                .with_hint("the reference row is degenerate; check the dataset"),
            ));
        }
        Ok(())
    }

    fn is_log_form(&self) -> bool {
        self.l.abs() < L_ZERO
    }

    fn describe(&self, info: ErrorInfo) -> ErrorInfo {
        info.with_context("L", self.l)
            .with_context("M", self.m)
            .with_context("S", self.s)
    }
}

/// Converts a raw measurement into a z-score with the LMS method.
///
/// `Z = ((value/M)^L - 1) / (L*S)`, or `ln(value/M) / S` when `L` is zero.
pub fn compute_z(value: f64, lms: &LmsParameters) -> Result<f64, GrowthError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GrowthError::InvalidMeasurement(
            ErrorInfo::new("value_non_positive", "measurement must be a positive number")
                .with_context("value", value),
        ));
    }
    lms.validate()?;
    let ratio = value / lms.m;
    let z = if lms.is_log_form() {
        ratio.ln() / lms.s
    } else {
        (ratio.powf(lms.l) - 1.0) / (lms.l * lms.s)
    };
    Ok(z)
}

/// Forward transform: the measurement lying exactly `z` standard deviations
/// from the median.
///
/// `y = M * (1 + L*S*Z)^(1/L)`, or `M * exp(S*Z)` when `L` is zero.
pub fn value_at_z(lms: &LmsParameters, z: f64) -> Result<f64, GrowthError> {
    lms.validate()?;
    if !z.is_finite() {
        return Err(GrowthError::invalid("z_non_finite", "z-score must be finite"));
    }
    if lms.is_log_form() {
        return Ok(lms.m * (lms.s * z).exp());
    }
    let base = 1.0 + lms.l * lms.s * z;
    if base <= 0.0 {
        return Err(GrowthError::InvalidMeasurement(
            lms.describe(
                ErrorInfo::new("boxcox_domain", "z-score lies outside the Box-Cox domain")
                    .with_context("z", z),
            ),
        ));
    }
    Ok(lms.m * base.powf(1.0 / lms.l))
}

/// Z-score with the WHO restricted application of the LMS method.
///
/// Inside ±3 SD this equals [`compute_z`]. Beyond, the distance past the
/// ±3 SD line is measured in units of the spacing between the 2 SD and 3 SD
/// lines on that side, which keeps skewed tails from compressing.
pub fn compute_z_adjusted(value: f64, lms: &LmsParameters) -> Result<f64, GrowthError> {
    let z = compute_z(value, lms)?;
    if z > 3.0 {
        let sd3 = value_at_z(lms, 3.0)?;
        let sd2 = value_at_z(lms, 2.0)?;
        return Ok(3.0 + (value - sd3) / (sd3 - sd2));
    }
    if z < -3.0 {
        let sd3 = value_at_z(lms, -3.0)?;
        let sd2 = value_at_z(lms, -2.0)?;
        return Ok(-3.0 + (value - sd3) / (sd2 - sd3));
    }
    Ok(z)
}
