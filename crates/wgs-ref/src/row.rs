use serde::{Deserialize, Serialize};
use wgs_core::errors::{ErrorInfo, GrowthError};
use wgs_core::{LmsParameters, SdBand};

/// Values of the seven standard deviation columns, ordered from -3 SD to +3 SD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SdValues(pub [f64; 7]);

impl SdValues {
    /// Returns the value of a single band.
    pub fn get(&self, band: SdBand) -> f64 {
        self.0[band.index()]
    }

    /// Returns the median (SD0) column.
    pub fn median(&self) -> f64 {
        self.get(SdBand::Sd0)
    }
}

/// Numeric payload of a reference row in one of the two WHO representations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowValues {
    /// Box-Cox power, median and coefficient of variation.
    Lms(LmsParameters),
    /// Pre-computed standard deviation lines.
    ZScores(SdValues),
}

impl RowValues {
    /// Linear interpolation of every field between `self` (ratio 0) and `other` (ratio 1).
    pub fn lerp(&self, other: &RowValues, ratio: f64) -> Result<RowValues, GrowthError> {
        let mix = |a: f64, b: f64| a + ratio * (b - a);
        match (self, other) {
            (RowValues::Lms(a), RowValues::Lms(b)) => Ok(RowValues::Lms(LmsParameters::new(
                mix(a.l, b.l),
                mix(a.m, b.m),
                mix(a.s, b.s),
            ))),
            (RowValues::ZScores(a), RowValues::ZScores(b)) => {
                let mut out = [0.0; 7];
                for (idx, slot) in out.iter_mut().enumerate() {
                    *slot = mix(a.0[idx], b.0[idx]);
                }
                Ok(RowValues::ZScores(SdValues(out)))
            }
            _ => Err(GrowthError::malformed(
                "mixed_representation",
                "cannot interpolate between LMS and z-score rows",
            )),
        }
    }

    /// Name of the representation, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            RowValues::Lms(_) => "lms",
            RowValues::ZScores(_) => "z_scores",
        }
    }

    fn all_finite(&self) -> bool {
        match self {
            RowValues::Lms(lms) => lms.l.is_finite() && lms.m.is_finite() && lms.s.is_finite(),
            RowValues::ZScores(sd) => sd.0.iter().all(|v| v.is_finite()),
        }
    }
}

/// A validated row of a reference table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRow {
    /// Independent variable (age in months, or length in cm for weight-for-height).
    pub key: f64,
    /// Reference values at `key`.
    pub values: RowValues,
}

impl ReferenceRow {
    /// Creates a row, rejecting non-finite keys or values.
    pub fn new(key: f64, values: RowValues) -> Result<Self, GrowthError> {
        if !key.is_finite() || !values.all_finite() {
            return Err(GrowthError::MalformedReferenceRow(
                ErrorInfo::new("row_non_finite", "reference rows must hold finite numbers")
                    .with_context("key", key),
            ));
        }
        Ok(Self { key, values })
    }
}

/// Row as it appears in a dataset document: either representation may be
/// present, and nothing is guaranteed until [`RawRow::to_row`] succeeds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    /// Independent variable.
    pub x: f64,
    #[serde(rename = "L", default, skip_serializing_if = "Option::is_none")]
    pub l: Option<f64>,
    #[serde(rename = "M", default, skip_serializing_if = "Option::is_none")]
    pub m: Option<f64>,
    #[serde(rename = "S", default, skip_serializing_if = "Option::is_none")]
    pub s: Option<f64>,
    #[serde(rename = "SD3neg", default, skip_serializing_if = "Option::is_none")]
    pub sd3neg: Option<f64>,
    #[serde(rename = "SD2neg", default, skip_serializing_if = "Option::is_none")]
    pub sd2neg: Option<f64>,
    #[serde(rename = "SD1neg", default, skip_serializing_if = "Option::is_none")]
    pub sd1neg: Option<f64>,
    #[serde(rename = "SD0", default, skip_serializing_if = "Option::is_none")]
    pub sd0: Option<f64>,
    #[serde(rename = "SD1", default, skip_serializing_if = "Option::is_none")]
    pub sd1: Option<f64>,
    #[serde(rename = "SD2", default, skip_serializing_if = "Option::is_none")]
    pub sd2: Option<f64>,
    #[serde(rename = "SD3", default, skip_serializing_if = "Option::is_none")]
    pub sd3: Option<f64>,
}

impl RawRow {
    /// Validates the raw columns into a typed row.
    ///
    /// Complete LMS columns win over z-score columns when both are present.
    /// A row with a partial set of either, or with neither, is malformed.
    pub fn to_row(&self) -> Result<ReferenceRow, GrowthError> {
        let lms = [self.l, self.m, self.s];
        let sd = [
            self.sd3neg,
            self.sd2neg,
            self.sd1neg,
            self.sd0,
            self.sd1,
            self.sd2,
            self.sd3,
        ];
        let values = if lms.iter().any(Option::is_some) {
            match lms {
                [Some(l), Some(m), Some(s)] => RowValues::Lms(LmsParameters::new(l, m, s)),
                _ => {
                    return Err(
                        self.malformed("row_partial_lms", "row has an incomplete L/M/S triple")
                    )
                }
            }
        } else if sd.iter().any(Option::is_some) {
            let mut out = [0.0; 7];
            for (slot, value) in out.iter_mut().zip(sd) {
                *slot = value.ok_or_else(|| {
                    self.malformed("row_partial_sd", "row has an incomplete set of SD columns")
                })?;
            }
            RowValues::ZScores(SdValues(out))
        } else {
            return Err(GrowthError::MalformedReferenceRow(
                ErrorInfo::new("row_empty", "row carries neither LMS nor z-score columns")
                    .with_context("x", self.x)
                    .with_hint("provide L/M/S or SD3neg..SD3"),
            ));
        };
        ReferenceRow::new(self.x, values)
    }

    fn malformed(&self, code: &str, message: &str) -> GrowthError {
        GrowthError::MalformedReferenceRow(ErrorInfo::new(code, message).with_context("x", self.x))
    }
}
