#![deny(missing_docs)]
#![doc = "Core types, error taxonomy and Box-Cox transforms for the WHO Child Growth Standards engine."]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod lms;
pub mod normal;
pub mod provenance;

pub use errors::{ErrorInfo, GrowthError};
pub use lms::{compute_z, compute_z_adjusted, value_at_z, LmsParameters};
pub use normal::{compute_percentile, compute_percentile_within, normal_cdf, PercentileBounds};
pub use provenance::{DatasetProvenance, SchemaVersion};

/// Growth indicator covered by the WHO standards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChartType {
    /// Weight-for-age.
    #[serde(rename = "wfa")]
    WeightForAge,
    /// Length/height-for-age.
    #[serde(rename = "lhfa")]
    LengthHeightForAge,
    /// Weight-for-length/height, indexed by recumbent length.
    ///
    /// One curve per sex spans 45 to 120 cm. From 45 to 110 cm it follows the
    /// WHO weight-for-length (recumbent) table, so over the 65 to 110 cm
    /// overlap the length table is served; above 110 cm it follows the
    /// weight-for-height (standing) table. Standing heights below 110 cm
    /// are converted to length by adding 0.7 cm before lookup.
    #[serde(rename = "wfh")]
    WeightForHeight,
    /// Head-circumference-for-age.
    #[serde(rename = "hcfa")]
    HeadCircumferenceForAge,
    /// BMI-for-age.
    #[serde(rename = "bfa")]
    BmiForAge,
}

impl ChartType {
    /// Every chart type in canonical order.
    pub const ALL: [ChartType; 5] = [
        ChartType::WeightForAge,
        ChartType::LengthHeightForAge,
        ChartType::WeightForHeight,
        ChartType::HeadCircumferenceForAge,
        ChartType::BmiForAge,
    ];

    /// Returns the WHO indicator abbreviation.
    pub fn code(&self) -> &'static str {
        match self {
            ChartType::WeightForAge => "wfa",
            ChartType::LengthHeightForAge => "lhfa",
            ChartType::WeightForHeight => "wfh",
            ChartType::HeadCircumferenceForAge => "hcfa",
            ChartType::BmiForAge => "bfa",
        }
    }

    /// Returns the independent variable used to index this chart.
    pub fn axis(&self) -> Axis {
        match self {
            ChartType::WeightForHeight => Axis::LengthCm,
            _ => Axis::AgeMonths,
        }
    }

    /// Unit of the measured value plotted on the y axis.
    pub fn value_unit(&self) -> &'static str {
        match self {
            ChartType::WeightForAge | ChartType::WeightForHeight => "kg",
            ChartType::LengthHeightForAge | ChartType::HeadCircumferenceForAge => "cm",
            ChartType::BmiForAge => "kg/m2",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ChartType {
    type Err = GrowthError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "wfa" | "weight_for_age" => Ok(ChartType::WeightForAge),
            "lhfa" | "length_height_for_age" => Ok(ChartType::LengthHeightForAge),
            "wfh" | "weight_for_height" => Ok(ChartType::WeightForHeight),
            "hcfa" | "head_circumference_for_age" => Ok(ChartType::HeadCircumferenceForAge),
            "bfa" | "bmi_for_age" => Ok(ChartType::BmiForAge),
            other => Err(GrowthError::DataUnavailable(
                ErrorInfo::new("unknown_chart", "no reference data for chart type")
                    .with_context("chart", other),
            )),
        }
    }
}

/// Sex of the child; the WHO standards are tabulated separately for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Boys.
    Male,
    /// Girls.
    Female,
}

impl Sex {
    /// Both sexes in canonical order.
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    /// Returns the canonical lowercase code.
    pub fn code(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Sex {
    type Err = GrowthError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "boy" => Ok(Sex::Male),
            "female" | "f" | "girl" => Ok(Sex::Female),
            other => Err(GrowthError::DataUnavailable(
                ErrorInfo::new("unknown_sex", "no reference data for sex")
                    .with_context("sex", other)
                    .with_hint("expected `male` or `female`"),
            )),
        }
    }
}

/// Independent variable indexing a reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Completed age in months (fractional months allowed).
    AgeMonths,
    /// Recumbent length or standing height in centimetres.
    LengthCm,
}

impl Axis {
    /// Returns the serialized name of the axis.
    pub fn name(&self) -> &'static str {
        match self {
            Axis::AgeMonths => "age_months",
            Axis::LengthCm => "length_cm",
        }
    }
}

/// A position on a chart's independent axis, tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisValue {
    /// Age in months.
    AgeMonths(f64),
    /// Length or height in centimetres.
    LengthCm(f64),
}

impl AxisValue {
    /// Returns the axis the value is expressed on.
    pub fn axis(&self) -> Axis {
        match self {
            AxisValue::AgeMonths(_) => Axis::AgeMonths,
            AxisValue::LengthCm(_) => Axis::LengthCm,
        }
    }

    /// Returns the raw numeric value.
    pub fn value(&self) -> f64 {
        match self {
            AxisValue::AgeMonths(value) | AxisValue::LengthCm(value) => *value,
        }
    }

    /// Returns the raw value when it is expressed on the axis `chart` expects.
    pub fn for_chart(&self, chart: ChartType) -> Result<f64, GrowthError> {
        if self.axis() != chart.axis() {
            return Err(GrowthError::InvalidMeasurement(
                ErrorInfo::new("axis_mismatch", "independent variable unit does not match chart")
                    .with_context("chart", chart)
                    .with_context("expected", chart.axis().name())
                    .with_context("supplied", self.axis().name()),
            ));
        }
        Ok(self.value())
    }
}

/// One of the seven standard deviation lines published by the WHO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SdBand {
    /// -3 SD.
    #[serde(rename = "SD3neg")]
    Sd3Neg,
    /// -2 SD.
    #[serde(rename = "SD2neg")]
    Sd2Neg,
    /// -1 SD.
    #[serde(rename = "SD1neg")]
    Sd1Neg,
    /// Median.
    #[serde(rename = "SD0")]
    Sd0,
    /// +1 SD.
    #[serde(rename = "SD1")]
    Sd1,
    /// +2 SD.
    #[serde(rename = "SD2")]
    Sd2,
    /// +3 SD.
    #[serde(rename = "SD3")]
    Sd3,
}

impl SdBand {
    /// All bands ordered from -3 SD to +3 SD.
    pub const ALL: [SdBand; 7] = [
        SdBand::Sd3Neg,
        SdBand::Sd2Neg,
        SdBand::Sd1Neg,
        SdBand::Sd0,
        SdBand::Sd1,
        SdBand::Sd2,
        SdBand::Sd3,
    ];

    /// Z-score represented by the band.
    pub fn z(&self) -> f64 {
        (self.index() as f64) - 3.0
    }

    /// Position of the band within [`SdBand::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Column label used in WHO z-score tables.
    pub fn label(&self) -> &'static str {
        match self {
            SdBand::Sd3Neg => "SD3neg",
            SdBand::Sd2Neg => "SD2neg",
            SdBand::Sd1Neg => "SD1neg",
            SdBand::Sd0 => "SD0",
            SdBand::Sd1 => "SD1",
            SdBand::Sd2 => "SD2",
            SdBand::Sd3 => "SD3",
        }
    }
}

impl fmt::Display for SdBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
