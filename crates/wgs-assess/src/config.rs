use std::path::Path;

use serde::{Deserialize, Serialize};
use wgs_core::errors::{ErrorInfo, GrowthError};
use wgs_core::{ChartType, PercentileBounds};

/// YAML-configurable behaviour of the assessment engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Display bounds for reported percentiles.
    #[serde(default)]
    pub percentile: PercentileBounds,
    /// Use the WHO restricted LMS method beyond ±3 SD.
    #[serde(default)]
    pub tail_adjustment: bool,
    /// Mark biologically implausible z-scores on assessments.
    #[serde(default = "default_flag_implausible")]
    pub flag_implausible: bool,
    /// Per-chart z-score window outside which a value is implausible.
    #[serde(default)]
    pub implausible_limits: ImplausibleLimits,
}

fn default_flag_implausible() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            percentile: PercentileBounds::default(),
            tail_adjustment: false,
            flag_implausible: default_flag_implausible(),
            implausible_limits: ImplausibleLimits::default(),
        }
    }
}

impl EngineConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml_slice(data: &[u8]) -> Result<Self, GrowthError> {
        let config: EngineConfig = serde_yaml::from_slice(data).map_err(|err| {
            GrowthError::Config(ErrorInfo::new("config_parse", err.to_string()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a YAML file.
    pub fn load(path: &Path) -> Result<Self, GrowthError> {
        let data = std::fs::read(path).map_err(|err| {
            GrowthError::Config(
                ErrorInfo::new("config_read", err.to_string())
                    .with_context("path", path.display()),
            )
        })?;
        Self::from_yaml_slice(&data)
    }

    /// Checks cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<(), GrowthError> {
        self.percentile.validate()?;
        for chart in ChartType::ALL {
            self.implausible_limits.for_chart(chart).validate(chart)?;
        }
        Ok(())
    }
}

/// Closed z-score window of plausible values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZLimits {
    /// Lowest plausible z-score.
    pub low: f64,
    /// Highest plausible z-score.
    pub high: f64,
}

impl ZLimits {
    /// Builds a window.
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// True when `z` lies inside the window.
    pub fn contains(&self, z: f64) -> bool {
        self.low <= z && z <= self.high
    }

    fn validate(&self, chart: ChartType) -> Result<(), GrowthError> {
        if self.low.is_finite() && self.high.is_finite() && self.low < 0.0 && 0.0 < self.high {
            return Ok(());
        }
        Err(GrowthError::Config(
            ErrorInfo::new(
                "implausible_limits",
                "implausible limits must be finite and straddle the median",
            )
            .with_context("chart", chart)
            .with_context("low", self.low)
            .with_context("high", self.high),
        ))
    }
}

/// WHO biologically implausible value cutoffs, one window per chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImplausibleLimits {
    /// Weight-for-age.
    #[serde(default = "default_wfa")]
    pub wfa: ZLimits,
    /// Length/height-for-age.
    #[serde(default = "default_lhfa")]
    pub lhfa: ZLimits,
    /// Weight-for-length/height.
    #[serde(default = "default_symmetric")]
    pub wfh: ZLimits,
    /// Head-circumference-for-age.
    #[serde(default = "default_symmetric")]
    pub hcfa: ZLimits,
    /// BMI-for-age.
    #[serde(default = "default_symmetric")]
    pub bfa: ZLimits,
}

fn default_wfa() -> ZLimits {
    ZLimits::new(-6.0, 5.0)
}

fn default_lhfa() -> ZLimits {
    ZLimits::new(-6.0, 6.0)
}

fn default_symmetric() -> ZLimits {
    ZLimits::new(-5.0, 5.0)
}

impl Default for ImplausibleLimits {
    fn default() -> Self {
        Self {
            wfa: default_wfa(),
            lhfa: default_lhfa(),
            wfh: default_symmetric(),
            hcfa: default_symmetric(),
            bfa: default_symmetric(),
        }
    }
}

impl ImplausibleLimits {
    /// Window for a chart.
    pub fn for_chart(&self, chart: ChartType) -> &ZLimits {
        match chart {
            ChartType::WeightForAge => &self.wfa,
            ChartType::LengthHeightForAge => &self.lhfa,
            ChartType::WeightForHeight => &self.wfh,
            ChartType::HeadCircumferenceForAge => &self.hcfa,
            ChartType::BmiForAge => &self.bfa,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = EngineConfig::from_yaml_slice(b"{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert!(config.flag_implausible);
        assert!(!config.tail_adjustment);
    }

    #[test]
    fn partial_limits_keep_other_defaults() {
        let yaml = b"implausible_limits:\n  wfh:\n    low: -4.0\n    high: 4.0\n";
        let config = EngineConfig::from_yaml_slice(yaml).unwrap();
        assert_eq!(config.implausible_limits.wfh, ZLimits::new(-4.0, 4.0));
        assert_eq!(config.implausible_limits.wfa, ZLimits::new(-6.0, 5.0));
    }

    #[test]
    fn inverted_percentile_bounds_fail_validation() {
        let yaml = b"percentile:\n  floor: 50.0\n  ceiling: 10.0\n";
        let err = EngineConfig::from_yaml_slice(yaml).unwrap_err();
        assert!(matches!(err, GrowthError::Config(_)));
        assert_eq!(err.code(), "percentile_bounds");
    }

    #[test]
    fn limits_must_straddle_the_median() {
        let yaml = b"implausible_limits:\n  bfa:\n    low: 1.0\n    high: 5.0\n";
        let err = EngineConfig::from_yaml_slice(yaml).unwrap_err();
        assert_eq!(err.code(), "implausible_limits");
    }

    #[test]
    fn malformed_yaml_is_a_config_error() {
        let err = EngineConfig::from_yaml_slice(b"tail_adjustment: [").unwrap_err();
        assert_eq!(err.code(), "config_parse");
    }
}
