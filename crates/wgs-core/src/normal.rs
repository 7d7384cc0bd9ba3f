//! Standard normal distribution helpers used to report percentiles.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, GrowthError};

const P: f64 = 0.231_641_9;
const B: [f64; 5] = [
    0.319_381_530,
    -0.356_563_782,
    1.781_477_937,
    -1.821_255_978,
    1.330_274_429,
];
const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Abramowitz & Stegun 26.2.17; absolute error below 7.5e-8.
pub fn normal_cdf(z: f64) -> f64 {
    if z.is_nan() {
        return f64::NAN;
    }
    if z > 8.0 {
        return 1.0;
    }
    if z < -8.0 {
        return 0.0;
    }
    let x = z.abs();
    let t = 1.0 / (1.0 + P * x);
    let density = INV_SQRT_2PI * (-x * x / 2.0).exp();
    let poly = t * (B[0] + t * (B[1] + t * (B[2] + t * (B[3] + t * B[4]))));
    let upper_tail = density * poly;
    if z >= 0.0 {
        1.0 - upper_tail
    } else {
        upper_tail
    }
}

/// Display bounds applied to reported percentiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileBounds {
    /// Lowest percentile ever reported.
    #[serde(default = "PercentileBounds::default_floor")]
    pub floor: f64,
    /// Highest percentile ever reported.
    #[serde(default = "PercentileBounds::default_ceiling")]
    pub ceiling: f64,
}

impl PercentileBounds {
    fn default_floor() -> f64 {
        0.1
    }

    fn default_ceiling() -> f64 {
        99.9
    }

    /// Checks that the bounds form a non-empty sub-interval of `[0, 100]`.
    pub fn validate(&self) -> Result<(), GrowthError> {
        let ordered = self.floor.is_finite()
            && self.ceiling.is_finite()
            && 0.0 <= self.floor
            && self.floor < self.ceiling
            && self.ceiling <= 100.0;
        if ordered {
            Ok(())
        } else {
            Err(GrowthError::Config(
                ErrorInfo::new("percentile_bounds", "percentile bounds must satisfy 0 <= floor < ceiling <= 100")
                    .with_context("floor", self.floor)
                    .with_context("ceiling", self.ceiling),
            ))
        }
    }
}

impl Default for PercentileBounds {
    fn default() -> Self {
        Self {
            floor: Self::default_floor(),
            ceiling: Self::default_ceiling(),
        }
    }
}

/// Percentile for a z-score, clamped to `[0.1, 99.9]`.
pub fn compute_percentile(z: f64) -> f64 {
    compute_percentile_within(z, &PercentileBounds::default())
}

/// Percentile for a z-score, clamped to the supplied bounds.
pub fn compute_percentile_within(z: f64, bounds: &PercentileBounds) -> f64 {
    (normal_cdf(z) * 100.0).clamp(bounds.floor, bounds.ceiling)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdf_matches_reference_points() {
        assert!((normal_cdf(0.0) - 0.5).abs() < 1e-7);
        assert!((normal_cdf(1.0) - 0.841_344_746).abs() < 1e-7);
        assert!((normal_cdf(-1.96) - 0.024_997_895).abs() < 1e-7);
        assert!((normal_cdf(2.0) - 0.977_249_868).abs() < 1e-7);
    }

    #[test]
    fn cdf_is_symmetric() {
        for z in [0.3, 1.1, 2.5, 3.7] {
            assert!((normal_cdf(z) + normal_cdf(-z) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn percentile_is_clamped_at_the_tails() {
        assert_eq!(compute_percentile(-6.0), 0.1);
        assert_eq!(compute_percentile(6.0), 99.9);
        assert_eq!(compute_percentile(f64::INFINITY), 99.9);
        assert!((compute_percentile(0.0) - 50.0).abs() < 1e-5);
    }

    #[test]
    fn bounds_validation() {
        assert!(PercentileBounds::default().validate().is_ok());
        let inverted = PercentileBounds {
            floor: 60.0,
            ceiling: 40.0,
        };
        assert!(matches!(inverted.validate(), Err(GrowthError::Config(_))));
    }
}
