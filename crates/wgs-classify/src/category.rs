use serde::{Deserialize, Serialize};

/// Lower edge of the moderate deficit band; anything below is severe.
pub const SEVERE_DEFICIT_BELOW: f64 = -3.0;
/// Lower edge of the normal band; anything below is a deficit.
pub const DEFICIT_BELOW: f64 = -2.0;
/// Upper edge of the normal band; anything above is elevated.
pub const ELEVATED_ABOVE: f64 = 2.0;
/// Upper edge of the elevated band; anything above is highly elevated.
pub const HIGH_ELEVATED_ABOVE: f64 = 3.0;

/// Clinical growth category shared by every chart type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthCategory {
    /// z < -3.
    SevereDeficit,
    /// -3 <= z < -2.
    ModerateDeficit,
    /// -2 <= z <= 2.
    Normal,
    /// 2 < z <= 3.
    Elevated,
    /// z > 3.
    HighElevated,
}

impl GrowthCategory {
    /// Every category from the lowest band to the highest.
    pub const ALL: [GrowthCategory; 5] = [
        GrowthCategory::SevereDeficit,
        GrowthCategory::ModerateDeficit,
        GrowthCategory::Normal,
        GrowthCategory::Elevated,
        GrowthCategory::HighElevated,
    ];

    /// Band containing `z`. Returns `None` only for NaN.
    ///
    /// Deficit bands include their lower edge and elevated bands include
    /// their upper edge, so a value exactly on a cutoff always lands in the
    /// band nearer the median.
    pub fn from_z(z: f64) -> Option<Self> {
        if z.is_nan() {
            return None;
        }
        let category = if z < SEVERE_DEFICIT_BELOW {
            GrowthCategory::SevereDeficit
        } else if z < DEFICIT_BELOW {
            GrowthCategory::ModerateDeficit
        } else if z <= ELEVATED_ABOVE {
            GrowthCategory::Normal
        } else if z <= HIGH_ELEVATED_ABOVE {
            GrowthCategory::Elevated
        } else {
            GrowthCategory::HighElevated
        };
        Some(category)
    }

    /// Severity colour used by the surrounding UI.
    pub fn color(&self) -> SeverityColor {
        match self {
            GrowthCategory::SevereDeficit | GrowthCategory::HighElevated => SeverityColor::Red,
            GrowthCategory::ModerateDeficit => SeverityColor::Orange,
            GrowthCategory::Normal => SeverityColor::Green,
            GrowthCategory::Elevated => SeverityColor::Yellow,
        }
    }

    /// True for both deficit bands.
    pub fn is_deficit(&self) -> bool {
        matches!(
            self,
            GrowthCategory::SevereDeficit | GrowthCategory::ModerateDeficit
        )
    }

    /// True for both elevated bands.
    pub fn is_elevated(&self) -> bool {
        matches!(
            self,
            GrowthCategory::Elevated | GrowthCategory::HighElevated
        )
    }
}

/// Severity colour attached to a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityColor {
    /// Severe finding.
    Red,
    /// Moderate deficit.
    Orange,
    /// Within the normal range.
    Green,
    /// Elevated.
    Yellow,
}
