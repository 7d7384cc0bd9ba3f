use wgs_core::errors::{ErrorInfo, GrowthError};
use wgs_core::{LmsParameters, SdBand};

use crate::row::RowValues;

/// Converts reference values into LMS parameters.
///
/// LMS rows are returned unchanged. Z-score rows are approximated as a
/// normal distribution (`L = 1`) with `M = SD0` and `S` the mean of the two
/// relative half-spreads around the median:
/// `S = 0.5 * ((SD1 - SD0)/M + (SD0 - SD1neg)/M)`.
/// The approximation assumes the distribution is locally symmetric; it is
/// exact only when the SD columns are evenly spaced.
pub fn resolve_lms(values: &RowValues) -> Result<LmsParameters, GrowthError> {
    let lms = match values {
        RowValues::Lms(lms) => *lms,
        RowValues::ZScores(sd) => {
            let m = sd.median();
            let upper = sd.get(SdBand::Sd1) - m;
            let lower = m - sd.get(SdBand::Sd1Neg);
            LmsParameters::new(1.0, m, 0.5 * (upper / m + lower / m))
        }
    };
    if !(lms.m.is_finite() && lms.m > 0.0 && lms.s.is_finite() && lms.s > 0.0 && lms.l.is_finite())
    {
        return Err(GrowthError::MalformedReferenceRow(
            ErrorInfo::new(
                "lms_unresolvable",
                "reference values do not describe a distribution with positive median and spread",
            )
            .with_context("representation", values.kind())
            .with_context("M", lms.m)
            .with_context("S", lms.s),
        ));
    }
    Ok(lms)
}
