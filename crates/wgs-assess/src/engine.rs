use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wgs_classify::{classify_with_bounds, Classification};
use wgs_core::errors::GrowthError;
use wgs_core::{compute_z, compute_z_adjusted, ChartType, LmsParameters, Sex};
use wgs_ref::{BoundaryClamp, ReferenceStore};

use crate::config::EngineConfig;
use crate::measure::Measurement;

/// Full outcome of assessing one measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Chart the measurement was assessed against.
    pub chart: ChartType,
    /// Sex of the reference population.
    pub sex: Sex,
    /// Requested independent variable.
    pub x: f64,
    /// Observed value.
    pub value: f64,
    /// Z-score, percentile and category.
    #[serde(flatten)]
    pub classification: Classification,
    /// LMS parameters the z-score was computed from.
    pub lms: LmsParameters,
    /// Present when `x` was outside the tabulated domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clamp: Option<BoundaryClamp>,
    /// Z-score lies outside the WHO plausibility window for the chart.
    pub implausible: bool,
}

/// Assessment front door: a reference store plus behaviour settings.
#[derive(Debug, Clone)]
pub struct GrowthEngine<'s> {
    store: &'s ReferenceStore,
    config: EngineConfig,
}

impl GrowthEngine<'static> {
    /// Engine over the bundled WHO 2006 dataset.
    pub fn bundled(config: EngineConfig) -> Result<Self, GrowthError> {
        GrowthEngine::new(ReferenceStore::bundled()?, config)
    }
}

impl<'s> GrowthEngine<'s> {
    /// Engine over an arbitrary store. The configuration is validated.
    pub fn new(store: &'s ReferenceStore, config: EngineConfig) -> Result<Self, GrowthError> {
        config.validate()?;
        Ok(Self { store, config })
    }

    /// Underlying reference store.
    pub fn store(&self) -> &'s ReferenceStore {
        self.store
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Z-score for a measurement, honouring the tail adjustment setting.
    pub fn z_score(&self, value: f64, lms: &LmsParameters) -> Result<f64, GrowthError> {
        if self.config.tail_adjustment {
            compute_z_adjusted(value, lms)
        } else {
            compute_z(value, lms)
        }
    }

    /// Assesses one measurement end to end.
    ///
    /// Out-of-domain `x` is not an error: the boundary row is used and the
    /// clamp is recorded on the result.
    pub fn assess(&self, measurement: &Measurement) -> Result<Assessment, GrowthError> {
        let Measurement {
            value,
            chart,
            sex,
            x,
        } = *measurement;
        let x = x.for_chart(chart)?;
        let row = self.store.interpolate(chart, sex, x)?;
        if let Some(clamp) = &row.clamp {
            warn!(
                %chart,
                %sex,
                requested = clamp.requested,
                boundary = clamp.boundary,
                "measurement outside reference domain; using boundary row"
            );
        }
        let lms = row.lms()?;
        let z = self.z_score(value, &lms)?;
        let classification = classify_with_bounds(chart, z, &self.config.percentile)?;
        let implausible = self.config.flag_implausible
            && !self.config.implausible_limits.for_chart(chart).contains(z);
        if implausible {
            warn!(%chart, %sex, x, value, z, "biologically implausible measurement");
        }
        debug!(
            %chart,
            %sex,
            x,
            value,
            z,
            category = ?classification.category,
            "assessed measurement"
        );
        Ok(Assessment {
            chart,
            sex,
            x,
            value,
            classification,
            lms,
            clamp: row.clamp,
            implausible,
        })
    }
}
