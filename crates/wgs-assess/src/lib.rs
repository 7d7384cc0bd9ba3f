#![deny(missing_docs)]
#![doc = "Assesses single anthropometric measurements against the WHO growth standards."]

/// YAML configuration of the engine.
pub mod config;
/// Assessment engine and its result type.
pub mod engine;
/// Measurement input and unit helpers.
pub mod measure;

pub use config::{EngineConfig, ImplausibleLimits, ZLimits};
pub use engine::{Assessment, GrowthEngine};
pub use measure::{
    age_months_from_days, bmi, Measurement, DAYS_PER_MONTH, LENGTH_HEIGHT_OFFSET_CM,
    STANDING_TABLE_FROM_CM,
};
