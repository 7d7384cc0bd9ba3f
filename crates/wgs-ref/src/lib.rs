#![doc = "Reference table store, interpolation and LMS parameter resolution for the WHO growth standards."]

/// Linear interpolation with boundary clamping.
pub mod interpolate;
/// Conversion of reference rows into LMS parameters.
pub mod resolve;
/// Row model and raw-row validation.
pub mod row;
/// Canonical JSON and digest helpers.
pub mod serde;
/// Process-wide table store and dataset documents.
pub mod store;
/// Validated per-(chart, sex) tables.
pub mod table;

pub use interpolate::{interpolate, BoundaryClamp, ClampSide, InterpolatedRow};
pub use resolve::resolve_lms;
pub use row::{RawRow, ReferenceRow, RowValues, SdValues};
pub use store::{DatasetDocument, ReferenceStore, TableDocument, BUNDLED_DATASET};
pub use table::ReferenceTable;
