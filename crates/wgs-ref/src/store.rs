use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::info;
use wgs_core::errors::{ErrorInfo, GrowthError};
use wgs_core::{ChartType, DatasetProvenance, SchemaVersion, Sex};

use crate::interpolate::{interpolate, InterpolatedRow};
use crate::row::RawRow;
use crate::serde::{from_json_slice, stable_hash_string};
use crate::table::ReferenceTable;

/// Dataset document compiled into the crate.
pub const BUNDLED_DATASET: &str = include_str!("../data/who_2006.json");

/// Newest dataset schema this crate reads.
pub const SUPPORTED_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

static BUNDLED: OnceLock<Result<ReferenceStore, GrowthError>> = OnceLock::new();

/// One table as it appears in a dataset document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDocument {
    /// Chart type of the table.
    pub chart: ChartType,
    /// Sex of the table.
    pub sex: Sex,
    /// Unvalidated rows.
    pub rows: Vec<RawRow>,
}

/// Serialized form of a complete reference dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetDocument {
    /// Standard the dataset reproduces. The digest is recomputed on load.
    #[serde(default)]
    pub provenance: DatasetProvenance,
    /// Tables keyed by (chart, sex).
    pub tables: Vec<TableDocument>,
}

/// Read-only set of reference tables keyed by (chart, sex).
#[derive(Debug, Clone)]
pub struct ReferenceStore {
    tables: BTreeMap<(ChartType, Sex), ReferenceTable>,
    provenance: DatasetProvenance,
}

impl ReferenceStore {
    /// Validates every table of a dataset document into a store.
    pub fn from_document(document: DatasetDocument) -> Result<Self, GrowthError> {
        let mut provenance = document.provenance;
        if !SUPPORTED_SCHEMA.reads(&provenance.schema_version) {
            return Err(GrowthError::Serde(
                ErrorInfo::new("schema_unsupported", "dataset schema is newer than this reader")
                    .with_context("dataset", provenance.schema_version)
                    .with_context("supported", SUPPORTED_SCHEMA),
            ));
        }
        provenance.digest = stable_hash_string(&document.tables)?;

        let mut tables = BTreeMap::new();
        for doc in &document.tables {
            let table = ReferenceTable::from_raw(doc.chart, doc.sex, &doc.rows)?;
            if tables.insert((doc.chart, doc.sex), table).is_some() {
                return Err(GrowthError::MalformedReferenceRow(
                    ErrorInfo::new("duplicate_table", "dataset defines a table twice")
                        .with_context("chart", doc.chart)
                        .with_context("sex", doc.sex),
                ));
            }
        }
        info!(
            standard = %provenance.standard,
            year = provenance.year,
            tables = tables.len(),
            digest = %provenance.digest,
            "loaded reference dataset"
        );
        Ok(Self { tables, provenance })
    }

    /// Parses and validates a dataset document from JSON bytes.
    pub fn from_json_slice(data: &[u8]) -> Result<Self, GrowthError> {
        let document: DatasetDocument = from_json_slice(data)?;
        Self::from_document(document)
    }

    /// Process-wide store built once from the bundled WHO dataset.
    ///
    /// The bundled tables are an abridged approximation of the WHO 2006
    /// standards, not the published tables: knots are monthly only up to 12
    /// months, later rows and many L/S values are rounded, and its
    /// provenance says so. Load the published tables with
    /// [`ReferenceStore::from_json_slice`] where exact WHO z-scores matter.
    pub fn bundled() -> Result<&'static ReferenceStore, GrowthError> {
        BUNDLED
            .get_or_init(|| Self::from_json_slice(BUNDLED_DATASET.as_bytes()))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Returns the table for a (chart, sex) combination.
    pub fn get_table(&self, chart: ChartType, sex: Sex) -> Result<&ReferenceTable, GrowthError> {
        self.tables.get(&(chart, sex)).ok_or_else(|| {
            GrowthError::DataUnavailable(
                ErrorInfo::new("table_missing", "no reference table loaded for chart and sex")
                    .with_context("chart", chart)
                    .with_context("sex", sex),
            )
        })
    }

    /// String-level lookup; unknown chart or sex codes are unavailable data.
    pub fn lookup(&self, chart: &str, sex: &str) -> Result<&ReferenceTable, GrowthError> {
        let chart: ChartType = chart.parse()?;
        let sex: Sex = sex.parse()?;
        self.get_table(chart, sex)
    }

    /// Looks up the table and interpolates it at `x`.
    pub fn interpolate(
        &self,
        chart: ChartType,
        sex: Sex,
        x: f64,
    ) -> Result<InterpolatedRow, GrowthError> {
        interpolate(self.get_table(chart, sex)?, x)
    }

    /// Iterates over the loaded tables in (chart, sex) order.
    pub fn tables(&self) -> impl Iterator<Item = &ReferenceTable> + '_ {
        self.tables.values()
    }

    /// Number of loaded tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// True when no table is loaded.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Provenance of the loaded dataset, including its digest.
    pub fn provenance(&self) -> &DatasetProvenance {
        &self.provenance
    }
}
