use wgs_core::errors::GrowthError;
use wgs_core::{ChartType, Sex};
use wgs_ref::{ReferenceStore, RowValues};

#[test]
fn every_chart_and_sex_is_bundled() {
    let store = ReferenceStore::bundled().expect("bundled dataset");
    assert_eq!(store.len(), 10);
    for chart in ChartType::ALL {
        for sex in Sex::ALL {
            let table = store.get_table(chart, sex).expect("table present");
            assert_eq!(table.chart(), chart);
            assert_eq!(table.sex(), sex);
            assert!(table.rows().len() >= 10);
        }
    }
}

#[test]
fn bundled_domains_match_the_standard() {
    let store = ReferenceStore::bundled().unwrap();
    let wfa = store.get_table(ChartType::WeightForAge, Sex::Male).unwrap();
    assert_eq!(wfa.domain(), (0.0, 60.0));
    let wfh = store.get_table(ChartType::WeightForHeight, Sex::Female).unwrap();
    assert_eq!(wfh.domain(), (45.0, 120.0));
}

#[test]
fn published_medians_are_reproduced() {
    let store = ReferenceStore::bundled().unwrap();
    let row = store
        .interpolate(ChartType::WeightForAge, Sex::Male, 24.0)
        .unwrap();
    let lms = row.lms().unwrap();
    assert!((lms.m - 12.15).abs() < 0.01);

    let row = store
        .interpolate(ChartType::LengthHeightForAge, Sex::Female, 6.0)
        .unwrap();
    assert!((row.lms().unwrap().m - 65.7).abs() < 0.05);
}

#[test]
fn unknown_codes_are_unavailable() {
    let store = ReferenceStore::bundled().unwrap();
    let err = store.lookup("wfh", "unknown").unwrap_err();
    assert!(matches!(err, GrowthError::DataUnavailable(_)));
    let err = store.lookup("height_velocity", "male").unwrap_err();
    assert!(matches!(err, GrowthError::DataUnavailable(_)));
    assert!(store.lookup("WFH", "Male").is_ok());
}

#[test]
fn digest_is_stable_and_hex() {
    let store = ReferenceStore::bundled().unwrap();
    let digest = &store.provenance().digest;
    assert_eq!(digest.len(), 64);
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));

    let reparsed = ReferenceStore::from_json_slice(wgs_ref::BUNDLED_DATASET.as_bytes()).unwrap();
    assert_eq!(&reparsed.provenance().digest, digest);
    assert_eq!(store.provenance().year, 2006);
}

#[test]
fn bundled_provenance_declares_the_approximation() {
    let provenance = ReferenceStore::bundled().unwrap().provenance();
    assert!(provenance.standard.starts_with("WHO Child Growth Standards"));
    assert!(provenance.standard.contains("approximation"));
}

const PARTIAL_SD_DATASET: &str = r#"{
  "provenance": {
    "standard": "WHO Child Growth Standards",
    "year": 2006,
    "schema_version": { "major": 1, "minor": 0, "patch": 0 }
  },
  "tables": [
    {
      "chart": "hcfa",
      "sex": "female",
      "rows": [
        { "x": 0, "SD3neg": 30.3, "SD2neg": 31.5, "SD1neg": 32.7, "SD0": 33.9, "SD1": 35.1, "SD2": 36.2, "SD3": 37.4 },
        { "x": 1, "SD3neg": 33.0, "SD2neg": 34.2, "SD1neg": 35.4, "SD0": 36.5, "SD1": 37.7, "SD2": 38.9, "SD3": 40.1 }
      ]
    }
  ]
}"#;

#[test]
fn z_score_datasets_load_and_missing_tables_are_unavailable() {
    let store = ReferenceStore::from_json_slice(PARTIAL_SD_DATASET.as_bytes()).unwrap();
    assert_eq!(store.len(), 1);
    let table = store
        .get_table(ChartType::HeadCircumferenceForAge, Sex::Female)
        .unwrap();
    assert!(matches!(table.rows()[0].values, RowValues::ZScores(_)));

    let err = store
        .get_table(ChartType::HeadCircumferenceForAge, Sex::Male)
        .unwrap_err();
    assert!(matches!(err, GrowthError::DataUnavailable(_)));
    assert_eq!(err.code(), "table_missing");
}

#[test]
fn rows_without_values_fail_the_load() {
    let dataset = r#"{ "tables": [ { "chart": "wfa", "sex": "male", "rows": [ { "x": 0 } ] } ] }"#;
    let err = ReferenceStore::from_json_slice(dataset.as_bytes()).unwrap_err();
    assert!(matches!(err, GrowthError::MalformedReferenceRow(_)));
    assert_eq!(err.code(), "row_empty");
}

#[test]
fn duplicate_tables_fail_the_load() {
    let table = r#"{ "chart": "wfa", "sex": "male", "rows": [ { "x": 0, "L": 1, "M": 3.3, "S": 0.14 } ] }"#;
    let dataset = format!(r#"{{ "tables": [ {table}, {table} ] }}"#);
    let err = ReferenceStore::from_json_slice(dataset.as_bytes()).unwrap_err();
    assert_eq!(err.code(), "duplicate_table");
}

#[test]
fn newer_schemas_are_refused() {
    let dataset = r#"{
      "provenance": { "standard": "WHO", "year": 2006, "schema_version": { "major": 2, "minor": 0, "patch": 0 } },
      "tables": []
    }"#;
    let err = ReferenceStore::from_json_slice(dataset.as_bytes()).unwrap_err();
    assert!(matches!(err, GrowthError::Serde(_)));
    assert_eq!(err.code(), "schema_unsupported");
}

#[test]
fn invalid_json_is_a_serde_error() {
    let err = ReferenceStore::from_json_slice(b"{ not json").unwrap_err();
    assert_eq!(err.code(), "json_deserialize");
}
