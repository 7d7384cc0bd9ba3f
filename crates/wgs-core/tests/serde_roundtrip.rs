use wgs_core::errors::{ErrorInfo, GrowthError};
use wgs_core::provenance::{DatasetProvenance, SchemaVersion};
use wgs_core::{ChartType, LmsParameters, SdBand, Sex};

#[test]
fn provenance_round_trip_json() {
    let provenance = DatasetProvenance {
        schema_version: SchemaVersion::new(1, 2, 0),
        digest: "abc123".into(),
        ..DatasetProvenance::default()
    };

    let json = serde_json::to_string_pretty(&provenance).expect("serialize");
    let decoded: DatasetProvenance = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(decoded, provenance);
    assert_eq!(decoded.year, 2006);
}

#[test]
fn codes_serialize_as_who_abbreviations() {
    assert_eq!(serde_json::to_string(&ChartType::WeightForHeight).unwrap(), "\"wfh\"");
    assert_eq!(serde_json::to_string(&Sex::Female).unwrap(), "\"female\"");
    assert_eq!(serde_json::to_string(&SdBand::Sd2Neg).unwrap(), "\"SD2neg\"");
    let chart: ChartType = serde_json::from_str("\"hcfa\"").unwrap();
    assert_eq!(chart, ChartType::HeadCircumferenceForAge);
}

#[test]
fn lms_uses_upper_case_keys() {
    let lms = LmsParameters::new(1.0, 49.8842, 0.03795);
    let value = serde_json::to_value(lms).unwrap();
    assert_eq!(value["M"], 49.8842);
    let decoded: LmsParameters = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, lms);
}

#[test]
fn errors_are_tagged_by_family() {
    let err = GrowthError::DataUnavailable(ErrorInfo::new("unknown_sex", "no data"));
    let value = serde_json::to_value(&err).unwrap();
    assert_eq!(value["family"], "DataUnavailable");
    assert_eq!(value["detail"]["code"], "unknown_sex");
}

#[test]
fn schema_compatibility() {
    let reader = SchemaVersion::new(1, 1, 0);
    assert!(reader.reads(&SchemaVersion::new(1, 0, 3)));
    assert!(!reader.reads(&SchemaVersion::new(2, 0, 0)));
    assert!(!reader.reads(&SchemaVersion::new(1, 2, 0)));
}
