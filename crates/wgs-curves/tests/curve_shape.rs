use wgs_core::{ChartType, GrowthError, SdBand, Sex};
use wgs_curves::{generate_curves, generate_percentile_curves, PercentileLine};
use wgs_ref::ReferenceStore;

fn store() -> &'static ReferenceStore {
    ReferenceStore::bundled().unwrap()
}

#[test]
fn head_circumference_curves_cover_every_month() {
    let curves = generate_curves(
        store(),
        ChartType::HeadCircumferenceForAge,
        Sex::Female,
        0.0,
        60.0,
        1.0,
    )
    .unwrap();
    assert_eq!(curves.bands.len(), 7);
    for band in SdBand::ALL {
        let points = curves.band(band);
        assert_eq!(points.len(), 61, "{band}");
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[60].x, 60.0);
    }
    let median = curves.band(SdBand::Sd0);
    for pair in median.windows(2) {
        assert!(pair[1].y >= pair[0].y, "{:?} -> {:?}", pair[0], pair[1]);
    }
    assert!(!curves.clamped);
}

#[test]
fn bands_are_ordered_at_every_position() {
    for chart in ChartType::ALL {
        for sex in Sex::ALL {
            let table = store().get_table(chart, sex).unwrap();
            let (lo, hi) = table.domain();
            let curves = generate_curves(store(), chart, sex, lo, hi, (hi - lo) / 40.0).unwrap();
            for idx in 0..curves.band(SdBand::Sd0).len() {
                let ys: Vec<f64> = SdBand::ALL
                    .iter()
                    .map(|band| curves.band(*band)[idx].y)
                    .collect();
                for pair in ys.windows(2) {
                    assert!(pair[1] > pair[0], "{chart} {sex} idx {idx}: {ys:?}");
                }
            }
        }
    }
}

#[test]
fn ranges_past_the_table_are_flagged() {
    let curves = generate_curves(
        store(),
        ChartType::WeightForHeight,
        Sex::Male,
        40.0,
        125.0,
        5.0,
    )
    .unwrap();
    assert!(curves.clamped);
    let median = curves.band(SdBand::Sd0);
    assert_eq!(median.first().unwrap().y, median[1].y);
    assert_eq!(median.last().unwrap().y, median[median.len() - 2].y);
}

#[test]
fn percentile_median_matches_sd_median() {
    let sd = generate_curves(store(), ChartType::WeightForAge, Sex::Male, 0.0, 24.0, 0.5).unwrap();
    let pct = generate_percentile_curves(store(), ChartType::WeightForAge, Sex::Male, 0.0, 24.0, 0.5)
        .unwrap();
    let sd_median = sd.band(SdBand::Sd0);
    let p50 = pct.line(PercentileLine::P50);
    assert_eq!(sd_median.len(), p50.len());
    for (a, b) in sd_median.iter().zip(p50) {
        assert!((a.y - b.y).abs() < 1e-9);
    }
    for idx in 0..p50.len() {
        let ys: Vec<f64> = PercentileLine::ALL
            .iter()
            .map(|line| pct.line(*line)[idx].y)
            .collect();
        for pair in ys.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }
}

#[test]
fn invalid_requests_are_rejected() {
    let err = generate_curves(store(), ChartType::WeightForAge, Sex::Male, 0.0, 12.0, -1.0)
        .unwrap_err();
    assert_eq!(err.code(), "curve_step_non_positive");
    let err = generate_percentile_curves(store(), ChartType::BmiForAge, Sex::Female, 12.0, 0.0, 1.0)
        .unwrap_err();
    assert_eq!(err.code(), "curve_range_inverted");
}

#[test]
fn curve_sets_serialize_with_band_labels() {
    let curves = generate_curves(store(), ChartType::LengthHeightForAge, Sex::Male, 0.0, 2.0, 1.0)
        .unwrap();
    let json = serde_json::to_value(&curves).unwrap();
    assert_eq!(json["chart"], "lhfa");
    assert_eq!(json["bands"]["SD2neg"].as_array().unwrap().len(), 3);
}

const SD_COLUMN_DATASET: &str = r#"{
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
fn z_score_tables_emit_their_columns() {
    let store = ReferenceStore::from_json_slice(SD_COLUMN_DATASET.as_bytes()).unwrap();
    let curves = generate_curves(
        &store,
        ChartType::HeadCircumferenceForAge,
        Sex::Female,
        0.0,
        1.0,
        0.5,
    )
    .unwrap();
    assert!(!curves.clamped);
    let sd3neg = curves.band(SdBand::Sd3Neg);
    let median = curves.band(SdBand::Sd0);
    let sd2 = curves.band(SdBand::Sd2);
    assert_eq!(median.len(), 3);
    assert_eq!(sd3neg[0].y, 30.3);
    assert_eq!(median[0].y, 33.9);
    assert!((median[1].y - 35.2).abs() < 1e-9);
    assert!((sd2[1].y - 37.55).abs() < 1e-9);
    assert_eq!(median[2].y, 36.5);
    assert_eq!(sd2[2].y, 38.9);

    let pct = generate_percentile_curves(
        &store,
        ChartType::HeadCircumferenceForAge,
        Sex::Female,
        0.0,
        1.0,
        1.0,
    )
    .unwrap();
    assert_eq!(pct.line(PercentileLine::P50)[0].y, 33.9);
}

#[test]
fn overflowing_ranges_fail_instead_of_emptying() {
    for (min, max, step) in [(0.0, 60.0, 1e-20), (-1e308, 1e308, 1.0)] {
        let err = generate_curves(store(), ChartType::WeightForAge, Sex::Male, min, max, step)
            .unwrap_err();
        assert!(matches!(err, GrowthError::InvalidMeasurement(_)));
        assert_eq!(err.code(), "curve_too_dense");
    }
}
