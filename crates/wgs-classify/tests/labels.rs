use std::collections::BTreeSet;

use wgs_classify::{classify, description, label, GrowthCategory};
use wgs_core::ChartType;

#[test]
fn every_chart_and_category_has_text() {
    for chart in ChartType::ALL {
        let labels: BTreeSet<_> = GrowthCategory::ALL
            .iter()
            .map(|category| label(chart, *category))
            .collect();
        assert_eq!(labels.len(), 5, "labels for {chart} must be distinct");
        for category in GrowthCategory::ALL {
            assert!(!description(chart, category).is_empty());
        }
    }
}

#[test]
fn stunting_and_wasting_vocabulary() {
    let lhfa = classify(ChartType::LengthHeightForAge, -2.5).unwrap();
    assert!(lhfa.label.contains("tunted"));
    let wfh = classify(ChartType::WeightForHeight, -2.5).unwrap();
    assert_eq!(wfh.label, "Wasted");
    let wfh = classify(ChartType::WeightForHeight, 2.5).unwrap();
    assert_eq!(wfh.label, "Overweight");
    let bfa = classify(ChartType::BmiForAge, 3.5).unwrap();
    assert_eq!(bfa.label, "Obese");
}

#[test]
fn classification_serializes_for_callers() {
    let out = classify(ChartType::HeadCircumferenceForAge, 0.4).unwrap();
    let value = serde_json::to_value(&out).unwrap();
    assert_eq!(value["category"], "normal");
    assert_eq!(value["color"], "green");
    assert_eq!(value["label"], "Normal head circumference");
}
