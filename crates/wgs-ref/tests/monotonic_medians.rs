use wgs_core::{ChartType, Sex};
use wgs_ref::ReferenceStore;

fn median_series(chart: ChartType, sex: Sex) -> Vec<f64> {
    let store = ReferenceStore::bundled().unwrap();
    (0..=60)
        .map(|month| {
            store
                .interpolate(chart, sex, month as f64)
                .unwrap()
                .lms()
                .unwrap()
                .m
        })
        .collect()
}

#[test]
fn age_indexed_medians_never_decrease() {
    for chart in [
        ChartType::WeightForAge,
        ChartType::LengthHeightForAge,
        ChartType::HeadCircumferenceForAge,
    ] {
        for sex in Sex::ALL {
            let series = median_series(chart, sex);
            for pair in series.windows(2) {
                assert!(pair[1] >= pair[0], "{chart} {sex}: {} -> {}", pair[0], pair[1]);
            }
        }
    }
}

#[test]
fn weight_for_height_median_grows_with_length() {
    let store = ReferenceStore::bundled().unwrap();
    for sex in Sex::ALL {
        let table = store.get_table(ChartType::WeightForHeight, sex).unwrap();
        let medians: Vec<f64> = table
            .rows()
            .iter()
            .map(|row| wgs_ref::resolve_lms(&row.values).unwrap().m)
            .collect();
        assert!(medians.windows(2).all(|pair| pair[1] > pair[0]));
    }
}

#[test]
fn bmi_median_peaks_in_infancy() {
    for sex in Sex::ALL {
        let series = median_series(ChartType::BmiForAge, sex);
        let (peak_month, _) = series
            .iter()
            .enumerate()
            .fold((0, f64::MIN), |acc, (idx, &m)| if m > acc.1 { (idx, m) } else { acc });
        assert!((3..=12).contains(&peak_month), "{sex}: peak at {peak_month}");
        assert!(series[60] < series[peak_month]);
    }
}
