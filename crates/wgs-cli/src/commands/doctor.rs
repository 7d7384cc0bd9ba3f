use std::error::Error;

use clap::Args;
use serde::Serialize;
use tracing::warn;
use wgs_core::{ChartType, Sex};
use wgs_ref::{ReferenceStore, ReferenceTable};

use crate::{print_json, GlobalArgs};

/// Charts whose median must never decrease along the table.
const MONOTONE_CHARTS: [ChartType; 3] = [
    ChartType::WeightForAge,
    ChartType::LengthHeightForAge,
    ChartType::HeadCircumferenceForAge,
];

#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// Emit only JSON without additional context.
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: String,
    ok: bool,
    detail: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    status: String,
    standard: String,
    year: u16,
    digest: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(global: &GlobalArgs, args: &DoctorArgs) -> Result<(), Box<dyn Error>> {
    let store = global.store()?;
    let report = diagnose(&store)?;
    if !args.quiet {
        println!("wgs doctor status: {}", report.status);
    }
    print_json(&report)?;
    if report.status != "ok" {
        return Err("one or more checks failed".into());
    }
    Ok(())
}

fn diagnose(store: &ReferenceStore) -> Result<DoctorReport, Box<dyn Error>> {
    let mut checks = Vec::new();
    for chart in ChartType::ALL {
        for sex in Sex::ALL {
            let name = format!("table {chart}/{sex}");
            let check = match store.get_table(chart, sex) {
                Ok(table) => {
                    let mut check = DoctorCheck {
                        name,
                        ok: true,
                        detail: format!("{} rows", table.rows().len()),
                    };
                    if MONOTONE_CHARTS.contains(&chart) {
                        if let Some(detail) = median_decrease(table)? {
                            check.ok = false;
                            check.detail = detail;
                        }
                    }
                    check
                }
                Err(err) => DoctorCheck {
                    name,
                    ok: false,
                    detail: err.to_string(),
                },
            };
            if !check.ok {
                warn!(check = %check.name, detail = %check.detail, "doctor check failed");
            }
            checks.push(check);
        }
    }
    let status = if checks.iter().all(|check| check.ok) {
        "ok"
    } else {
        "failed"
    };
    let provenance = store.provenance();
    Ok(DoctorReport {
        status: status.into(),
        standard: provenance.standard.clone(),
        year: provenance.year,
        digest: provenance.digest.clone(),
        checks,
    })
}

fn median_decrease(table: &ReferenceTable) -> Result<Option<String>, Box<dyn Error>> {
    let mut previous: Option<(f64, f64)> = None;
    for row in table.rows() {
        let median = wgs_ref::resolve_lms(&row.values)?.m;
        if let Some((key, last)) = previous {
            if median < last {
                return Ok(Some(format!(
                    "median falls from {last} at {key} to {median} at {}",
                    row.key
                )));
            }
        }
        previous = Some((row.key, median));
    }
    Ok(None)
}
