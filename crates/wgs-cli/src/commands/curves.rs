use std::error::Error;

use clap::Args;
use wgs_core::{ChartType, Sex};
use wgs_curves::{generate_curves, generate_percentile_curves};

use crate::{print_json, GlobalArgs};

#[derive(Args, Debug)]
pub struct CurvesArgs {
    /// Chart code: wfa, lhfa, wfh, hcfa or bfa.
    #[arg(long)]
    pub chart: ChartType,
    /// Sex: male or female.
    #[arg(long)]
    pub sex: Sex,
    /// First x position; defaults to the start of the table.
    #[arg(long)]
    pub min: Option<f64>,
    /// Last x position; defaults to the end of the table.
    #[arg(long)]
    pub max: Option<f64>,
    /// Distance between x positions.
    #[arg(long, default_value_t = 1.0)]
    pub step: f64,
    /// Emit P1..P99 percentile lines instead of SD bands.
    #[arg(long)]
    pub percentiles: bool,
}

pub fn run(global: &GlobalArgs, args: &CurvesArgs) -> Result<(), Box<dyn Error>> {
    let store = global.store()?;
    let (lo, hi) = store.get_table(args.chart, args.sex)?.domain();
    let min = args.min.unwrap_or(lo);
    let max = args.max.unwrap_or(hi);
    if args.percentiles {
        let set = generate_percentile_curves(&store, args.chart, args.sex, min, max, args.step)?;
        print_json(&set)
    } else {
        let set = generate_curves(&store, args.chart, args.sex, min, max, args.step)?;
        print_json(&set)
    }
}
