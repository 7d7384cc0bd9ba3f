use std::error::Error;

use clap::Args;
use wgs_assess::{age_months_from_days, bmi, GrowthEngine, Measurement};
use wgs_core::{Axis, AxisValue, ChartType, Sex};

use crate::{print_json, GlobalArgs};

#[derive(Args, Debug)]
pub struct AssessArgs {
    /// Chart code: wfa, lhfa, wfh, hcfa or bfa.
    #[arg(long)]
    pub chart: ChartType,
    /// Sex: male or female.
    #[arg(long)]
    pub sex: Sex,
    /// Age in months (age-indexed charts).
    #[arg(long, conflicts_with = "age_days")]
    pub age_months: Option<f64>,
    /// Age in days, converted with the WHO month length.
    #[arg(long)]
    pub age_days: Option<f64>,
    /// Length or height in centimetres (wfh).
    #[arg(long)]
    pub length_cm: Option<f64>,
    /// Measured value in the chart's unit.
    #[arg(long, required_unless_present_all = ["weight_kg", "height_cm"])]
    pub value: Option<f64>,
    /// Weight in kilograms, combined with --height-cm into a BMI.
    #[arg(long, requires = "height_cm")]
    pub weight_kg: Option<f64>,
    /// Height in centimetres, combined with --weight-kg into a BMI.
    #[arg(long, requires = "weight_kg")]
    pub height_cm: Option<f64>,
}

pub fn run(global: &GlobalArgs, args: &AssessArgs) -> Result<(), Box<dyn Error>> {
    let store = global.store()?;
    let engine = GrowthEngine::new(&store, global.engine_config()?)?;
    let measurement = Measurement::new(args.chart, args.sex, axis_value(args)?, value(args)?);
    let assessment = engine.assess(&measurement)?;
    print_json(&assessment)
}

fn axis_value(args: &AssessArgs) -> Result<AxisValue, Box<dyn Error>> {
    match args.chart.axis() {
        Axis::AgeMonths => match (args.age_months, args.age_days) {
            (Some(months), _) => Ok(AxisValue::AgeMonths(months)),
            (None, Some(days)) => Ok(AxisValue::AgeMonths(age_months_from_days(days)?)),
            (None, None) => Err(format!("--age-months or --age-days is required for {}", args.chart).into()),
        },
        Axis::LengthCm => args
            .length_cm
            .map(AxisValue::LengthCm)
            .ok_or_else(|| format!("--length-cm is required for {}", args.chart).into()),
    }
}

fn value(args: &AssessArgs) -> Result<f64, Box<dyn Error>> {
    if let Some(value) = args.value {
        return Ok(value);
    }
    match (args.weight_kg, args.height_cm) {
        (Some(weight), Some(height)) if args.chart == ChartType::BmiForAge => {
            Ok(bmi(weight, height)?)
        }
        _ => Err("--weight-kg/--height-cm only apply to bfa; pass --value".into()),
    }
}
