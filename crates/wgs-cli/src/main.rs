use std::borrow::Cow;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use commands::{
    assess::{self, AssessArgs},
    curves::{self, CurvesArgs},
    doctor::{self, DoctorArgs},
    version::{self, VersionArgs},
};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wgs_assess::EngineConfig;
use wgs_ref::serde::to_canonical_json_bytes;
use wgs_ref::ReferenceStore;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "wgs", about = "WHO Child Growth Standards assessment CLI")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

/// Options shared by every subcommand.
#[derive(ClapArgs, Debug)]
pub struct GlobalArgs {
    /// YAML engine configuration.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// JSON reference dataset replacing the bundled WHO 2006 tables.
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,
}

impl GlobalArgs {
    /// Engine configuration, or the defaults when no file was given.
    pub fn engine_config(&self) -> Result<EngineConfig, Box<dyn Error>> {
        match &self.config {
            Some(path) => Ok(EngineConfig::load(path)?),
            None => Ok(EngineConfig::default()),
        }
    }

    /// Reference store selected on the command line.
    pub fn store(&self) -> Result<Cow<'static, ReferenceStore>, Box<dyn Error>> {
        match &self.dataset {
            Some(path) => {
                let bytes = fs::read(path)?;
                Ok(Cow::Owned(ReferenceStore::from_json_slice(&bytes)?))
            }
            None => Ok(Cow::Borrowed(ReferenceStore::bundled()?)),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assess a single measurement and print the result as JSON.
    Assess(AssessArgs),
    /// Generate SD or percentile curves for a chart.
    Curves(CurvesArgs),
    /// Validate the reference dataset and print its digest.
    Doctor(DoctorArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Assess(args) => assess::run(&cli.global, &args),
        Command::Curves(args) => curves::run(&cli.global, &args),
        Command::Doctor(args) => doctor::run(&cli.global, &args),
        Command::Version(args) => version::run(&args),
    }
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    let json = to_canonical_json_bytes(value)?;
    println!("{}", String::from_utf8(json)?);
    Ok(())
}
