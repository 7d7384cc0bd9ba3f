use std::error::Error;
use std::process::Command;

use clap::Args;
use serde::Serialize;
use wgs_ref::ReferenceStore;

use crate::print_json;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit extended metadata including dataset provenance and toolchain.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: String,
    standard: String,
    standard_year: u16,
    schema_version: String,
    dataset_digest: String,
    rustc: String,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    print_json(&gather_info()?)
}

fn gather_info() -> Result<VersionInfo, Box<dyn Error>> {
    let provenance = ReferenceStore::bundled()?.provenance();
    let rustc = Command::new("rustc")
        .arg("--version")
        .output()
        .ok()
        .and_then(|out| {
            if out.status.success() {
                Some(String::from_utf8_lossy(&out.stdout).trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "rustc unavailable".into());
    Ok(VersionInfo {
        version: env!("CARGO_PKG_VERSION").into(),
        standard: provenance.standard.clone(),
        standard_year: provenance.year,
        schema_version: provenance.schema_version.to_string(),
        dataset_digest: provenance.digest.clone(),
        rustc,
    })
}
