use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use gmpe_core::FaultType;
use gmpe_scenario::{resolve_model, response_spectrum};

use super::emit_json;

#[derive(Args, Debug)]
pub struct SpectrumArgs {
    /// Model name or alias.
    #[arg(long, default_value = "boore-atkinson-2008")]
    pub model: String,
    /// Moment magnitude.
    #[arg(long)]
    pub magnitude: f64,
    /// Joyner-Boore distance in km.
    #[arg(long)]
    pub distance: f64,
    /// Site velocity in m/s.
    #[arg(long, default_value_t = 760.0)]
    pub vs30: f64,
    /// Mechanism name or integer code.
    #[arg(long, default_value = "unspecified")]
    pub fault: FaultType,
    /// Number of periods evaluated in parallel.
    #[arg(long, default_value_t = 1)]
    pub concurrency: usize,
    /// Optional output file.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &SpectrumArgs) -> Result<(), Box<dyn Error>> {
    let model = resolve_model(&args.model)?;
    let spectrum = response_spectrum(
        &model,
        args.magnitude,
        args.distance,
        args.vs30,
        args.fault,
        args.concurrency,
    )?;
    emit_json(&spectrum, args.out.as_deref())
}
