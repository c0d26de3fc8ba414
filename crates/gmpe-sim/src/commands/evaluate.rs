use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use gmpe_core::{FaultType, GroundMotionInputs, GroundMotionModel, Period};
use gmpe_scenario::{resolve_model, run_plan_from_path, PeriodArtefact, RunOpts};
use serde::Serialize;
use tracing::info;

use super::emit_json;

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Scenario plan YAML; when set the grid flags are ignored.
    #[arg(long, requires = "out")]
    pub plan: Option<PathBuf>,
    /// Output directory for plan runs, or output file for ad-hoc grids.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Overrides the plan's concurrency.
    #[arg(long)]
    pub concurrency: Option<usize>,
    /// Skip writing per-period artefacts for plan runs.
    #[arg(long)]
    pub summary_only: bool,
    /// Model name or alias.
    #[arg(long, default_value = "boore-atkinson-2008")]
    pub model: String,
    /// Period in seconds, `pga` or `pgv`.
    #[arg(long, default_value = "pga")]
    pub period: Period,
    /// Moment magnitudes (comma separated).
    #[arg(long, value_delimiter = ',', default_value = "6.0")]
    pub magnitude: Vec<f64>,
    /// Joyner-Boore distances in km (comma separated).
    #[arg(long, value_delimiter = ',', default_value = "10.0")]
    pub distance: Vec<f64>,
    /// Site velocities in m/s (comma separated).
    #[arg(long, value_delimiter = ',', default_value = "760.0")]
    pub vs30: Vec<f64>,
    /// Mechanism name or integer code.
    #[arg(long, default_value = "unspecified")]
    pub fault: FaultType,
}

#[derive(Debug, Serialize)]
struct GridOutput {
    model: String,
    magnitudes: Vec<f64>,
    distances: Vec<f64>,
    vs30: Vec<f64>,
    fault_type: FaultType,
    distribution: PeriodArtefact,
}

pub fn run(args: &EvaluateArgs) -> Result<(), Box<dyn Error>> {
    if let (Some(plan), Some(out)) = (&args.plan, &args.out) {
        let opts = RunOpts {
            concurrency: args.concurrency,
            write_artefacts: !args.summary_only,
        };
        let report = run_plan_from_path(plan, out, &opts)?;
        info!(periods = report.periods.len(), "plan run complete");
        return emit_json(&report, None);
    }

    let model = resolve_model(&args.model)?;
    let inputs = GroundMotionInputs::grid(&args.magnitude, &args.distance, &args.vs30, args.fault)?;
    let distribution = model.distribution(args.period, &inputs)?;
    let output = GridOutput {
        model: model.descriptor().name.clone(),
        magnitudes: args.magnitude.clone(),
        distances: args.distance.clone(),
        vs30: args.vs30.clone(),
        fault_type: args.fault,
        distribution: PeriodArtefact::new(args.period, &distribution),
    };
    emit_json(&output, args.out.as_deref())
}
