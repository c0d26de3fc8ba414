use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use gmpe_scenario::{load_reference_set, verify};

use super::emit_json;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Reference case file (JSON).
    #[arg(long)]
    pub reference: PathBuf,
    /// Optional path for the verification report.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &VerifyArgs) -> Result<(), Box<dyn Error>> {
    let set = load_reference_set(&args.reference)?;
    let report = verify(&set)?;
    emit_json(&report, args.out.as_deref())?;
    if !report.passed() {
        return Err(format!(
            "{} of {} reference cases out of tolerance (worst log-mean deviation {:.4})",
            report.summary.failed, report.summary.total, report.summary.worst_log_mean_deviation
        )
        .into());
    }
    Ok(())
}
