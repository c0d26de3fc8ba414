use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use gmpe_ba08::CoefficientTable;
use gmpe_core::Period;
use serde::Serialize;

use super::emit_json;

#[derive(Args, Debug)]
pub struct CoefficientsArgs {
    /// Show a single period (seconds, `pga` or `pgv`) instead of the period list.
    #[arg(long)]
    pub period: Option<Period>,
    /// Optional output file.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct TableSummary {
    table_hash: String,
    periods: Vec<PeriodListing>,
}

#[derive(Debug, Serialize)]
struct PeriodListing {
    period: Period,
    label: String,
    units: &'static str,
}

pub fn run(args: &CoefficientsArgs) -> Result<(), Box<dyn Error>> {
    let table = CoefficientTable::boore_atkinson_2008();
    if let Some(period) = args.period {
        return emit_json(table.entry(period)?, args.out.as_deref());
    }
    let summary = TableSummary {
        table_hash: table.canonical_hash()?,
        periods: table
            .periods()
            .map(|period| PeriodListing {
                period,
                label: period.label(),
                units: period.units(),
            })
            .collect(),
    };
    emit_json(&summary, args.out.as_deref())
}
