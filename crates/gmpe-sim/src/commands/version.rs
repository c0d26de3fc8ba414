use std::error::Error;

use clap::Args;
use gmpe_ba08::{CoefficientTable, MODEL_NAME};
use serde::Serialize;

use super::emit_json;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit model and coefficient-table metadata as well.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: String,
    models: Vec<String>,
    table_hash: String,
    periods: usize,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let table = CoefficientTable::boore_atkinson_2008();
    let info = VersionInfo {
        version: env!("CARGO_PKG_VERSION").into(),
        models: vec![MODEL_NAME.to_string()],
        table_hash: table.canonical_hash()?,
        periods: table.len(),
    };
    emit_json(&info, None)
}
