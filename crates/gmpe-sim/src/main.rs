use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    coefficients::{self, CoefficientsArgs},
    evaluate::{self, EvaluateArgs},
    spectrum::{self, SpectrumArgs},
    verify::{self, VerifyArgs},
    version::{self, VersionArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "gmpe-sim", about = "Ground-motion prediction equation evaluator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the model on an ad-hoc grid or a scenario plan.
    Evaluate(EvaluateArgs),
    /// Compare the model against a reference case file.
    Verify(VerifyArgs),
    /// Inspect the coefficient table.
    Coefficients(CoefficientsArgs),
    /// Compute the response spectrum of one scenario.
    Spectrum(SpectrumArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Evaluate(args) => evaluate::run(&args),
        Command::Verify(args) => verify::run(&args),
        Command::Coefficients(args) => coefficients::run(&args),
        Command::Spectrum(args) => spectrum::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
