#![deny(missing_docs)]
#![doc = "Scenario grids, response spectra and reference verification for GMPE models."]

/// Scenario plan loading and validation.
pub mod plan;
/// Report assembly and artefact persistence.
pub mod report;
/// Parallel period evaluation.
pub mod run;
pub mod spectrum;
pub mod verify;

pub use plan::{load_plan, resolve_model, ScenarioPlan};
pub use report::{PeriodArtefact, PeriodSummary, ScenarioReport, REPORT_SCHEMA};
pub use run::{evaluate_periods, run_plan, run_plan_from_path, RunOpts, REPORT_FILE};
pub use spectrum::{response_spectrum, ResponseSpectrum, SpectralOrdinate};
pub use verify::{
    load_reference_set, verify, CaseOutcome, ReferenceCase, ReferenceSet, ReferenceTolerance,
    VerificationReport, VerificationSummary,
};
