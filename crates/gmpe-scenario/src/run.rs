use std::fs;
use std::path::Path;

use gmpe_core::errors::{ErrorInfo, GmpeError};
use gmpe_core::{stable_hash_string, Distribution, GroundMotionInputs, GroundMotionModel, Period};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::plan::{load_plan, resolve_model, ScenarioPlan};
use crate::report::{provenance, write_json, PeriodArtefact, PeriodSummary, ScenarioReport};

fn io_error(code: &str, err: impl ToString) -> GmpeError {
    GmpeError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// File name of the scenario report inside the output directory.
pub const REPORT_FILE: &str = "scenario_report.json";

/// Options governing scenario execution.
#[derive(Debug, Clone)]
pub struct RunOpts {
    /// Overrides the plan's concurrency when set.
    pub concurrency: Option<usize>,
    /// Persist per-period artefacts alongside the report.
    pub write_artefacts: bool,
}

impl Default for RunOpts {
    fn default() -> Self {
        Self {
            concurrency: None,
            write_artefacts: true,
        }
    }
}

/// Evaluates `periods` on a sized thread pool, preserving period order.
pub fn evaluate_periods(
    model: &dyn GroundMotionModel,
    periods: &[Period],
    inputs: &GroundMotionInputs,
    concurrency: usize,
) -> Result<Vec<(Period, Distribution)>, GmpeError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(concurrency.max(1))
        .build()
        .map_err(|err| io_error("thread_pool", err))?;

    let results: Result<Vec<_>, GmpeError> = pool.install(|| {
        periods
            .par_iter()
            .enumerate()
            .map(|(index, period)| -> Result<(usize, Period, Distribution), GmpeError> {
                let distribution = model.distribution(*period, inputs)?;
                Ok((index, *period, distribution))
            })
            .collect()
    });

    let mut ordered = results?;
    ordered.sort_by_key(|(index, _, _)| *index);
    Ok(ordered
        .into_iter()
        .map(|(_, period, distribution)| (period, distribution))
        .collect())
}

/// Executes a scenario plan, writing the report and artefacts under `out`.
pub fn run_plan(plan: &ScenarioPlan, out: &Path, opts: &RunOpts) -> Result<ScenarioReport, GmpeError> {
    plan.validate()?;
    let model = resolve_model(&plan.model)?;
    let inputs = plan.inputs()?;
    let periods = plan.resolved_periods(&model);
    let concurrency = opts.concurrency.unwrap_or(plan.concurrency);
    info!(
        scenario = %plan.name,
        periods = periods.len(),
        concurrency,
        "running scenario plan"
    );

    fs::create_dir_all(out).map_err(|err| io_error("plan_out_dir", err))?;
    let evaluated = evaluate_periods(&model, &periods, &inputs, concurrency)?;

    let mut shape = Vec::new();
    let mut summaries = Vec::with_capacity(evaluated.len());
    for (period, distribution) in &evaluated {
        let artefact = PeriodArtefact::new(*period, distribution);
        let hash = stable_hash_string(&artefact)?;
        let path = if opts.write_artefacts {
            let relative = format!("periods/{}", artefact.file_name());
            write_json(&out.join(&relative), &artefact)?;
            Some(relative)
        } else {
            None
        };
        debug!(period = %period, hash = %hash, "period evaluated");
        shape = artefact.shape.clone();
        summaries.push(PeriodSummary::new(&artefact, hash, path));
    }

    let provenance = provenance(plan.plan_hash()?, &model.descriptor().name, model.table())?;
    let report = ScenarioReport::new(plan, shape, summaries, provenance)?;
    write_json(&out.join(REPORT_FILE), &report)?;
    info!(scenario = %plan.name, out = %out.display(), "scenario report written");
    Ok(report)
}

/// Loads a plan from disk and executes it.
pub fn run_plan_from_path(
    plan_path: &Path,
    out: &Path,
    opts: &RunOpts,
) -> Result<ScenarioReport, GmpeError> {
    let plan = load_plan(plan_path)?;
    run_plan(&plan, out, opts)
}
