//! Regression verification against tabulated reference cases.

use std::path::Path;

use gmpe_core::errors::{ErrorInfo, GmpeError};
use gmpe_core::{
    stable_hash_string, FaultType, GroundMotionInputs, GroundMotionModel, Period, RunProvenance,
    SchemaVersion, Tolerance,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::plan::resolve_model;
use crate::report::{provenance, read_json, REPORT_SCHEMA};

/// Tolerances applied to each reference case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTolerance {
    /// Tolerance on the log-mean.
    #[serde(default = "ReferenceTolerance::default_log_mean")]
    pub log_mean: Tolerance,
    /// Tolerance on sigma.
    #[serde(default = "ReferenceTolerance::default_sigma")]
    pub sigma: Tolerance,
}

impl ReferenceTolerance {
    fn default_log_mean() -> Tolerance {
        Tolerance::LOG_MEAN
    }

    fn default_sigma() -> Tolerance {
        Tolerance::SIGMA
    }
}

impl Default for ReferenceTolerance {
    fn default() -> Self {
        Self {
            log_mean: Tolerance::LOG_MEAN,
            sigma: Tolerance::SIGMA,
        }
    }
}

/// One reference scenario with its expected outputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCase {
    /// Period in seconds.
    pub period: Period,
    /// Moment magnitude.
    pub magnitude: f64,
    /// Joyner-Boore distance in km.
    pub distance: f64,
    /// Site velocity in m/s.
    pub vs30: f64,
    /// Integer mechanism code.
    pub fault_code: i64,
    /// Expected log-mean.
    pub log_mean: f64,
    /// Expected sigma.
    pub sigma: f64,
}

/// Reference case list for one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSet {
    /// Model the cases were generated for.
    pub model: String,
    /// Comparison tolerances.
    #[serde(default)]
    pub tolerance: ReferenceTolerance,
    /// Reference cases.
    pub cases: Vec<ReferenceCase>,
}

/// Loads a reference set from JSON.
pub fn load_reference_set<P: AsRef<Path>>(path: P) -> Result<ReferenceSet, GmpeError> {
    let set: ReferenceSet = read_json(path.as_ref())?;
    if set.cases.is_empty() {
        return Err(GmpeError::Config(
            ErrorInfo::new("empty-reference", "reference set lists no cases")
                .with_context("path", path.as_ref().display().to_string()),
        ));
    }
    Ok(set)
}

/// Comparison result for one reference case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseOutcome {
    /// Position of the case in the reference set.
    pub index: usize,
    /// Reference case.
    pub case: ReferenceCase,
    /// Evaluated log-mean.
    pub log_mean: f64,
    /// Evaluated sigma.
    pub sigma: f64,
    /// Absolute log-mean deviation.
    pub log_mean_deviation: f64,
    /// Absolute sigma deviation.
    pub sigma_deviation: f64,
    /// True when both outputs are within tolerance.
    pub passed: bool,
}

/// Aggregate outcome of a verification run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationSummary {
    /// Number of cases compared.
    pub total: usize,
    /// Number of cases within tolerance.
    pub passed: usize,
    /// Number of cases out of tolerance.
    pub failed: usize,
    /// Largest absolute log-mean deviation.
    pub worst_log_mean_deviation: f64,
    /// Largest absolute sigma deviation.
    pub worst_sigma_deviation: f64,
}

/// Report emitted by a verification run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Report schema version.
    pub schema: SchemaVersion,
    /// Tolerances applied.
    pub tolerance: ReferenceTolerance,
    /// Aggregate counts and worst deviations.
    pub summary: VerificationSummary,
    /// Failing cases only.
    pub failures: Vec<CaseOutcome>,
    /// Provenance metadata describing the run.
    pub provenance: RunProvenance,
}

impl VerificationReport {
    /// True when every case is within tolerance.
    pub fn passed(&self) -> bool {
        self.summary.failed == 0
    }
}

fn evaluate_case(
    model: &dyn GroundMotionModel,
    case: &ReferenceCase,
) -> Result<(f64, f64), GmpeError> {
    let fault = FaultType::from_code(case.fault_code)?;
    let inputs = GroundMotionInputs::scalar(case.magnitude, case.distance, case.vs30, fault);
    let distribution = model.distribution(case.period, &inputs)?;
    let log_mean = distribution.log_mean.iter().copied().next().unwrap_or(f64::NAN);
    let sigma = distribution.sigma.iter().copied().next().unwrap_or(f64::NAN);
    Ok((log_mean, sigma))
}

/// Compares the named model against every case of `set`.
pub fn verify(set: &ReferenceSet) -> Result<VerificationReport, GmpeError> {
    let model = resolve_model(&set.model)?;
    let mut outcomes = Vec::with_capacity(set.cases.len());
    for (index, case) in set.cases.iter().enumerate() {
        let (log_mean, sigma) = evaluate_case(&model, case)?;
        let passed = set.tolerance.log_mean.is_close(log_mean, case.log_mean)
            && set.tolerance.sigma.is_close(sigma, case.sigma);
        if !passed {
            warn!(
                index,
                period = %case.period,
                magnitude = case.magnitude,
                distance = case.distance,
                vs30 = case.vs30,
                fault_code = case.fault_code,
                expected = case.log_mean,
                actual = log_mean,
                "reference case out of tolerance"
            );
        }
        outcomes.push(CaseOutcome {
            index,
            case: *case,
            log_mean,
            sigma,
            log_mean_deviation: (log_mean - case.log_mean).abs(),
            sigma_deviation: (sigma - case.sigma).abs(),
            passed,
        });
    }

    let passed = outcomes.iter().filter(|outcome| outcome.passed).count();
    let summary = VerificationSummary {
        total: outcomes.len(),
        passed,
        failed: outcomes.len() - passed,
        worst_log_mean_deviation: outcomes
            .iter()
            .map(|outcome| outcome.log_mean_deviation)
            .fold(0.0, f64::max),
        worst_sigma_deviation: outcomes
            .iter()
            .map(|outcome| outcome.sigma_deviation)
            .fold(0.0, f64::max),
    };
    info!(
        total = summary.total,
        failed = summary.failed,
        worst_log_mean = summary.worst_log_mean_deviation,
        "verification complete"
    );

    let provenance = provenance(stable_hash_string(set)?, &model.descriptor().name, model.table())?;
    Ok(VerificationReport {
        schema: REPORT_SCHEMA,
        tolerance: set.tolerance,
        summary,
        failures: outcomes.into_iter().filter(|outcome| !outcome.passed).collect(),
        provenance,
    })
}
