use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::Utc;
use gmpe_ba08::CoefficientTable;
use gmpe_core::errors::{ErrorInfo, GmpeError};
use gmpe_core::{
    from_json_slice, to_canonical_json_bytes, Distribution, FaultType, Period, RunProvenance,
    SchemaVersion,
};
use serde::{Deserialize, Serialize};

use crate::plan::ScenarioPlan;

fn io_error(code: &str, err: impl ToString) -> GmpeError {
    GmpeError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Schema version written into scenario and verification reports.
pub const REPORT_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Builds provenance for a run driven by `input_hash`.
pub fn provenance(
    input_hash: String,
    model: &str,
    table: &CoefficientTable,
) -> Result<RunProvenance, GmpeError> {
    let mut versions = BTreeMap::new();
    versions.insert(
        "gmpe-scenario".to_string(),
        env!("CARGO_PKG_VERSION").to_string(),
    );
    Ok(RunProvenance {
        input_hash,
        table_hash: table.canonical_hash()?,
        model: model.to_string(),
        created_at: Utc::now().to_rfc3339(),
        tool_versions: versions,
    })
}

/// Flattened distribution for one period, written next to the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodArtefact {
    /// Period key in seconds.
    pub period: Period,
    /// Human readable intensity-measure label.
    pub label: String,
    /// Units of the median amplitude.
    pub units: String,
    /// Shape of the evaluated grid.
    pub shape: Vec<usize>,
    /// Log-mean values in row-major order.
    pub log_mean: Vec<f64>,
    /// Sigma values in row-major order.
    pub sigma: Vec<f64>,
}

impl PeriodArtefact {
    /// Flattens a distribution evaluated at `period`.
    pub fn new(period: Period, distribution: &Distribution) -> Self {
        Self {
            period,
            label: period.label(),
            units: period.units().to_string(),
            shape: distribution.shape().to_vec(),
            log_mean: distribution.log_mean.iter().copied().collect(),
            sigma: distribution.sigma.iter().copied().collect(),
        }
    }

    /// File name used when the artefact is persisted.
    pub fn file_name(&self) -> String {
        if self.period.is_pga() {
            "pga.json".to_string()
        } else if self.period.is_pgv() {
            "pgv.json".to_string()
        } else {
            format!("sa_{}ms.json", self.period.as_millis())
        }
    }
}

// NaN in either operand wins so that it reaches the summary.
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// Summary entry for one period of a scenario run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// Period key in seconds.
    pub period: Period,
    /// Human readable intensity-measure label.
    pub label: String,
    /// Smallest log-mean value over the grid.
    pub log_mean_min: f64,
    /// Largest log-mean value over the grid.
    pub log_mean_max: f64,
    /// Largest sigma value over the grid.
    pub sigma_max: f64,
    /// Hash of the persisted artefact.
    pub artefact_hash: String,
    /// Artefact path relative to the output directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artefact: Option<String>,
}

impl PeriodSummary {
    /// Summarises an artefact.
    pub fn new(artefact: &PeriodArtefact, hash: String, path: Option<String>) -> Self {
        let (log_mean_min, log_mean_max) = artefact
            .log_mean
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), value| {
                (nan_min(lo, *value), nan_max(hi, *value))
            });
        let sigma_max = artefact.sigma.iter().copied().fold(f64::NEG_INFINITY, nan_max);
        Self {
            period: artefact.period,
            label: artefact.label.clone(),
            log_mean_min,
            log_mean_max,
            sigma_max,
            artefact_hash: hash,
            artefact: path,
        }
    }
}

/// Report emitted by a scenario run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Report schema version.
    pub schema: SchemaVersion,
    /// Scenario name copied from the plan.
    pub name: String,
    /// Canonical hash of the plan driving the run.
    pub plan_hash: String,
    /// Mechanism shared by the grid.
    pub fault_type: FaultType,
    /// Shape of every period's output grid.
    pub shape: Vec<usize>,
    /// Per-period summaries in ascending period order.
    pub periods: Vec<PeriodSummary>,
    /// Provenance metadata describing the run.
    pub provenance: RunProvenance,
}

impl ScenarioReport {
    /// Assembles a report for `plan`.
    pub fn new(
        plan: &ScenarioPlan,
        shape: Vec<usize>,
        periods: Vec<PeriodSummary>,
        provenance: RunProvenance,
    ) -> Result<Self, GmpeError> {
        Ok(Self {
            schema: REPORT_SCHEMA,
            name: plan.name.clone(),
            plan_hash: plan.plan_hash()?,
            fault_type: plan.fault_type,
            shape,
            periods,
            provenance,
        })
    }
}

/// Writes canonical JSON, creating parent directories as needed.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), GmpeError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| io_error("report_dir", err))?;
    }
    let bytes = to_canonical_json_bytes(value)?;
    fs::write(path, bytes).map_err(|err| io_error("report_write", err))
}

/// Reads a JSON artefact written by [`write_json`].
pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, GmpeError> {
    let bytes = fs::read(path).map_err(|err| io_error("report_read", err))?;
    from_json_slice(&bytes)
}
