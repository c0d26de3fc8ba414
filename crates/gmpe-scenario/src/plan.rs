use std::fs;
use std::path::Path;

use gmpe_ba08::{BooreAtkinson2008, MODEL_NAME};
use gmpe_core::errors::{ErrorInfo, GmpeError};
use gmpe_core::{
    from_yaml_slice, stable_hash_string, to_yaml_string, FaultType, GroundMotionInputs,
    GroundMotionModel, Period, SchemaVersion,
};
use serde::{Deserialize, Serialize};

fn io_error(code: &str, err: impl ToString) -> GmpeError {
    GmpeError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn config_error(code: &str, message: impl Into<String>) -> GmpeError {
    GmpeError::Config(ErrorInfo::new(code, message))
}

/// Resolves a model name or alias to an evaluator.
pub fn resolve_model(name: &str) -> Result<BooreAtkinson2008<'static>, GmpeError> {
    let model = BooreAtkinson2008::new();
    if model.descriptor().matches(name) {
        Ok(model)
    } else {
        Err(GmpeError::Config(
            ErrorInfo::new("unknown-model", "model is not available")
                .with_context("model", name)
                .with_hint(format!("available models: {MODEL_NAME}")),
        ))
    }
}

/// Deterministic scenario grid evaluated across one or more periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPlan {
    /// Schema version of the plan file.
    #[serde(default)]
    pub schema: SchemaVersion,
    /// Label used in reports and output file names.
    pub name: String,
    /// Model name or alias.
    #[serde(default = "ScenarioPlan::default_model")]
    pub model: String,
    /// Periods in seconds; empty evaluates every tabulated period.
    #[serde(default)]
    pub periods: Vec<Period>,
    /// Moment magnitudes (grid axis 0).
    pub magnitudes: Vec<f64>,
    /// Joyner-Boore distances in km (grid axis 1).
    pub distances: Vec<f64>,
    /// Site velocities in m/s (grid axis 2).
    #[serde(default = "ScenarioPlan::default_vs30")]
    pub vs30: Vec<f64>,
    /// Rupture mechanism shared by the whole grid.
    #[serde(default = "ScenarioPlan::default_fault_type")]
    pub fault_type: FaultType,
    /// Number of periods evaluated in parallel.
    #[serde(default = "ScenarioPlan::default_concurrency")]
    pub concurrency: usize,
}

impl ScenarioPlan {
    fn default_model() -> String {
        MODEL_NAME.to_string()
    }

    fn default_vs30() -> Vec<f64> {
        vec![760.0]
    }

    fn default_fault_type() -> FaultType {
        FaultType::Unspecified
    }

    fn default_concurrency() -> usize {
        1
    }

    /// Returns the deterministic hash associated with the plan contents.
    pub fn plan_hash(&self) -> Result<String, GmpeError> {
        stable_hash_string(self)
    }

    /// Produces a canonical YAML representation of the plan.
    pub fn to_yaml_string(&self) -> Result<String, GmpeError> {
        to_yaml_string(self)
    }

    /// Checks axis contents and the model name.
    pub fn validate(&self) -> Result<(), GmpeError> {
        if self.name.trim().is_empty() {
            return Err(config_error("plan-name", "scenario plans require a name"));
        }
        for (axis, values) in [
            ("magnitudes", &self.magnitudes),
            ("distances", &self.distances),
            ("vs30", &self.vs30),
        ] {
            if let Some(value) = values.iter().find(|value| !value.is_finite()) {
                return Err(GmpeError::Config(
                    ErrorInfo::new("plan-axis", "grid axes must contain finite values")
                        .with_context("axis", axis)
                        .with_context("value", value.to_string()),
                ));
            }
        }
        resolve_model(&self.model).map(|_| ())
    }

    /// Periods to evaluate, falling back to every period of `model`.
    pub fn resolved_periods(&self, model: &dyn GroundMotionModel) -> Vec<Period> {
        if self.periods.is_empty() {
            model.periods()
        } else {
            self.periods.clone()
        }
    }

    /// Builds the `(nM, nR, nV)` input grid.
    pub fn inputs(&self) -> Result<GroundMotionInputs, GmpeError> {
        GroundMotionInputs::grid(&self.magnitudes, &self.distances, &self.vs30, self.fault_type)
    }
}

/// Loads a plan from disk, sorting and de-duplicating the period list.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<ScenarioPlan, GmpeError> {
    let plan_path = path.as_ref();
    let bytes = fs::read(plan_path).map_err(|err| io_error("plan_read", err))?;
    let mut plan: ScenarioPlan = from_yaml_slice(&bytes)?;
    plan.periods.sort_unstable();
    plan.periods.dedup();
    plan.validate()?;
    Ok(plan)
}
