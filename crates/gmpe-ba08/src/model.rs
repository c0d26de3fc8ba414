//! Broadcast evaluation of the Boore & Atkinson (2008) equation.

use gmpe_core::errors::{ErrorInfo, GmpeError};
use gmpe_core::{
    DistanceMetric, Distribution, FaultType, GroundMotionInputs, GroundMotionModel,
    ModelDescriptor, Period,
};
use ndarray::{ArrayD, Zip};
use tracing::{debug, trace};

use crate::broadcast::{broadcast_shape, broadcast_to};
use crate::coefficients::{CoefficientTable, Coefficients, SigmaCoefficient};
use crate::terms;

/// Canonical model name.
pub const MODEL_NAME: &str = "boore-atkinson-2008";

fn require_positive(name: &str, code: &str, values: &ArrayD<f64>) -> Result<(), GmpeError> {
    if let Some(value) = values.iter().find(|value| **value <= 0.0) {
        return Err(GmpeError::Input(
            ErrorInfo::new(code, format!("{name} must be strictly positive"))
                .with_context("input", name)
                .with_context("value", value.to_string()),
        ));
    }
    Ok(())
}

/// Evaluates the log-mean amplitude and total sigma over broadcast inputs.
///
/// `coefficient` carries the target row together with the PGA row used for
/// the reference-rock prediction that drives the nonlinear site term.
/// Distances are Joyner-Boore distances in km and must be positive, as must
/// `vs30`. NaN inputs propagate to the outputs. Both outputs take the
/// broadcast shape of the four inputs.
pub fn distribution(
    mag: &ArrayD<f64>,
    distance: &ArrayD<f64>,
    vs30: &ArrayD<f64>,
    coefficient: &Coefficients<'_>,
    sigma_coefficient: &SigmaCoefficient,
    fault_type: &ArrayD<FaultType>,
) -> Result<(ArrayD<f64>, ArrayD<f64>), GmpeError> {
    require_positive("distance", "non-positive-distance", distance)?;
    require_positive("vs30", "non-positive-vs30", vs30)?;

    let shape = broadcast_shape(&[
        ("magnitude", mag.shape()),
        ("distance", distance.shape()),
        ("vs30", vs30.shape()),
        ("fault_type", fault_type.shape()),
    ])?;
    debug!(period = %coefficient.period, shape = ?shape, "evaluating ground-motion distribution");

    let mag = broadcast_to("magnitude", mag, &shape)?;
    let distance = broadcast_to("distance", distance, &shape)?;
    let vs30 = broadcast_to("vs30", vs30, &shape)?;
    let fault_type = broadcast_to("fault_type", fault_type, &shape)?;

    let log_mean = Zip::from(&mag)
        .and(&distance)
        .and(&vs30)
        .and(&fault_type)
        .map_collect(|&m, &r, &v, &fault| terms::log_mean(coefficient, fault, m, r, v));
    let sigma = fault_type.map(|&fault| sigma_coefficient.total(fault));

    trace!(elements = log_mean.len(), "distribution evaluated");
    Ok((log_mean, sigma))
}

/// Resolves integer mechanism codes into [`FaultType`] values.
pub fn fault_types_from_codes(codes: &ArrayD<i64>) -> Result<ArrayD<FaultType>, GmpeError> {
    let mut out = Vec::with_capacity(codes.len());
    for &code in codes.iter() {
        out.push(FaultType::from_code(code)?);
    }
    ArrayD::from_shape_vec(codes.raw_dim(), out).map_err(|err| {
        GmpeError::Shape(ErrorInfo::new("fault-code-shape", err.to_string()))
    })
}

/// Boore & Atkinson (2008) NGA model bound to a coefficient table.
#[derive(Debug, Clone)]
pub struct BooreAtkinson2008<'t> {
    table: &'t CoefficientTable,
    descriptor: ModelDescriptor,
}

impl BooreAtkinson2008<'static> {
    /// Model backed by the published coefficients.
    pub fn new() -> Self {
        Self::with_table(CoefficientTable::boore_atkinson_2008())
    }
}

impl Default for BooreAtkinson2008<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> BooreAtkinson2008<'t> {
    /// Model backed by a caller-supplied table.
    pub fn with_table(table: &'t CoefficientTable) -> Self {
        Self {
            table,
            descriptor: descriptor(),
        }
    }

    /// Coefficient table used by the model.
    pub fn table(&self) -> &'t CoefficientTable {
        self.table
    }
}

impl GroundMotionModel for BooreAtkinson2008<'_> {
    fn descriptor(&self) -> &ModelDescriptor {
        &self.descriptor
    }

    fn periods(&self) -> Vec<Period> {
        self.table.periods().collect()
    }

    fn distribution(
        &self,
        period: Period,
        inputs: &GroundMotionInputs,
    ) -> Result<Distribution, GmpeError> {
        let coefficient = self.table.coefficients(period)?;
        let sigma_coefficient = self.table.sigma(period)?;
        let (log_mean, sigma) = distribution(
            &inputs.magnitude,
            &inputs.distance,
            &inputs.vs30,
            &coefficient,
            sigma_coefficient,
            &inputs.fault_type,
        )?;
        Ok(Distribution { log_mean, sigma })
    }
}

/// Static metadata of the model.
pub fn descriptor() -> ModelDescriptor {
    ModelDescriptor {
        name: MODEL_NAME.to_string(),
        aliases: vec!["Boore_08".to_string(), "ba08".to_string()],
        distance_metric: DistanceMetric::JoynerBoore,
        magnitude_scale: "Mw".to_string(),
        uses_vs30: true,
        citation: "Boore, D. M. and Atkinson, G. M. (2008). Earthquake Spectra 24(1), 99-138."
            .to_string(),
    }
}
