//! Evaluation contract shared by every ground-motion prediction equation.

use ndarray::{ArrayD, IxDyn};
use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, GmpeError};
use crate::types::{DistanceMetric, FaultType, Period};

fn input_error(code: &str, message: impl Into<String>) -> GmpeError {
    GmpeError::Input(ErrorInfo::new(code, message))
}

/// Event and site descriptors for one evaluation.
///
/// Each array may have its own shape; the model combines them with NumPy
/// broadcasting rules and the outputs take the common broadcast shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundMotionInputs {
    /// Moment magnitudes.
    pub magnitude: ArrayD<f64>,
    /// Source-to-site distances in km, using the model's distance metric.
    pub distance: ArrayD<f64>,
    /// Time-averaged shear-wave velocity of the upper 30 m in m/s.
    pub vs30: ArrayD<f64>,
    /// Rupture mechanisms.
    pub fault_type: ArrayD<FaultType>,
}

impl GroundMotionInputs {
    /// Bundles pre-shaped input arrays.
    pub fn new(
        magnitude: ArrayD<f64>,
        distance: ArrayD<f64>,
        vs30: ArrayD<f64>,
        fault_type: ArrayD<FaultType>,
    ) -> Self {
        Self {
            magnitude,
            distance,
            vs30,
            fault_type,
        }
    }

    /// Single scenario with every array shaped `(1, 1, 1)`.
    pub fn scalar(magnitude: f64, distance: f64, vs30: f64, fault_type: FaultType) -> Self {
        let shape = IxDyn(&[1, 1, 1]);
        Self {
            magnitude: ArrayD::from_elem(shape.clone(), magnitude),
            distance: ArrayD::from_elem(shape.clone(), distance),
            vs30: ArrayD::from_elem(shape.clone(), vs30),
            fault_type: ArrayD::from_elem(shape, fault_type),
        }
    }

    /// Orthogonal grid: magnitudes along axis 0, distances along axis 1 and
    /// site velocities along axis 2, broadcasting to `(nM, nR, nV)`.
    pub fn grid(
        magnitudes: &[f64],
        distances: &[f64],
        vs30: &[f64],
        fault_type: FaultType,
    ) -> Result<Self, GmpeError> {
        for (axis, values) in [
            ("magnitude", magnitudes),
            ("distance", distances),
            ("vs30", vs30),
        ] {
            if values.is_empty() {
                return Err(GmpeError::Input(
                    ErrorInfo::new("empty-axis", "grid axes require at least one value")
                        .with_context("axis", axis),
                ));
            }
        }
        let magnitude = ArrayD::from_shape_vec(IxDyn(&[magnitudes.len(), 1, 1]), magnitudes.to_vec())
            .map_err(|err| input_error("grid-shape", err.to_string()))?;
        let distance = ArrayD::from_shape_vec(IxDyn(&[1, distances.len(), 1]), distances.to_vec())
            .map_err(|err| input_error("grid-shape", err.to_string()))?;
        let vs30 = ArrayD::from_shape_vec(IxDyn(&[1, 1, vs30.len()]), vs30.to_vec())
            .map_err(|err| input_error("grid-shape", err.to_string()))?;
        Ok(Self {
            magnitude,
            distance,
            vs30,
            fault_type: ArrayD::from_elem(IxDyn(&[1, 1, 1]), fault_type),
        })
    }
}

/// Log-normal ground-motion distribution produced by a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    /// Natural logarithm of the median amplitude.
    pub log_mean: ArrayD<f64>,
    /// Total standard deviation of the log amplitude.
    pub sigma: ArrayD<f64>,
}

impl Distribution {
    /// Shape shared by both output arrays.
    pub fn shape(&self) -> &[usize] {
        self.log_mean.shape()
    }

    /// Median amplitude (`exp(log_mean)`).
    pub fn median(&self) -> ArrayD<f64> {
        self.log_mean.mapv(f64::exp)
    }

    /// Amplitude at `epsilon` standard deviations from the median.
    pub fn fractile(&self, epsilon: f64) -> ArrayD<f64> {
        let mut out = self.log_mean.clone();
        out.zip_mut_with(&self.sigma, |mean, sigma| {
            *mean = (*mean + epsilon * sigma).exp();
        });
        out
    }
}

/// Static metadata describing a ground-motion model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Canonical model name.
    pub name: String,
    /// Alternative names accepted in configuration files.
    pub aliases: Vec<String>,
    /// Distance definition expected in [`GroundMotionInputs::distance`].
    pub distance_metric: DistanceMetric,
    /// Magnitude scale expected in [`GroundMotionInputs::magnitude`].
    pub magnitude_scale: String,
    /// Whether the site term consumes Vs30.
    pub uses_vs30: bool,
    /// Bibliographic reference for the published coefficients.
    pub citation: String,
}

impl ModelDescriptor {
    /// True when `name` matches the canonical name or an alias, ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        let needle = name.trim();
        self.name.eq_ignore_ascii_case(needle)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(needle))
    }
}

/// Contract implemented by every ground-motion prediction equation.
pub trait GroundMotionModel: Send + Sync {
    /// Returns static metadata for the model.
    fn descriptor(&self) -> &ModelDescriptor;

    /// Returns the tabulated periods in ascending order.
    fn periods(&self) -> Vec<Period>;

    /// Evaluates the log-mean amplitude and total sigma at `period`.
    fn distribution(
        &self,
        period: Period,
        inputs: &GroundMotionInputs,
    ) -> Result<Distribution, GmpeError>;
}
