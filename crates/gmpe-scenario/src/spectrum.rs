//! Response spectra for a single scenario.

use gmpe_core::errors::GmpeError;
use gmpe_core::{FaultType, GroundMotionInputs, GroundMotionModel, Period};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::run::evaluate_periods;

/// One spectral ordinate with its one-sigma band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectralOrdinate {
    /// Period key in seconds.
    pub period: Period,
    /// Human readable intensity-measure label.
    pub label: String,
    /// Units of the amplitudes.
    pub units: String,
    /// Natural-log median.
    pub log_mean: f64,
    /// Total standard deviation of the log amplitude.
    pub sigma: f64,
    /// Median amplitude.
    pub median: f64,
    /// 16th percentile amplitude.
    pub p16: f64,
    /// 84th percentile amplitude.
    pub p84: f64,
}

/// Median spectrum of one scenario across every tabulated period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSpectrum {
    /// Model name.
    pub model: String,
    /// Moment magnitude.
    pub magnitude: f64,
    /// Joyner-Boore distance in km.
    pub distance: f64,
    /// Site velocity in m/s.
    pub vs30: f64,
    /// Rupture mechanism.
    pub fault_type: FaultType,
    /// Ordinates in ascending period order (PGV first, then PGA).
    pub ordinates: Vec<SpectralOrdinate>,
}

impl ResponseSpectrum {
    /// Ordinate at `period`, if it was evaluated.
    pub fn ordinate(&self, period: Period) -> Option<&SpectralOrdinate> {
        self.ordinates.iter().find(|ordinate| ordinate.period == period)
    }

    /// Spectral-acceleration ordinates only (PGA and PGV excluded).
    pub fn spectral_accelerations(&self) -> impl Iterator<Item = &SpectralOrdinate> + '_ {
        self.ordinates
            .iter()
            .filter(|ordinate| !ordinate.period.is_pga() && !ordinate.period.is_pgv())
    }
}

/// Evaluates every period of `model` for a single scenario.
pub fn response_spectrum(
    model: &dyn GroundMotionModel,
    magnitude: f64,
    distance: f64,
    vs30: f64,
    fault_type: FaultType,
    concurrency: usize,
) -> Result<ResponseSpectrum, GmpeError> {
    let inputs = GroundMotionInputs::scalar(magnitude, distance, vs30, fault_type);
    let periods = model.periods();
    debug!(magnitude, distance, vs30, periods = periods.len(), "evaluating response spectrum");
    let evaluated = evaluate_periods(model, &periods, &inputs, concurrency)?;

    let ordinates = evaluated
        .into_iter()
        .map(|(period, distribution)| {
            let log_mean = distribution.log_mean.iter().copied().next().unwrap_or(f64::NAN);
            let sigma = distribution.sigma.iter().copied().next().unwrap_or(f64::NAN);
            SpectralOrdinate {
                period,
                label: period.label(),
                units: period.units().to_string(),
                log_mean,
                sigma,
                median: log_mean.exp(),
                p16: (log_mean - sigma).exp(),
                p84: (log_mean + sigma).exp(),
            }
        })
        .collect();

    Ok(ResponseSpectrum {
        model: model.descriptor().name.clone(),
        magnitude,
        distance,
        vs30,
        fault_type,
        ordinates,
    })
}
