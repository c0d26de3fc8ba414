use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, GmpeError};

fn period_error(code: &str, message: impl Into<String>, value: impl ToString) -> GmpeError {
    GmpeError::Period(ErrorInfo::new(code, message).with_context("value", value.to_string()))
}

const MILLIS_PER_SECOND: f64 = 1000.0;
const PGV_MILLIS: i32 = -1000;

/// Spectral period used to key coefficient tables.
///
/// Periods are stored in whole milliseconds so that every tabulated key
/// (`0.075`, `1.00`, `10.0`, ...) compares and hashes exactly. `0.0` denotes
/// peak ground acceleration and `-1.0` is the peak ground velocity sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Period(i32);

impl Period {
    /// Peak ground acceleration.
    pub const PGA: Period = Period(0);
    /// Peak ground velocity sentinel.
    pub const PGV: Period = Period(PGV_MILLIS);

    /// Converts a period in seconds into a table key.
    ///
    /// Values must be finite, either non-negative or exactly `-1.0`, and
    /// representable at millisecond resolution.
    pub fn from_seconds(seconds: f64) -> Result<Self, GmpeError> {
        if !seconds.is_finite() {
            return Err(period_error(
                "period-resolution",
                "period must be finite",
                seconds,
            ));
        }
        let scaled = seconds * MILLIS_PER_SECOND;
        let millis = scaled.round();
        if (scaled - millis).abs() > 1e-6 {
            return Err(period_error(
                "period-resolution",
                "period must be representable at millisecond resolution",
                seconds,
            ));
        }
        if millis > f64::from(i32::MAX) {
            return Err(period_error("period-resolution", "period is too long", seconds));
        }
        let millis = millis as i32;
        if millis < 0 && millis != PGV_MILLIS {
            return Err(period_error(
                "period-resolution",
                "negative periods other than the PGV sentinel -1.0 are undefined",
                seconds,
            ));
        }
        Ok(Self(millis))
    }

    /// Returns the period in seconds (`-1.0` for PGV, `0.0` for PGA).
    pub fn seconds(self) -> f64 {
        f64::from(self.0) / MILLIS_PER_SECOND
    }

    /// Returns the raw millisecond key.
    pub fn as_millis(self) -> i32 {
        self.0
    }

    /// True for the peak ground acceleration key.
    pub fn is_pga(self) -> bool {
        self == Self::PGA
    }

    /// True for the peak ground velocity sentinel.
    pub fn is_pgv(self) -> bool {
        self == Self::PGV
    }

    /// Short intensity measure label such as `PGA`, `PGV` or `SA(0.20)`.
    pub fn label(self) -> String {
        if self.is_pga() {
            "PGA".to_string()
        } else if self.is_pgv() {
            "PGV".to_string()
        } else {
            format!("SA({self})")
        }
    }

    /// Physical units of the median amplitude for this period.
    pub fn units(self) -> &'static str {
        if self.is_pgv() {
            "cm/s"
        } else {
            "g"
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 10 == 0 {
            write!(f, "{:.2}", self.seconds())
        } else {
            write!(f, "{:.3}", self.seconds())
        }
    }
}

impl FromStr for Period {
    type Err = GmpeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "pga" => return Ok(Self::PGA),
            "pgv" => return Ok(Self::PGV),
            _ => {}
        }
        let seconds = trimmed
            .parse::<f64>()
            .map_err(|err| period_error("period-parse", err.to_string(), trimmed))?;
        Self::from_seconds(seconds)
    }
}

impl TryFrom<f64> for Period {
    type Error = GmpeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_seconds(value)
    }
}

impl From<Period> for f64 {
    fn from(period: Period) -> Self {
        period.seconds()
    }
}

/// Fault-rupture mechanism selecting the magnitude-scaling intercept.
///
/// Integer codes follow the hazard-engine convention used by the reference
/// fixtures: `0` reverse, `1` normal, `2` strike-slip, `3` unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FaultType {
    /// Reverse (thrust) faulting.
    Reverse,
    /// Normal faulting.
    Normal,
    /// Strike-slip faulting.
    StrikeSlip,
    /// Mechanism not specified.
    Unspecified,
}

impl FaultType {
    /// Every mechanism in code order.
    pub const ALL: [FaultType; 4] = [
        FaultType::Reverse,
        FaultType::Normal,
        FaultType::StrikeSlip,
        FaultType::Unspecified,
    ];

    /// Resolves an integer mechanism code.
    pub fn from_code(code: i64) -> Result<Self, GmpeError> {
        match code {
            0 => Ok(FaultType::Reverse),
            1 => Ok(FaultType::Normal),
            2 => Ok(FaultType::StrikeSlip),
            3 => Ok(FaultType::Unspecified),
            other => Err(GmpeError::Input(
                ErrorInfo::new("invalid-fault-type", "unknown fault type code")
                    .with_context("code", other.to_string())
                    .with_hint("expected 0 (reverse), 1 (normal), 2 (strike-slip) or 3 (unspecified)"),
            )),
        }
    }

    /// Returns the integer mechanism code.
    pub fn code(self) -> i64 {
        match self {
            FaultType::Reverse => 0,
            FaultType::Normal => 1,
            FaultType::StrikeSlip => 2,
            FaultType::Unspecified => 3,
        }
    }

    /// True when the mechanism is known.
    pub fn is_specified(self) -> bool {
        self != FaultType::Unspecified
    }

    /// Kebab-case name used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            FaultType::Reverse => "reverse",
            FaultType::Normal => "normal",
            FaultType::StrikeSlip => "strike-slip",
            FaultType::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for FaultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FaultType {
    type Err = GmpeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        if let Ok(code) = normalized.parse::<i64>() {
            return Self::from_code(code);
        }
        match normalized.as_str() {
            "reverse" => Ok(FaultType::Reverse),
            "normal" => Ok(FaultType::Normal),
            "strike-slip" => Ok(FaultType::StrikeSlip),
            "unspecified" => Ok(FaultType::Unspecified),
            _ => Err(GmpeError::Input(
                ErrorInfo::new("invalid-fault-type", "unknown fault type name")
                    .with_context("value", value),
            )),
        }
    }
}

/// Source-to-site distance definition expected by a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistanceMetric {
    /// Closest horizontal distance to the surface projection of the rupture.
    JoynerBoore,
    /// Closest distance to the rupture plane.
    Rupture,
    /// Distance to the epicentre.
    Epicentral,
}
