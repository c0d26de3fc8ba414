//! Period-indexed coefficient storage.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use gmpe_core::errors::{ErrorInfo, GmpeError};
use gmpe_core::{stable_hash_string, FaultType, Period};
use serde::{Deserialize, Serialize};

use crate::table::{BA08_ROWS, COLUMN_COUNT};

fn period_error(code: &str, message: impl Into<String>, period: impl ToString) -> GmpeError {
    GmpeError::Period(ErrorInfo::new(code, message).with_context("period", period.to_string()))
}

/// Regression coefficients of the median equation for one period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientRow {
    /// Magnitude intercept for an unspecified mechanism.
    pub e1: f64,
    /// Magnitude intercept for strike-slip faulting.
    pub e2: f64,
    /// Magnitude intercept for normal faulting.
    pub e3: f64,
    /// Magnitude intercept for reverse faulting.
    pub e4: f64,
    /// Linear magnitude term below the hinge.
    pub e5: f64,
    /// Quadratic magnitude term below the hinge.
    pub e6: f64,
    /// Linear magnitude term above the hinge.
    pub e7: f64,
    /// Hinge magnitude.
    pub mh: f64,
    /// Geometric spreading coefficient.
    pub c1: f64,
    /// Magnitude dependence of geometric spreading.
    pub c2: f64,
    /// Anelastic attenuation coefficient.
    pub c3: f64,
    /// Reference magnitude of the distance term.
    pub mref: f64,
    /// Reference distance in km.
    pub rref: f64,
    /// Fictitious depth in km.
    pub h: f64,
    /// Linear site coefficient.
    pub blin: f64,
    /// Reference site velocity in m/s.
    pub vref: f64,
    /// Nonlinear slope for the softest sites.
    pub b1: f64,
    /// Nonlinear slope at `v2`.
    pub b2: f64,
    /// Lower site-velocity breakpoint in m/s.
    pub v1: f64,
    /// Upper site-velocity breakpoint in m/s.
    pub v2: f64,
    /// Reference PGA below which the nonlinear term is constant, in g.
    pub a1: f64,
    /// PGA floor used by the nonlinear term, in g.
    pub pga_low: f64,
    /// Reference PGA above which the nonlinear term is log-linear, in g.
    pub a2: f64,
}

impl CoefficientRow {
    /// Magnitude intercept for the rupture mechanism.
    pub fn intercept(&self, fault: FaultType) -> f64 {
        match fault {
            FaultType::Unspecified => self.e1,
            FaultType::StrikeSlip => self.e2,
            FaultType::Normal => self.e3,
            FaultType::Reverse => self.e4,
        }
    }
}

/// Aleatory variability of the log amplitude for one period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SigmaCoefficient {
    /// Intra-event standard deviation.
    pub sigma: f64,
    /// Inter-event standard deviation, mechanism unspecified.
    pub tau_u: f64,
    /// Total standard deviation, mechanism unspecified.
    pub sigma_tu: f64,
    /// Inter-event standard deviation, mechanism specified.
    pub tau_m: f64,
    /// Total standard deviation, mechanism specified.
    pub sigma_tm: f64,
}

impl SigmaCoefficient {
    /// Total standard deviation for the rupture mechanism.
    pub fn total(&self, fault: FaultType) -> f64 {
        if fault.is_specified() {
            self.sigma_tm
        } else {
            self.sigma_tu
        }
    }

    /// Inter-event standard deviation for the rupture mechanism.
    pub fn inter_event(&self, fault: FaultType) -> f64 {
        if fault.is_specified() {
            self.tau_m
        } else {
            self.tau_u
        }
    }
}

/// Coefficients and variability tabulated for one period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableEntry {
    /// Period key.
    pub period: Period,
    /// Median-equation coefficients.
    pub coefficient: CoefficientRow,
    /// Standard deviations.
    pub sigma: SigmaCoefficient,
}

impl TableEntry {
    /// Parses a literal row laid out as [`crate::table::COLUMNS`].
    pub fn from_raw(row: &[f64; COLUMN_COUNT]) -> Result<Self, GmpeError> {
        let period = Period::from_seconds(row[0])?;
        if let Some(idx) = row.iter().position(|value| !value.is_finite()) {
            return Err(GmpeError::Period(
                ErrorInfo::new("malformed-row", "coefficient rows must be finite")
                    .with_context("period", period.to_string())
                    .with_context("column", crate::table::COLUMNS[idx]),
            ));
        }
        let coefficient = CoefficientRow {
            e1: row[1],
            e2: row[2],
            e3: row[3],
            e4: row[4],
            e5: row[5],
            e6: row[6],
            e7: row[7],
            mh: row[8],
            c1: row[9],
            c2: row[10],
            c3: row[11],
            mref: row[12],
            rref: row[13],
            h: row[14],
            blin: row[15],
            vref: row[16],
            b1: row[17],
            b2: row[18],
            v1: row[19],
            v2: row[20],
            a1: row[21],
            pga_low: row[22],
            a2: row[23],
        };
        let sigma = SigmaCoefficient {
            sigma: row[24],
            tau_u: row[25],
            sigma_tu: row[26],
            tau_m: row[27],
            sigma_tm: row[28],
        };
        Ok(Self {
            period,
            coefficient,
            sigma,
        })
    }
}

/// Coefficients needed to evaluate one period.
///
/// The nonlinear site term is driven by the reference-rock PGA, so every
/// evaluation carries the PGA row alongside the target row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients<'a> {
    /// Period being evaluated.
    pub period: Period,
    /// Coefficients of the target period.
    pub target: &'a CoefficientRow,
    /// Coefficients of the PGA row.
    pub pga: &'a CoefficientRow,
}

/// Immutable period-indexed coefficient table.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientTable {
    entries: BTreeMap<Period, TableEntry>,
}

impl CoefficientTable {
    /// Published Boore & Atkinson (2008) table, built once per process.
    pub fn boore_atkinson_2008() -> &'static CoefficientTable {
        static TABLE: OnceLock<CoefficientTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            CoefficientTable::from_raw_rows(&BA08_ROWS).expect("published coefficient rows")
        })
    }

    /// Builds a table from literal rows, rejecting duplicate periods.
    pub fn from_raw_rows(rows: &[[f64; COLUMN_COUNT]]) -> Result<Self, GmpeError> {
        let entries = rows
            .iter()
            .map(TableEntry::from_raw)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_entries(entries)
    }

    /// Builds a table from parsed entries, rejecting duplicate periods.
    ///
    /// A PGA entry is mandatory because every period's site term needs it.
    pub fn from_entries(entries: Vec<TableEntry>) -> Result<Self, GmpeError> {
        let mut map = BTreeMap::new();
        for entry in entries {
            if map.insert(entry.period, entry).is_some() {
                return Err(period_error(
                    "duplicate-period",
                    "coefficient table lists a period twice",
                    entry.period,
                ));
            }
        }
        if !map.contains_key(&Period::PGA) {
            return Err(GmpeError::Period(
                ErrorInfo::new("period-not-found", "coefficient table has no PGA row")
                    .with_context("period", Period::PGA.to_string())
                    .with_hint("the nonlinear site term requires reference PGA coefficients"),
            ));
        }
        Ok(Self { entries: map })
    }

    /// Looks up the full entry for a period.
    pub fn entry(&self, period: Period) -> Result<&TableEntry, GmpeError> {
        self.entries.get(&period).ok_or_else(|| {
            GmpeError::Period(
                ErrorInfo::new("period-not-found", "no coefficients tabulated for period")
                    .with_context("period", period.to_string())
                    .with_hint("periods are not interpolated; choose a tabulated period"),
            )
        })
    }

    /// Median-equation coefficients for a period.
    pub fn row(&self, period: Period) -> Result<&CoefficientRow, GmpeError> {
        self.entry(period).map(|entry| &entry.coefficient)
    }

    /// Standard deviations for a period.
    pub fn sigma(&self, period: Period) -> Result<&SigmaCoefficient, GmpeError> {
        self.entry(period).map(|entry| &entry.sigma)
    }

    /// Target and PGA rows needed to evaluate a period.
    pub fn coefficients(&self, period: Period) -> Result<Coefficients<'_>, GmpeError> {
        Ok(Coefficients {
            period,
            target: self.row(period)?,
            pga: self.row(Period::PGA)?,
        })
    }

    /// Tabulated periods in ascending order (PGV first, then PGA).
    pub fn periods(&self) -> impl Iterator<Item = Period> + '_ {
        self.entries.keys().copied()
    }

    /// All entries in ascending period order.
    pub fn entries(&self) -> impl Iterator<Item = &TableEntry> + '_ {
        self.entries.values()
    }

    /// Number of tabulated periods.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table holds no periods.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Content hash of the table used in report provenance.
    pub fn canonical_hash(&self) -> Result<String, GmpeError> {
        let entries: Vec<&TableEntry> = self.entries.values().collect();
        stable_hash_string(&entries)
    }
}
