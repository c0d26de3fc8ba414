#![deny(missing_docs)]
#![doc = "Boore & Atkinson (2008) NGA ground-motion prediction equation."]

/// NumPy-style broadcasting helpers.
pub mod broadcast;
pub mod coefficients;
pub mod model;
pub mod table;
pub mod terms;

pub use coefficients::{CoefficientRow, CoefficientTable, Coefficients, SigmaCoefficient, TableEntry};
pub use model::{descriptor, distribution, fault_types_from_codes, BooreAtkinson2008, MODEL_NAME};
