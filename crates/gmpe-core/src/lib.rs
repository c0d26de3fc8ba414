#![deny(missing_docs)]
#![doc = "Core traits and data types shared by ground-motion prediction equations."]

pub mod errors;
/// Canonical hashing helpers.
pub mod hash;
pub mod model;
pub mod provenance;
/// Canonical JSON and YAML serde helpers.
pub mod serde;
/// Numeric tolerances for regression comparisons.
pub mod tolerance;
/// Period, mechanism and distance-metric descriptors.
pub mod types;

pub use errors::{ErrorInfo, GmpeError};
pub use hash::stable_hash_string;
pub use model::{Distribution, GroundMotionInputs, GroundMotionModel, ModelDescriptor};
pub use provenance::{RunProvenance, SchemaVersion};
pub use crate::serde::{
    from_json_slice, from_yaml_slice, to_canonical_json_bytes, to_canonical_json_pretty,
    to_yaml_string,
};
pub use tolerance::Tolerance;
pub use types::{DistanceMetric, FaultType, Period};
