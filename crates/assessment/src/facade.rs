//! Re-exported APIs for consumers of the assessment crate.

pub use crate::request::{Assessment, Assessor, ImpactRequest, parse_density};
pub use crate::response::ImpactResponse;
pub use neo_catalog::{AsteroidSource, Catalog, LookupError};
pub use neo_impact::{ComputationError, ImpactModel, ImpactReport, Severity};
