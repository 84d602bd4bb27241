//! Serializable response envelope for assessment outcomes.

use neo_catalog::LookupError;
use neo_export::report::DisplayReport;
use serde::Serialize;

use crate::request::Assessment;

/// Tagged by `outcome`; each failure kind has its own field set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ImpactResponse {
    Report(DisplayReport),
    NotFound { identifier: String, error: String },
    ComputationError { name: String, error: String },
}

impl From<&Assessment> for ImpactResponse {
    fn from(assessment: &Assessment) -> Self {
        match assessment {
            Assessment::Report(report) => Self::Report(DisplayReport::from(report)),
            Assessment::NotFound(err) => {
                let LookupError::NotFound { identifier } = err;
                Self::NotFound {
                    identifier: identifier.clone(),
                    error: format!("Asteroid '{identifier}' not found."),
                }
            }
            Assessment::ComputationFailed { name, error } => Self::ComputationError {
                name: name.clone(),
                error: format!("Calculation failed: {error}"),
            },
        }
    }
}
