//! Request handling: identifier lookup followed by the impact computation.

use neo_catalog::{AsteroidSource, LookupError};
use neo_config::{DensityTable, ImpactSettings};
use neo_impact::{ComputationError, ImpactModel, ImpactReport};
use tracing::{debug, info};

use crate::response::ImpactResponse;

/// Untyped inputs as they arrive from a form or command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImpactRequest {
    pub asteroid_name: Option<String>,
    pub density_value: Option<String>,
}

impl ImpactRequest {
    pub fn new(asteroid_name: impl Into<String>, density_value: Option<String>) -> Self {
        Self {
            asteroid_name: Some(asteroid_name.into()),
            density_value,
        }
    }
}

/// Outcome of one assessment. Lookup and computation failures stay distinct.
#[derive(Debug, Clone, PartialEq)]
pub enum Assessment {
    Report(ImpactReport),
    NotFound(LookupError),
    ComputationFailed {
        name: String,
        error: ComputationError,
    },
}

impl Assessment {
    pub fn report(&self) -> Option<&ImpactReport> {
        match self {
            Self::Report(report) => Some(report),
            _ => None,
        }
    }

    /// Serializable envelope for this outcome.
    pub fn to_response(&self) -> ImpactResponse {
        ImpactResponse::from(self)
    }
}

/// Parse a density in kg/m³, falling back to the table's default preset.
///
/// Absent or unparsable input is not an error; the default density is used.
pub fn parse_density(raw: Option<&str>, table: &DensityTable) -> f64 {
    match raw.map(str::trim).and_then(|value| value.parse::<f64>().ok()) {
        Some(density) => density,
        None => {
            let fallback = table.default_density();
            debug!(raw = ?raw, fallback, "density input unusable, using default preset");
            fallback
        }
    }
}

/// Runs assessments against a record source with fixed settings.
#[derive(Debug, Clone)]
pub struct Assessor<S> {
    source: S,
    settings: ImpactSettings,
    model: ImpactModel,
}

impl<S: AsteroidSource> Assessor<S> {
    pub fn new(source: S) -> Self {
        Self::with_settings(source, ImpactSettings::default())
    }

    pub fn with_settings(source: S, settings: ImpactSettings) -> Self {
        let model = ImpactModel::from(&settings);
        Self {
            source,
            settings,
            model,
        }
    }

    pub fn settings(&self) -> &ImpactSettings {
        &self.settings
    }

    /// Resolve the identifier, pick a density, and compute the impact.
    pub fn assess(&self, request: &ImpactRequest) -> Assessment {
        let identifier = request.asteroid_name.as_deref().unwrap_or_default();
        let density = parse_density(request.density_value.as_deref(), &self.settings.densities);
        self.assess_with_density(identifier, density)
    }

    /// Same as [`Assessor::assess`] with an already-typed density.
    pub fn assess_with_density(&self, identifier: &str, density_kg_m3: f64) -> Assessment {
        let record = match self.source.lookup(identifier) {
            Ok(record) => record,
            Err(err) => return Assessment::NotFound(err),
        };
        match self.model.compute(&record, density_kg_m3) {
            Ok(report) => {
                info!(
                    name = %report.name,
                    density_kg_m3,
                    severity = ?report.severity,
                    "assessment complete"
                );
                Assessment::Report(report)
            }
            Err(error) => Assessment::ComputationFailed {
                name: record.name,
                error,
            },
        }
    }
}
