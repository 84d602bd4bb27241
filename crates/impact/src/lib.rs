//! Kinetic impact energy model using a homogeneous spherical body.

use neo_catalog::{AsteroidRecord, FieldValue};
use neo_config::{ImpactSettings, SeverityThresholds};
use neo_core::constants::JOULES_PER_MEGATON;
use neo_core::geometry::{kinetic_energy, sphere_mass};
use neo_core::units::kms_to_ms;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Qualitative impact severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Localized damage or an atmospheric explosion.
    Airburst,
    /// Enough to level a metropolitan area.
    Metropolitan,
    /// Regional destruction with global climate effects.
    Regional,
    /// Comparable to large scale nuclear war.
    Devastating,
}

impl Severity {
    /// Pick the band for an energy in megatons of TNT.
    ///
    /// Thresholds are exclusive lower bounds checked from the top down, so an
    /// energy exactly on a threshold lands in the band below it.
    pub fn classify(megatons: f64, thresholds: &SeverityThresholds) -> Self {
        if megatons > thresholds.devastating_mt {
            Self::Devastating
        } else if megatons > thresholds.regional_mt {
            Self::Regional
        } else if megatons > thresholds.metropolitan_mt {
            Self::Metropolitan
        } else {
            Self::Airburst
        }
    }

    /// Zero-based position in the severity ladder.
    pub fn band_index(self) -> usize {
        self as usize
    }

    pub fn interpretation(self) -> &'static str {
        match self {
            Self::Devastating => {
                "Devastating impact event, comparable to large scale nuclear war scenarios. Mitigation is critical."
            }
            Self::Regional => {
                "Major regional impact event, capable of causing widespread destruction and global climate effects."
            }
            Self::Metropolitan => {
                "Powerful impact, capable of leveling a major metropolitan area (like the Tunguska event)."
            }
            Self::Airburst => {
                "Smaller impact, likely resulting in localized damage or an atmospheric explosion (airburst)."
            }
        }
    }
}

/// Derived quantities for one hypothetical impact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactReport {
    pub name: String,
    pub average_diameter_m: f64,
    pub average_radius_m: f64,
    pub relative_velocity_km_s: f64,
    pub velocity_m_s: f64,
    pub density_kg_m3: f64,
    pub mass_kg: f64,
    pub kinetic_energy_joules: f64,
    pub energy_megatons_tnt: f64,
    pub is_potentially_hazardous: bool,
    pub severity: Severity,
    pub interpretation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComputationError {
    #[error("missing required data field: {field}")]
    MissingField { field: &'static str },
    #[error("field '{field}' is not a number: {value}")]
    InvalidNumericFormat { field: &'static str, value: String },
    #[error("no close approach data available")]
    EmptyApproachList,
}

/// Conversion constant and severity ladder used by the energy model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactModel {
    pub joules_per_megaton: f64,
    pub thresholds: SeverityThresholds,
}

impl Default for ImpactModel {
    fn default() -> Self {
        Self {
            joules_per_megaton: JOULES_PER_MEGATON,
            thresholds: SeverityThresholds::default(),
        }
    }
}

impl From<&ImpactSettings> for ImpactModel {
    fn from(settings: &ImpactSettings) -> Self {
        Self {
            joules_per_megaton: settings.joules_per_megaton,
            thresholds: settings.severity,
        }
    }
}

impl ImpactModel {
    /// Estimate the impact energy of `record` assuming a bulk density in kg/m³.
    ///
    /// The body is a sphere of the mean estimated diameter moving at the
    /// relative velocity of its most recent close approach.
    pub fn compute(
        &self,
        record: &AsteroidRecord,
        density_kg_m3: f64,
    ) -> Result<ImpactReport, ComputationError> {
        let report = self.evaluate(record, density_kg_m3);
        match &report {
            Ok(report) => debug!(
                name = %report.name,
                megatons = report.energy_megatons_tnt,
                severity = ?report.severity,
                "impact computed"
            ),
            Err(err) => debug!(name = %record.name, "impact computation failed: {err}"),
        }
        report
    }

    fn evaluate(
        &self,
        record: &AsteroidRecord,
        density_kg_m3: f64,
    ) -> Result<ImpactReport, ComputationError> {
        let min_d = numeric_field(record.diameter_min_m.as_ref(), "diameter_min_m")?;
        let max_d = numeric_field(record.diameter_max_m.as_ref(), "diameter_max_m")?;

        let average_diameter_m = (min_d + max_d) / 2.0;
        let average_radius_m = average_diameter_m / 2.0;

        let approach = record
            .latest_approach()
            .ok_or(ComputationError::EmptyApproachList)?;
        let relative_velocity_km_s = numeric_field(
            approach.relative_velocity_km_s.as_ref(),
            "relative_velocity_km_s",
        )?;
        let velocity_m_s = kms_to_ms(relative_velocity_km_s);

        let mass_kg = sphere_mass(density_kg_m3, average_radius_m);
        let kinetic_energy_joules = kinetic_energy(mass_kg, velocity_m_s);
        let energy_megatons_tnt = kinetic_energy_joules / self.joules_per_megaton;
        let severity = Severity::classify(energy_megatons_tnt, &self.thresholds);

        Ok(ImpactReport {
            name: display_name(record),
            average_diameter_m,
            average_radius_m,
            relative_velocity_km_s,
            velocity_m_s,
            density_kg_m3,
            mass_kg,
            kinetic_energy_joules,
            energy_megatons_tnt,
            is_potentially_hazardous: record.is_potentially_hazardous,
            severity,
            interpretation: severity.interpretation(),
        })
    }
}

/// Estimate impact energy with the default conversion constant and thresholds.
pub fn compute_impact(
    record: &AsteroidRecord,
    density_kg_m3: f64,
) -> Result<ImpactReport, ComputationError> {
    ImpactModel::default().compute(record, density_kg_m3)
}

fn numeric_field(
    value: Option<&FieldValue>,
    field: &'static str,
) -> Result<f64, ComputationError> {
    let value = value.ok_or(ComputationError::MissingField { field })?;
    value
        .as_f64()
        .ok_or_else(|| ComputationError::InvalidNumericFormat {
            field,
            value: value.to_string(),
        })
}

fn display_name(record: &AsteroidRecord) -> String {
    if record.name.is_empty() {
        "N/A".to_string()
    } else {
        record.name.clone()
    }
}
