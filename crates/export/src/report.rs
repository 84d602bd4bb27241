//! Human-facing renderings of an [`ImpactReport`].

use std::io::Write;

use neo_impact::ImpactReport;
use serde::Serialize;

use crate::ExportError;
use crate::format::{fixed, grouped, scientific};

const RULE: &str = "----------------------------------------";

/// Report with every magnitude pre-formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayReport {
    pub name: String,
    pub average_diameter_m: String,
    pub relative_velocity_km_s: String,
    pub assumed_density_kg_m3: String,
    pub calculated_mass_kg: String,
    pub kinetic_energy_joules: String,
    pub impact_energy_megatons_tnt: String,
    pub is_potentially_hazardous: bool,
    pub interpretation: String,
}

impl From<&ImpactReport> for DisplayReport {
    fn from(report: &ImpactReport) -> Self {
        Self {
            name: report.name.clone(),
            average_diameter_m: format!("{} meters", fixed(report.average_diameter_m, 2)),
            relative_velocity_km_s: format!("{} km/s", fixed(report.relative_velocity_km_s, 3)),
            assumed_density_kg_m3: format!("{} kg/m³", grouped(report.density_kg_m3)),
            calculated_mass_kg: format!("{} kg", scientific(report.mass_kg, 2)),
            kinetic_energy_joules: scientific(report.kinetic_energy_joules, 2),
            impact_energy_megatons_tnt: format!("{} MT", scientific(report.energy_megatons_tnt, 2)),
            is_potentially_hazardous: report.is_potentially_hazardous,
            interpretation: report.interpretation.to_string(),
        }
    }
}

/// Multi-line console summary of a report.
pub fn render_text(report: &ImpactReport) -> String {
    let lines = [
        format!("Analysis for Asteroid: {}", report.name),
        RULE.to_string(),
        format!("Potentially Hazardous: {}", report.is_potentially_hazardous),
        format!(
            "Assumed Density (Type): {} kg/m³",
            grouped(report.density_kg_m3)
        ),
        format!(
            "Avg Diameter (Estimate): {} meters",
            fixed(report.average_diameter_m, 2)
        ),
        format!(
            "Relative Velocity: {} km/s",
            fixed(report.relative_velocity_km_s, 3)
        ),
        format!("Calculated Mass: {} kg", scientific(report.mass_kg, 2)),
        String::new(),
        "--- IMPACT ENERGY PREDICTION ---".to_string(),
        format!(
            "Kinetic Energy: {} Joules",
            scientific(report.kinetic_energy_joules, 2)
        ),
        format!(
            "Equivalent Energy: {} Megatons of TNT (MT)",
            scientific(report.energy_megatons_tnt, 2)
        ),
        RULE.to_string(),
        format!("Interpretation: {}", report.interpretation),
    ];
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Pretty-print any serializable payload as JSON followed by a newline.
pub fn write_json<T: Serialize>(writer: &mut dyn Write, payload: &T) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut *writer, payload)?;
    writeln!(writer)?;
    Ok(())
}
