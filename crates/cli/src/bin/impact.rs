use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use neo_impact_calculator::assessment::{Assessment, Assessor, ImpactRequest};
use neo_impact_calculator::config::{ImpactSettings, load_density_presets, load_settings};
use neo_impact_calculator::export::format::grouped;
use neo_impact_calculator::export::report::{render_text, write_json};

#[path = "common/mod.rs"]
mod common;

/// Estimate the kinetic impact energy of a near-Earth object.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "NEO impact energy estimator (spherical body, TNT equivalent)"
)]
struct Cli {
    /// Asteroid name or catalog id (case, parentheses, and hyphens are ignored)
    #[arg(long)]
    name: String,

    /// Bulk density in kg/m³ (unparsable values fall back to the default preset)
    #[arg(long, conflicts_with = "preset")]
    density: Option<String>,

    /// Density preset by menu number (1-based) or name
    #[arg(long)]
    preset: Option<String>,

    /// NeoWs feed files or directories of `*.json` feeds (defaults to the built-in sample)
    #[arg(long = "feed")]
    feeds: Vec<PathBuf>,

    /// Settings file (TOML or YAML) with presets and severity thresholds
    #[arg(long)]
    config: Option<PathBuf>,

    /// Density presets (YAML list or directory of TOML presets) replacing the configured table
    #[arg(long)]
    presets: Option<PathBuf>,

    /// Print the JSON response envelope instead of the text report
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    common::init_tracing();
    let cli = Cli::parse();

    let settings = resolve_settings(cli.config.as_deref(), cli.presets.as_deref())?;
    let catalog = common::load_catalog(&cli.feeds)?;
    let assessor = Assessor::with_settings(&catalog, settings);

    let assessment = match &cli.preset {
        Some(choice) => {
            let densities = &assessor.settings().densities;
            let density = match densities.select(choice) {
                Some(preset) => {
                    if !cli.json {
                        println!(
                            "Selected type: {}. Density set to {} kg/m³.",
                            preset.name,
                            grouped(preset.density_kg_m3)
                        );
                    }
                    preset.density_kg_m3
                }
                None => {
                    let fallback = densities.default_density();
                    if !cli.json {
                        println!(
                            "Invalid choice. Using default density: {} kg/m³ ({}).",
                            grouped(fallback),
                            densities.default
                        );
                    }
                    fallback
                }
            };
            assessor.assess_with_density(&cli.name, density)
        }
        None => assessor.assess(&ImpactRequest::new(cli.name.clone(), cli.density.clone())),
    };

    if cli.json {
        let mut stdout = io::stdout().lock();
        write_json(&mut stdout, &assessment.to_response())?;
        return Ok(());
    }

    match &assessment {
        Assessment::Report(report) => {
            println!();
            print!("{}", render_text(report));
        }
        Assessment::NotFound(_) => {
            println!("Asteroid '{}' not found in the loaded dataset.", cli.name);
            let suggestions = catalog.search(&cli.name);
            if !suggestions.is_empty() {
                println!("Did you mean:");
                for record in suggestions {
                    println!("  - {} ({})", record.name, record.catalog_id);
                }
            }
        }
        Assessment::ComputationFailed { name, error } => {
            println!("Calculation Error for '{name}': {error}");
        }
    }

    Ok(())
}

fn resolve_settings(
    config: Option<&Path>,
    presets: Option<&Path>,
) -> anyhow::Result<ImpactSettings> {
    let mut settings = match config {
        Some(path) => load_settings(path)?,
        None => ImpactSettings::default(),
    };
    if let Some(path) = presets {
        settings.densities.presets = load_density_presets(path)?;
        settings.validate()?;
    }
    Ok(settings)
}
