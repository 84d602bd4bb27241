//! Configuration models and loaders for the NEO impact calculator.

use std::fs::File;
use std::path::{Path, PathBuf};

use neo_core::constants::JOULES_PER_MEGATON;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Density assumed when the caller supplies nothing usable (the "Rocky" preset).
pub const DEFAULT_DENSITY_KG_M3: f64 = 3_000.0;
/// Name of the preset used as the fallback density.
pub const DEFAULT_PRESET: &str = "Rocky";

/// Named bulk density assumption for an asteroid taxonomic type.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DensityPreset {
    pub name: String,
    pub density_kg_m3: f64,
}

impl DensityPreset {
    pub fn new(name: impl Into<String>, density_kg_m3: f64) -> Self {
        Self {
            name: name.into(),
            density_kg_m3,
        }
    }
}

/// Ordered preset table plus the name of the fallback entry.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct DensityTable {
    pub default: String,
    pub presets: Vec<DensityPreset>,
}

impl Default for DensityTable {
    fn default() -> Self {
        Self {
            default: DEFAULT_PRESET.to_string(),
            presets: vec![
                DensityPreset::new("C-type (Carbonaceous)", 1_300.0),
                DensityPreset::new("S-type (Stony)", 2_700.0),
                DensityPreset::new("M-type (Metallic)", 5_000.0),
                DensityPreset::new("Rocky", 3_000.0),
            ],
        }
    }
}

impl DensityTable {
    /// Density of the default preset, or [`DEFAULT_DENSITY_KG_M3`] when the table lacks it.
    pub fn default_density(&self) -> f64 {
        self.get(&self.default)
            .map(|preset| preset.density_kg_m3)
            .unwrap_or(DEFAULT_DENSITY_KG_M3)
    }

    /// Case-insensitive lookup by preset name.
    pub fn get(&self, name: &str) -> Option<&DensityPreset> {
        let upper = name.trim().to_uppercase();
        self.presets.iter().find(|p| p.name.to_uppercase() == upper)
    }

    /// Lookup by 1-based menu position.
    pub fn by_position(&self, position: usize) -> Option<&DensityPreset> {
        position
            .checked_sub(1)
            .and_then(|index| self.presets.get(index))
    }

    /// Resolve a menu choice: a 1-based position when numeric, otherwise a preset name.
    pub fn select(&self, choice: &str) -> Option<&DensityPreset> {
        match choice.trim().parse::<usize>() {
            Ok(position) => self.by_position(position),
            Err(_) => self.get(choice),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &DensityPreset> {
        self.presets.iter()
    }
}

/// Lower bounds (exclusive, in megatons of TNT) of the upper three severity bands.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SeverityThresholds {
    pub devastating_mt: f64,
    pub regional_mt: f64,
    pub metropolitan_mt: f64,
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self {
            devastating_mt: 100.0,
            regional_mt: 10.0,
            metropolitan_mt: 1.0,
        }
    }
}

/// Top-level settings for impact assessments.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ImpactSettings {
    pub densities: DensityTable,
    pub joules_per_megaton: f64,
    pub severity: SeverityThresholds,
}

impl Default for ImpactSettings {
    fn default() -> Self {
        Self {
            densities: DensityTable::default(),
            joules_per_megaton: JOULES_PER_MEGATON,
            severity: SeverityThresholds::default(),
        }
    }
}

impl ImpactSettings {
    /// Reject tables that would make the calculator produce nonsense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.densities.presets.is_empty() {
            return Err(ConfigError::Invalid("density preset table is empty".into()));
        }
        if let Some(preset) = self
            .densities
            .iter()
            .find(|p| !(p.density_kg_m3 > 0.0 && p.density_kg_m3.is_finite()))
        {
            return Err(ConfigError::Invalid(format!(
                "preset '{}' has non-positive density {}",
                preset.name, preset.density_kg_m3
            )));
        }
        if !(self.joules_per_megaton > 0.0) {
            return Err(ConfigError::Invalid(
                "joules_per_megaton must be positive".into(),
            ));
        }
        let t = &self.severity;
        if !(t.metropolitan_mt < t.regional_mt && t.regional_mt < t.devastating_mt) {
            return Err(ConfigError::Invalid(format!(
                "severity thresholds must increase: {} < {} < {}",
                t.metropolitan_mt, t.regional_mt, t.devastating_mt
            )));
        }
        Ok(())
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Load impact settings from a TOML or YAML file and validate them.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<ImpactSettings, ConfigError> {
    let settings: ImpactSettings = load_document(path.as_ref())?;
    settings.validate()?;
    Ok(settings)
}

/// Load density presets from a YAML list, a single TOML preset, or a directory of TOML presets.
pub fn load_density_presets<P: AsRef<Path>>(path: P) -> Result<Vec<DensityPreset>, ConfigError> {
    load_records(path)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}

fn load_document<T>(path: &Path) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
