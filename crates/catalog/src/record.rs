//! Observational record types.

use std::fmt;

use chrono::NaiveDate;
use serde::Deserialize;

/// A numeric field exactly as it arrived from the data source.
///
/// NeoWs ships most magnitudes as JSON strings, some providers use plain
/// numbers, and malformed feeds may carry anything else. Conversion to `f64`
/// is deferred to the consumer so a bad field can be reported by name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl FieldValue {
    /// Parse the field as `f64`, trimming surrounding whitespace from text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
            Self::Other(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text}"),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A single recorded passage near Earth.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CloseApproach {
    pub date: Option<NaiveDate>,
    pub relative_velocity_km_s: Option<FieldValue>,
    pub miss_distance_km: Option<FieldValue>,
}

impl CloseApproach {
    pub fn new(
        relative_velocity_km_s: impl Into<FieldValue>,
        miss_distance_km: impl Into<FieldValue>,
    ) -> Self {
        Self {
            date: None,
            relative_velocity_km_s: Some(relative_velocity_km_s.into()),
            miss_distance_km: Some(miss_distance_km.into()),
        }
    }

    /// Attach the calendar date of the approach.
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Observational data for one near-Earth object.
///
/// Diameter bounds are estimates in metres. `close_approaches` keeps source
/// order; the most recent entry is last.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AsteroidRecord {
    pub name: String,
    pub catalog_id: String,
    pub is_potentially_hazardous: bool,
    pub diameter_min_m: Option<FieldValue>,
    pub diameter_max_m: Option<FieldValue>,
    pub close_approaches: Vec<CloseApproach>,
}

impl AsteroidRecord {
    pub fn new(
        name: impl Into<String>,
        catalog_id: impl Into<String>,
        is_potentially_hazardous: bool,
        diameter_min_m: impl Into<FieldValue>,
        diameter_max_m: impl Into<FieldValue>,
    ) -> Self {
        Self {
            name: name.into(),
            catalog_id: catalog_id.into(),
            is_potentially_hazardous,
            diameter_min_m: Some(diameter_min_m.into()),
            diameter_max_m: Some(diameter_max_m.into()),
            close_approaches: Vec::new(),
        }
    }

    /// Append a close approach; later calls are treated as more recent.
    pub fn with_approach(mut self, approach: CloseApproach) -> Self {
        self.close_approaches.push(approach);
        self
    }

    /// The most recent close approach, if any.
    pub fn latest_approach(&self) -> Option<&CloseApproach> {
        self.close_approaches.last()
    }
}
