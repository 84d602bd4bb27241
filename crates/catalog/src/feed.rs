//! NeoWs feed import.
//!
//! A feed document groups objects by observation date:
//! `{"near_earth_objects": {"2029-04-13": [ {...}, ... ], ...}}`. Dates are
//! visited in ascending order and their object lists are concatenated.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::lookup::Catalog;
use crate::record::{AsteroidRecord, CloseApproach, FieldValue};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed feed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct FeedDocument {
    #[serde(default)]
    near_earth_objects: BTreeMap<String, Value>,
}

/// Convert one NeoWs object. Ill-typed or absent members become `None` (or an
/// empty approach list) so the calculator can report them by field name.
fn record_from_value(object: &Map<String, Value>) -> AsteroidRecord {
    let bounds = object
        .get("estimated_diameter")
        .and_then(|diameter| diameter.get("meters"));

    AsteroidRecord {
        name: text(object.get("name")),
        catalog_id: text(object.get("neo_reference_id")),
        is_potentially_hazardous: object
            .get("is_potentially_hazardous_asteroid")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        diameter_min_m: member(bounds, "estimated_diameter_min"),
        diameter_max_m: member(bounds, "estimated_diameter_max"),
        close_approaches: object
            .get("close_approach_data")
            .and_then(Value::as_array)
            .map(|approaches| approaches.iter().map(approach_from_value).collect())
            .unwrap_or_default(),
    }
}

fn approach_from_value(value: &Value) -> CloseApproach {
    CloseApproach {
        date: value
            .get("close_approach_date")
            .and_then(Value::as_str)
            .and_then(|date| date.trim().parse::<NaiveDate>().ok()),
        relative_velocity_km_s: member(value.get("relative_velocity"), "kilometers_per_second"),
        miss_distance_km: member(value.get("miss_distance"), "kilometers"),
    }
}

fn member(container: Option<&Value>, key: &str) -> Option<FieldValue> {
    match container?.get(key)? {
        Value::Null => None,
        Value::Number(number) => Some(match number.as_f64() {
            Some(value) => FieldValue::Number(value),
            None => FieldValue::Other(Value::Number(number.clone())),
        }),
        Value::String(text) => Some(FieldValue::Text(text.clone())),
        other => Some(FieldValue::Other(other.clone())),
    }
}

fn text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Parse one feed document into flattened records.
///
/// Entries that are not JSON objects are skipped with a warning; every other
/// entry yields a record, however incomplete.
pub fn parse_feed(json: &str) -> Result<Vec<AsteroidRecord>, CatalogError> {
    let document: FeedDocument = serde_json::from_str(json)?;
    let mut records = Vec::new();
    for (date, objects) in &document.near_earth_objects {
        let Some(objects) = objects.as_array() else {
            warn!(date = %date, "feed date entry is not a list, skipping");
            continue;
        };
        for (index, object) in objects.iter().enumerate() {
            match object.as_object() {
                Some(object) => records.push(record_from_value(object)),
                None => warn!(date = %date, index, "feed entry is not an object, skipping"),
            }
        }
    }
    Ok(records)
}

/// Read and parse a single feed file.
pub fn load_feed<P: AsRef<Path>>(path: P) -> Result<Vec<AsteroidRecord>, CatalogError> {
    let contents = fs::read_to_string(path)?;
    parse_feed(&contents)
}

impl Catalog {
    /// Build a catalog from feed files and directories of `*.json` feeds.
    ///
    /// Missing files are skipped silently and malformed ones are skipped with
    /// a warning, so a partially available data set still yields a catalog.
    pub fn load_feeds<I, P>(paths: I) -> Catalog
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut records = Vec::new();
        for path in paths {
            for file in expand_feed_path(path.as_ref()) {
                match load_feed(&file) {
                    Ok(mut loaded) => {
                        debug!(path = %file.display(), count = loaded.len(), "loaded feed");
                        records.append(&mut loaded);
                    }
                    Err(CatalogError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                        debug!(path = %file.display(), "feed file not found, skipping");
                    }
                    Err(err) => warn!(path = %file.display(), "skipping feed: {err}"),
                }
            }
        }
        Catalog::new(records)
    }
}

fn expand_feed_path(path: &Path) -> Vec<PathBuf> {
    if !path.is_dir() {
        return vec![path.to_path_buf()];
    }
    let mut entries: Vec<PathBuf> = match fs::read_dir(path) {
        Ok(dir) => dir
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().map(|ext| ext == "json").unwrap_or(false))
            .collect(),
        Err(err) => {
            warn!(path = %path.display(), "unable to read feed directory: {err}");
            Vec::new()
        }
    };
    entries.sort();
    entries
}
