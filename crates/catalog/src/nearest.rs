//! Closest-approach ranking across a record set.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::record::AsteroidRecord;

/// Name used for records that carry no display name.
const UNKNOWN_NAME: &str = "UNKNOWN";

/// An object and its closest recorded miss distance.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestApproach {
    pub name: String,
    pub miss_distance_km: f64,
    /// Date of that closest pass, when the feed recorded one.
    pub approach_date: Option<NaiveDate>,
}

/// Rank objects by their smallest parseable miss distance, ascending.
///
/// Records sharing a name are merged, keeping the closest pass. Ties keep
/// the order in which names were first seen.
pub(crate) fn rank(records: &[AsteroidRecord], count: usize) -> Vec<NearestApproach> {
    let mut ranked: Vec<NearestApproach> = Vec::new();
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let Some((distance, approach_date)) = closest_pass(record) else {
            continue;
        };
        let name = if record.name.is_empty() {
            UNKNOWN_NAME
        } else {
            record.name.as_str()
        };
        match index_by_name.get(name) {
            Some(&idx) => {
                let entry = &mut ranked[idx];
                if distance < entry.miss_distance_km {
                    entry.miss_distance_km = distance;
                    entry.approach_date = approach_date;
                }
            }
            None => {
                index_by_name.insert(name, ranked.len());
                ranked.push(NearestApproach {
                    name: name.to_string(),
                    miss_distance_km: distance,
                    approach_date,
                });
            }
        }
    }

    ranked.sort_by(|a, b| a.miss_distance_km.total_cmp(&b.miss_distance_km));
    ranked.truncate(count);
    ranked
}

fn closest_pass(record: &AsteroidRecord) -> Option<(f64, Option<NaiveDate>)> {
    let mut closest: Option<(f64, Option<NaiveDate>)> = None;
    for approach in &record.close_approaches {
        let Some(distance) = approach
            .miss_distance_km
            .as_ref()
            .and_then(|d| d.as_f64())
            .filter(|d| !d.is_nan())
        else {
            continue;
        };
        if closest.is_none_or(|(best, _)| distance < best) {
            closest = Some((distance, approach.date));
        }
    }
    closest
}
