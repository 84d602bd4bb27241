//! Closest-approach ranking exports.

use std::io::Write;

use neo_catalog::NearestApproach;
use serde::Serialize;

use crate::ExportError;
use crate::format::grouped_fixed;

const RULE: &str = "------------------------------------------";

#[derive(Serialize)]
struct Row<'a> {
    rank: usize,
    name: &'a str,
    miss_distance_km: f64,
    close_approach_date: String,
}

/// Fixed-width console table, ranks starting at 1.
pub fn render_table(ranking: &[NearestApproach]) -> String {
    let mut lines = vec![
        "Rank | Asteroid Name | Closest Approach (km)".to_string(),
        RULE.to_string(),
    ];
    lines.extend(ranking.iter().enumerate().map(|(i, entry)| {
        format!(
            "{:<4} | {:<13} | {}",
            i + 1,
            entry.name,
            grouped_fixed(entry.miss_distance_km, 0)
        )
    }));
    lines.push(RULE.to_string());
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Write the ranking as CSV with a `rank,name,miss_distance_km,close_approach_date`
/// header. Unknown dates are written as empty fields.
pub fn write_csv<W: Write>(writer: W, ranking: &[NearestApproach]) -> Result<(), ExportError> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(["rank", "name", "miss_distance_km", "close_approach_date"])?;
    for (i, entry) in ranking.iter().enumerate() {
        csv.serialize(Row {
            rank: i + 1,
            name: &entry.name,
            miss_distance_km: entry.miss_distance_km,
            close_approach_date: entry
                .approach_date
                .map(|date| date.to_string())
                .unwrap_or_default(),
        })?;
    }
    csv.flush()?;
    Ok(())
}
