//! Serialize query results to CSV and JSON
//!
//! Both writers consume a stream of [`LinkedApproach`] results and emit one
//! record per approach, in stream order. Placeholder values from the unknown
//! object serialize visibly: empty name and `NaN` diameter in CSV, `null`
//! for both in JSON.

use serde::Serialize;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

use crate::core::database::LinkedApproach;

/// Errors raised while writing result files
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write CSV to {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write JSON to {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Column order of the CSV results file.
const CSV_HEADER: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

/// JSON shape of one result row.
#[derive(Serialize)]
struct ApproachRecord<'a> {
    datetime_utc: Option<String>,
    distance_au: f64,
    velocity_km_s: f64,
    neo: NeoRecord<'a>,
}

#[derive(Serialize)]
struct NeoRecord<'a> {
    designation: &'a str,
    name: Option<&'a str>,
    diameter_km: f64,
    potentially_hazardous: bool,
}

/// Write results as CSV with the fixed seven-column header.
pub fn write_to_csv<'a>(
    results: impl Iterator<Item = LinkedApproach<'a>>,
    path: &Path,
) -> Result<(), WriteError> {
    let csv_err = |source| WriteError::Csv {
        path: path.display().to_string(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;

    writer.write_record(CSV_HEADER).map_err(csv_err)?;
    for result in results {
        writer
            .write_record(&[
                result.approach.time_str(),
                result.approach.distance.to_string(),
                result.approach.velocity.to_string(),
                result.neo.designation.clone(),
                result.neo.name.clone().unwrap_or_default(),
                result.neo.diameter.to_string(),
                result.neo.hazardous.to_string(),
            ])
            .map_err(csv_err)?;
    }
    writer.flush().map_err(|source| WriteError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(())
}

/// Write results as a pretty-printed JSON array.
///
/// Absent times and names serialize as `null`, as does an unknown (NaN)
/// diameter.
pub fn write_to_json<'a>(
    results: impl Iterator<Item = LinkedApproach<'a>>,
    path: &Path,
) -> Result<(), WriteError> {
    let records: Vec<ApproachRecord> = results
        .map(|result| ApproachRecord {
            datetime_utc: result.approach.time.map(|_| result.approach.time_str()),
            distance_au: result.approach.distance,
            velocity_km_s: result.approach.velocity,
            neo: NeoRecord {
                designation: &result.neo.designation,
                name: result.neo.name.as_deref(),
                diameter_km: result.neo.diameter,
                potentially_hazardous: result.neo.hazardous,
            },
        })
        .collect();

    let file = File::create(path).map_err(|source| WriteError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::to_writer_pretty(file, &records).map_err(|source| WriteError::Json {
        path: path.display().to_string(),
        source,
    })?;
    Ok(())
}
