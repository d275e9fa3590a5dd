//! Extract NEO and close-approach records from the NASA data files
//!
//! `load_neos` reads the NEO catalog CSV; `load_approaches` reads the
//! close-approach JSON. Both locate the consumed columns by name at load
//! time, so column order in the source files does not matter. A missing
//! column or field name is fatal; nothing is loaded partially.

use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

use crate::entities::{CloseApproach, NearEarthObject};

/// Errors raised while loading the input catalogs
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing column '{column}' in {path}")]
    MissingColumn { path: String, column: String },

    #[error("Missing field '{field}' in {path}")]
    MissingField { path: String, field: String },
}

/// Close-approach catalog layout: named columns in `fields`, each `data`
/// entry positionally aligned to them.
#[derive(Debug, Deserialize)]
struct ApproachCatalog {
    fields: Vec<String>,
    data: Vec<Vec<Value>>,
}

/// Read near-Earth objects from a CSV catalog.
///
/// Consumes the `pdes`, `name`, `diameter`, and `pha` columns, located by
/// header name.
pub fn load_neos(path: &Path) -> Result<Vec<NearEarthObject>, ExtractError> {
    let file = File::open(path).map_err(|source| ExtractError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|source| ExtractError::Csv {
            path: path.display().to_string(),
            source,
        })?
        .clone();
    let column = |name: &str| -> Result<usize, ExtractError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ExtractError::MissingColumn {
                path: path.display().to_string(),
                column: name.to_string(),
            })
    };
    let pdes = column("pdes")?;
    let name = column("name")?;
    let diameter = column("diameter")?;
    let pha = column("pha")?;

    let mut neos = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| ExtractError::Csv {
            path: path.display().to_string(),
            source,
        })?;
        neos.push(NearEarthObject::new(
            record.get(pdes).unwrap_or(""),
            record.get(name).unwrap_or(""),
            record.get(diameter).unwrap_or(""),
            record.get(pha).unwrap_or(""),
        ));
    }

    Ok(neos)
}

/// Read close approaches from a JSON catalog.
///
/// Consumes the `des`, `cd`, `dist`, and `v_rel` columns, located by name in
/// the catalog's field list.
pub fn load_approaches(path: &Path) -> Result<Vec<CloseApproach>, ExtractError> {
    let content = fs::read_to_string(path).map_err(|source| ExtractError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let catalog: ApproachCatalog =
        serde_json::from_str(&content).map_err(|source| ExtractError::Json {
            path: path.display().to_string(),
            source,
        })?;

    let field = |name: &str| -> Result<usize, ExtractError> {
        catalog
            .fields
            .iter()
            .position(|f| f == name)
            .ok_or_else(|| ExtractError::MissingField {
                path: path.display().to_string(),
                field: name.to_string(),
            })
    };
    let des = field("des")?;
    let cd = field("cd")?;
    let dist = field("dist")?;
    let v_rel = field("v_rel")?;

    let approaches = catalog
        .data
        .iter()
        .map(|entry| {
            CloseApproach::new(
                &cell(entry, des),
                &cell(entry, cd),
                &cell(entry, dist),
                &cell(entry, v_rel),
            )
        })
        .collect();

    Ok(approaches)
}

/// Render one data cell as text. The catalog mixes quoted strings and bare
/// numbers; anything else (including a short row) reads as empty.
fn cell(entry: &[Value], index: usize) -> String {
    match entry.get(index) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const NEO_CSV: &str = "\
id,pdes,name,pha,diameter
a0000433,433,Eros,N,16.84
a0000719,719,Albert,N,
a0001862,1862,Apollo,Y,1.5
";

    const CAD_JSON: &str = r#"{
  "signature": {"source": "NASA/JPL SBDB Close Approach Data API", "version": "1.1"},
  "count": 2,
  "fields": ["des", "orbit_id", "jd", "cd", "dist", "v_rel", "h"],
  "data": [
    ["433", "659", "2459000.5", "2020-Jan-01 00:00", "0.5", "10.0", "10.4"],
    ["719", "257", "2459100.5", "1909-Aug-31 16:14", 0.2, 3.5, "15.5"]
  ]
}"#;

    fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_neos() {
        let file = write_file(NEO_CSV);
        let neos = load_neos(file.path()).unwrap();
        assert_eq!(neos.len(), 3);
        assert_eq!(neos[0].designation, "433");
        assert_eq!(neos[0].name.as_deref(), Some("Eros"));
        assert!(neos[1].diameter.is_nan());
        assert!(neos[2].hazardous);
    }

    #[test]
    fn test_load_neos_missing_column_is_fatal() {
        let file = write_file("id,pdes,name,diameter\na1,433,Eros,16.84\n");
        let err = load_neos(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MissingColumn { ref column, .. } if column == "pha"
        ));
    }

    #[test]
    fn test_load_neos_missing_file() {
        let err = load_neos(Path::new("/nonexistent/neos.csv")).unwrap_err();
        assert!(matches!(err, ExtractError::Io { .. }));
    }

    #[test]
    fn test_load_approaches() {
        let file = write_file(CAD_JSON);
        let approaches = load_approaches(file.path()).unwrap();
        assert_eq!(approaches.len(), 2);
        assert_eq!(approaches[0].designation, "433");
        assert_eq!(approaches[0].time_str(), "2020-01-01 00:00");
        assert_eq!(approaches[0].distance, 0.5);
        // Bare JSON numbers read the same as quoted ones.
        assert_eq!(approaches[1].distance, 0.2);
        assert_eq!(approaches[1].velocity, 3.5);
    }

    #[test]
    fn test_load_approaches_missing_field_is_fatal() {
        let file = write_file(r#"{"fields": ["des", "cd", "dist"], "data": []}"#);
        let err = load_approaches(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MissingField { ref field, .. } if field == "v_rel"
        ));
    }

    #[test]
    fn test_load_approaches_malformed_json() {
        let file = write_file("{not json");
        let err = load_approaches(file.path()).unwrap_err();
        assert!(matches!(err, ExtractError::Json { .. }));
    }
}
