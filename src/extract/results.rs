//! Region ("area") extraction from the full antiSMASH results JSON
//!
//! Only the parts needed for the module page are read:
//!
//! ```text
//! {"schema": 3, "records": [{"id": "NC_003888.3", "areas": [
//!     {"start": 1200, "end": 45000, "products": ["NRPS"], ...}, ...]}, ...]}
//! ```
//!
//! The schema version is checked before anything else is looked at, so a file
//! from an unsupported antiSMASH version is reported as such even when its
//! records have a different shape.

use super::anchor::Anchor;
use crate::config::SUPPORTED_SCHEMAS;
use crate::error::{GatherError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Deserialize)]
struct SchemaHeader {
    #[serde(default)]
    schema: i64,
}

#[derive(Deserialize)]
struct ResultsBody {
    records: Vec<Record>,
}

#[derive(Debug, Clone, Deserialize)]
struct Record {
    id: String,
    areas: Vec<Area>,
}

/// Coordinates and product types of one region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub start: i64,
    pub end: i64,
    pub products: Vec<String>,
}

/// A region together with its anchor and the record it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedArea {
    pub anchor: Anchor,
    pub record: String,
    pub area: Area,
}

/// Reads every region of a results file, in document order.
///
/// `source` is only used for error messages.
pub fn read_areas<R: Read>(reader: R, source: &Path) -> Result<Vec<LocatedArea>> {
    let value: Value = serde_json::from_reader(reader).map_err(|e| GatherError::json(source, e))?;

    let header = SchemaHeader::deserialize(&value).map_err(|e| GatherError::json(source, e))?;
    if !SUPPORTED_SCHEMAS.contains(&header.schema) {
        return Err(GatherError::IncompatibleSchema(header.schema));
    }

    let body = ResultsBody::deserialize(&value).map_err(|e| GatherError::json(source, e))?;

    let mut areas = Vec::new();
    for (r_index, record) in body.records.into_iter().enumerate() {
        for (c_index, area) in record.areas.into_iter().enumerate() {
            areas.push(LocatedArea {
                anchor: Anchor::from_indices(r_index, c_index),
                record: record.id.clone(),
                area,
            });
        }
    }

    log::debug!("{}: {} region(s)", source.display(), areas.len());
    Ok(areas)
}

/// Opens and reads the results file at `path`.
pub fn load_areas(path: &Path) -> Result<Vec<LocatedArea>> {
    let file = File::open(path).map_err(|e| GatherError::io(path, e))?;
    read_areas(BufReader::new(file), path)
}
