//! Page generation for gathered module data
//!
//! An output directory receives:
//!
//! - **index.html**: a label and an empty drawing container per region
//! - **data.js**: every gathered record, assigned to the `data` variable
//! - the bundled static files the page loads (styles, antiSMASH drawing code)
//!
//! # Usage
//!
//! ```ignore
//! use gather_modules::{report, GatherConfig};
//!
//! let index = report::generate_page("results/".as_ref(), "page/".as_ref(), &GatherConfig::new())?;
//! ```

pub mod assets;
pub mod data;
pub mod html;

use crate::config::{GatherConfig, CONTAINER_SUFFIX, DATA_FILE, HTML_FILE};
use crate::error::{GatherError, Result};
use crate::gather::{gather_all, ModuleRecord};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Page anchor of a region: record name with `.` replaced by `-`, then the start.
pub fn area_anchor(record_name: &str, start: i64) -> String {
    format!("{}-{}", record_name.replace('.', "-"), start)
}

/// Id of the element the drawing code renders a region's modules into
pub fn container_id(anchor: &str) -> String {
    format!("{}{}", anchor, CONTAINER_SUFFIX)
}

/// Sets the page anchor of every region.
pub fn assign_anchors(records: &mut [ModuleRecord]) {
    for record in records.iter_mut() {
        for area in record.areas.iter_mut() {
            area.anchor = Some(area_anchor(&record.name, area.start));
        }
    }
}

fn write_file<F>(path: &Path, render: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let file = File::create(path).map_err(|e| GatherError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    render(&mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| GatherError::io(path, e))
}

/// Writes `index.html` and `data.js` for the records and copies the assets.
///
/// Returns the path of the written `index.html`.
pub fn write_page(records: &mut [ModuleRecord], output_dir: &Path, assets_dir: &Path) -> Result<PathBuf> {
    assign_anchors(records);
    let records: &[ModuleRecord] = records;

    let index = output_dir.join(HTML_FILE);
    write_file(&index, |w| html::write(w, records))?;
    log::debug!("Wrote {}", index.display());

    let data_path = output_dir.join(DATA_FILE);
    write_file(&data_path, |w| data::write(w, records))?;
    log::debug!("Wrote {}", data_path.display());

    assets::copy_assets(assets_dir, output_dir)?;
    Ok(index)
}

/// Gathers every result directory in `input_dir` and writes the page into `output_dir`.
///
/// Nothing is written unless all directories were gathered successfully.
pub fn generate_page(input_dir: &Path, output_dir: &Path, config: &GatherConfig) -> Result<PathBuf> {
    let mut records = gather_all(input_dir, config.quiet)?;
    let regions: usize = records.iter().map(|r| r.areas.len()).sum();

    let index = write_page(&mut records, output_dir, &config.assets_dir())?;
    log::info!(
        "Page with {} region(s) from {} record(s) saved to: {}",
        regions,
        records.len(),
        index.display()
    );
    Ok(index)
}
